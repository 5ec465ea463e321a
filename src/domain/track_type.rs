use std::{
    collections::BTreeSet,
    fmt::Display,
    sync::{Arc, LazyLock},
};

/// Every content category code the station knows about.
pub const ALL_CATEGORIES: &[u32] = &[
    11, 12, 21, 22, 23, 24, 31, 32, 33, 34, 35, 36, 41, 42, 43, 44, 45, 51, 52, 53,
];

/// Genre items other than the category that may appear in the genre tag.
pub const ALL_GENRE_ITEMS: &[&str] = &["cancon", "local"];

pub const DEFAULT_TYPE_NAME: &str = "Default";

static DEFAULT_TYPE: LazyLock<Arc<TrackType>> =
    LazyLock::new(|| Arc::new(TrackType::new(DEFAULT_TYPE_NAME)));

/// Validation policy for a kind of track.
///
/// Immutable once built. Tracks share it through an `Arc`, so rebinding a
/// track to another type never touches the policy itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackType {
    name: String,
    valid_categories: BTreeSet<u32>,
    valid_genre_items: BTreeSet<String>,
    artist_mandatory: bool,
    album_mandatory: bool,
}

impl TrackType {
    /// Policy with every known category, the default genre items and no
    /// mandatory fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            valid_categories: ALL_CATEGORIES.iter().copied().collect(),
            valid_genre_items: ALL_GENRE_ITEMS.iter().map(|s| s.to_string()).collect(),
            artist_mandatory: false,
            album_mandatory: false,
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = u32>) -> Self {
        self.valid_categories = categories.into_iter().collect();
        self
    }

    pub fn with_genre_items<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.valid_genre_items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_artist_mandatory(mut self, mandatory: bool) -> Self {
        self.artist_mandatory = mandatory;
        self
    }

    pub fn with_album_mandatory(mut self, mandatory: bool) -> Self {
        self.album_mandatory = mandatory;
        self
    }

    /// The process-wide default policy.
    pub fn default_type() -> Arc<TrackType> {
        Arc::clone(&DEFAULT_TYPE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn valid_categories(&self) -> &BTreeSet<u32> {
        &self.valid_categories
    }

    pub fn valid_genre_items(&self) -> &BTreeSet<String> {
        &self.valid_genre_items
    }

    pub fn is_valid_category(&self, code: u32) -> bool {
        self.valid_categories.contains(&code)
    }

    pub fn is_valid_genre_item(&self, item: &str) -> bool {
        self.valid_genre_items.contains(item)
    }

    pub fn artist_mandatory(&self) -> bool {
        self.artist_mandatory
    }

    pub fn album_mandatory(&self) -> bool {
        self.album_mandatory
    }
}

impl Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Named policies a caller can pick from, in presentation order.
#[derive(Debug, Clone)]
pub struct TrackTypeRegistry {
    types: Vec<Arc<TrackType>>,
}

impl TrackTypeRegistry {
    /// An empty registry. [`TrackTypeRegistry::default_type`] still works.
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// The station's built-in policies: Default, Music, Prerecorded and Station ID.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert_shared(TrackType::default_type());
        registry.insert(
            TrackType::new("Music")
                .with_categories([21, 22, 23, 24, 31, 32, 33, 34, 35, 36])
                .with_artist_mandatory(true)
                .with_album_mandatory(true),
        );
        registry.insert(
            TrackType::new("Prerecorded")
                .with_categories([11, 12, 21, 22, 23, 24, 31, 32, 33, 34, 35, 36])
                .with_genre_items(Vec::<String>::new())
                .with_artist_mandatory(true)
                .with_album_mandatory(true),
        );
        registry.insert(
            TrackType::new("Station ID")
                .with_categories([43])
                .with_genre_items(Vec::<String>::new()),
        );
        registry
    }

    /// Adds a policy. A policy with the same name is replaced in place.
    pub fn insert(&mut self, track_type: TrackType) {
        self.insert_shared(Arc::new(track_type));
    }

    fn insert_shared(&mut self, track_type: Arc<TrackType>) {
        match self
            .types
            .iter_mut()
            .find(|existing| existing.name() == track_type.name())
        {
            Some(existing) => *existing = track_type,
            None => self.types.push(track_type),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<TrackType>> {
        self.types.iter().find(|t| t.name() == name).cloned()
    }

    /// The registered `Default` policy, or the process-wide one.
    pub fn default_type(&self) -> Arc<TrackType> {
        self.get(DEFAULT_TYPE_NAME)
            .unwrap_or_else(TrackType::default_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TrackType>> {
        self.types.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name()).collect()
    }
}

impl Default for TrackTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
