use std::{collections::BTreeMap, fmt::Display};

/// Tag fields the validator looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Artist,
    Album,
    Date,
    Genre,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Artist,
        Field::Album,
        Field::Date,
        Field::Genre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Date => "date",
            Field::Genre => "genre",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the tag fields of one file.
///
/// A field is present when the tag carries it, even if its values are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSnapshot {
    fields: BTreeMap<Field, Vec<String>>,
}

impl TagSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style helper, mostly for readers and tests.
    pub fn with<S: Into<String>>(mut self, field: Field, values: impl IntoIterator<Item = S>) -> Self {
        self.insert(field, values);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, field: Field, values: impl IntoIterator<Item = S>) {
        self.fields
            .insert(field, values.into_iter().map(Into::into).collect());
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// All values stored for `field`, in tag order. Empty when absent.
    pub fn values(&self, field: Field) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, field: Field) -> Option<&str> {
        self.values(field).first().map(String::as_str)
    }
}
