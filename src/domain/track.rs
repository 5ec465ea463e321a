use std::{
    fmt::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;

use super::{
    tags::{Field, TagSnapshot},
    track_type::TrackType,
};
use crate::{
    tags::{TagReadError, TagReader},
    validation::{self, ValidationMessage, ValidationResult},
};

/// Whether the cached result of a track is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    NotValidated,
    Validated(ValidationResult),
}

impl ValidationState {
    fn get_or_insert_with(
        &mut self,
        evaluate: impl FnOnce() -> ValidationResult,
    ) -> &ValidationResult {
        match self {
            ValidationState::Validated(result) => result,
            ValidationState::NotValidated => {
                *self = ValidationState::Validated(evaluate());
                // Validated now, the fallback is never called.
                self.get_or_insert_with(ValidationResult::default)
            }
        }
    }
}

/// An audio file to be validated.
///
/// Validation runs on first access of a derived property and is cached
/// until [`Track::refresh`] or a type change.
#[derive(Debug)]
pub struct Track {
    filename: PathBuf,
    track_type: Arc<TrackType>,
    /// `None` when the file has no tag header.
    tags: Option<TagSnapshot>,
    state: ValidationState,
}

impl Track {
    /// Reads the tags of `filename` and prepares it for validation.
    pub fn open(
        filename: impl Into<PathBuf>,
        track_type: Arc<TrackType>,
        reader: &impl TagReader,
    ) -> Result<Self, TagReadError> {
        let mut track = Self {
            filename: filename.into(),
            track_type,
            tags: None,
            state: ValidationState::NotValidated,
        };
        track.refresh(reader)?;
        Ok(track)
    }

    /// Builds a track from an already read snapshot.
    pub fn from_tags(
        filename: impl Into<PathBuf>,
        track_type: Arc<TrackType>,
        tags: Option<TagSnapshot>,
    ) -> Self {
        let mut track = Self {
            filename: filename.into(),
            track_type,
            tags: None,
            state: ValidationState::NotValidated,
        };
        track.replace_tags(tags);
        track
    }

    /// Drops the cached result and reloads the tags from the file.
    ///
    /// On error the previous tags and result are kept.
    pub fn refresh(&mut self, reader: &impl TagReader) -> Result<(), TagReadError> {
        let tags = reader.read_tags(&self.filename)?;
        self.replace_tags(tags);
        Ok(())
    }

    fn replace_tags(&mut self, tags: Option<TagSnapshot>) {
        self.state = match tags {
            Some(_) => ValidationState::NotValidated,
            None => {
                log::debug!("no tag header in {}", self.filename.display());
                ValidationState::Validated(ValidationResult::no_metadata())
            }
        };
        self.tags = tags;
    }

    /// Rebinds the track to another policy. The policy itself is untouched.
    ///
    /// A track without a tag header stays `NO_METADATA` whatever its type.
    pub fn set_track_type(&mut self, track_type: Arc<TrackType>) {
        self.track_type = track_type;
        if self.tags.is_some() {
            self.state = ValidationState::NotValidated;
        }
    }

    /// Runs the rules now, replacing any cached result.
    pub fn validate(&mut self) -> bool {
        self.state = ValidationState::NotValidated;
        self.is_valid()
    }

    /// The validation result, computing it on first use.
    pub fn result(&mut self) -> &ValidationResult {
        let Self {
            filename,
            track_type,
            tags,
            state,
        } = self;
        state.get_or_insert_with(|| run_rules(filename, track_type, tags.as_ref()))
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    pub fn is_valid(&mut self) -> bool {
        self.result().is_valid()
    }

    pub fn error_count(&mut self) -> usize {
        self.result().errors.len()
    }

    pub fn warning_count(&mut self) -> usize {
        self.result().warnings.len()
    }

    pub fn errors(&mut self) -> &[ValidationMessage] {
        &self.result().errors
    }

    pub fn warnings(&mut self) -> &[ValidationMessage] {
        &self.result().warnings
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn track_type(&self) -> &Arc<TrackType> {
        &self.track_type
    }

    pub fn tags(&self) -> Option<&TagSnapshot> {
        self.tags.as_ref()
    }

    /// First value of `field`, or an empty string.
    pub fn field(&self, field: Field) -> &str {
        self.tags
            .as_ref()
            .and_then(|tags| tags.first(field))
            .unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.field(Field::Title)
    }

    pub fn artist(&self) -> &str {
        self.field(Field::Artist)
    }

    pub fn album(&self) -> &str {
        self.field(Field::Album)
    }

    pub fn date(&self) -> &str {
        self.field(Field::Date)
    }

    /// Human readable validation report.
    pub fn summary(&mut self) -> String {
        let filename = self.filename.to_string_lossy().into_owned();
        let result = self.result();

        let mut summary = format!("{filename}:\n");
        summary.push_str(if result.is_valid() { "Valid\n" } else { "Invalid\n" });

        if !result.errors.is_empty() {
            summary.push_str("Errors:\n");
            for error in &result.errors {
                let _ = writeln!(summary, "    - {error}");
            }
        }

        if !result.warnings.is_empty() {
            summary.push_str("Warnings:\n");
            for warning in &result.warnings {
                let _ = writeln!(summary, "    - {warning}");
            }
        }

        summary
    }

    /// Flat view of the track for reports.
    pub fn to_row(&mut self) -> TrackRow {
        let result = self.result().clone();
        TrackRow {
            filename: self.filename.clone(),
            track_type: self.track_type.name().to_string(),
            title: self.title().to_string(),
            artist: self.artist().to_string(),
            album: self.album().to_string(),
            date: self.date().to_string(),
            is_valid: result.is_valid(),
            error_count: result.errors.len(),
            warning_count: result.warnings.len(),
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

fn run_rules(
    filename: &Path,
    track_type: &TrackType,
    tags: Option<&TagSnapshot>,
) -> ValidationResult {
    let Some(tags) = tags else {
        return ValidationResult::no_metadata();
    };
    let result = validation::evaluate(tags, track_type);
    log::debug!(
        "{} validated as {}: {} errors, {} warnings",
        filename.display(),
        track_type,
        result.errors.len(),
        result.warnings.len()
    );
    result
}

/// Tracks are the same track when they point at the same file.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename
    }
}

impl Eq for Track {}

#[derive(Debug, Clone, Serialize)]
pub struct TrackRow {
    pub filename: PathBuf,
    #[serde(rename = "type")]
    pub track_type: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub date: String,
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<ValidationMessage>,
    pub warnings: Vec<ValidationMessage>,
}
