use std::fmt::Display;

use serde::Serialize;

/// Outcome of a single validation rule, reported as an error or a warning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationMessage {
    NoMetadata,
    MissingTitle,
    MissingArtist,
    MissingAlbum,
    MissingYear,
    MissingCategory,
    InvalidCategory,
    /// A genre item outside the track type's allowed set.
    InvalidGenre(String),
    CategoryWrongPosition,
}

impl Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMessage::NoMetadata => f.write_str("No metadata found"),
            ValidationMessage::MissingTitle => f.write_str("Missing title"),
            ValidationMessage::MissingArtist => f.write_str("Missing artist"),
            ValidationMessage::MissingAlbum => f.write_str("Missing album"),
            ValidationMessage::MissingYear => f.write_str("Missing year"),
            ValidationMessage::MissingCategory => f.write_str("Missing category"),
            ValidationMessage::InvalidCategory => f.write_str("Invalid category"),
            ValidationMessage::InvalidGenre(item) => write!(f, "Invalid item in genre: {item}"),
            ValidationMessage::CategoryWrongPosition => f.write_str("Category in wrong position"),
        }
    }
}
