//! Reading tag snapshots from audio files.
//! Public API:
//! - [`TagReader`] is the seam the validator reads tags through.
//! - [`Id3Reader`] reads ID3v2 tags from disk.

mod id3v2;

use std::path::Path;

use thiserror::Error;

use crate::domain::tags::TagSnapshot;

pub use id3v2::Id3Reader;

#[derive(Debug, Error)]
pub enum TagReadError {
    #[error("filesystem error: {0}")]
    Fs(#[from] std::io::Error),

    #[error("malformed tag: {0}")]
    Malformed(String),
}

/// Supplies tag snapshots for files.
pub trait TagReader {
    /// Reads the tags of `path`.
    ///
    /// Returns `Ok(None)` when the file has no tag header at all.
    fn read_tags(&self, path: &Path) -> Result<Option<TagSnapshot>, TagReadError>;
}

impl<R: TagReader + ?Sized> TagReader for &R {
    fn read_tags(&self, path: &Path) -> Result<Option<TagSnapshot>, TagReadError> {
        (**self).read_tags(path)
    }
}
