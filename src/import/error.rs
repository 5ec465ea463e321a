use std::path::PathBuf;

use thiserror::Error;

use crate::tags::TagReadError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read tags of {path}: {source}")]
    TagRead {
        path: PathBuf,
        #[source]
        source: TagReadError,
    },

    #[error("error while scanning {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
