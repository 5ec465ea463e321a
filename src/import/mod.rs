//! Bringing files into a list of tracks to validate.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    config,
    domain::{track::Track, track_type::TrackType},
    tags::TagReader,
};

pub mod error;
pub mod fs;

use error::ImportError;

/// What one import call did.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Files that were added or refreshed, in processing order.
    pub imported: Vec<PathBuf>,
    /// How many of `imported` were already in the list.
    pub refreshed: usize,
    /// Files or entries that could not be imported.
    pub failures: Vec<ImportError>,
}

/// Imported tracks, in the order they were first imported.
///
/// A file is held at most once. Importing it again refreshes it in place.
pub struct TrackList<R> {
    tracks: Vec<Track>,
    reader: R,
    config: config::Import,
}

impl<R: TagReader> TrackList<R> {
    pub fn new(reader: R, config: config::Import) -> Self {
        Self {
            tracks: Vec::new(),
            reader,
            config,
        }
    }

    /// Imports files and directories, validating them with `track_type`.
    ///
    /// A file that cannot be read is reported and skipped. The rest of the
    /// batch is still imported.
    pub fn import_paths(
        &mut self,
        paths: &[PathBuf],
        track_type: &Arc<TrackType>,
    ) -> ImportReport {
        let candidates = fs::collect_candidates(&self.config, paths);
        let mut report = ImportReport {
            failures: candidates.errors,
            ..Default::default()
        };

        for path in candidates.files {
            match self.import_file(&path, track_type) {
                Ok(refreshed) => {
                    if refreshed {
                        report.refreshed += 1;
                    }
                    report.imported.push(path);
                }
                Err(err) => {
                    log::warn!("{err}");
                    report.failures.push(err);
                }
            }
        }

        log::info!(
            "imported {} files as {} ({} refreshed, {} failed)",
            report.imported.len(),
            track_type,
            report.refreshed,
            report.failures.len()
        );
        report
    }

    /// Adds a file, or refreshes it in place when it is already listed.
    ///
    /// Returns whether the file was already listed.
    fn import_file(
        &mut self,
        path: &Path,
        track_type: &Arc<TrackType>,
    ) -> Result<bool, ImportError> {
        let to_error = |source| ImportError::TagRead {
            path: path.to_path_buf(),
            source,
        };

        match self.tracks.iter_mut().find(|t| t.filename() == path) {
            Some(existing) => {
                log::debug!("refreshing {}", path.display());
                existing.refresh(&self.reader).map_err(to_error)?;
                existing.set_track_type(Arc::clone(track_type));
                Ok(true)
            }
            None => {
                log::debug!("importing {}", path.display());
                let track =
                    Track::open(path, Arc::clone(track_type), &self.reader).map_err(to_error)?;
                self.tracks.push(track);
                Ok(false)
            }
        }
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.filename() == path)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
