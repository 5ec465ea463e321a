//! Module to find candidate audio files in the file system

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{config, import::error::ImportError};

pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Result of looking for audio files below some paths.
#[derive(Debug, Default)]
pub struct Candidates {
    pub files: Vec<PathBuf>,
    /// Entries that could not be visited. Scanning continues past them.
    pub errors: Vec<ImportError>,
}

/// Expands `paths` into candidate files.
///
/// Files are taken as they are, directories are walked recursively. Only
/// files with an allowed extension are kept, in the order they were found.
pub fn collect_candidates(config: &config::Import, paths: &[PathBuf]) -> Candidates {
    let mut candidates = Candidates::default();

    for path in paths {
        if path.is_dir() {
            scan_dir(config, path, &mut candidates);
        } else {
            push_if_allowed(config, path, &mut candidates.files);
        }
    }

    candidates
}

/// Recursively collects the allowed files in the given directory
fn scan_dir(config: &config::Import, root: &Path, candidates: &mut Candidates) {
    let walker = WalkDir::new(root)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();

    let entries = walker
        .into_iter()
        // skip ignored directories entirely
        .filter_entry(|entry| {
            let entry_path = entry.path();
            !config
                .ignored_dirs
                .iter()
                .any(|ignored| entry_path.starts_with(ignored))
        });

    for entry in entries {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                push_if_allowed(config, entry.path(), &mut candidates.files);
            }
            Ok(_) => {}
            Err(err) => {
                log::warn!(
                    "error while scanning dir {}, skipping an entry: {err}",
                    root.display()
                );
                candidates.errors.push(ImportError::Walk {
                    root: root.to_path_buf(),
                    source: err,
                });
            }
        }
    }
}

fn push_if_allowed(config: &config::Import, path: &Path, files: &mut Vec<PathBuf>) {
    if has_allowed_extension(path, &config.extensions) {
        files.push(path.to_path_buf());
    } else {
        log::debug!("skipping {}: extension not allowed", path.display());
    }
}
