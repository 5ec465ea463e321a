use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::track_type::{ALL_CATEGORIES, ALL_GENRE_ITEMS, TrackType, TrackTypeRegistry};

pub const DEFAULT_CONFIG_PATH: &str = "id3validator.toml";

const DEFAULT_EXTENSIONS: &[&str] = &["mp3", "ogg", "m4a"];

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    /// Name of the track type used when none is given on the command line.
    pub default_type: Option<String>,
    #[serde(default)]
    pub import: Import,
    #[serde(default)]
    pub track_types: Vec<TrackTypeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            default_type: None,
            import: Import::default(),
            track_types: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }

    /// Loads an explicitly given `path`, which must exist. Without one the
    /// default location is tried and the built-in defaults are used when
    /// nothing is there.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
        let path = match path {
            Some(path) => path,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if !path.exists() {
                    log::debug!("no config at {}, using defaults", path.display());
                    return Ok(Config::default());
                }
                path
            }
        };
        let config = Self::load(path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Built-in track types with the configured ones added on top.
    pub fn registry(&self) -> TrackTypeRegistry {
        let mut registry = TrackTypeRegistry::builtin();
        for track_type in &self.track_types {
            registry.insert(track_type.to_track_type());
        }
        registry
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Import {
    /// File extensions accepted for validation, compared case-insensitively.
    pub extensions: Vec<String>,
    pub follow_symlinks: bool,
    pub ignored_dirs: Vec<PathBuf>,
}

impl Default for Import {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            follow_symlinks: false,
            ignored_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackTypeConfig {
    pub name: String,
    #[serde(default = "all_categories")]
    pub valid_categories: Vec<u32>,
    #[serde(default = "all_genre_items")]
    pub valid_genre_items: Vec<String>,
    #[serde(default)]
    pub artist_mandatory: bool,
    #[serde(default)]
    pub album_mandatory: bool,
}

impl TrackTypeConfig {
    pub fn to_track_type(&self) -> TrackType {
        TrackType::new(self.name.clone())
            .with_categories(self.valid_categories.iter().copied())
            .with_genre_items(self.valid_genre_items.iter().cloned())
            .with_artist_mandatory(self.artist_mandatory)
            .with_album_mandatory(self.album_mandatory)
    }
}

fn all_categories() -> Vec<u32> {
    ALL_CATEGORIES.to_vec()
}

fn all_genre_items() -> Vec<String> {
    ALL_GENRE_ITEMS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1
default_type = "Music"

[import]
extensions = ["mp3", "flac"]
follow_symlinks = true
ignored_dirs = ['C:\Users\station\Music\Sample pack']

[[track_types]]
name = "Talk"
valid_categories = [11, 12]
valid_genre_items = ["local"]
artist_mandatory = true
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.default_type.as_deref(), Some("Music"));

        assert_eq!(cfg.import.extensions, vec!["mp3", "flac"]);
        assert!(cfg.import.follow_symlinks);
        assert_eq!(
            cfg.import.ignored_dirs,
            vec![PathBuf::from(r"C:\Users\station\Music\Sample pack")]
        );

        let talk = cfg.track_types[0].to_track_type();
        assert_eq!(talk.name(), "Talk");
        assert!(talk.is_valid_category(11));
        assert!(!talk.is_valid_category(21));
        assert!(talk.is_valid_genre_item("local"));
        assert!(!talk.is_valid_genre_item("cancon"));
        assert!(talk.artist_mandatory());
        assert!(!talk.album_mandatory());

        Ok(())
    }

    #[test]
    fn test_minimal_config_uses_defaults() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[[track_types]]
name = "Jingle"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.default_type, None);
        assert_eq!(cfg.import.extensions, vec!["mp3", "ogg", "m4a"]);
        assert!(!cfg.import.follow_symlinks);

        let jingle = cfg.track_types[0].to_track_type();
        assert_eq!(jingle.valid_categories().len(), ALL_CATEGORIES.len());
        assert!(jingle.is_valid_genre_item("cancon"));
        assert!(!jingle.artist_mandatory());

        Ok(())
    }

    #[test]
    fn test_registry_overrides_builtin_types() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[[track_types]]
name = "Station ID"
valid_categories = [43, 44]
valid_genre_items = []

[[track_types]]
name = "Talk"
"#;

        let cfg: Config = toml::from_str(toml_str)?;
        let registry = cfg.registry();

        assert_eq!(
            registry.names(),
            vec!["Default", "Music", "Prerecorded", "Station ID", "Talk"]
        );
        assert!(registry.get("Station ID").unwrap().is_valid_category(44));

        Ok(())
    }

    #[test]
    fn test_missing_default_config_falls_back() -> anyhow::Result<()> {
        let cfg = Config::load_or_default(None)?;
        assert_eq!(cfg.version, 1);
        assert!(cfg.track_types.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("station.toml");
        assert!(Config::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_default_name_must_exist() -> anyhow::Result<()> {
        let tmp = tempfile::TempDir::new()?;
        let path = tmp.path().join(DEFAULT_CONFIG_PATH);
        assert!(Config::load_or_default(Some(&path)).is_err());

        let relative = Path::new(DEFAULT_CONFIG_PATH);
        if !relative.exists() {
            assert!(Config::load_or_default(Some(relative)).is_err());
        }
        Ok(())
    }

    #[test]
    fn test_explicit_config_is_loaded() -> anyhow::Result<()> {
        let tmp = tempfile::TempDir::new()?;
        let path = tmp.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, "version = 1\ndefault_type = \"Music\"\n")?;

        let cfg = Config::load_or_default(Some(&path))?;
        assert_eq!(cfg.default_type.as_deref(), Some("Music"));
        Ok(())
    }
}
