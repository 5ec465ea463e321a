use anyhow::bail;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::Config;
use crate::import::TrackList;
use crate::report::{self, Format};
use crate::tags::Id3Reader;

#[derive(Parser)]
#[command(name = "id3validator")]
#[command(version = "0.1")]
#[command(about = "Check audio file tags against broadcast compliance rules")]
pub struct Cli {
    /// Path to the config TOML file [default: id3validator.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate files and directories
    Check {
        /// Track type to validate against
        #[arg(short = 't', long = "type")]
        track_type: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Only report invalid tracks
        #[arg(long)]
        only_invalid: bool,

        /// Files or directories to validate
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// List available track types
    Types,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Entrypoint for CLI. Returns whether every checked track was valid.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let cfg = Config::load_or_default(cli.config.as_deref())?;
    let registry = cfg.registry();

    match cli.command {
        Commands::Check {
            track_type,
            format,
            only_invalid,
            paths,
        } => {
            let name = track_type.or(cfg.default_type.clone());
            let track_type = match name.as_deref() {
                Some(name) => match registry.get(name) {
                    Some(t) => t,
                    None => bail!(
                        "unknown track type '{name}', available: {}",
                        registry.names().join(", ")
                    ),
                },
                None => registry.default_type(),
            };

            let mut tracks = TrackList::new(Id3Reader, cfg.import.clone());
            let import = tracks.import_paths(&paths, &track_type);

            for failure in &import.failures {
                eprintln!("error: {failure}");
            }

            let mut all_valid = import.failures.is_empty();
            let mut selected = Vec::new();
            for track in tracks.tracks_mut() {
                let valid = track.is_valid();
                all_valid &= valid;
                if !(only_invalid && valid) {
                    selected.push(track);
                }
            }

            print!("{}", report::render(format, selected)?);
            Ok(all_valid)
        }

        Commands::Types => {
            for track_type in registry.iter() {
                println!("{}:", track_type.name());
                let categories: Vec<_> = track_type
                    .valid_categories()
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                println!("  categories: {}", categories.join(", "));
                let items: Vec<_> = track_type
                    .valid_genre_items()
                    .iter()
                    .map(String::as_str)
                    .collect();
                println!("  genre items: {}", items.join(", "));
                println!("  artist mandatory: {}", track_type.artist_mandatory());
                println!("  album mandatory: {}", track_type.album_mandatory());
            }
            Ok(true)
        }
    }
}
