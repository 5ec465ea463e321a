//! Renderings of validated tracks for the terminal

use std::fmt::Write;

use clap::ValueEnum;

use crate::domain::track::Track;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One summary block per track
    #[default]
    Text,
    /// One line per track
    Table,
    /// JSON array of track rows
    Json,
}

pub fn render<'a>(
    format: Format,
    tracks: impl IntoIterator<Item = &'a mut Track>,
) -> anyhow::Result<String> {
    let tracks = tracks.into_iter();
    Ok(match format {
        Format::Text => text(tracks),
        Format::Table => table(tracks),
        Format::Json => json(tracks)?,
    })
}

fn text<'a>(tracks: impl Iterator<Item = &'a mut Track>) -> String {
    tracks.map(|track| track.summary() + "\n").collect()
}

const HEADER: [&str; 9] = [
    "Valid", "E", "W", "Type", "Title", "Artist", "Album", "Date", "Filename",
];

fn table<'a>(tracks: impl Iterator<Item = &'a mut Track>) -> String {
    let mut out = HEADER.join("\t");
    out.push('\n');
    for track in tracks {
        let row = track.to_row();
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            if row.is_valid { "yes" } else { "no" },
            row.error_count,
            row.warning_count,
            row.track_type,
            row.title,
            row.artist,
            row.album,
            row.date,
            row.filename.to_string_lossy(),
        );
    }
    out
}

fn json<'a>(tracks: impl Iterator<Item = &'a mut Track>) -> anyhow::Result<String> {
    let rows: Vec<_> = tracks.map(|track| track.to_row()).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
