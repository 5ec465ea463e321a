//! Read ID3v2 tags and convert them into a `TagSnapshot`.

use std::path::Path;

use id3::{Tag, TagLike};

use super::{TagReadError, TagReader};
use crate::domain::tags::{Field, TagSnapshot};

/// Tag reader backed by the `id3` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Reader;

impl TagReader for Id3Reader {
    fn read_tags(&self, path: &Path) -> Result<Option<TagSnapshot>, TagReadError> {
        match Tag::read_from_path(path) {
            Ok(tag) => Ok(Some(snapshot_from_tag(&tag))),
            Err(id3::Error {
                kind: id3::ErrorKind::NoTag,
                ..
            }) => Ok(None),
            Err(id3::Error {
                kind: id3::ErrorKind::Io(err),
                ..
            }) => Err(TagReadError::Fs(err)),
            Err(err) => Err(TagReadError::Malformed(err.to_string())),
        }
    }
}

fn snapshot_from_tag(tag: &Tag) -> TagSnapshot {
    let mut snapshot = TagSnapshot::new();

    for field in Field::ALL {
        let values = match field {
            Field::Date => text_values(tag, "TDRC").or_else(|| text_values(tag, "TYER")),
            _ => text_values(tag, frame_id(field)),
        };
        if let Some(values) = values {
            snapshot.insert(field, values);
        }
    }

    snapshot
}

fn frame_id(field: Field) -> &'static str {
    match field {
        Field::Title => "TIT2",
        Field::Artist => "TPE1",
        Field::Album => "TALB",
        Field::Date => "TDRC",
        Field::Genre => "TCON",
    }
}

/// Values of a text frame. ID3v2.4 separates multiple values with NUL.
fn text_values(tag: &Tag, id: &str) -> Option<Vec<String>> {
    let text = tag.get(id)?.content().text()?;
    Some(
        text.trim_end_matches('\0')
            .split('\0')
            .map(str::to_owned)
            .collect(),
    )
}
