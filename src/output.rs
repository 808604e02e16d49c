use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

/// Writes `points` as one pretty-printed JSON array, indented by `indent`
/// spaces per level.
pub fn to_writer<W: Write, T: Serialize>(
    writer: W,
    points: &[T],
    indent: usize,
) -> serde_json::Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    points.serialize(&mut serializer)
}

/// Creates (or truncates) `path` and writes `points` to it.
pub fn write_points<T: Serialize>(path: &Path, points: &[T], indent: usize) -> Result<()> {
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);

    to_writer(&mut writer, points, indent).map_err(|source| {
        if source.is_io() {
            Error::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            Error::Json {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    writer.flush().map_err(io_err)?;

    info!("Wrote {} points to {}", points.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{KnownPoint, UnknownPoint};

    fn render<T: Serialize>(points: &[T], indent: usize) -> String {
        let mut out = Vec::new();
        to_writer(&mut out, points, indent).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn known_layout() {
        let points = [KnownPoint {
            x: -3,
            y: 7,
            value: 12.5,
        }];

        assert_eq!(
            render(&points, 4),
            "[\n    {\n        \"x\": -3,\n        \"y\": 7,\n        \"value\": 12.5\n    }\n]"
        );
    }

    #[test]
    fn unknown_layout() {
        let points = [UnknownPoint { x: 0, y: 100 }, UnknownPoint { x: 1, y: -1 }];

        assert_eq!(
            render(&points, 2),
            "[\n  {\n    \"x\": 0,\n    \"y\": 100\n  },\n  {\n    \"x\": 1,\n    \"y\": -1\n  }\n]"
        );
    }

    #[test]
    fn empty_collection() {
        let points: [UnknownPoint; 0] = [];

        assert_eq!(render(&points, 4), "[]");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("known_points.json");

        let err = write_points::<UnknownPoint>(&path, &[], 4).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
