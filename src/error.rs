use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a colormap build.
#[derive(Error, Debug)]
pub enum ColormapError {
    /// Zero-sized raster, empty stop list or an inconsistent table.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A colour literal that is not `#RRGGBB` (or the bare `RRGGBB` form).
    #[error("Invalid colour '{literal}': {reason}")]
    ColorParse { literal: String, reason: String },
    /// Reading, writing or copying a file failed.
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The PNG encoder rejected the raster.
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// A table file could not be parsed.
    #[error("Invalid table file {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ColormapError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColormapError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ColormapError>;
