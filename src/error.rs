use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the detection library.
#[derive(Error, Debug)]
pub enum CoinscanError {
    /// The input image could not be opened or decoded.
    #[error("failed to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A detection parameter is out of range.
    #[error("invalid parameters: {message}")]
    InvalidParams { message: String },

    /// A parameter file could not be parsed.
    #[error("configuration: {message}")]
    Config {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two images that must share a height do not.
    #[error("image heights differ: {left} vs {right}")]
    DimensionMismatch { left: u32, right: u32 },

    /// The contour has a zero zeroth moment, so it has no centroid.
    #[error("contour {index} is degenerate (m00 == 0)")]
    DegenerateContour { index: usize },

    /// The debug output directory already holds files.
    #[error("debug directory is not empty: {}", path.display())]
    DebugDirNotEmpty { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CoinscanError>;
