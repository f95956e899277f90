use std::io;

use thiserror::Error;

/// Malformed geometry rejected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(&'static str),

    #[error("vertex index {index} out of bounds for mesh with {len} vertices")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("tessellation resolution must be at least 2, got {0}")]
    Resolution(usize),

    #[error("bezier curve needs at least one control point")]
    EmptyCurve,
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),
}
