//! Error types for splatview

use crate::representation::RepKind;
use thiserror::Error;

/// Main error type for splatview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Every loader failure (network, parse, malformed asset) collapses into
    /// this one variant at the controller boundary.
    #[error("Failed to load {kind}: {message}")]
    Load { kind: RepKind, message: String },

    #[error("Unknown scene: {0}")]
    UnknownScene(String),
}

/// Result type alias for splatview operations
pub type Result<T> = std::result::Result<T, Error>;
