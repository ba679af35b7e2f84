//! Error types for the formgate library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GateError>;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
