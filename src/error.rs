use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid run header input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HeaderError>;
