//! Loading run header input from JSON.

use crate::error::{HeaderError, Result};
use crate::header::RunHeaderInput;
use std::fs;
use std::io::Read;
use std::path::Path;

impl RunHeaderInput {
    /// Parse an input document. Unknown fields are ignored.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| HeaderError::InvalidInput(e.to_string()))
    }
}

/// Load input from a JSON file.
pub fn load_input(path: &Path) -> Result<RunHeaderInput> {
    if !path.exists() {
        return Err(HeaderError::InputNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    RunHeaderInput::from_json(&content)
}

/// Read input JSON from a reader, typically stdin.
///
/// Blank content yields the default input.
pub fn read_input(mut reader: impl Read) -> Result<RunHeaderInput> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    if content.trim().is_empty() {
        return Ok(RunHeaderInput::default());
    }
    RunHeaderInput::from_json(&content)
}
