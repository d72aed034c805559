//! Capturing the raw form snapshot for one invocation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use diabetes_model::RawInput;

/// Reads a JSON snapshot keyed by training column names.
pub fn read_raw_input(path: &Path) -> Result<RawInput> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse input {}", path.display()))
}

/// Combines an optional input file with values given on the command line.
///
/// Command-line values win. The result is an immutable snapshot; nothing is
/// filled in beyond what the user supplied.
pub fn collect_raw_input(file: Option<&Path>, overrides: RawInput) -> Result<RawInput> {
    let mut raw = match file {
        Some(path) => read_raw_input(path)?,
        None => RawInput::default(),
    };
    raw.merge(overrides);
    Ok(raw)
}
