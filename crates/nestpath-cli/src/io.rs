// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reading JSON from files or stdin and writing results.

use anyhow::{Context, Result};
use nestpath_core::map_array;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Read a whole file, or stdin when `path` is `None`
///
/// # Errors
///
/// Fails when the file or stdin cannot be read as UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(p) = path {
        fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    }
}

/// Parse `text` as JSON, naming `origin` in the error
///
/// # Errors
///
/// Fails when `text` is not valid JSON.
pub fn parse_json(text: &str, origin: &str) -> Result<Value> {
    serde_json::from_str(text).with_context(|| format!("invalid JSON in {origin}"))
}

/// Read and parse one JSON document from a file or stdin
///
/// # Errors
///
/// Fails when the input cannot be read or is not valid JSON.
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let text = read_input(path)?;
    let origin = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    parse_json(&text, &origin)
}

/// Load merge inputs. A file holding an array contributes each element.
///
/// # Errors
///
/// Fails on the first file that cannot be read or parsed.
pub fn load_merge_inputs(files: &[PathBuf]) -> Result<Vec<Value>> {
    let mut inputs = Vec::with_capacity(files.len());
    for file in files {
        let value = read_json(Some(file))?;
        inputs.extend(map_array(&value).into_iter().cloned());
    }
    tracing::debug!(files = files.len(), inputs = inputs.len(), "loaded merge inputs");
    Ok(inputs)
}

/// Serialize a value as pretty or compact JSON
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

/// Write `text` and a trailing newline to `output`, or stdout
///
/// # Errors
///
/// Fails when the destination cannot be written.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    if let Some(p) = output {
        fs::write(p, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", p.display()))
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.write_all(b"\n")?;
        Ok(())
    }
}
