//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{PlotcycleError, Result};
use crate::schemas::PlotStatusRecord;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlotcycleError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            PlotcycleError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PlotcycleError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
/// The temp file is removed when any step fails.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| PlotcycleError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = write_and_rename(&temp_path, path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

fn write_and_rename(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content)?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, path)?;
    Ok(())
}

/// Read a plot status record from a JSON file.
pub fn read_plot(path: &Path) -> Result<PlotStatusRecord> {
    read_json(path)
}

/// Write a plot status record to a JSON file.
pub fn write_plot(path: &Path, record: &PlotStatusRecord) -> Result<()> {
    tracing::debug!(path = %path.display(), plot = %record.plot_id, "writing plot record");
    write_json(path, record)
}
