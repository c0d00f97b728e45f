//! # File I/O Module
//!
//! Reads and writes settings files and batch input files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure settings schema compatibility
//!
//! ## Example
//!
//! ```rust,no_run
//! use tube_core::file_io::{load_settings_or_default, save_settings};
//! use tube_core::settings::CalcSettings;
//! use std::path::Path;
//!
//! let path = Path::new("tube_settings.json");
//! save_settings(&CalcSettings::default(), path).unwrap();
//! let settings = load_settings_or_default(path).unwrap();
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::calculations::TubeInput;
use crate::errors::{CalcError, CalcResult};
use crate::settings::{CalcSettings, SCHEMA_VERSION};

/// Save settings to a file using atomic write.
///
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync and rename over the target
pub fn save_settings(settings: &CalcSettings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(CalcSettings)` - Successfully loaded settings
/// * `Err(CalcError::InvalidInput)` - Schema version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CalcResult<CalcSettings> {
    let contents = read_to_string(path)?;

    let settings: CalcSettings = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&settings.version)?;

    Ok(settings)
}

/// Load settings, falling back to defaults when the file does not exist.
pub fn load_settings_or_default(path: &Path) -> CalcResult<CalcSettings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(CalcSettings::default());
    }
    load_settings(path)
}

/// Load a JSON array of tube inputs for batch calculation.
pub fn load_batch(path: &Path) -> CalcResult<Vec<TubeInput>> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid batch file {}: {}", path.display(), e)))
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    let mismatch = || {
        CalcError::invalid_input(
            "version",
            file_version,
            format!("Settings schema {} is not compatible with {}", file_version, SCHEMA_VERSION),
        )
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version may have breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
