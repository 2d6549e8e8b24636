//! Settings files.
//!
//! Settings can be kept in a YAML or JSON file and loaded at startup, for
//! example to ship a translated template bundle. Keys use the camelCase
//! names; anything left out keeps its default.
//!
//! ```yaml
//! allowFuture: true
//! strings:
//!   prefixAgo: hace
//!   suffixAgo: null
//!   prefixFromNow: dentro de
//!   suffixFromNow: null
//!   seconds: menos de un minuto
//!   hours: "%d horas"
//!   numbers: [cero, uno, dos, tres]
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use timeago_core::{config, settings};
//!
//! let loaded = config::load_settings("timeago.yml")?;
//! settings::replace(loaded);
//! # Ok::<(), timeago_types::TimeagoError>(())
//! ```

use std::fs;
use std::path::Path;
use timeago_types::{Result, Settings, TimeagoError};

/// Parse settings from YAML (JSON is accepted as well).
pub fn settings_from_str(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| TimeagoError::Config(format!("Failed to parse settings: {}", e)))
}

/// Load settings from a file.
///
/// A missing file yields the default settings.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "settings file not found, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| TimeagoError::Config(format!("Failed to read settings file: {}", e)))?;
    let settings = settings_from_str(&content)?;
    tracing::debug!(path = %path.display(), allow_future = settings.allow_future, "loaded settings");
    Ok(settings)
}

/// Save settings to a file, as JSON when the extension is `.json` and as
/// YAML otherwise.
///
/// Fails for settings holding computed templates.
pub fn save_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<()> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let content = if is_json {
        serde_json::to_string_pretty(settings)
            .map_err(|e| TimeagoError::Config(format!("Failed to serialize settings: {}", e)))?
    } else {
        serde_yaml::to_string(settings)
            .map_err(|e| TimeagoError::Config(format!("Failed to serialize settings: {}", e)))?
    };

    fs::write(path, content)?;
    Ok(())
}
