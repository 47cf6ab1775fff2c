//! User settings (`~/.config/agbinator/settings.toml`).
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Command-line flags are applied on top by the frontend.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use agbinator_core::AnalysisError;

/// Extensions picked up when a directory is scanned.
pub const DEFAULT_EXTENSIONS: &[&str] = &["gba", "agb", "mb", "bin"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub recognizers: RecognizerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Skip deep scans (song header sweeps, function indexes)
    pub quick: bool,
    /// File extensions to pick up from directories, without the dot
    pub extensions: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            quick: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerSettings {
    /// Recognizer names to skip (case-insensitive)
    pub disabled: Vec<String>,
}

/// Canonical path to the settings file: `~/.config/agbinator/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("agbinator").join("settings.toml")
}

impl Settings {
    /// Load from the canonical path.
    pub fn load() -> Result<Self, AnalysisError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, AnalysisError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&contents)
            .map_err(|e| AnalysisError::settings(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(contents: &str) -> Result<Self, AnalysisError> {
        toml::from_str(contents).map_err(|e| AnalysisError::settings(e.to_string()))
    }

    /// Effective settings rendered back to TOML.
    pub fn to_toml_string(&self) -> Result<String, AnalysisError> {
        toml::to_string_pretty(self).map_err(|e| AnalysisError::settings(e.to_string()))
    }
}
