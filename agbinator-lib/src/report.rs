//! Per-ROM identification report.

use std::path::Path;

use serde::Serialize;

use agbinator_core::{
    AnalysisError, CartridgeHeader, DriverIdentification, RecognizeOptions, RomImage,
};

use crate::context::RecognizerContext;

/// Everything reported for one ROM file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomReport {
    pub file_name: String,
    pub cartridge: CartridgeHeader,
    /// `None` when no recognizer matched
    pub driver: Option<DriverIdentification>,
}

impl RomReport {
    pub fn new(
        file_name: impl Into<String>,
        rom: &RomImage,
        driver: Option<DriverIdentification>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            cartridge: CartridgeHeader::parse(rom),
            driver,
        }
    }

    /// Load `path` and run every enabled recognizer over it.
    pub fn from_file(
        context: &RecognizerContext,
        path: &Path,
        options: &RecognizeOptions,
    ) -> Result<Self, AnalysisError> {
        let rom = RomImage::load(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let driver = context.identify(&rom, options);
        Ok(Self::new(file_name, &rom, driver))
    }

    pub fn driver_name(&self) -> &str {
        self.driver.as_ref().map_or("", |d| d.driver_name.as_str())
    }

    pub fn driver_version(&self) -> &str {
        self.driver.as_ref().map_or("", |d| d.version_text())
    }

    /// Tab-separated summary:
    /// `internal_name  product_id  driver  version  file_name`.
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.cartridge.internal_name,
            self.cartridge.product_id,
            self.driver_name(),
            self.driver_version(),
            self.file_name
        )
    }

    pub fn to_json(&self) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(self).map_err(|e| AnalysisError::other(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
