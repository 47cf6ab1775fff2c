//! Ordered set of driver recognizers.

use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, RecognizeOptions, RomImage,
};

use crate::settings::RecognizerSettings;

/// Context holding the registered recognizers in priority order.
///
/// This is the main entry point for identifying ROMs. Create a context
/// (usually with [`RecognizerContext::with_builtin`]), then call
/// [`identify`](RecognizerContext::identify) for each ROM.
pub struct RecognizerContext {
    recognizers: Vec<Box<dyn DriverRecognizer>>,
    disabled: Vec<String>,
}

impl Default for RecognizerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognizerContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self {
            recognizers: Vec::new(),
            disabled: Vec::new(),
        }
    }

    /// Create a context with every built-in recognizer registered.
    pub fn with_builtin() -> Result<Self, AnalysisError> {
        let mut context = Self::new();
        for recognizer in agbinator_drivers::builtin_recognizers()? {
            context.recognizers.push(recognizer);
        }
        Ok(context)
    }

    /// Register a recognizer after the existing ones.
    pub fn register<R: DriverRecognizer + 'static>(&mut self, recognizer: R) -> &mut Self {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    /// Skip the recognizer called `name` (case-insensitive).
    pub fn disable(&mut self, name: &str) -> &mut Self {
        if !self.recognizers.iter().any(|r| r.matches_name(name)) {
            log::warn!("Unknown recognizer '{}' in disabled list", name);
        }
        self.disabled.push(name.to_string());
        self
    }

    /// Apply the `[recognizers]` section of the settings file.
    pub fn apply_settings(&mut self, settings: &RecognizerSettings) -> &mut Self {
        for name in &settings.disabled {
            self.disable(name);
        }
        self
    }

    pub fn is_enabled(&self, recognizer: &dyn DriverRecognizer) -> bool {
        !self.disabled.iter().any(|name| recognizer.matches_name(name))
    }

    /// All registered recognizers, in priority order.
    pub fn recognizers(&self) -> impl Iterator<Item = &dyn DriverRecognizer> {
        self.recognizers.iter().map(|r| r.as_ref())
    }

    /// Try each enabled recognizer in order and return the first hit.
    pub fn identify(
        &self,
        rom: &RomImage,
        options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        self.recognizers()
            .filter(|r| self.is_enabled(*r))
            .find_map(|r| {
                let result = r.recognize(rom, options)?;
                log::debug!("Matched by {}", r.name());
                Some(result)
            })
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
