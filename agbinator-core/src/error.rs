use thiserror::Error;

/// Errors that can occur while loading or scanning a ROM.
///
/// Recognition misses and rejected header candidates are not errors; they
/// surface as `None` / `Err(RejectReason)` from the scanners themselves.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// I/O error while reading the ROM
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ROM is too small to contain a cartridge header
    #[error("ROM too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// The ROM exceeds the 32 MiB cartridge address window
    #[error("ROM too large: expected at most {expected} bytes, got {actual}")]
    TooLarge { expected: u64, actual: u64 },

    /// A built-in byte signature could not be parsed
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// The settings file exists but could not be understood
    #[error("Settings error: {0}")]
    Settings(String),

    /// Generic analysis error with message
    #[error("{0}")]
    Other(String),
}

impl AnalysisError {
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
