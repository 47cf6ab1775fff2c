use thiserror::Error;

use agbinator_lib::AnalysisError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Loading or scanning a ROM failed
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Some files in a batch could not be processed
    #[error("{failed} of {total} files could not be processed")]
    PartialFailure { failed: usize, total: usize },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
