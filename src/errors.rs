//! Error types for plotcycle
//!
//! The transition engine itself never fails; these errors cover the surfaces
//! around it (config, record files, confirmation flow, CLI).

use thiserror::Error;

/// Result type alias for plotcycle operations
pub type Result<T> = std::result::Result<T, PlotcycleError>;

/// Main error type for all plotcycle operations
#[derive(Debug, Error)]
pub enum PlotcycleError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON format or schema mismatch
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A status code that is not part of the catalog
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// A labor code that is not a known labor kind
    #[error("Unknown labor kind: {0}")]
    UnknownLabor(String),

    /// Status change rejected by the transition rules
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// A proposed change was submitted without being confirmed
    #[error("Status change was not confirmed")]
    NotConfirmed,

    /// A confirmation addressed a different plot than the record supplied
    #[error("Confirmation is for plot {expected}, got plot {actual}")]
    PlotMismatch { expected: String, actual: String },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl PlotcycleError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            PlotcycleError::FileNotFound(_) => "FILE_NOT_FOUND",
            PlotcycleError::InvalidJson(_) => "INVALID_JSON",
            PlotcycleError::ConfigError(_) => "CONFIG_ERROR",
            PlotcycleError::UnknownStatus(_) => "UNKNOWN_STATUS",
            PlotcycleError::UnknownLabor(_) => "UNKNOWN_LABOR",
            PlotcycleError::StateTransition(_) => "STATE_TRANSITION",
            PlotcycleError::NotConfirmed => "NOT_CONFIRMED",
            PlotcycleError::PlotMismatch { .. } => "PLOT_MISMATCH",
            PlotcycleError::Io(_) => "IO_ERROR",
            PlotcycleError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        PlotcycleError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
///
/// Rejected transitions exit with 2 so scripts can tell them apart from
/// operational failures.
pub fn to_exit_code(error: &PlotcycleError) -> i32 {
    match error {
        PlotcycleError::StateTransition(_) | PlotcycleError::NotConfirmed => 2,
        _ => 1,
    }
}
