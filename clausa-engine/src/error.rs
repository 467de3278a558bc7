//! Layered error types
//!
//! Core failures pass through unchanged; everything the engine adds on top
//! (I/O, JSON, configuration, thread pools) gets its own variant.

use clausa_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// No profile registered under the requested code
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Malformed JSON input or failed serialization
    #[error("JSON error: {0}")]
    Json(String),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Json(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: EngineError = CoreError::UnknownLanguage {
            code: "xx".to_string(),
        }
        .into();

        assert!(matches!(err, EngineError::Core(_)));
        assert_eq!(err.to_string(), "core error: unknown language: xx");
    }

    #[test]
    fn test_io_and_json_messages() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(EngineError::from(io).to_string(), "I/O error: gone");

        let json = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        assert!(matches!(EngineError::from(json), EngineError::Json(_)));
    }
}
