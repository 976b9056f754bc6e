//! Error types for breathe.

use thiserror::Error;

/// Errors raised outside the pacer core.
///
/// The breathing controller itself never fails; these cover configuration,
/// terminal handling and output formatting.
#[derive(Debug, Error)]
pub enum PacerError {
    /// Configuration could not be read or is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named item (preset, shell) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command-line value is out of range or inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal could not be set up, drawn or polled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PacerError::NotFound("preset 'square'".to_string());
        assert_eq!(err.to_string(), "Not found: preset 'square'");

        let err = PacerError::Config("bad tick".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad tick");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PacerError = io.into();
        assert!(matches!(err, PacerError::Io(_)));
    }
}
