//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input data could not be read or decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Report output could not be written.
    #[error("Export error: {0}")]
    Export(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    ///
    /// Codes follow the BSD `sysexits.h` convention.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Validation(_) => 65,
            Self::NotFound(_) => 66,
            Self::Export(_) => 74,
            Self::Config(_) => 78,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code for structured logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Export(_) => "EXPORT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Config(String::new()).exit_code(), 78);
        assert_eq!(AppError::InvalidInput(String::new()).exit_code(), 65);
        assert_eq!(AppError::Validation(String::new()).exit_code(), 65);
        assert_eq!(AppError::NotFound(String::new()).exit_code(), 66);
        assert_eq!(AppError::Export(String::new()).exit_code(), 74);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 70);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::InvalidInput(String::new()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(AppError::Export(String::new()).error_code(), "EXPORT_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::InvalidInput("msg".into()).to_string(),
            "Invalid input: msg"
        );
        assert_eq!(
            AppError::Export("msg".into()).to_string(),
            "Export error: msg"
        );
    }

    #[test]
    fn test_from_io_not_found() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::InvalidInput(_)));
    }
}
