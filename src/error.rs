use thiserror::Error;

/// Errors that can occur while building, analyzing, or projecting a Leslie model.
#[derive(Error, Debug)]
pub enum LeslieError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Numerical error: {0}")]
    NumericalError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for LeslieError {
    fn from(e: toml::de::Error) -> Self {
        LeslieError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for LeslieError {
    fn from(e: toml::ser::Error) -> Self {
        LeslieError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = LeslieError::ShapeMismatch("expected 2 survival rates, got 3".to_string());
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected 2 survival rates, got 3"
        );
    }

    #[test]
    fn test_numerical_error_display() {
        let err = LeslieError::NumericalError("no convergence".to_string());
        assert_eq!(err.to_string(), "Numerical error: no convergence");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LeslieError::ValidationError("survival must be in 0.0..=1.0".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: survival must be in 0.0..=1.0"
        );
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LeslieError = io_err.into();
        assert!(matches!(err, LeslieError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_json_error_from_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not valid json{{{");
        let err: LeslieError = result.unwrap_err().into();
        assert!(matches!(err, LeslieError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_toml_error_from_conversion() {
        let result: Result<toml::Value, _> = toml::from_str("years = = 3");
        let err: LeslieError = result.unwrap_err().into();
        assert!(matches!(err, LeslieError::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }
}
