// src/error.rs
use thiserror::Error;

/// Error types for the bs-lab library
#[derive(Debug, Error)]
pub enum LabError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Static asset could not be read
    #[error("Asset '{path}' unavailable: {reason}")]
    AssetUnavailable { path: String, reason: String },

    /// Failure writing output series
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for bs-lab operations
pub type LabResult<T> = Result<T, LabError>;

/// Validation utilities
///
/// Every check treats NaN as invalid, so a comparison that silently passes
/// for NaN never lets one through to the formulas.
pub mod validation {
    use super::{LabError, LabResult};

    fn invalid(name: &str, value: f64, constraint: impl Into<String>) -> LabError {
        LabError::InvalidParameters {
            parameter: name.to_string(),
            value,
            constraint: constraint.into(),
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> LabResult<()> {
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(invalid(name, value, "must be positive (> 0)"))
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> LabResult<()> {
        if value >= 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(invalid(name, value, "must be non-negative (≥ 0)"))
        }
    }

    /// Validate that a parameter is within a closed range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> LabResult<()> {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(invalid(name, value, format!("must be in range [{}, {}]", min, max)))
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> LabResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(invalid(name, value, "must be finite (not NaN or infinite)"))
        }
    }

    /// Validate a path or grid length
    pub fn validate_steps(field: &str, steps: usize) -> LabResult<()> {
        if steps == 0 {
            Err(LabError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(LabError::InvalidConfiguration {
                field: field.to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("force", 0.5, -1.0, 1.0).is_ok());
        assert!(validate_range("force", -1.0, -1.0, 1.0).is_ok());
        assert!(validate_range("force", 1.0, -1.0, 1.0).is_ok());
        assert!(validate_range("force", 1.1, -1.0, 1.0).is_err());
        assert!(validate_range("force", f64::NAN, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps("steps", 200).is_ok());
        assert!(validate_steps("steps", 0).is_err());
        assert!(validate_steps("steps", 1_000_000).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = LabError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }
}
