use thiserror::Error;

/// Errors surfaced by the sandbox core.
///
/// Construction-time problems abort setup before the first tick; a
/// `NonFinite` result means a step produced NaN or infinity and the body
/// state should not be trusted.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("step produced a non-finite {quantity}")]
    NonFinite { quantity: &'static str },

    #[error("malformed sandbox config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SandboxError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        SandboxError::InvalidParameter { name, value }
    }
}

/// Reject NaN/infinite values for a named parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, SandboxError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SandboxError::invalid(name, value))
    }
}

/// Reject values that are not strictly positive (NaN included).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, SandboxError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SandboxError::invalid(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", -1.0).is_err());
        assert!(ensure_positive("mass", f64::NAN).is_err());
        assert_eq!(ensure_positive("mass", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn message_names_the_parameter() {
        let err = SandboxError::invalid("restitution", 1.5);
        assert_eq!(err.to_string(), "invalid parameter `restitution`: 1.5");
    }
}
