use thiserror::Error;

#[derive(Debug, Error)]
pub enum CumulantError {
    #[error("Invalid parameter: {param}: {reason}")]
    InvalidParameter { param: String, reason: String },

    #[error("Domain error: {function} is undefined at s = {s} (requires s < {bound})")]
    DomainError {
        function: String,
        s: f64,
        bound: f64,
    },

    #[error("Overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CumulantError {
    fn from(e: serde_json::Error) -> Self {
        CumulantError::SerializationError(e.to_string())
    }
}

/// Reject non-finite values and values at or below zero.
pub(crate) fn require_positive(param: &str, value: f64) -> Result<f64, CumulantError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CumulantError::InvalidParameter {
            param: param.into(),
            reason: format!("must be finite and > 0, got {value}"),
        });
    }
    Ok(value)
}

pub(crate) fn require_finite(param: &str, value: f64) -> Result<f64, CumulantError> {
    if !value.is_finite() {
        return Err(CumulantError::InvalidParameter {
            param: param.into(),
            reason: format!("must be finite, got {value}"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_rejects_zero_and_nan() {
        assert!(require_positive("rate", 0.0).is_err());
        assert!(require_positive("rate", -1.5).is_err());
        assert!(require_positive("rate", f64::NAN).is_err());
        assert!(require_positive("rate", f64::INFINITY).is_err());
        assert_eq!(require_positive("rate", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn test_domain_error_message() {
        let err = CumulantError::DomainError {
            function: "gamma CGF".into(),
            s: 3.0,
            bound: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "Domain error: gamma CGF is undefined at s = 3 (requires s < 3)"
        );
    }
}
