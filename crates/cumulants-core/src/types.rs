use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, CumulantError};
use crate::CumulantResult;

/// A named distribution together with its parameters.
///
/// Rates are inverse scales: `Gamma { shape: a, rate: b }` has mean `a/b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Point mass at 1.
    Constant,
    Normal { mu: f64, sigma: f64 },
    Gamma { shape: f64, rate: f64 },
    Exponential { rate: f64 },
    Poisson { lambda: f64 },
}

impl Distribution {
    pub fn standard_normal() -> Self {
        Distribution::Normal { mu: 0.0, sigma: 1.0 }
    }

    /// Short lowercase name, used in error messages and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Constant => "constant",
            Distribution::Normal { .. } => "normal",
            Distribution::Gamma { .. } => "gamma",
            Distribution::Exponential { .. } => "exponential",
            Distribution::Poisson { .. } => "poisson",
        }
    }

    /// Check every parameter against the family's admissible range.
    pub fn validate(&self) -> CumulantResult<()> {
        match *self {
            Distribution::Constant => {}
            Distribution::Normal { mu, sigma } => {
                require_finite("mu", mu)?;
                require_finite("sigma", sigma)?;
                if sigma < 0.0 {
                    return Err(CumulantError::InvalidParameter {
                        param: "sigma".into(),
                        reason: format!("must be >= 0, got {sigma}"),
                    });
                }
            }
            Distribution::Gamma { shape, rate } => {
                require_positive("shape", shape)?;
                require_positive("rate", rate)?;
            }
            Distribution::Exponential { rate } => {
                require_positive("rate", rate)?;
            }
            Distribution::Poisson { lambda } => {
                require_positive("lambda", lambda)?;
            }
        }
        Ok(())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_tagged_json() {
        let d: Distribution =
            serde_json::from_str(r#"{"type":"Gamma","shape":2.0,"rate":3.0}"#).unwrap();
        assert_eq!(d, Distribution::Gamma { shape: 2.0, rate: 3.0 });

        let json = serde_json::to_string(&Distribution::Constant).unwrap();
        assert_eq!(json, r#"{"type":"Constant"}"#);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(Distribution::Gamma { shape: 2.0, rate: 0.0 }.validate().is_err());
        assert!(Distribution::Gamma { shape: -1.0, rate: 1.0 }.validate().is_err());
        assert!(Distribution::Poisson { lambda: 0.0 }.validate().is_err());
        assert!(Distribution::Normal { mu: 0.0, sigma: -0.1 }.validate().is_err());
        assert!(Distribution::Normal { mu: f64::NAN, sigma: 1.0 }.validate().is_err());
        assert!(Distribution::standard_normal().validate().is_ok());
        assert!(Distribution::Constant.validate().is_ok());
    }

    #[test]
    fn test_with_metadata_precision() {
        let out = with_metadata("test", &serde_json::json!({}), vec![], 7, 1.5_f64);
        assert_eq!(out.metadata.precision, "ieee754_f64");
        assert_eq!(out.metadata.computation_time_us, 7);
        assert_eq!(out.result, 1.5);
    }
}
