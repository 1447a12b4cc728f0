use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::CumulantError;
use crate::types::{with_metadata, ComputationOutput, Distribution};
use crate::CumulantResult;

use super::closed_form::{convergence_bound, evaluate};

/// Relative distance to the convergence bound below which a warning is raised.
const NEAR_BOUND_TOLERANCE: f64 = 1e-3;

/// Input for evaluating a closed-form CGF at one or more points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgfInput {
    pub distribution: Distribution,
    /// Evaluation points `s`.
    pub points: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgfPoint {
    pub s: f64,
    /// `K(s) = log E[exp(sX)]`
    pub cgf: f64,
    /// `E[exp(sX)] = exp(K(s))`
    pub mgf: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgfOutput {
    pub distribution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_bound: Option<f64>,
    pub values: Vec<CgfPoint>,
}

/// Evaluate the CGF and MGF of a distribution at every requested point.
///
/// Fails on the first point outside the domain; no partial results are
/// returned.
pub fn evaluate_cgf(input: &CgfInput) -> CumulantResult<ComputationOutput<CgfOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // -- Validation --
    if input.points.is_empty() {
        return Err(CumulantError::InvalidParameter {
            param: "points".into(),
            reason: "At least one evaluation point is required".into(),
        });
    }
    input.distribution.validate()?;

    let domain_bound = convergence_bound(&input.distribution);

    let mut values = Vec::with_capacity(input.points.len());
    for &s in &input.points {
        let cgf = evaluate(&input.distribution, s)?;
        if let Some(bound) = domain_bound {
            if bound - s < NEAR_BOUND_TOLERANCE * bound {
                warnings.push(format!(
                    "s = {s} is within {NEAR_BOUND_TOLERANCE} (relative) of the bound {bound}; K(s) is ill-conditioned"
                ));
            }
        }
        let mgf = cgf.exp();
        if mgf.is_infinite() {
            warnings.push(format!("E[exp(sX)] overflows double precision at s = {s}"));
        }
        values.push(CgfPoint { s, cgf, mgf });
    }

    let output = CgfOutput {
        distribution: input.distribution.name().to_string(),
        domain_bound,
        values,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Closed-form cumulant generating function K(s) = log E[exp(sX)]",
        &serde_json::json!({
            "distribution": input.distribution,
            "points": input.points.len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_cgf_multiple_points() {
        let input = CgfInput {
            distribution: Distribution::Poisson { lambda: 2.0 },
            points: vec![-1.0, 0.0, 1.0],
        };
        let out = evaluate_cgf(&input).unwrap();
        assert_eq!(out.result.values.len(), 3);
        assert_eq!(out.result.values[1].mgf, 1.0);
        assert!(out.result.domain_bound.is_none());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_evaluate_cgf_domain_error_aborts() {
        let input = CgfInput {
            distribution: Distribution::Gamma { shape: 2.0, rate: 3.0 },
            points: vec![0.5, 3.0],
        };
        assert!(matches!(
            evaluate_cgf(&input),
            Err(CumulantError::DomainError { .. })
        ));
    }

    #[test]
    fn test_evaluate_cgf_warns_near_bound() {
        let input = CgfInput {
            distribution: Distribution::Exponential { rate: 1.0 },
            points: vec![0.9999],
        };
        let out = evaluate_cgf(&input).unwrap();
        assert_eq!(out.result.domain_bound, Some(1.0));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_evaluate_cgf_requires_points() {
        let input = CgfInput {
            distribution: Distribution::Constant,
            points: vec![],
        };
        assert!(evaluate_cgf(&input).is_err());
    }

    #[test]
    fn test_mgf_overflow_warning() {
        let input = CgfInput {
            distribution: Distribution::Poisson { lambda: 1.0 },
            points: vec![8.0],
        };
        let out = evaluate_cgf(&input).unwrap();
        assert!(out.result.values[0].mgf.is_infinite());
        assert_eq!(out.warnings.len(), 1);
    }
}
