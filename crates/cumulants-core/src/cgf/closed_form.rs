use tracing::debug;

use crate::error::{require_finite, require_positive, CumulantError};
use crate::types::Distribution;
use crate::CumulantResult;

fn check_domain(function: &str, s: f64, bound: f64) -> CumulantResult<()> {
    if s >= bound {
        debug!(function, s, bound, "CGF evaluated outside its domain");
        return Err(CumulantError::DomainError {
            function: function.into(),
            s,
            bound,
        });
    }
    Ok(())
}

/// Point mass at 1: `K(s) = s`.
pub fn constant(s: f64) -> CumulantResult<f64> {
    require_finite("s", s)
}

/// X ~ mu + sigma Z: `K(s) = mu s + sigma^2 s^2 / 2`, for every real `s`.
pub fn normal(s: f64, mu: f64, sigma: f64) -> CumulantResult<f64> {
    require_finite("s", s)?;
    Distribution::Normal { mu, sigma }.validate()?;
    Ok(mu * s + sigma * sigma * s * s / 2.0)
}

/// X ~ Gamma(a, b) with density `x^(a-1) e^(-bx) b^a / Gamma(a)`.
///
/// `K(s) = a log(b / (b - s))`, finite only for `s < b`; at or beyond the
/// rate the moment generating function diverges and a
/// [`CumulantError::DomainError`] is returned.
pub fn gamma(s: f64, a: f64, b: f64) -> CumulantResult<f64> {
    require_finite("s", s)?;
    require_positive("shape", a)?;
    require_positive("rate", b)?;
    check_domain("gamma CGF", s, b)?;
    Ok(-a * (-s / b).ln_1p())
}

/// X ~ Exponential(lambda) = Gamma(1, lambda): `K(s) = log(lambda / (lambda - s))`.
pub fn exponential(s: f64, lambda: f64) -> CumulantResult<f64> {
    require_finite("s", s)?;
    require_positive("rate", lambda)?;
    check_domain("exponential CGF", s, lambda)?;
    Ok(-(-s / lambda).ln_1p())
}

/// X ~ Poisson(lambda): `K(s) = lambda (e^s - 1)`, for every real `s`.
pub fn poisson(s: f64, lambda: f64) -> CumulantResult<f64> {
    require_finite("s", s)?;
    require_positive("lambda", lambda)?;
    Ok(s.exp_m1() * lambda)
}

/// Evaluate the CGF of `dist` at `s`.
pub fn evaluate(dist: &Distribution, s: f64) -> CumulantResult<f64> {
    match *dist {
        Distribution::Constant => constant(s),
        Distribution::Normal { mu, sigma } => normal(s, mu, sigma),
        Distribution::Gamma { shape, rate } => gamma(s, shape, rate),
        Distribution::Exponential { rate } => exponential(s, rate),
        Distribution::Poisson { lambda } => poisson(s, lambda),
    }
}

/// Supremum of the CGF's domain, or `None` when it is finite on all of R.
pub fn convergence_bound(dist: &Distribution) -> Option<f64> {
    match *dist {
        Distribution::Gamma { rate, .. } | Distribution::Exponential { rate } => Some(rate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_closed_form() {
        assert_eq!(normal(2.0, 1.0, 3.0).unwrap(), 2.0 + 9.0 * 4.0 / 2.0);
        assert_eq!(normal(0.0, 1.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_gamma_matches_log_ratio() {
        let (a, b, s) = (2.0_f64, 3.0_f64, 1.2_f64);
        let direct = a * (b / (b - s)).ln();
        assert!((gamma(s, a, b).unwrap() - direct).abs() < 1e-14);
    }

    #[test]
    fn test_gamma_at_rate_is_domain_error() {
        match gamma(3.0, 2.0, 3.0) {
            Err(CumulantError::DomainError { s, bound, .. }) => {
                assert_eq!(s, 3.0);
                assert_eq!(bound, 3.0);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
        assert!(gamma(10.0, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_exponential_is_unit_shape_gamma() {
        for s in [-2.0, -0.5, 0.0, 0.3, 1.9] {
            let e = exponential(s, 2.0).unwrap();
            let g = gamma(s, 1.0, 2.0).unwrap();
            assert!((e - g).abs() < 1e-15, "s = {s}");
        }
        assert!(exponential(2.0, 2.0).is_err());
    }

    #[test]
    fn test_poisson_closed_form() {
        let s = 0.4_f64;
        assert!((poisson(s, 5.0).unwrap() - 5.0 * (s.exp() - 1.0)).abs() < 1e-14);
        assert!(poisson(s, 0.0).is_err());
    }

    #[test]
    fn test_nan_point_rejected() {
        assert!(matches!(
            poisson(f64::NAN, 1.0),
            Err(CumulantError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_convergence_bound() {
        assert_eq!(
            convergence_bound(&Distribution::Gamma { shape: 2.0, rate: 3.0 }),
            Some(3.0)
        );
        assert_eq!(convergence_bound(&Distribution::Poisson { lambda: 1.0 }), None);
    }

    #[test]
    fn test_every_cgf_vanishes_at_zero() {
        let dists = [
            Distribution::Normal { mu: 1.0, sigma: 2.0 },
            Distribution::Gamma { shape: 2.0, rate: 3.0 },
            Distribution::Exponential { rate: 0.5 },
            Distribution::Poisson { lambda: 4.0 },
            Distribution::Constant,
        ];
        for d in dists {
            assert_eq!(evaluate(&d, 0.0).unwrap(), 0.0, "{}", d.name());
        }
    }
}
