use crate::error::{require_finite, CumulantError};
use crate::CumulantResult;

use super::sequence::CumulantTerm;

/// Cumulants of the point mass at 1: `1, 0, 0, ...`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constant {
    n: usize,
}

impl Constant {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CumulantTerm for Constant {
    fn current(&self) -> f64 {
        if self.n == 0 {
            1.0
        } else {
            0.0
        }
    }

    fn advance(&mut self) -> &mut Self {
        self.n += 1;
        self
    }

    fn index(&self) -> usize {
        self.n
    }
}

/// Cumulants of `mu + sigma Z`: `mu, sigma^2, 0, 0, ...`.
///
/// Only the first two cumulants of a normal are non-zero, so every term is
/// a closed form in the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    n: usize,
    mu: f64,
    sigma: f64,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> CumulantResult<Self> {
        require_finite("mu", mu)?;
        require_finite("sigma", sigma)?;
        if sigma < 0.0 {
            return Err(CumulantError::InvalidParameter {
                param: "sigma".into(),
                reason: format!("must be >= 0, got {sigma}"),
            });
        }
        Ok(Self { n: 0, mu, sigma })
    }

    /// Standard normal: `0, 1, 0, 0, ...`.
    pub fn standard() -> Self {
        Self {
            n: 0,
            mu: 0.0,
            sigma: 1.0,
        }
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl CumulantTerm for Normal {
    fn current(&self) -> f64 {
        match self.n {
            0 => self.mu,
            1 => self.sigma * self.sigma,
            _ => 0.0,
        }
    }

    fn advance(&mut self) -> &mut Self {
        self.n += 1;
        self
    }

    fn index(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_indicator_at_zero() {
        let mut c = Constant::new();
        for n in 0..20 {
            let expected = if n == 0 { 1.0 } else { 0.0 };
            assert_eq!(c.current(), expected, "constant term {n}");
            c.advance();
        }
    }

    #[test]
    fn test_standard_normal_indicator_at_one() {
        let mut z = Normal::standard();
        for n in 0..20 {
            let expected = if n == 1 { 1.0 } else { 0.0 };
            assert_eq!(z.current(), expected, "normal term {n}");
            z.advance();
        }
    }

    #[test]
    fn test_general_normal_terms() {
        let terms: Vec<f64> = Normal::new(0.5, 2.0).unwrap().terms().take(4).collect();
        assert_eq!(terms, vec![0.5, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_normal_allowed() {
        let n = Normal::new(3.0, 0.0).unwrap();
        assert_eq!(n.current(), 3.0);
    }

    #[test]
    fn test_negative_sigma_rejected() {
        assert!(Normal::new(0.0, -1.0).is_err());
    }

    #[test]
    fn test_equality_tracks_index() {
        let mut a = Constant::new();
        let mut b = Constant::new();
        a.advance();
        assert_ne!(a, b);
        b.advance();
        assert_eq!(a, b);
    }
}
