use crate::error::require_positive;
use crate::CumulantResult;

use super::sequence::CumulantTerm;

/// Cumulants of Gamma(a, b) with shape `a` and rate `b`.
///
/// `K(s) = a log(b/(b - s)) = a sum_{n>=1} (s/b)^n / n`, so
/// `kappa_n = (n-1)! a / b^n`. The sequence keeps `kappa` as a running
/// product and multiplies by `n/b` on each advance; `ln_kappa` follows the
/// same recurrence additively.
///
/// Terms grow like `n!/b^n`; for large `n` or small `b` they overflow to
/// `inf`, and for large `b` they underflow to zero. Neither is reported,
/// but `ln_abs_current()` stays finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    n: usize,
    kappa: f64,
    ln_kappa: f64,
    ln_rate: f64,
    rate: f64,
}

impl Gamma {
    pub fn new(shape: f64, rate: f64) -> CumulantResult<Self> {
        let shape = require_positive("shape", shape)?;
        let rate = require_positive("rate", rate)?;
        Ok(Self {
            n: 0,
            kappa: shape / rate,
            ln_kappa: shape.ln() - rate.ln(),
            ln_rate: rate.ln(),
            rate,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl CumulantTerm for Gamma {
    fn current(&self) -> f64 {
        self.kappa
    }

    fn ln_abs_current(&self) -> f64 {
        self.ln_kappa
    }

    fn advance(&mut self) -> &mut Self {
        self.n += 1;
        self.kappa *= self.n as f64 / self.rate;
        self.ln_kappa += (self.n as f64).ln() - self.ln_rate;
        self
    }

    fn index(&self) -> usize {
        self.n
    }
}

/// Cumulants of Exponential(lambda), i.e. Gamma(1, lambda).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential(Gamma);

impl Exponential {
    pub fn new(rate: f64) -> CumulantResult<Self> {
        Ok(Self(Gamma::new(1.0, rate)?))
    }
}

impl CumulantTerm for Exponential {
    fn current(&self) -> f64 {
        self.0.current()
    }

    fn ln_abs_current(&self) -> f64 {
        self.0.ln_abs_current()
    }

    fn advance(&mut self) -> &mut Self {
        self.0.advance();
        self
    }

    fn index(&self) -> usize {
        self.0.index()
    }
}
