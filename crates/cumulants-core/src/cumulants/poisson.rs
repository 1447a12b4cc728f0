use crate::error::require_positive;
use crate::CumulantResult;

use super::sequence::CumulantTerm;

/// Cumulants of Poisson(lambda).
///
/// `K(s) = lambda (e^s - 1)`, so every cumulant equals `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    n: usize,
    lambda: f64,
}

impl Poisson {
    pub fn new(lambda: f64) -> CumulantResult<Self> {
        let lambda = require_positive("lambda", lambda)?;
        Ok(Self { n: 0, lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl CumulantTerm for Poisson {
    fn current(&self) -> f64 {
        self.lambda
    }

    fn advance(&mut self) -> &mut Self {
        self.n += 1;
        self
    }

    fn index(&self) -> usize {
        self.n
    }
}
