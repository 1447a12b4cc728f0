use std::iter::FusedIterator;

use crate::types::Distribution;
use crate::CumulantResult;

use super::gamma::{Exponential, Gamma};
use super::poisson::Poisson;
use super::structural::{Constant, Normal};

/// Shared contract of every cumulant sequence.
///
/// Parameters are fixed at construction; only the index and any recurrence
/// accumulator change. Equality between two sequences means same index and
/// same internal state, nothing more.
pub trait CumulantTerm: Clone {
    /// Term at the current index. Calling it repeatedly without advancing
    /// returns the same value.
    fn current(&self) -> f64;

    /// `ln |current()|`, `-inf` for a zero term.
    ///
    /// Sequences whose terms can leave the `f64` range override this so the
    /// logarithm stays finite after `current()` has overflowed.
    fn ln_abs_current(&self) -> f64 {
        self.current().abs().ln()
    }

    /// Move from index `n` to `n + 1`.
    fn advance(&mut self) -> &mut Self;

    /// Current index, starting at 0.
    fn index(&self) -> usize;

    /// Advance and return the state as it was before advancing.
    fn advance_post(&mut self) -> Self {
        let before = self.clone();
        self.advance();
        before
    }

    /// Unbounded iterator over the remaining terms, starting with `current()`.
    fn terms(self) -> Terms<Self> {
        Terms { seq: self }
    }
}

/// Iterator adapter over a [`CumulantTerm`]. Never returns `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Terms<S> {
    seq: S,
}

impl<S: CumulantTerm> Terms<S> {
    /// The sequence positioned at the next term to be yielded.
    pub fn sequence(&self) -> &S {
        &self.seq
    }
}

impl<S: CumulantTerm> Iterator for Terms<S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let term = self.seq.current();
        self.seq.advance();
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: CumulantTerm> FusedIterator for Terms<S> {}

/// Tagged union over every supported distribution's sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CumulantSequence {
    Constant(Constant),
    Normal(Normal),
    Gamma(Gamma),
    Exponential(Exponential),
    Poisson(Poisson),
}

impl CumulantSequence {
    /// Build the sequence for `dist`, validating its parameters.
    pub fn for_distribution(dist: &Distribution) -> CumulantResult<Self> {
        Ok(match *dist {
            Distribution::Constant => Constant::new().into(),
            Distribution::Normal { mu, sigma } => Normal::new(mu, sigma)?.into(),
            Distribution::Gamma { shape, rate } => Gamma::new(shape, rate)?.into(),
            Distribution::Exponential { rate } => Exponential::new(rate)?.into(),
            Distribution::Poisson { lambda } => Poisson::new(lambda)?.into(),
        })
    }
}

impl CumulantTerm for CumulantSequence {
    fn current(&self) -> f64 {
        match self {
            CumulantSequence::Constant(s) => s.current(),
            CumulantSequence::Normal(s) => s.current(),
            CumulantSequence::Gamma(s) => s.current(),
            CumulantSequence::Exponential(s) => s.current(),
            CumulantSequence::Poisson(s) => s.current(),
        }
    }

    fn ln_abs_current(&self) -> f64 {
        match self {
            CumulantSequence::Constant(s) => s.ln_abs_current(),
            CumulantSequence::Normal(s) => s.ln_abs_current(),
            CumulantSequence::Gamma(s) => s.ln_abs_current(),
            CumulantSequence::Exponential(s) => s.ln_abs_current(),
            CumulantSequence::Poisson(s) => s.ln_abs_current(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        match self {
            CumulantSequence::Constant(s) => {
                s.advance();
            }
            CumulantSequence::Normal(s) => {
                s.advance();
            }
            CumulantSequence::Gamma(s) => {
                s.advance();
            }
            CumulantSequence::Exponential(s) => {
                s.advance();
            }
            CumulantSequence::Poisson(s) => {
                s.advance();
            }
        }
        self
    }

    fn index(&self) -> usize {
        match self {
            CumulantSequence::Constant(s) => s.index(),
            CumulantSequence::Normal(s) => s.index(),
            CumulantSequence::Gamma(s) => s.index(),
            CumulantSequence::Exponential(s) => s.index(),
            CumulantSequence::Poisson(s) => s.index(),
        }
    }
}

impl From<Constant> for CumulantSequence {
    fn from(s: Constant) -> Self {
        CumulantSequence::Constant(s)
    }
}

impl From<Normal> for CumulantSequence {
    fn from(s: Normal) -> Self {
        CumulantSequence::Normal(s)
    }
}

impl From<Gamma> for CumulantSequence {
    fn from(s: Gamma) -> Self {
        CumulantSequence::Gamma(s)
    }
}

impl From<Exponential> for CumulantSequence {
    fn from(s: Exponential) -> Self {
        CumulantSequence::Exponential(s)
    }
}

impl From<Poisson> for CumulantSequence {
    fn from(s: Poisson) -> Self {
        CumulantSequence::Poisson(s)
    }
}
