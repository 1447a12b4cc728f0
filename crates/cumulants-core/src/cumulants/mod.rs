//! Lazy, restartable cumulant sequences.
//!
//! A sequence at index `n` yields `kappa_{n+1}`, the coefficient of
//! `s^(n+1)/(n+1)!` in the cumulant generating function
//! `K(s) = log E[exp(sX)]`.

pub mod expansion;
pub mod gamma;
pub mod poisson;
pub mod sequence;
pub mod structural;

pub use expansion::{
    first_cumulants, summarize_cumulants, taylor_cgf, CumulantsInput, CumulantsOutput, MAX_TERMS,
};
#[cfg(feature = "cgf")]
pub use expansion::{taylor_approximation, TaylorInput, TaylorOutput, TaylorPoint};
pub use gamma::{Exponential, Gamma};
pub use poisson::Poisson;
pub use sequence::{CumulantSequence, CumulantTerm, Terms};
pub use structural::{Constant, Normal};
