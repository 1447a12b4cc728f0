//! Closed-form cumulant generating functions `K(s) = log E[exp(sX)]`.

pub mod closed_form;
pub mod evaluation;

pub use closed_form::{constant, convergence_bound, evaluate, exponential, gamma, normal, poisson};
pub use evaluation::{evaluate_cgf, CgfInput, CgfOutput, CgfPoint};
