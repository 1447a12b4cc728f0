use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::trace;

use crate::error::CumulantError;
use crate::types::{with_metadata, ComputationOutput, Distribution};
use crate::CumulantResult;

use super::sequence::{CumulantSequence, CumulantTerm};

/// Upper limit on the number of terms drained through the envelope APIs.
pub const MAX_TERMS: usize = 1024;

// ---------------------------------------------------------------------------
// Draining helpers
// ---------------------------------------------------------------------------

/// The next `count` terms of `seq`, starting at its current index.
pub fn first_cumulants<S: CumulantTerm>(seq: S, count: usize) -> Vec<f64> {
    seq.terms().take(count).collect()
}

/// One Taylor term of order `k`: the cumulant and its contribution
/// `kappa_k s^k / k!`.
#[derive(Debug, Clone, Copy)]
struct TaylorTerm {
    k: usize,
    kappa: f64,
    contribution: f64,
}

/// Successive Taylor terms of `K(s)`, starting at the sequence's index.
///
/// Each contribution is `exp(ln|kappa_k| + ln(|s|^k / k!))` with the sign
/// tracked apart, so neither the cumulant nor `s^k/k!` has to fit in an
/// `f64` on its own. Zero cumulants contribute exactly zero.
struct TaylorTerms<S> {
    seq: S,
    k: usize,
    ln_abs_s: f64,
    s_negative: bool,
    /// `ln(|s|^k / k!)`
    ln_factor: f64,
    /// sign of `s^k`
    sign: f64,
}

fn taylor_terms<S: CumulantTerm>(seq: S, s: f64) -> TaylorTerms<S> {
    let k = seq.index();
    let ln_abs_s = s.abs().ln();
    let s_negative = s < 0.0;
    let ln_factor = (1..=k).map(|j| ln_abs_s - (j as f64).ln()).sum();
    let sign = if s_negative && k % 2 == 1 { -1.0 } else { 1.0 };
    TaylorTerms {
        seq,
        k,
        ln_abs_s,
        s_negative,
        ln_factor,
        sign,
    }
}

impl<S: CumulantTerm> Iterator for TaylorTerms<S> {
    type Item = TaylorTerm;

    fn next(&mut self) -> Option<TaylorTerm> {
        self.k += 1;
        self.ln_factor += self.ln_abs_s - (self.k as f64).ln();
        if self.s_negative {
            self.sign = -self.sign;
        }

        let kappa = self.seq.current();
        let ln_abs_kappa = self.seq.ln_abs_current();
        self.seq.advance();

        let vanishes = ln_abs_kappa == f64::NEG_INFINITY || self.ln_factor == f64::NEG_INFINITY;
        let contribution = if vanishes {
            0.0
        } else {
            self.sign * kappa.signum() * (ln_abs_kappa + self.ln_factor).exp()
        };

        Some(TaylorTerm {
            k: self.k,
            kappa,
            contribution,
        })
    }
}

/// Partial Taylor sum of the cumulant generating function at `s`.
///
/// Adds `order` terms `kappa_{k} s^k / k!` starting from the sequence's
/// current index, so a fresh sequence gives
/// `K(s) ~ sum_{k=1}^{order} kappa_k s^k / k!`. Terms are combined in log
/// space, so the sum stays finite when a cumulant or `s^k/k!` alone
/// overflows but their product does not.
pub fn taylor_cgf<S: CumulantTerm>(seq: S, s: f64, order: usize) -> f64 {
    let mut sum = 0.0;
    for term in taylor_terms(seq, s).take(order) {
        sum += term.contribution;
        trace!(k = term.k, kappa = term.kappa, partial_sum = sum, "taylor term");
    }
    sum
}

// ---------------------------------------------------------------------------
// Function: summarize_cumulants
// ---------------------------------------------------------------------------

fn default_count() -> usize {
    8
}

/// Input for draining the leading cumulants of a distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulantsInput {
    pub distribution: Distribution,
    /// Number of cumulants to return, `kappa_1` first.
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Leading cumulants with the moments they determine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CumulantsOutput {
    pub distribution: String,
    /// `cumulants[i]` is `kappa_{i+1}`.
    pub cumulants: Vec<f64>,
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    /// `kappa_3 / kappa_2^1.5`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<f64>,
    /// `kappa_4 / kappa_2^2`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excess_kurtosis: Option<f64>,
    /// Order `k` of the first `kappa_k` that is not finite in `f64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_non_finite_cumulant: Option<usize>,
}

/// Drain the first `count` cumulants and derive mean, variance, skewness
/// and excess kurtosis where enough terms are available.
pub fn summarize_cumulants(
    input: &CumulantsInput,
) -> CumulantResult<ComputationOutput<CumulantsOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // -- Validation --
    if input.count == 0 || input.count > MAX_TERMS {
        return Err(CumulantError::InvalidParameter {
            param: "count".into(),
            reason: format!("must be between 1 and {MAX_TERMS}, got {}", input.count),
        });
    }
    let seq = CumulantSequence::for_distribution(&input.distribution)?;

    let cumulants = first_cumulants(seq, input.count);

    let first_non_finite_cumulant = cumulants.iter().position(|c| !c.is_finite()).map(|i| i + 1);
    if let Some(k) = first_non_finite_cumulant {
        warnings.push(format!(
            "kappa_{k} and beyond are not finite in double precision"
        ));
    }

    let mean = cumulants[0];
    let variance = cumulants.get(1).copied();
    let positive_variance = variance.filter(|v| *v > 0.0);
    let skewness = match (positive_variance, cumulants.get(2)) {
        (Some(v), Some(k3)) => Some(k3 / v.powf(1.5)),
        _ => None,
    };
    let excess_kurtosis = match (positive_variance, cumulants.get(3)) {
        (Some(v), Some(k4)) => Some(k4 / (v * v)),
        _ => None,
    };
    if variance == Some(0.0) && input.count > 2 {
        warnings.push("Zero variance: skewness and kurtosis are undefined".into());
    }

    let output = CumulantsOutput {
        distribution: input.distribution.name().to_string(),
        cumulants,
        mean,
        variance,
        skewness,
        excess_kurtosis,
        first_non_finite_cumulant,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cumulant sequence from the Taylor coefficients of log E[exp(sX)]",
        &serde_json::json!({
            "distribution": input.distribution,
            "count": input.count,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Function: taylor_approximation
// ---------------------------------------------------------------------------

#[cfg(feature = "cgf")]
pub use self::taylor::*;

#[cfg(feature = "cgf")]
mod taylor {
    use super::*;
    use crate::cgf;

    /// Input for comparing Taylor partial sums against the closed form.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TaylorInput {
        pub distribution: Distribution,
        pub s: f64,
        /// Highest order of the partial sums.
        #[serde(default = "default_count")]
        pub order: usize,
    }

    /// One partial sum `sum_{k=1}^{order} kappa_k s^k / k!`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TaylorPoint {
        pub order: usize,
        pub approximation: f64,
        pub abs_error: f64,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TaylorOutput {
        pub distribution: String,
        pub s: f64,
        pub exact: f64,
        pub partial_sums: Vec<TaylorPoint>,
        /// Order `k` of the first `kappa_k` that is not finite in `f64`.
        /// Partial sums past it are still formed from `ln|kappa_k|`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_non_finite_cumulant: Option<usize>,
    }

    /// Partial sums of orders `1..=order` next to the closed-form value.
    pub fn taylor_approximation(
        input: &TaylorInput,
    ) -> CumulantResult<ComputationOutput<TaylorOutput>> {
        let start = Instant::now();
        let mut warnings: Vec<String> = Vec::new();

        // -- Validation --
        if input.order == 0 || input.order > MAX_TERMS {
            return Err(CumulantError::InvalidParameter {
                param: "order".into(),
                reason: format!("must be between 1 and {MAX_TERMS}, got {}", input.order),
            });
        }
        let exact = cgf::evaluate(&input.distribution, input.s)?;
        let seq = CumulantSequence::for_distribution(&input.distribution)?;

        // Gamma-family series converge only for |s| < rate.
        if let Some(bound) = cgf::convergence_bound(&input.distribution) {
            if input.s.abs() >= bound {
                warnings.push(format!(
                    "|s| = {} is outside the radius of convergence {bound}; partial sums diverge",
                    input.s.abs()
                ));
            }
        }

        let mut partial_sums = Vec::with_capacity(input.order);
        let mut first_non_finite_cumulant = None;
        let mut first_non_finite_sum = None;
        let mut sum = 0.0;
        for term in taylor_terms(seq, input.s).take(input.order) {
            sum += term.contribution;
            if !term.kappa.is_finite() && first_non_finite_cumulant.is_none() {
                first_non_finite_cumulant = Some(term.k);
            }
            if !sum.is_finite() && first_non_finite_sum.is_none() {
                first_non_finite_sum = Some(term.k);
            }
            partial_sums.push(TaylorPoint {
                order: term.k,
                approximation: sum,
                abs_error: (sum - exact).abs(),
            });
        }

        if let Some(k) = first_non_finite_cumulant {
            warnings.push(format!(
                "kappa_{k} and beyond are not finite in double precision; terms use ln|kappa_k|"
            ));
        }
        if let Some(k) = first_non_finite_sum {
            warnings.push(format!(
                "Partial sums are not finite in double precision from order {k}"
            ));
        }

        let output = TaylorOutput {
            distribution: input.distribution.name().to_string(),
            s: input.s,
            exact,
            partial_sums,
            first_non_finite_cumulant,
        };

        let elapsed = start.elapsed().as_micros() as u64;
        Ok(with_metadata(
            "Taylor partial sums of the cumulant generating function",
            &serde_json::json!({
                "distribution": input.distribution,
                "s": input.s,
                "order": input.order,
            }),
            warnings,
            elapsed,
            output,
        ))
    }
}
