use clap::{Args, ValueEnum};
use serde_json::Value;
use std::error::Error;

use cumulants_core::cgf::{evaluate_cgf, CgfInput};
use cumulants_core::cumulants::expansion::{
    summarize_cumulants, taylor_approximation, CumulantsInput, TaylorInput,
};
use cumulants_core::Distribution;

use crate::input::read_input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DistKind {
    Constant,
    Normal,
    Gamma,
    Exponential,
    Poisson,
}

/// Distribution selection shared by every CGF command
#[derive(Args)]
pub struct DistArgs {
    /// Distribution family
    #[arg(long, value_enum)]
    pub dist: Option<DistKind>,

    /// Normal mean (default 0)
    #[arg(long, allow_negative_numbers = true)]
    pub mu: Option<f64>,

    /// Normal standard deviation (default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub sigma: Option<f64>,

    /// Gamma shape a
    #[arg(long, allow_negative_numbers = true)]
    pub shape: Option<f64>,

    /// Gamma or exponential rate (inverse scale)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Poisson intensity
    #[arg(long, allow_negative_numbers = true)]
    pub lambda: Option<f64>,

    /// JSON or YAML request file, `-` for stdin. Overrides the flags above.
    #[arg(long)]
    pub input: Option<String>,
}

fn required(value: Option<f64>, flag: &str, dist: &str) -> Result<f64, Box<dyn Error>> {
    value.ok_or_else(|| format!("--{flag} is required for --dist {dist}").into())
}

impl DistArgs {
    pub fn to_distribution(&self) -> Result<Distribution, Box<dyn Error>> {
        let kind = self
            .dist
            .ok_or("--dist is required unless --input is given")?;
        let dist = match kind {
            DistKind::Constant => Distribution::Constant,
            DistKind::Normal => Distribution::Normal {
                mu: self.mu.unwrap_or(0.0),
                sigma: self.sigma.unwrap_or(1.0),
            },
            DistKind::Gamma => Distribution::Gamma {
                shape: required(self.shape, "shape", "gamma")?,
                rate: required(self.rate, "rate", "gamma")?,
            },
            DistKind::Exponential => Distribution::Exponential {
                rate: required(self.rate, "rate", "exponential")?,
            },
            DistKind::Poisson => Distribution::Poisson {
                lambda: required(self.lambda, "lambda", "poisson")?,
            },
        };
        Ok(dist)
    }
}

// ---------------------------------------------------------------------------
// eval
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub dist: DistArgs,

    /// Evaluation points s
    #[arg(long = "s", allow_negative_numbers = true, num_args = 1..)]
    pub points: Vec<f64>,
}

pub fn run_eval(args: EvalArgs) -> Result<Value, Box<dyn Error>> {
    let input: CgfInput = match &args.dist.input {
        Some(path) => read_input(path)?,
        None => CgfInput {
            distribution: args.dist.to_distribution()?,
            points: args.points,
        },
    };
    let output = evaluate_cgf(&input)?;
    Ok(serde_json::to_value(output)?)
}

// ---------------------------------------------------------------------------
// cumulants
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct CumulantsArgs {
    #[command(flatten)]
    pub dist: DistArgs,

    /// Number of cumulants to list
    #[arg(long, default_value = "8")]
    pub count: usize,
}

pub fn run_cumulants(args: CumulantsArgs) -> Result<Value, Box<dyn Error>> {
    let input: CumulantsInput = match &args.dist.input {
        Some(path) => read_input(path)?,
        None => CumulantsInput {
            distribution: args.dist.to_distribution()?,
            count: args.count,
        },
    };
    let output = summarize_cumulants(&input)?;
    Ok(serde_json::to_value(output)?)
}

// ---------------------------------------------------------------------------
// taylor
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TaylorArgs {
    #[command(flatten)]
    pub dist: DistArgs,

    /// Evaluation point s
    #[arg(long = "s", allow_negative_numbers = true, default_value = "0.5")]
    pub s: f64,

    /// Highest order of the partial sums
    #[arg(long, default_value = "8")]
    pub order: usize,
}

pub fn run_taylor(args: TaylorArgs) -> Result<Value, Box<dyn Error>> {
    let input: TaylorInput = match &args.dist.input {
        Some(path) => read_input(path)?,
        None => TaylorInput {
            distribution: args.dist.to_distribution()?,
            s: args.s,
            order: args.order,
        },
    };
    let output = taylor_approximation(&input)?;
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_args(kind: DistKind) -> DistArgs {
        DistArgs {
            dist: Some(kind),
            mu: None,
            sigma: None,
            shape: None,
            rate: None,
            lambda: None,
            input: None,
        }
    }

    #[test]
    fn test_normal_defaults_to_standard() {
        let d = dist_args(DistKind::Normal).to_distribution().unwrap();
        assert_eq!(d, Distribution::standard_normal());
    }

    #[test]
    fn test_gamma_requires_rate() {
        let mut args = dist_args(DistKind::Gamma);
        args.shape = Some(2.0);
        let err = args.to_distribution().unwrap_err();
        assert!(err.to_string().contains("--rate"));
    }

    #[test]
    fn test_run_eval_domain_error_surfaces() {
        let mut dist = dist_args(DistKind::Gamma);
        dist.shape = Some(2.0);
        dist.rate = Some(3.0);
        let result = run_eval(EvalArgs {
            dist,
            points: vec![3.0],
        });
        assert!(result.unwrap_err().to_string().contains("Domain error"));
    }

    #[test]
    fn test_negative_rate_reaches_core_validation() {
        let mut dist = dist_args(DistKind::Exponential);
        dist.rate = Some(-1.0);
        let err = run_cumulants(CumulantsArgs { dist, count: 3 }).unwrap_err();
        assert!(err.to_string().contains("Invalid parameter: rate"));
    }

    #[test]
    fn test_run_cumulants_poisson() {
        let mut dist = dist_args(DistKind::Poisson);
        dist.lambda = Some(5.0);
        let value = run_cumulants(CumulantsArgs { dist, count: 3 }).unwrap();
        assert_eq!(value["result"]["cumulants"], serde_json::json!([5.0, 5.0, 5.0]));
    }
}
