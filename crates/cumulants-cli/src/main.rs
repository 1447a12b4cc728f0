mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::cgf::{CumulantsArgs, EvalArgs, TaylorArgs};
use commands::utility::{ChooseArgs, HermiteArgs, RangeArgs};

/// Cumulant generating functions and cumulant sequences
#[derive(Parser)]
#[command(
    name = "cgf",
    version,
    about = "Cumulant generating functions and cumulant sequences",
    long_about = "Evaluate closed-form cumulant generating functions log E[exp(sX)] \
                  for normal, gamma, exponential and Poisson distributions, list their \
                  cumulants, and compare Taylor partial sums against the closed form."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: tracing::Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the closed-form CGF at one or more points
    Eval(EvalArgs),
    /// List the leading cumulants with mean, variance, skewness and kurtosis
    Cumulants(CumulantsArgs),
    /// Compare Taylor partial sums of the CGF with the closed form
    Taylor(TaylorArgs),
    /// Evaluate a Hermite polynomial
    Hermite(HermiteArgs),
    /// Binomial coefficient n choose k
    Choose(ChooseArgs),
    /// Enumerate an inclusive integer range
    Range(RangeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Eval(args) => commands::cgf::run_eval(args),
        Commands::Cumulants(args) => commands::cgf::run_cumulants(args),
        Commands::Taylor(args) => commands::cgf::run_taylor(args),
        Commands::Hermite(args) => commands::utility::run_hermite(args),
        Commands::Choose(args) => commands::utility::run_choose(args),
        Commands::Range(args) => commands::utility::run_range(args),
        Commands::Version => {
            println!("cgf {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(argv.iter().copied()).map_err(|e| e.to_string())?;
        match cli.command {
            Commands::Eval(args) => commands::cgf::run_eval(args),
            Commands::Cumulants(args) => commands::cgf::run_cumulants(args),
            _ => Err("unexpected command".into()),
        }
    }

    #[test]
    fn test_negative_parameters_parse_and_fail_in_core() {
        for argv in [
            ["cgf", "eval", "--dist", "gamma", "--shape", "2", "--rate", "-1", "--s", "0.5"].as_slice(),
            ["cgf", "eval", "--dist", "gamma", "--shape", "-2", "--rate", "1", "--s", "0.5"].as_slice(),
            ["cgf", "eval", "--dist", "normal", "--sigma", "-1", "--s", "0.5"].as_slice(),
            ["cgf", "cumulants", "--dist", "poisson", "--lambda", "-3"].as_slice(),
        ] {
            let err = run(argv).unwrap_err().to_string();
            assert!(err.starts_with("Invalid parameter"), "{argv:?}: {err}");
        }
    }

    #[test]
    fn test_negative_evaluation_points() {
        let value = run(&["cgf", "eval", "--dist", "poisson", "--lambda", "2", "--s", "-1", "-0.5"])
            .unwrap();
        assert_eq!(value["result"]["values"].as_array().unwrap().len(), 2);
    }
}
