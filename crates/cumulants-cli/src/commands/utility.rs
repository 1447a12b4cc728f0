use clap::Args;
use serde_json::{json, Value};
use std::error::Error;

use cumulants_core::combinatorics::{choose, IntRange};
use cumulants_core::hermite::hermite;

/// Largest range the CLI will print in full.
const MAX_RANGE_SPAN: u64 = 100_000;

#[derive(Args)]
pub struct HermiteArgs {
    /// Order of the Hermite polynomial
    #[arg(long)]
    pub n: usize,

    /// Point at which to evaluate the polynomial
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,
}

pub fn run_hermite(args: HermiteArgs) -> Result<Value, Box<dyn Error>> {
    Ok(json!({ "n": args.n, "x": args.x, "value": hermite(args.n, args.x) }))
}

#[derive(Args)]
pub struct ChooseArgs {
    #[arg(long)]
    pub n: u64,

    #[arg(long)]
    pub k: u64,
}

pub fn run_choose(args: ChooseArgs) -> Result<Value, Box<dyn Error>> {
    let value = choose(args.n, args.k)?;
    Ok(json!({ "n": args.n, "k": args.k, "value": value }))
}

#[derive(Args)]
pub struct RangeArgs {
    /// First value
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Last value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,
}

pub fn run_range(args: RangeArgs) -> Result<Value, Box<dyn Error>> {
    let range = IntRange::new(args.from, args.to);
    if range.span() > MAX_RANGE_SPAN {
        return Err(format!(
            "range of {} values exceeds the printable limit of {MAX_RANGE_SPAN}",
            range.span()
        )
        .into());
    }
    let values: Vec<i64> = range.collect();
    Ok(json!({ "from": args.from, "to": args.to, "values": values }))
}
