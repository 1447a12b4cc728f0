//! Probabilists' Hermite polynomials, `H_{n+1}(x) = x H_n(x) - n H_{n-1}(x)`.

/// Value of the `n`-th Hermite polynomial at `x`.
pub fn hermite(n: usize, x: f64) -> f64 {
    let (mut prev, mut curr) = (1.0, x);
    if n == 0 {
        return prev;
    }
    for k in 1..n {
        (prev, curr) = (curr, x * curr - k as f64 * prev);
    }
    curr
}

/// Preallocation cap for `hermite_values`; longer outputs grow on demand.
const MAX_PREALLOCATED: usize = 1 << 16;

fn capacity_for(n: usize) -> usize {
    n.saturating_add(1).min(MAX_PREALLOCATED)
}

/// `H_0(x), ..., H_n(x)` in one pass.
///
/// The result holds `n + 1` values, so `n` is bounded by available memory.
pub fn hermite_values(n: usize, x: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(capacity_for(n));
    values.push(1.0);
    if n >= 1 {
        values.push(x);
    }
    for k in 1..n {
        let next = x * values[k] - k as f64 * values[k - 1];
        values.push(next);
    }
    values
}
