use serde::{Deserialize, Serialize};

use crate::error::CumulantError;
use crate::CumulantResult;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Binomial coefficient `n choose k`.
///
/// Iterates over the smaller of `k` and `n - k`. After step `i` the
/// accumulator holds `C(n - k + i, i)`, so every intermediate value is an
/// exact integer; the common factor with `i` is cancelled before
/// multiplying to keep intermediates small. Returns
/// [`CumulantError::Overflow`] when the result does not fit in a `u64`.
pub fn choose(n: u64, k: u64) -> CumulantResult<u64> {
    if k > n {
        return Ok(0);
    }
    let steps = k.min(n - k);

    let mut cnk: u64 = 1;
    for i in 1..=steps {
        let m = n - steps + i;
        let g = gcd(cnk, i);
        cnk = (cnk / g)
            .checked_mul(m / (i / g))
            .ok_or_else(|| CumulantError::Overflow {
                context: format!("choose({n}, {k})"),
            })?;
    }

    Ok(cnk)
}

/// Row `n` of Pascal's triangle: `C(n, 0), ..., C(n, n)`.
pub fn pascal_row(n: u64) -> CumulantResult<Vec<u64>> {
    let n_signed = i64::try_from(n).map_err(|_| CumulantError::Overflow {
        context: format!("pascal_row({n})"),
    })?;
    IntRange::new(0, n_signed)
        .map(|k| choose(n, k as u64))
        .collect()
}

/// Inclusive integer range `[start, start + 1, ..., end]`.
///
/// The range is consumed by advancing; `begin()` gives a fresh copy at the
/// first element and `end()` the exhausted state. An exhausted range
/// compares equal to `end()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRange {
    start: i64,
    end: i64,
    next: Option<i64>,
}

impl IntRange {
    /// Empty when `end < start`.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            next: (start <= end).then_some(start),
        }
    }

    pub fn begin(&self) -> Self {
        Self::new(self.start, self.end)
    }

    pub fn end(&self) -> Self {
        Self {
            next: None,
            ..*self
        }
    }

    /// Value the next call to `next()` yields, if any.
    pub fn current(&self) -> Option<i64> {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Number of elements in the full range, ignoring progress.
    pub fn span(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            self.end.abs_diff(self.start) + 1
        }
    }
}

impl Iterator for IntRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let i = self.next?;
        self.next = (i < self.end).then(|| i + 1);
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(i) => {
                let remaining = usize::try_from(self.end.abs_diff(i))
                    .ok()
                    .and_then(|d| d.checked_add(1));
                match remaining {
                    Some(len) => (len, Some(len)),
                    None => (usize::MAX, None),
                }
            }
        }
    }
}

impl std::iter::FusedIterator for IntRange {}
