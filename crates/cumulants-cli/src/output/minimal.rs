use serde_json::Value;

use super::{flatten, result_of};

/// Scalars only, one per line, without field names.
pub fn print_minimal(value: &Value) {
    for (_, v) in flatten(result_of(value)) {
        println!("{v}");
    }
}
