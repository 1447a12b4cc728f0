mod csv_out;
mod json;
mod minimal;
mod table;

use serde_json::Value;

use crate::OutputFormat;

pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` member of a computation envelope, or the value itself.
fn result_of(value: &Value) -> &Value {
    value.get("result").unwrap_or(value)
}

fn warnings_of(value: &Value) -> Vec<String> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|ws| {
            ws.iter()
                .filter_map(|w| w.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten nested JSON into `(path, scalar)` pairs, e.g. `values[0].cgf`.
fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into("", value, &mut rows);
    rows
}

fn flatten_into(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_into(&path, v, rows);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}[{i}]"), v, rows);
            }
        }
        Value::String(s) => rows.push((prefix.to_string(), s.clone())),
        Value::Null => rows.push((prefix.to_string(), String::new())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_envelope_result() {
        let v = json!({
            "result": {"distribution": "gamma", "values": [{"s": 0.5, "cgf": 0.1}]},
            "warnings": ["near bound"],
        });
        let rows = flatten(result_of(&v));
        assert_eq!(
            rows,
            vec![
                ("distribution".to_string(), "gamma".to_string()),
                ("values[0].cgf".to_string(), "0.1".to_string()),
                ("values[0].s".to_string(), "0.5".to_string()),
            ]
        );
        assert_eq!(warnings_of(&v), vec!["near bound".to_string()]);
    }

    #[test]
    fn test_flatten_bare_scalar() {
        let rows = flatten(&json!(10));
        assert_eq!(rows, vec![(String::new(), "10".to_string())]);
    }
}
