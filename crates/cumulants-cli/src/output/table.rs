use colored::Colorize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

use super::{flatten, result_of, warnings_of};

pub fn print_table(value: &Value) {
    println!("{}", build_table(value));

    for warning in warnings_of(value) {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }
}

fn build_table(value: &Value) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["field", "value"]);
    for (field, v) in flatten(result_of(value)) {
        builder.push_record([field, v]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_lists_fields() {
        let rendered = build_table(&json!({"result": {"n": 5, "value": 10}})).to_string();
        assert!(rendered.contains("field"));
        assert!(rendered.contains("value"));
        assert!(rendered.contains("10"));
    }
}
