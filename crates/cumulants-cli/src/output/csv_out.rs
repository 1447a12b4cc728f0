use colored::Colorize;
use serde_json::Value;
use std::error::Error;
use std::io::Write;

use super::{flatten, result_of};

pub fn print_csv(value: &Value) {
    if let Err(e) = write_csv(std::io::stdout(), value) {
        eprintln!("{}: {}", "error".red().bold(), e);
    }
}

fn write_csv<W: Write>(out: W, value: &Value) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["field", "value"])?;
    for (field, v) in flatten(result_of(value)) {
        wtr.write_record([field, v])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &json!({"result": {"cumulants": [5.0, 5.0]}})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "field,value\ncumulants[0],5.0\ncumulants[1],5.0\n");
    }
}
