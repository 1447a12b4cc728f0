mod file;
mod stdin;

use serde::de::DeserializeOwned;
use std::error::Error;

/// Read a request from a JSON or YAML file, or from stdin when `path` is `-`.
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML; everything else is
/// tried as JSON first and then as YAML.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let (raw, yaml_hint) = if path == "-" {
        (stdin::read_stdin()?, false)
    } else {
        file::read_file(path)?
    };

    tracing::debug!(path, bytes = raw.len(), "read request");
    parse_request(&raw, yaml_hint)
}

fn parse_request<T: DeserializeOwned>(raw: &str, yaml: bool) -> Result<T, Box<dyn Error>> {
    if yaml {
        return Ok(serde_yaml::from_str(raw)?);
    }
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(json_err) => serde_yaml::from_str(raw)
            .map_err(|_| format!("input is neither valid JSON nor YAML: {json_err}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulants_core::cgf::CgfInput;
    use cumulants_core::Distribution;

    #[test]
    fn test_parse_json_request() {
        let raw = r#"{"distribution":{"type":"Poisson","lambda":2.0},"points":[0.5]}"#;
        let input: CgfInput = parse_request(raw, false).unwrap();
        assert_eq!(input.distribution, Distribution::Poisson { lambda: 2.0 });
        assert_eq!(input.points, vec![0.5]);
    }

    #[test]
    fn test_parse_yaml_fallback() {
        let raw = "distribution:\n  type: Gamma\n  shape: 2.0\n  rate: 3.0\npoints: [1.0, -1.0]\n";
        let input: CgfInput = parse_request(raw, false).unwrap();
        assert_eq!(input.distribution, Distribution::Gamma { shape: 2.0, rate: 3.0 });
    }

    #[test]
    fn test_parse_garbage_fails() {
        let result: Result<CgfInput, _> = parse_request("[[[", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_input_missing_file() {
        let result: Result<CgfInput, _> = read_input("/nonexistent/request.json");
        assert!(result.unwrap_err().to_string().contains("cannot read input file"));
    }
}
