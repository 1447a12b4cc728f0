use std::error::Error;
use std::fs;
use std::path::Path;

/// File contents and whether the extension marks it as YAML.
pub fn read_file(path: &str) -> Result<(String, bool), Box<dyn Error>> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let raw =
        fs::read_to_string(path).map_err(|e| format!("cannot read input file '{path}': {e}"))?;
    Ok((raw, is_yaml_extension(ext.as_deref())))
}

fn is_yaml_extension(ext: Option<&str>) -> bool {
    matches!(ext, Some("yaml") | Some("yml"))
}
