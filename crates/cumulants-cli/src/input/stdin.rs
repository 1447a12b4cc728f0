use std::error::Error;
use std::io::Read;

pub fn read_stdin() -> Result<String, Box<dyn Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Err("--input - expects a request piped on stdin".into());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
