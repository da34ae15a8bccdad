use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

/// Returns the flag value, or reads one line from stdin.
///
/// Keeps passwords out of shell history and the process list.
pub fn secret(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            eprint!("{}: ", label);
            io::stderr().flush()?;
            read_secret(&mut io::stdin().lock(), label)
        }
    }
}

fn read_secret(reader: &mut impl BufRead, label: &str) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("{} was not provided", label);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
