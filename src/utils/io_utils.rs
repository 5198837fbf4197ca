//! Reading command input and writing command output

use std::fs;
use std::io::{self, Read, Write};

use log::debug;

use crate::errors::WarpResult;

/// Read a whole input, `-` meaning stdin
pub fn read_input(path: &str) -> WarpResult<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    debug!("Reading input from {}", path);
    Ok(fs::read_to_string(path)?)
}

/// Write output to a file, or to stdout when no path is given
pub fn write_output(path: Option<&str>, content: &str) -> WarpResult<()> {
    match path {
        Some(path) => {
            debug!("Writing {} bytes to {}", content.len(), path);
            fs::write(path, format!("{}\n", content))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
            handle.flush()?;
        }
    }
    Ok(())
}
