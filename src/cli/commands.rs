use base985161::Settings;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use super::global::GlobalArgs;

/// `-` stands for the standard streams.
fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads the whole input, enforcing the configured size limit.
pub fn read_input(
    path: &Path,
    settings: &Settings,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if is_stdio(path) {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        check_size(buffer.len(), "Input", settings, global)?;
        return Ok(buffer);
    }

    // Check file size before reading it in
    if settings.max_size > 0 {
        let file_size = fs::metadata(path)?.len() as usize;
        check_size(file_size, "File", settings, global)?;
    }

    Ok(fs::read(path)?)
}

fn check_size(
    size: usize,
    what: &str,
    settings: &Settings,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if settings.max_size == 0 || size <= settings.max_size {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            eprintln!(
                "Warning: Processing large input ({} bytes, limit: {} bytes)",
                size, settings.max_size
            );
        }
        Ok(())
    } else {
        Err(format!(
            "{} size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            what, size, settings.max_size
        )
        .into())
    }
}

/// Writes the whole result to a file or stdout.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
    } else {
        fs::write(path, data)?;
    }
    Ok(())
}
