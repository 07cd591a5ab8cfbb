//! Reading input text and writing extracted emails

use crate::error::{ExtractError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read the whole input file as UTF-8 text
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|_| ExtractError::Decode {
        path: path.to_path_buf(),
    })
}

/// Write one email per line, each terminated by `\n`. Overwrites `path`.
pub fn write_emails(path: &Path, emails: &[String]) -> Result<()> {
    let to_write_error = |source: std::io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    for email in emails {
        writeln!(writer, "{email}").map_err(to_write_error)?;
    }
    writer.flush().map_err(to_write_error)?;

    debug!("Wrote {} emails to {}", emails.len(), path.display());
    Ok(())
}

/// Read an output file back, one email per line
pub fn read_emails(path: &Path) -> Result<Vec<String>> {
    let text = read_input(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Suggested output path for `input`: `<stem>_emails.txt` next to it
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_emails.txt"))
}
