#![cfg(feature = "std")]

//! Line sources for the placement and guess files.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

/// Read every line of `path`, trimmed of surrounding whitespace. Blank lines
/// are kept; the caller decides what they mean.
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::debug!("read {} lines from {}", text.lines().count(), path.display());
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}

/// Read one file name from `input`. Used when paths are not passed on the
/// command line: the placement file name comes first, then the guess file.
pub fn prompt_path<B: BufRead>(input: &mut B) -> anyhow::Result<PathBuf> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(anyhow!("expected a file name on standard input"));
    }
    let name = buf.trim();
    if name.is_empty() {
        return Err(anyhow!("empty file name on standard input"));
    }
    Ok(PathBuf::from(name))
}
