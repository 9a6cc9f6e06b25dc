//! Output writer
//!
//! Units are written to a temporary file next to their target and then renamed over it,
//! so an interrupted run never leaves a truncated file at a final path. Existing files
//! are always overwritten.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::GeneratedUnit;

/// A generated unit could not be written
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    /// Target path
    pub path: PathBuf,
    /// Underlying error
    pub source: std::io::Error,
}

impl WriteError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self { path: path.to_path_buf(), source }
    }
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
pub fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<&str> = src.lines().map(str::trim_end).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Write `unit` below `output_root`, returning the path written
pub fn write_unit(unit: &GeneratedUnit, output_root: &Path) -> Result<PathBuf, WriteError> {
    let target = output_root.join(&unit.relative_path);
    let parent = target.parent().unwrap_or(output_root);
    fs::create_dir_all(parent).map_err(WriteError::at(parent))?;

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(WriteError::at(&target))?;
    staged
        .write_all(clean_generated_source(&unit.source).as_bytes())
        .and_then(|()| staged.flush())
        .map_err(WriteError::at(&target))?;
    staged.persist(&target).map_err(|e| WriteError { path: target.clone(), source: e.error })?;

    logging::trace("WRITER", &format!("wrote {}", target.display()));
    Ok(target)
}

/// Mirror `unit` to `out`, framed by its relative path
pub fn echo_unit<W: Write>(unit: &GeneratedUnit, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "// ---- {} ----", unit.relative_path.display())?;
    out.write_all(clean_generated_source(&unit.source).as_bytes())?;
    out.flush()
}
