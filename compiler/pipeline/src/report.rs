//! Run summary and file-scoped errors.

use std::fmt;
use std::path::{Path, PathBuf};

use adapters::{DiscoveryWarning, ParseError};
use analysis::{CollisionError, TypeResolutionError};
use thiserror::Error;

/// A problem confined to one schema document
///
/// The offending document produces no output; the rest of the run continues.
#[derive(Debug, Error)]
pub enum FileError {
    /// The document could not be read, parsed or validated
    #[error(transparent)]
    Parse(ParseError),
    /// A property references a type the run cannot resolve
    #[error("{error}")]
    TypeResolution {
        /// Schema document
        path: PathBuf,
        /// Resolution failure
        error: TypeResolutionError,
    },
    /// Another document defines the same qualified type
    #[error("{error}")]
    Collision {
        /// Schema document
        path: PathBuf,
        /// Collision details
        error: CollisionError,
    },
}

impl FileError {
    /// Path of the offending schema document
    pub fn path(&self) -> &Path {
        match self {
            FileError::Parse(err) => &err.path,
            FileError::TypeResolution { path, .. } | FileError::Collision { path, .. } => path,
        }
    }

    /// Short name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FileError::Parse(_) => "parse",
            FileError::TypeResolution { .. } => "type resolution",
            FileError::Collision { .. } => "collision",
        }
    }
}

impl From<ParseError> for FileError {
    fn from(err: ParseError) -> Self { FileError::Parse(err) }
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Schema documents found by discovery
    pub discovered: usize,
    /// Documents loaded into models
    pub loaded: usize,
    /// Units generated and written
    pub generated: usize,
    /// Files written, in model order
    pub written: Vec<PathBuf>,
    /// File-scoped errors, ordered by schema path
    pub errors: Vec<FileError>,
    /// Directories skipped during discovery
    pub warnings: Vec<DiscoveryWarning>,
}

impl RunReport {
    /// Whether the run finished without file-scoped errors
    pub fn is_success(&self) -> bool { self.errors.is_empty() }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discovered {}, loaded {}, generated {}",
            self.discovered, self.loaded, self.generated
        )
    }
}
