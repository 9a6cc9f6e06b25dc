//! Schema discovery
//!
//! Walks a schema root and returns every schema document below it, sorted by path.
//! Symbolic links are followed, but a link to a directory that is already reachable
//! (keyed by canonical path) is not entered, so link cycles cannot make the walk loop
//! and aliases never shadow the real directory name.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use model::{has_schema_extension, SchemaFile};
use thiserror::Error;
use walkdir::WalkDir;

/// The schema root cannot be walked
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The root exists but cannot be read
    #[error("schema root {} is unreadable: {source}", .path.display())]
    RootUnreadable {
        /// Schema root
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The root exists but is not a directory
    #[error("schema root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// A directory that was skipped during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryWarning {
    /// Skipped path, when known
    pub path: Option<PathBuf>,
    /// Why it was skipped
    pub reason: String,
}

impl std::fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.reason),
            None => f.write_str(&self.reason),
        }
    }
}

/// Outcome of a discovery pass
#[derive(Debug, Default)]
pub struct Located {
    /// Schema documents, sorted by path
    pub files: Vec<SchemaFile>,
    /// Directories that could not be entered
    pub warnings: Vec<DiscoveryWarning>,
}

/// Locate every schema document below `root` whose extension is in `extensions`
///
/// A missing root yields an empty result. A root that exists but cannot be read is an
/// error; unreadable subdirectories are skipped and reported as warnings.
pub fn locate(root: &Path, extensions: &[&str]) -> Result<Located, DiscoveryError> {
    if !root.exists() {
        tracing::info!("schema root {} does not exist; nothing to generate", root.display());
        return Ok(Located::default());
    }

    let unreadable =
        |source: std::io::Error| DiscoveryError::RootUnreadable { path: root.to_path_buf(), source };
    let metadata = fs::metadata(root).map_err(unreadable)?;
    if !metadata.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(unreadable)?;

    // Directories reachable without following links keep their own names; a link
    // into one of them is an alias and is not entered.
    let mut visited = real_directories(root);
    let mut located = Located::default();

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name().into_iter();
    let walker = walker.filter_entry(|entry| {
        if !entry.file_type().is_dir() || entry.depth() == 0 {
            return true;
        }
        let Ok(real) = entry.path().canonicalize() else { return true };
        let first_visit = visited.insert(real);
        if !entry.path_is_symlink() {
            return true;
        }
        if !first_visit {
            logging::trace(
                "LOCATE",
                &format!("skipping already visited {}", entry.path().display()),
            );
        }
        first_visit
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let warning = DiscoveryWarning {
                    path: err.path().map(Path::to_path_buf),
                    reason: if err.loop_ancestor().is_some() {
                        "symbolic link cycle".to_string()
                    } else {
                        err.io_error()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| err.to_string())
                    },
                };
                tracing::warn!("skipping {}", warning);
                located.warnings.push(warning);
                continue;
            }
        };

        if entry.file_type().is_file() && has_schema_extension(entry.path(), extensions) {
            located.files.push(SchemaFile::new(entry.path().to_path_buf(), root));
        }
    }

    located.files.sort();
    for file in &located.files {
        tracing::info!("discovered {} ({})", file.path.display(), file.file_name());
    }
    Ok(located)
}

/// Canonical paths of every directory below `root` reached without following links
fn real_directories(root: &Path) -> HashSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.path().canonicalize().ok())
        .collect()
}
