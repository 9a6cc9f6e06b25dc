//! Build-tool integration.
//!
//! After analysis, and before anything is written, the pipeline hands the output
//! directory to a [`SourceRootRegistrar`] so the surrounding build compiles it.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Receives the directory holding generated sources
pub trait SourceRootRegistrar {
    /// Register `dir` as a compiled-source root
    fn register_source_root(&self, dir: &Path);
}

/// Registrar that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistrar;

impl SourceRootRegistrar for NoopRegistrar {
    fn register_source_root(&self, _dir: &Path) {}
}

/// Registrar for Cargo build scripts
///
/// Asks Cargo to rerun the build script when the schema root changes and exports the
/// output directory to the crate being built as `MODELGEN_SOURCE_ROOT`.
#[derive(Debug, Clone)]
pub struct CargoRegistrar {
    schema_root: PathBuf,
}

impl CargoRegistrar {
    /// Name of the environment variable carrying the output directory
    pub const SOURCE_ROOT_ENV: &'static str = "MODELGEN_SOURCE_ROOT";

    /// Create a registrar watching `schema_root`
    pub fn new(schema_root: impl Into<PathBuf>) -> Self { Self { schema_root: schema_root.into() } }

    /// Directives printed for `dir`
    pub fn directives(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cargo:rerun-if-changed={}", self.schema_root.display()),
            format!("cargo:rustc-env={}={}", Self::SOURCE_ROOT_ENV, dir.display()),
        ]
    }
}

impl SourceRootRegistrar for CargoRegistrar {
    fn register_source_root(&self, dir: &Path) {
        for directive in self.directives(dir) {
            println!("{}", directive);
        }
    }
}

/// Registrar that keeps every registered directory in memory
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    roots: Mutex<Vec<PathBuf>>,
}

impl RecordingRegistrar {
    /// Create an empty registrar
    pub fn new() -> Self { Self::default() }

    /// Directories registered so far, in registration order
    pub fn roots(&self) -> Vec<PathBuf> {
        self.roots.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SourceRootRegistrar for RecordingRegistrar {
    fn register_source_root(&self, dir: &Path) {
        self.roots.lock().unwrap_or_else(PoisonError::into_inner).push(dir.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_registrar() {
        let registrar = RecordingRegistrar::new();
        registrar.register_source_root(Path::new("out/a"));
        registrar.register_source_root(Path::new("out/b"));
        assert_eq!(registrar.roots(), vec![PathBuf::from("out/a"), PathBuf::from("out/b")]);
    }

    #[test]
    fn test_cargo_directives() {
        let registrar = CargoRegistrar::new("resources/model");
        assert_eq!(
            registrar.directives(Path::new("target/generated-sources")),
            vec![
                "cargo:rerun-if-changed=resources/model".to_string(),
                "cargo:rustc-env=MODELGEN_SOURCE_ROOT=target/generated-sources".to_string(),
            ]
        );
    }
}
