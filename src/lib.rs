// SPDX-License-Identifier: CC0-1.0

//! modelgen umbrella crate.
//!
//! Build scripts depend on this crate and call [`generate`]:
//!
//! ```no_run
//! fn main() {
//!     if let Err(e) = modelgen::generate() {
//!         panic!("modelgen: {}", e);
//!     }
//! }
//! ```
//!
//! The functional code lives in the workspace member crates under `adapters`,
//! `compiler` and `primitives`; the most used types are re-exported here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![doc(test(attr(warn(unused))))]

use std::path::{Path, PathBuf};

use adapters::YamlSchemaAdapter;
pub use config::{Config, ConfigError};
pub use pipeline::{
    CancellationToken, CargoRegistrar, FileError, GenerationSettings, PipelineError, RunReport,
    SourceRootRegistrar,
};
use thiserror::Error;

/// Miscellaneous metadata about the modelgen workspace.
pub mod modelgen_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Errors returned by the build-script entry points
#[derive(Debug, Error)]
pub enum Error {
    /// The project configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The run aborted
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// The run finished but some schema documents failed
    #[error("{0}; {n} schema error(s), first: {first}", n = .0.errors.len(), first = first_error(.0))]
    Failed(RunReport),
}

fn first_error(report: &RunReport) -> String {
    report.errors.first().map(ToString::to_string).unwrap_or_default()
}

/// Generate sources for the package whose build script is running
///
/// The project directory is `CARGO_MANIFEST_DIR`, falling back to the working directory.
pub fn generate() -> Result<RunReport, Error> {
    let project_dir = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    generate_in(&project_dir)
}

/// Generate sources for the project rooted at `project_dir`
///
/// Reads `<project_dir>/modelgen.toml` when present (defaults otherwise); relative
/// paths in it are resolved against `project_dir`. The per-user configuration is not
/// consulted so builds stay reproducible across machines.
pub fn generate_in(project_dir: &Path) -> Result<RunReport, Error> {
    let file = project_dir.join(path::PROJECT_CONFIG_FILE);
    let config = if file.is_file() { Config::from_file(&file)? } else { Config::default() };

    let schema_root = project_dir.join(config.schema_root());
    let settings = GenerationSettings::from_config(&config)
        .schema_root(&schema_root)
        .output_dir(project_dir.join(config.output_dir()))
        .build()?;
    generate_with(&settings, &CargoRegistrar::new(schema_root))
}

/// Generate sources with explicit settings and registrar
///
/// Any file-scoped error turns into [`Error::Failed`], carrying the full report.
pub fn generate_with(
    settings: &GenerationSettings,
    registrar: &dyn SourceRootRegistrar,
) -> Result<RunReport, Error> {
    let report =
        pipeline::run(settings, &YamlSchemaAdapter::new(), registrar, &CancellationToken::new())?;
    if report.is_success() {
        Ok(report)
    } else {
        Err(Error::Failed(report))
    }
}
