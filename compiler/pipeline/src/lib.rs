#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a tree of schema documents into generated sources
//! by orchestrating discovery, loading, analysis and code generation.
//!
//! ## Module Organization
//!
//! The pipeline is organized into focused modules:
//!
//! - `orchestration` - Main pipeline entry points (`run`, `run_with`, `load_models`)
//! - `generation_context` - Resolved settings for one generation run
//! - `report` - Run summary and file-scoped errors
//! - `registrar` - Build-tool hook receiving the output directory
//! - `cancellation` - Cooperative cancellation shared with workers
//! - `worker_pool` - Bounded scoped worker pool used by the per-file stages

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort a generation run.
///
/// Problems confined to a single schema document are not errors of the run; they are
/// collected in [`RunReport::errors`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The schema root could not be walked.
    #[error(transparent)]
    Discovery(#[from] adapters::DiscoveryError),
    /// A generated file could not be written.
    #[error(transparent)]
    Write(#[from] codegen::WriteError),
    /// The settings for the run are invalid.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The run was cancelled before it finished.
    #[error("generation cancelled")]
    Cancelled,
    /// I/O error while mirroring generated units.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

impl From<codegen::CodegenError> for PipelineError {
    fn from(err: codegen::CodegenError) -> Self {
        match err {
            codegen::CodegenError::UnknownBoilerplate(_) => {
                PipelineError::Config(config::ConfigError::Invalid(err.to_string()))
            }
            other => PipelineError::Message(other.to_string()),
        }
    }
}

// Module declarations
pub mod cancellation;
pub mod generation_context;
pub mod orchestration;
pub mod registrar;
pub mod report;
pub mod worker_pool;

pub use cancellation::CancellationToken;
pub use generation_context::{GenerationSettings, GenerationSettingsBuilder};
pub use orchestration::{load_models, run, run_with, LoadOutcome};
pub use registrar::{CargoRegistrar, NoopRegistrar, RecordingRegistrar, SourceRootRegistrar};
pub use report::{FileError, RunReport};
