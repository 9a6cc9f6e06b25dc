#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for schema models.
//!
//! This crate turns loaded [`Model`]s into ready-to-compile source documents.
//! It focuses solely on rendering and persisting those documents: mapping property types,
//! collecting imports, laying out accessors and writing the result under an output root.
//!
//! Discovery, loading and run-wide analysis reside in companion crates.

pub mod generators;

/// Sub-crate: **`utils`**
///
/// Naming helpers shared by the generators.
pub mod utils;

/// Sub-crate: **`writer`**
///
/// Persists generated units under the output root.
pub mod writer;

use std::path::PathBuf;

use analysis::{ModelIndex, TypeResolutionError};
use model::Model;
use thiserror::Error;

pub use generators::boilerplate::{self, BoilerplateMethod, SumOfTen};
pub use generators::java_bean::JavaBeanGenerator;
pub use writer::{clean_generated_source, echo_unit, write_unit, WriteError};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A property references a type that cannot be resolved.
    #[error(transparent)]
    TypeResolution(#[from] TypeResolutionError),
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// A boilerplate method was requested that does not exist.
    #[error(
        "unknown boilerplate method `{0}` (available: {available})",
        available = boilerplate::available().join(", ")
    )]
    UnknownBoilerplate(String),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

impl From<String> for CodegenError {
    fn from(msg: String) -> Self { CodegenError::Message(msg) }
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// One complete generated source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Fully-qualified package of the generated type
    pub package: String,
    /// Simple name of the generated type
    pub type_name: String,
    /// Complete document text
    pub source: String,
    /// Location below the output root: package directories plus `<TypeName>.<ext>`
    pub relative_path: PathBuf,
}

/// Per-run emission options.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Package every generated type lives under; namespace segments are appended
    pub base_package: String,
    /// Fixed methods appended to every generated type, in order
    pub boilerplate: Vec<&'static dyn BoilerplateMethod>,
}

impl EmitOptions {
    /// Options for `base_package` with no boilerplate
    pub fn new(base_package: impl Into<String>) -> Self {
        Self { base_package: base_package.into(), boilerplate: Vec::new() }
    }

    /// Enable the boilerplate methods called `names`, in the given order
    ///
    /// Unknown names are an error; a name listed twice is emitted once.
    pub fn with_boilerplate<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        for name in names {
            let method = boilerplate::lookup(name.as_ref())
                .ok_or_else(|| CodegenError::UnknownBoilerplate(name.as_ref().to_string()))?;
            if !self.boilerplate.iter().any(|m| m.name() == method.name()) {
                self.boilerplate.push(method);
            }
        }
        Ok(self)
    }
}

/// Defines the core interface for rendering one source document per model.
///
/// Implementors receive the run's [`ModelIndex`] so that references to other models can
/// be resolved (and imported) while rendering. Rendering must be a pure function of the
/// model, the index and the generator's options: emitting the same model twice yields
/// byte-identical units.
pub trait CodeGenerator: Send + Sync {
    /// Short name of the target (e.g. "java-bean")
    fn name(&self) -> &'static str;

    /// Extension of generated files, without the leading dot
    fn file_extension(&self) -> &'static str;

    /// Render `model` into a generated unit.
    fn emit(&self, model: &Model, index: &ModelIndex) -> Result<GeneratedUnit>;
}
