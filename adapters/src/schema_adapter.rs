//! Schema Adapter Trait
//!
//! This module defines the SchemaAdapter trait that every schema format implements to
//! translate its documents into the canonical [`Model`].

use std::path::PathBuf;

use analysis::{ModelValidationError, ModelValidator};
use model::{has_schema_extension, Model, SchemaFile, TypeParseError};
use thiserror::Error;

/// Why a schema document could not be loaded
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// I/O error while reading the document
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The document is not well-formed markup or does not have the model shape
    #[error("{0}")]
    Syntax(String),
    /// A property's type string could not be parsed
    #[error("property `{property}`: {source}")]
    InvalidType {
        /// Offending property
        property: String,
        /// Parse failure
        source: TypeParseError,
    },
    /// The model failed identifier or uniqueness validation
    #[error("{}", join_issues(.0))]
    Validation(Vec<ModelValidationError>),
}

fn join_issues(issues: &[ModelValidationError]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// A schema document failed to load
#[derive(Debug, Error)]
#[error("{}: {kind}", .path.display())]
pub struct ParseError {
    /// Path of the offending document
    pub path: PathBuf,
    /// Failure kind
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Attach a path to a failure
    pub fn new(path: impl Into<PathBuf>, kind: impl Into<ParseErrorKind>) -> Self {
        Self { path: path.into(), kind: kind.into() }
    }
}

/// Result alias for schema loading
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Schema Adapter trait for translating schema documents into models
///
/// Implementors only parse; reading the file, deriving the namespace and validating
/// identifiers are shared by [`SchemaAdapter::load_model`].
pub trait SchemaAdapter: Send + Sync {
    /// Name of the schema format (e.g. "yaml")
    fn name(&self) -> &'static str;

    /// File extensions this adapter reads, without the leading dot
    fn extensions(&self) -> &'static [&'static str];

    /// Parse the contents of `schema` into a model
    ///
    /// The returned model must carry the namespace and source of `schema`.
    fn parse_model(&self, schema: &SchemaFile, contents: &str) -> Result<Model, ParseErrorKind>;

    /// Check if this adapter reads documents like `schema`
    fn supports(&self, schema: &SchemaFile) -> bool {
        has_schema_extension(&schema.path, self.extensions())
    }

    /// Read, parse and validate one schema document
    fn load_model(&self, schema: &SchemaFile) -> ParseResult<Model> {
        let contents = std::fs::read_to_string(&schema.path)
            .map_err(|e| ParseError::new(&schema.path, e))?;
        let model =
            self.parse_model(schema, &contents).map_err(|kind| ParseError::new(&schema.path, kind))?;

        let issues = ModelValidator::new().validate(&model);
        if !issues.is_empty() {
            return Err(ParseError::new(&schema.path, ParseErrorKind::Validation(issues)));
        }

        tracing::debug!("loaded {}\n{}", schema.relative_path.display(), model.describe());
        Ok(model)
    }
}
