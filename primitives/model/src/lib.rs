#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Modelgen canonical model
//!
//! This crate defines the in-memory representation every schema document is parsed into.
//! The model is language-agnostic: it names a type, lists its properties in declaration
//! order and records where on disk it came from. Backends in `modelgen-codegen` translate
//! it into source code.

pub mod schema_model;
pub mod type_ref;

// Re-export the model types for convenience
pub use schema_model::*;
pub use type_ref::*;
