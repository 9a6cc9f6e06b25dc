#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Schema Adapter Library
//!
//! This crate finds schema documents on disk and translates them into the canonical
//! [`model::Model`]. Discovery is format-agnostic and driven by an extension
//! allow-list; each schema format is an implementation of [`SchemaAdapter`].
//! Add a new format by implementing an adapter and passing it to the pipeline.

pub mod locator;
pub mod schema_adapter;
pub mod yaml;

// Re-export the main adapter types for convenience
pub use locator::{locate, DiscoveryError, DiscoveryWarning, Located};
pub use schema_adapter::*;
pub use yaml::YamlSchemaAdapter;
