//! This module contains the code generators for schema models.
//!
//! The generators are responsible for rendering one source document per model.

/// Sub-crate generates: **`doc_comment`**
///
/// Produces Javadoc blocks from model and property descriptions.
pub mod doc_comment;

/// Fixed methods that can be appended to every generated type
pub mod boilerplate;

/// JavaBean class generator
pub mod java_bean;
pub use java_bean::JavaBeanGenerator;
