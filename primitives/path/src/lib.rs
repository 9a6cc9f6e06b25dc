// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for project roots, namespaces and generated file locations.
//!
//! This module maps schema directories to namespace segments and namespaces to the
//! nested directories generated sources are written to.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
