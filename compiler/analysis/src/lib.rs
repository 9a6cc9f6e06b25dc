#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Modelgen Model Analysis
//!
//! This crate provides the checks that run between loading and emission:
//! identifier rules, per-model validation, run-wide type resolution and output
//! collision detection.

pub mod collisions;
pub mod identifiers;
pub mod resolver;
pub mod validator;

// Re-export analysis types
pub use collisions::{detect_collisions, CollisionError};
pub use resolver::{ModelIndex, QualifiedName, ResolutionFailure, TypeResolutionError};
pub use validator::{ModelValidationError, ModelValidator};
