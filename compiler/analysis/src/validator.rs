//! Model Validation
//!
//! Checks a freshly loaded [`Model`] for well-formed identifiers, unique property
//! names and unique accessor names. Runs at load time so that malformed schemas never reach the emitter.

use std::collections::{HashMap, HashSet};

use model::Model;
use thiserror::Error;

use crate::identifiers::{accessor_stem, is_identifier, is_reserved_word};

/// A structural problem found in a single model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelValidationError {
    /// The model has no type name
    #[error("type name is empty")]
    EmptyTypeName,
    /// The type name is not an identifier
    #[error("type name `{0}` is not a valid identifier")]
    InvalidTypeName(String),
    /// A property name is not an identifier
    #[error("property name `{0}` is not a valid identifier")]
    InvalidPropertyName(String),
    /// A type or property name is a reserved word
    #[error("`{0}` is a reserved word")]
    ReservedWord(String),
    /// Two properties share a name
    #[error("duplicate property `{0}`")]
    DuplicateProperty(String),
    /// Two distinct properties would generate the same accessor methods
    #[error("properties `{earlier}` and `{property}` both generate `get{stem}`/`set{stem}`")]
    AccessorClash {
        /// Property declared first
        earlier: String,
        /// Property declared later
        property: String,
        /// Shared accessor stem
        stem: String,
    },
}

/// Model Validator
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelValidator;

impl ModelValidator {
    /// Create a new model validator
    pub fn new() -> Self { Self }

    /// Validate a model and return every problem found, in declaration order
    pub fn validate(&self, model: &Model) -> Vec<ModelValidationError> {
        let mut errors = Vec::new();

        let type_name = model.type_name();
        if type_name.trim().is_empty() {
            errors.push(ModelValidationError::EmptyTypeName);
        } else if !is_identifier(type_name) {
            errors.push(ModelValidationError::InvalidTypeName(type_name.to_string()));
        } else if is_reserved_word(type_name) {
            errors.push(ModelValidationError::ReservedWord(type_name.to_string()));
        }

        let mut seen = HashSet::new();
        let mut stems: HashMap<String, &str> = HashMap::new();
        for property in model.properties() {
            if !is_identifier(&property.name) {
                errors.push(ModelValidationError::InvalidPropertyName(property.name.clone()));
            } else if is_reserved_word(&property.name) {
                errors.push(ModelValidationError::ReservedWord(property.name.clone()));
            }
            if !seen.insert(property.name.as_str()) {
                errors.push(ModelValidationError::DuplicateProperty(property.name.clone()));
                continue;
            }
            let stem = accessor_stem(&property.name);
            if let Some(earlier) = stems.get(&stem) {
                errors.push(ModelValidationError::AccessorClash {
                    earlier: earlier.to_string(),
                    property: property.name.clone(),
                    stem,
                });
            } else {
                stems.insert(stem, &property.name);
            }
        }

        errors
    }
}
