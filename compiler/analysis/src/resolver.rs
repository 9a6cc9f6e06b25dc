//! Run-wide type resolution
//!
//! Every model of a run is indexed by its type name. Property types that reference
//! another model are resolved against the index; a reference is ambiguous when more than
//! one namespace defines the name and none of them is the referencing model's own.

use std::collections::BTreeMap;
use std::path::PathBuf;

use model::Model;
use thiserror::Error;

/// Fully-qualified location of a model
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    /// Namespace segments below the base package
    pub namespace: Vec<String>,
    /// Type name
    pub type_name: String,
}

impl QualifiedName {
    /// Qualified name of a model
    pub fn of(model: &Model) -> Self {
        Self { namespace: model.namespace().to_vec(), type_name: model.type_name().to_string() }
    }

    /// Dotted package: `base` followed by the namespace segments
    pub fn package(&self, base: &str) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.namespace.len() + 1);
        if !base.is_empty() {
            parts.push(base);
        }
        parts.extend(self.namespace.iter().map(String::as_str));
        parts.join(".")
    }
}

/// Why a reference could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No model in the run has this name
    Unknown,
    /// Several namespaces define this name
    Ambiguous(Vec<QualifiedName>),
}

/// A property references a type the run cannot resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: property `{property}` of `{model}` references {}", .schema.display(), describe_failure(.reference, .failure))]
pub struct TypeResolutionError {
    /// Schema document of the referencing model
    pub schema: PathBuf,
    /// Referencing model
    pub model: String,
    /// Property whose type failed to resolve
    pub property: String,
    /// Referenced type name
    pub reference: String,
    /// Failure kind
    pub failure: ResolutionFailure,
}

fn describe_failure(reference: &str, failure: &ResolutionFailure) -> String {
    match failure {
        ResolutionFailure::Unknown => format!("unknown type `{}`", reference),
        ResolutionFailure::Ambiguous(candidates) => {
            let names = candidates
                .iter()
                .map(|c| {
                    if c.namespace.is_empty() {
                        c.type_name.clone()
                    } else {
                        format!("{}.{}", c.namespace.join("."), c.type_name)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("ambiguous type `{}` (candidates: {})", reference, names)
        }
    }
}

/// Index of every model in a run, keyed by type name
#[derive(Debug, Default, Clone)]
pub struct ModelIndex {
    by_name: BTreeMap<String, Vec<QualifiedName>>,
}

impl ModelIndex {
    /// Build an index over a set of models
    pub fn build<'a>(models: impl IntoIterator<Item = &'a Model>) -> Self {
        let mut by_name: BTreeMap<String, Vec<QualifiedName>> = BTreeMap::new();
        for model in models {
            let entry = by_name.entry(model.type_name().to_string()).or_default();
            let qualified = QualifiedName::of(model);
            if !entry.contains(&qualified) {
                entry.push(qualified);
            }
        }
        for candidates in by_name.values_mut() {
            candidates.sort();
        }
        Self { by_name }
    }

    /// Number of distinct type names
    pub fn len(&self) -> usize { self.by_name.len() }

    /// Whether the index holds no models
    pub fn is_empty(&self) -> bool { self.by_name.is_empty() }

    /// Resolve `name` as seen from a model living in `from_namespace`
    pub fn resolve(
        &self,
        name: &str,
        from_namespace: &[String],
    ) -> Result<&QualifiedName, ResolutionFailure> {
        let candidates = self.by_name.get(name).ok_or(ResolutionFailure::Unknown)?;
        match candidates.as_slice() {
            [] => Err(ResolutionFailure::Unknown),
            [only] => Ok(only),
            many => many
                .iter()
                .find(|c| c.namespace == from_namespace)
                .ok_or_else(|| ResolutionFailure::Ambiguous(many.to_vec())),
        }
    }

    /// Check every model reference of `model`, stopping at the first failure
    pub fn check_references(&self, model: &Model) -> Result<(), TypeResolutionError> {
        for property in model.properties() {
            if let Some(reference) = property.ty.referenced_model() {
                self.resolve(reference, model.namespace()).map_err(|failure| {
                    TypeResolutionError {
                        schema: model.source().to_path_buf(),
                        model: model.type_name().to_string(),
                        property: property.name.clone(),
                        reference: reference.to_string(),
                        failure,
                    }
                })?;
            }
        }
        Ok(())
    }
}
