//! Modelgen model definitions
//!
//! [`SchemaFile`] describes a schema document found on disk, [`Model`] is the parsed,
//! immutable description of one generatable type and [`Property`] is one of its fields.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// File extensions recognized as schema documents
pub const SCHEMA_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// A schema document located under a discovery root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaFile {
    /// Absolute path of the document
    pub path: PathBuf,
    /// Path of the document relative to the discovery root
    pub relative_path: PathBuf,
}

impl SchemaFile {
    /// Create a schema file from its absolute path and the discovery root
    ///
    /// Paths outside `root` keep their full path as the relative path, which places the
    /// model at the root namespace.
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let relative_path = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| {
            path.file_name().map(PathBuf::from).unwrap_or_else(|| path.clone())
        });
        Self { path, relative_path }
    }

    /// Base name of the document (e.g. `person.yaml`)
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Directory components between the discovery root and the document
    pub fn relative_dir(&self) -> Vec<String> {
        self.relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|c| match c {
                        std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the document carries one of the recognized schema extensions
    pub fn has_schema_extension(&self) -> bool { has_schema_extension(&self.path, SCHEMA_EXTENSIONS) }
}

/// Check a path's extension against an allow-list, ignoring ASCII case
pub fn has_schema_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

/// One named, typed field of a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property type
    pub ty: TypeRef,
    /// Optional description, emitted as documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    /// Create a property without a description
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self { name: name.into(), ty, description: None }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Canonical description of one generatable type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    properties: Vec<Property>,
    namespace: Vec<String>,
    source: PathBuf,
}

impl Model {
    /// Create a model at the root namespace
    pub fn new(type_name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
            properties,
            namespace: Vec::new(),
            source: PathBuf::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Place the model in a sub-namespace
    pub fn with_namespace(mut self, namespace: Vec<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Record the schema document the model was loaded from, relative to the root
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Type name
    pub fn type_name(&self) -> &str { &self.type_name }

    /// Description, if the schema gave one
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// Properties in declaration order
    pub fn properties(&self) -> &[Property] { &self.properties }

    /// Sub-namespace segments derived from the schema's directory
    pub fn namespace(&self) -> &[String] { &self.namespace }

    /// Schema document path relative to the discovery root
    pub fn source(&self) -> &Path { &self.source }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of every model referenced by this model's properties, in property order
    pub fn referenced_models(&self) -> Vec<&str> {
        self.properties.iter().filter_map(|p| p.ty.referenced_model()).collect()
    }

    /// Multi-line structural dump used for diagnostics
    ///
    /// ```
    /// use model::{Model, Property, TypeRef, PrimitiveType};
    /// let m = Model::new("Person", vec![Property::new("name", TypeRef::Primitive(PrimitiveType::String))]);
    /// assert_eq!(m.describe(), "Model Person\n  namespace: <root>\n  source: \n  properties:\n    name: string\n");
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let namespace =
            if self.namespace.is_empty() { "<root>".to_string() } else { self.namespace.join(".") };
        // Writing into a String cannot fail
        let _ = writeln!(out, "Model {}", self.type_name);
        if let Some(description) = &self.description {
            let _ = writeln!(out, "  description: {}", description);
        }
        let _ = writeln!(out, "  namespace: {}", namespace);
        let _ = writeln!(out, "  source: {}", self.source.display());
        if self.properties.is_empty() {
            let _ = writeln!(out, "  properties: <none>");
        } else {
            let _ = writeln!(out, "  properties:");
            for property in &self.properties {
                let _ = writeln!(out, "    {}: {}", property.name, property.ty);
            }
        }
        out
    }
}
