//! YAML schema documents
//!
//! Reads documents of the form
//!
//! ```yaml
//! typeName: Person
//! description: Somebody we know.
//! properties:
//!   - name: name
//!     type: string
//!   - name: age
//!     type: int
//! ```
//!
//! `properties` may also be a mapping from property name to either a type string or a
//! `{ type, description }` table; document order is kept in both forms.

use model::{Model, Property, SchemaFile, TypeRef};
use serde::Deserialize;
use serde_yaml::Value;

use crate::schema_adapter::{ParseErrorKind, SchemaAdapter};

/// Extensions read by [`YamlSchemaAdapter`]
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawModel {
    #[serde(alias = "type_name", alias = "name")]
    type_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    properties: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProperty {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPropertyBody {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    description: Option<String>,
}

/// Schema adapter for YAML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSchemaAdapter;

impl YamlSchemaAdapter {
    /// Create a new YAML adapter
    pub fn new() -> Self { Self }
}

impl SchemaAdapter for YamlSchemaAdapter {
    fn name(&self) -> &'static str { "yaml" }

    fn extensions(&self) -> &'static [&'static str] { YAML_EXTENSIONS }

    fn parse_model(&self, schema: &SchemaFile, contents: &str) -> Result<Model, ParseErrorKind> {
        let raw: RawModel =
            serde_yaml::from_str(contents).map_err(|e| ParseErrorKind::Syntax(e.to_string()))?;

        let raw_properties = match raw.properties {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .into_iter()
                .map(|item| {
                    serde_yaml::from_value::<RawProperty>(item)
                        .map_err(|e| ParseErrorKind::Syntax(format!("property: {}", e)))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(Value::Mapping(entries)) => entries
                .into_iter()
                .map(|(key, body)| property_from_entry(key, body))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ParseErrorKind::Syntax(format!(
                    "`properties` must be a sequence or a mapping, found {}",
                    value_kind(&other)
                )));
            }
        };

        let mut properties = Vec::with_capacity(raw_properties.len());
        for raw_property in raw_properties {
            let ty = TypeRef::parse(&raw_property.ty).map_err(|source| {
                ParseErrorKind::InvalidType { property: raw_property.name.clone(), source }
            })?;
            properties.push(Property {
                name: raw_property.name,
                ty,
                description: raw_property.description,
            });
        }

        Ok(Model::new(raw.type_name, properties)
            .with_description(raw.description)
            .with_namespace(path::namespace_for(&schema.relative_dir()))
            .with_source(schema.relative_path.clone()))
    }
}

fn property_from_entry(key: Value, body: Value) -> Result<RawProperty, ParseErrorKind> {
    let name = match key {
        Value::String(name) => name,
        other => {
            return Err(ParseErrorKind::Syntax(format!(
                "property names must be strings, found {}",
                value_kind(&other)
            )));
        }
    };

    match body {
        Value::String(ty) => Ok(RawProperty { name, ty, description: None }),
        table @ Value::Mapping(_) => {
            let body: RawPropertyBody = serde_yaml::from_value(table)
                .map_err(|e| ParseErrorKind::Syntax(format!("property `{}`: {}", name, e)))?;
            Ok(RawProperty { name, ty: body.ty, description: body.description })
        }
        other => Err(ParseErrorKind::Syntax(format!(
            "property `{}` must map to a type string or a table, found {}",
            name,
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use model::PrimitiveType;

    use super::*;

    fn schema(relative: &str) -> SchemaFile {
        let root = Path::new("/schemas");
        SchemaFile::new(root.join(relative), root)
    }

    fn parse(relative: &str, contents: &str) -> Result<Model, ParseErrorKind> {
        YamlSchemaAdapter::new().parse_model(&schema(relative), contents)
    }

    #[test]
    fn test_sequence_form() {
        let model = parse(
            "person.yaml",
            "typeName: Person\nproperties:\n  - name: name\n    type: string\n  - name: age\n    type: int\n",
        )
        .expect("valid schema");

        assert_eq!(model.type_name(), "Person");
        let names: Vec<&str> = model.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(model.properties()[1].ty, TypeRef::Primitive(PrimitiveType::Int));
        assert!(model.namespace().is_empty());
        assert_eq!(model.source(), Path::new("person.yaml"));
    }

    #[test]
    fn test_mapping_form_keeps_document_order() {
        let model = parse(
            "hr/Staff Records/employee.yml",
            "type_name: Employee\nproperties:\n  zeta: string\n  alpha:\n    type: list<string>\n    description: Nicknames\n  mid: boolean\n",
        )
        .expect("valid schema");

        let names: Vec<&str> = model.properties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(model.properties()[1].description.as_deref(), Some("Nicknames"));
        assert_eq!(model.namespace(), &["hr".to_string(), "staff_records".to_string()]);
        assert_eq!(model.source(), PathBuf::from("hr/Staff Records/employee.yml"));
    }

    #[test]
    fn test_missing_properties_is_empty_model() {
        let model = parse("marker.yaml", "typeName: Marker\n").expect("valid schema");
        assert!(model.properties().is_empty());
    }

    #[test]
    fn test_rejects_malformed_documents() {
        assert!(matches!(parse("a.yaml", "properties: []\n"), Err(ParseErrorKind::Syntax(_))));
        assert!(matches!(
            parse("a.yaml", "typeName: A\ncolour: blue\n"),
            Err(ParseErrorKind::Syntax(_))
        ));
        assert!(matches!(
            parse("a.yaml", "typeName: A\nproperties: 3\n"),
            Err(ParseErrorKind::Syntax(msg)) if msg.contains("a number")
        ));
        assert!(matches!(
            parse("a.yaml", "typeName: A\nproperties:\n  x: list<int\n"),
            Err(ParseErrorKind::InvalidType { property, .. }) if property == "x"
        ));
    }
}
