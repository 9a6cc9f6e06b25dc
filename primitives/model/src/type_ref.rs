//! Property type references
//!
//! A property's type is written as a short string in the schema document
//! (`string`, `int`, `list<Address>`, `Address`). [`TypeRef::parse`] turns that string
//! into a structured reference; names that are not primitive keywords are kept as
//! references to other models and resolved later against the whole run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primitive schema types understood by every backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Text
    String,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Boolean flag
    Boolean,
    /// Arbitrary-precision decimal
    Decimal,
    /// Calendar date without time
    Date,
    /// Date and time with offset
    DateTime,
    /// Raw bytes
    Bytes,
}

impl PrimitiveType {
    /// All primitives, in keyword order
    pub const ALL: [PrimitiveType; 10] = [
        PrimitiveType::String,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Boolean,
        PrimitiveType::Decimal,
        PrimitiveType::Date,
        PrimitiveType::DateTime,
        PrimitiveType::Bytes,
    ];

    /// Look up a primitive by its schema keyword, accepting the usual aliases
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let primitive = match keyword {
            "string" | "str" | "text" => PrimitiveType::String,
            "int" | "integer" | "int32" => PrimitiveType::Int,
            "long" | "int64" => PrimitiveType::Long,
            "float" | "float32" => PrimitiveType::Float,
            "double" | "number" | "float64" => PrimitiveType::Double,
            "boolean" | "bool" => PrimitiveType::Boolean,
            "decimal" => PrimitiveType::Decimal,
            "date" => PrimitiveType::Date,
            "datetime" | "timestamp" => PrimitiveType::DateTime,
            "bytes" | "binary" => PrimitiveType::Bytes,
            _ => return None,
        };
        Some(primitive)
    }

    /// Canonical schema keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Date => "date",
            PrimitiveType::DateTime => "datetime",
            PrimitiveType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.keyword()) }
}

/// Reference to the type of a property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A primitive type
    Primitive(PrimitiveType),
    /// Another model, by its `type_name`
    Model(String),
    /// Ordered collection of the inner type
    List(Box<TypeRef>),
}

/// Errors produced while parsing a type string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    /// The type string was empty
    #[error("type is empty")]
    Empty,
    /// `list<` without a matching `>` or with no element type
    #[error("malformed list type `{0}`")]
    MalformedList(String),
    /// The type name contains characters that cannot form an identifier
    #[error("`{0}` is not a valid type name")]
    InvalidName(String),
}

impl TypeRef {
    /// Parse a schema type string
    pub fn parse(raw: &str) -> Result<Self, TypeParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TypeParseError::Empty);
        }

        if let Some(rest) = strip_prefix_ignore_case(raw, "list<") {
            let inner = rest
                .strip_suffix('>')
                .filter(|inner| !inner.trim().is_empty())
                .ok_or_else(|| TypeParseError::MalformedList(raw.to_string()))?;
            return Ok(TypeRef::List(Box::new(TypeRef::parse(inner)?)));
        }

        if let Some(primitive) = PrimitiveType::from_keyword(raw) {
            return Ok(TypeRef::Primitive(primitive));
        }

        let valid = raw.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
            && raw.chars().all(|c| c.is_alphanumeric() || c == '_');
        if !valid {
            return Err(TypeParseError::InvalidName(raw.to_string()));
        }
        Ok(TypeRef::Model(raw.to_string()))
    }

    /// Name of the model this reference ultimately points at, if any
    pub fn referenced_model(&self) -> Option<&str> {
        match self {
            TypeRef::Primitive(_) => None,
            TypeRef::Model(name) => Some(name),
            TypeRef::List(inner) => inner.referenced_model(),
        }
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { TypeRef::parse(s) }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => write!(f, "{}", p),
            TypeRef::Model(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "list<{}>", inner),
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.is_char_boundary(prefix.len()) {
        let (head, tail) = s.split_at(prefix.len());
        if head.eq_ignore_ascii_case(prefix) {
            return Some(tail);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives_and_aliases() {
        assert_eq!(TypeRef::parse("string"), Ok(TypeRef::Primitive(PrimitiveType::String)));
        assert_eq!(TypeRef::parse("integer"), Ok(TypeRef::Primitive(PrimitiveType::Int)));
        assert_eq!(TypeRef::parse(" number "), Ok(TypeRef::Primitive(PrimitiveType::Double)));
        assert_eq!(TypeRef::parse("bool"), Ok(TypeRef::Primitive(PrimitiveType::Boolean)));
    }

    #[test]
    fn test_parse_lists_and_models() {
        assert_eq!(
            TypeRef::parse("list<Address>"),
            Ok(TypeRef::List(Box::new(TypeRef::Model("Address".to_string()))))
        );
        assert_eq!(
            TypeRef::parse("List<list<int>>"),
            Ok(TypeRef::List(Box::new(TypeRef::List(Box::new(TypeRef::Primitive(
                PrimitiveType::Int
            ))))))
        );
        assert_eq!(
            TypeRef::parse("list<Address>").expect("valid list").referenced_model(),
            Some("Address")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TypeRef::parse("  "), Err(TypeParseError::Empty));
        assert!(matches!(TypeRef::parse("list<int"), Err(TypeParseError::MalformedList(_))));
        assert!(matches!(TypeRef::parse("list<>"), Err(TypeParseError::MalformedList(_))));
        assert!(matches!(TypeRef::parse("map[int]"), Err(TypeParseError::InvalidName(_))));
        assert!(matches!(TypeRef::parse("9lives"), Err(TypeParseError::InvalidName(_))));
    }

    #[test]
    fn test_display_uses_canonical_keywords() {
        let ty = TypeRef::parse("list<integer>").expect("valid list");
        assert_eq!(ty.to_string(), "list<int>");
        assert_eq!(PrimitiveType::DateTime.to_string(), "datetime");
    }
}
