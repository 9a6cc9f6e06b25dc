//! Identifier rules for the generated language
//!
//! Generated sources are JavaBeans, so type, property and package names must be legal
//! Java identifiers and must not collide with a reserved word.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is a valid regex")
});

/// Java keywords and literals that cannot be used as identifiers
pub const RESERVED_WORDS: &[&str] = &[
    "_",
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Whether `name` has the lexical shape of an identifier
pub fn is_identifier(name: &str) -> bool { IDENTIFIER.is_match(name) }

/// Whether `name` is a reserved word
pub fn is_reserved_word(name: &str) -> bool { RESERVED_WORDS.contains(&name) }

/// Whether `name` can be used as-is for a generated declaration
pub fn is_valid_identifier(name: &str) -> bool { is_identifier(name) && !is_reserved_word(name) }

/// Name stem shared by a property's `get`/`set` accessors
///
/// ```
/// use modelgen_analysis::identifiers::accessor_stem;
/// assert_eq!(accessor_stem("firstName"), "FirstName");
/// assert_eq!(accessor_stem("FirstName"), "FirstName");
/// ```
pub fn accessor_stem(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Whether `package` is a dot-separated list of valid identifiers
///
/// The empty package (default package) is accepted.
pub fn is_valid_package(package: &str) -> bool {
    package.is_empty() || package.split('.').all(is_valid_identifier)
}
