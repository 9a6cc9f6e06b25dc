// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for project roots, namespaces and generated file locations.
//!
//! Schema directories become namespace segments, namespaces become nested output
//! directories. Both directions go through the same sanitization so a schema tree and
//! the generated tree always mirror each other.

use std::path::{Path, PathBuf};

use analysis::identifiers::{is_identifier, is_reserved_word};

/// Name of the project-local configuration file
pub const PROJECT_CONFIG_FILE: &str = "modelgen.toml";

/// Find the project root by walking up from the current directory
///
/// The root is the first directory containing either a `modelgen.toml` or a
/// `Cargo.toml` with a `[workspace]` table.
///
/// # Returns
///
/// Returns `Result<PathBuf>` containing the path to the project root directory.
/// Returns an error if no such directory exists.
pub fn find_project_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let current = std::env::current_dir()?;
    find_project_root_from(&current)
        .ok_or_else(|| "Could not find project root (no modelgen.toml or workspace Cargo.toml found)".into())
}

/// Walk up from `start` looking for a project root marker
pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_CONFIG_FILE).is_file() {
            return Some(current);
        }
        let cargo_toml = current.join("Cargo.toml");
        if let Ok(contents) = std::fs::read_to_string(&cargo_toml) {
            if contents.contains("[workspace]") {
                return Some(current);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Sanitize a directory name into a package segment
///
/// Lowercases, replaces characters that cannot appear in an identifier with `_`,
/// prefixes a leading digit with `_` and suffixes reserved words with `_`.
///
/// # Examples
///
/// ```
/// use modelgen_path::sanitize_package_segment;
/// assert_eq!(sanitize_package_segment("Billing"), "billing");
/// assert_eq!(sanitize_package_segment("line-items"), "line_items");
/// assert_eq!(sanitize_package_segment("2024"), "_2024");
/// assert_eq!(sanitize_package_segment("new"), "new_");
/// ```
pub fn sanitize_package_segment(name: &str) -> String {
    let mut segment: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();

    if segment.is_empty() || !is_identifier(&segment) {
        segment.insert(0, '_');
    }
    if is_reserved_word(&segment) {
        segment.push('_');
    }
    segment
}

/// Namespace segments for a schema found under `relative_dir`
pub fn namespace_for(relative_dir: &[String]) -> Vec<String> {
    relative_dir.iter().map(|d| sanitize_package_segment(d)).collect()
}

/// Join a base package and namespace segments into a dotted package name
pub fn qualified_package(base: &str, namespace: &[String]) -> String {
    std::iter::once(base)
        .filter(|b| !b.is_empty())
        .chain(namespace.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(".")
}

/// Directory (relative to the output root) that holds the sources of `package`
pub fn package_dir(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// Output path (relative to the output root) of a generated type
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use modelgen_path::unit_relative_path;
/// assert_eq!(
///     unit_relative_path("com.example.model", "Person", "java"),
///     PathBuf::from("com/example/model/Person.java")
/// );
/// ```
pub fn unit_relative_path(package: &str, type_name: &str, extension: &str) -> PathBuf {
    package_dir(package).join(format!("{}.{}", type_name, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_for() {
        let dirs = vec!["Sales".to_string(), "eu-west".to_string()];
        assert_eq!(namespace_for(&dirs), vec!["sales".to_string(), "eu_west".to_string()]);
        assert!(namespace_for(&[]).is_empty());
    }

    #[test]
    fn test_qualified_package() {
        assert_eq!(qualified_package("com.example", &["hr".to_string()]), "com.example.hr");
        assert_eq!(qualified_package("com.example", &[]), "com.example");
        assert_eq!(qualified_package("", &["hr".to_string()]), "hr");
        assert_eq!(qualified_package("", &[]), "");
    }

    #[test]
    fn test_package_dir() {
        assert_eq!(package_dir("com.example.hr"), PathBuf::from("com/example/hr"));
        assert_eq!(package_dir(""), PathBuf::new());
        assert_eq!(unit_relative_path("", "Person", "java"), PathBuf::from("Person.java"));
    }

    #[test]
    fn test_find_project_root_from() {
        let temp = tempfile::tempdir().expect("Failed to create temporary directory");
        let nested = temp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).expect("Failed to create nested directories");
        std::fs::write(temp.path().join("a").join(PROJECT_CONFIG_FILE), "")
            .expect("Failed to write marker file");

        assert_eq!(find_project_root_from(&nested), Some(temp.path().join("a")));
    }
}
