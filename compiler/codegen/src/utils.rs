// codegen/src/utils.rs

use std::path::Path;

/// Accessor name for `property` with the given prefix
///
/// # Examples
/// ```
/// use modelgen_codegen::utils::accessor_name;
/// assert_eq!(accessor_name("get", "name"), "getName");
/// assert_eq!(accessor_name("set", "zipCode"), "setZipCode");
/// assert_eq!(accessor_name("get", "_id"), "get_id");
/// ```
pub fn accessor_name(prefix: &str, property: &str) -> String {
    format!("{}{}", prefix, analysis::identifiers::accessor_stem(property))
}

/// Convert camelCase or PascalCase to lowerCamelCase method names
pub fn lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Convert snake_case to lowerCamelCase
///
/// # Examples
/// ```
/// use modelgen_codegen::utils::snake_to_camel_case;
/// assert_eq!(snake_to_camel_case("sum_of_ten"), "sumOfTen");
/// assert_eq!(snake_to_camel_case("plain"), "plain");
/// ```
pub fn snake_to_camel_case(s: &str) -> String {
    let pascal: String = s
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect();
    lower_camel_case(&pascal)
}

/// Render a relative path with `/` separators on every platform
pub fn portable_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_name_keeps_rest_of_name() {
        assert_eq!(accessor_name("get", "active"), "getActive");
        assert_eq!(accessor_name("set", "URL"), "setURL");
        assert_eq!(accessor_name("get", "$raw"), "get$raw");
    }

    #[test]
    fn test_portable_path() {
        let path: std::path::PathBuf = ["billing", "eu", "invoice.yaml"].iter().collect();
        assert_eq!(portable_path(&path), "billing/eu/invoice.yaml");
    }
}
