//! Fixed methods appended to generated types.
//!
//! A boilerplate method takes no model data: it renders the same body into every
//! generated type. Methods are enabled per run by name.

use crate::utils::snake_to_camel_case;

/// A fixed method rendered into every generated type
pub trait BoilerplateMethod: std::fmt::Debug + Send + Sync {
    /// Configuration name (snake_case)
    fn name(&self) -> &'static str;

    /// Render the method at one level of indentation, ending with a newline
    fn render(&self) -> String;
}

/// `int sumOfTen()`: returns the sum of 0 through 10
#[derive(Debug, Default, Clone, Copy)]
pub struct SumOfTen;

impl BoilerplateMethod for SumOfTen {
    fn name(&self) -> &'static str { "sum_of_ten" }

    fn render(&self) -> String {
        format!(
            "    public int {}() {{\n        int sum = 0;\n        for (int i = 0; i <= 10; i++) {{\n            sum += i;\n        }}\n        return sum;\n    }}\n",
            snake_to_camel_case(self.name())
        )
    }
}

static SUM_OF_TEN: SumOfTen = SumOfTen;

static REGISTRY: &[&'static dyn BoilerplateMethod] = &[&SUM_OF_TEN];

/// Look up a boilerplate method by its configuration name
pub fn lookup(name: &str) -> Option<&'static dyn BoilerplateMethod> {
    REGISTRY.iter().copied().find(|m| m.name() == name)
}

/// Names of every known boilerplate method
pub fn available() -> Vec<&'static str> { REGISTRY.iter().map(|m| m.name()).collect() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("sum_of_ten").map(|m| m.name()), Some("sum_of_ten"));
        assert!(lookup("sumOfTen").is_none());
        assert!(lookup("").is_none());
        assert_eq!(available(), vec!["sum_of_ten"]);
    }

    #[test]
    fn test_sum_of_ten_renders_loop() {
        let body = SumOfTen.render();
        assert!(body.starts_with("    public int sumOfTen() {\n"));
        assert!(body.contains("for (int i = 0; i <= 10; i++)"));
        assert!(body.ends_with("    }\n"));
    }
}
