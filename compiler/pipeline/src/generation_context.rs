//! Generation settings for one pipeline run.
//!
//! Settings are resolved once, from the configuration file plus any overrides, and are
//! read-only for the rest of the run.

use std::path::PathBuf;

use analysis::identifiers::is_valid_package;
use codegen::EmitOptions;
use config::{Config, ConfigError};

use crate::worker_pool::effective_jobs;
use crate::PipelineError;

/// Resolved settings for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Directory searched for schema documents
    pub schema_root: PathBuf,
    /// Directory generated sources are written under
    pub output_dir: PathBuf,
    /// Package every generated type lives under
    pub base_package: String,
    /// Worker threads for the per-file stages (at least 1)
    pub jobs: usize,
    /// Mirror generated units to stdout
    pub echo: bool,
    /// Boilerplate methods appended to every generated type
    pub boilerplate: Vec<String>,
}

impl GenerationSettings {
    /// Create a new builder for GenerationSettings
    pub fn builder() -> GenerationSettingsBuilder { GenerationSettingsBuilder::default() }

    /// A builder pre-filled from `config`
    pub fn from_config(config: &Config) -> GenerationSettingsBuilder {
        Self::builder()
            .schema_root(config.schema_root())
            .output_dir(config.output_dir())
            .base_package(config.codegen.base_package.clone())
            .jobs(config.codegen.jobs)
            .echo(config.codegen.echo)
            .boilerplate(config.codegen.boilerplate.clone())
    }

    /// Emission options for these settings
    pub fn emit_options(&self) -> Result<EmitOptions, PipelineError> {
        Ok(EmitOptions::new(self.base_package.clone()).with_boilerplate(&self.boilerplate)?)
    }
}

#[derive(Debug, Default)]
/// Builder for GenerationSettings
pub struct GenerationSettingsBuilder {
    schema_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    base_package: Option<String>,
    jobs: Option<usize>,
    echo: bool,
    boilerplate: Vec<String>,
}

impl GenerationSettingsBuilder {
    /// Set the schema root
    pub fn schema_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_root = Some(dir.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the base package
    pub fn base_package(mut self, package: impl Into<String>) -> Self {
        self.base_package = Some(package.into());
        self
    }

    /// Set the worker count (0 = available cores)
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Mirror generated units to stdout
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Set the boilerplate methods
    pub fn boilerplate(mut self, names: Vec<String>) -> Self {
        self.boilerplate = names;
        self
    }

    /// Build the GenerationSettings
    pub fn build(self) -> Result<GenerationSettings, PipelineError> {
        let base_package = self.base_package.unwrap_or_default();
        if !is_valid_package(&base_package) {
            return Err(ConfigError::Invalid(format!(
                "base package `{}` is not a dot-separated list of identifiers",
                base_package
            ))
            .into());
        }

        let settings = GenerationSettings {
            schema_root: self
                .schema_root
                .ok_or_else(|| PipelineError::Message("schema_root is required".to_string()))?,
            output_dir: self
                .output_dir
                .ok_or_else(|| PipelineError::Message("output_dir is required".to_string()))?,
            base_package,
            jobs: effective_jobs(self.jobs.unwrap_or(0)),
            echo: self.echo,
            boilerplate: self.boilerplate,
        };
        settings.emit_options()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.codegen.output_dir = Some(PathBuf::from("out"));
        config.codegen.jobs = 3;
        let settings =
            GenerationSettings::from_config(&config).build().expect("default config is valid");
        assert_eq!(settings.schema_root, Path::new("resources/model"));
        assert_eq!(settings.output_dir, Path::new("out"));
        assert_eq!(settings.base_package, "com.example.model");
        assert_eq!(settings.jobs, 3);
        assert!(!settings.echo);
    }

    #[test]
    fn test_overrides_apply_after_config() {
        let settings = GenerationSettings::from_config(&Config::default())
            .output_dir("elsewhere")
            .base_package("org.acme")
            .jobs(0)
            .build()
            .expect("valid settings");
        assert_eq!(settings.output_dir, Path::new("elsewhere"));
        assert_eq!(settings.base_package, "org.acme");
        assert!(settings.jobs >= 1);
    }

    #[test]
    fn test_invalid_base_package() {
        for bad in ["com..example", "com.2fast", "com.class", "com.example."] {
            let result =
                GenerationSettings::builder().schema_root("s").output_dir("o").base_package(bad).build();
            assert!(
                matches!(result, Err(PipelineError::Config(ConfigError::Invalid(_)))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_unknown_boilerplate_is_a_config_error() {
        let result = GenerationSettings::builder()
            .schema_root("s")
            .output_dir("o")
            .boilerplate(vec!["sum_of_ten".to_string(), "nope".to_string()])
            .build();
        assert!(matches!(result, Err(PipelineError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_missing_directories() {
        let result = GenerationSettings::builder().output_dir("o").build();
        assert!(matches!(result, Err(PipelineError::Message(msg)) if msg.contains("schema_root")));
    }
}
