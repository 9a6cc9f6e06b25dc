#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Modelgen Configuration
//!
//! This crate provides configuration management for modelgen.
//! It handles loading, saving, and managing configuration files that specify:
//! - Logging configuration
//! - Code generation parameters (schema location, output location, base package)
//!
//! Configuration is stored in TOML format and can be loaded from files or created
//! with sensible defaults for development and testing. A project-local
//! `modelgen.toml` is preferred over the per-user file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory below the build output that receives generated sources
pub const GENERATED_SOURCES_DIR: &str = "generated-sources";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
    /// A configuration value is not acceptable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string() } }
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Resource directory holding the model directory
    pub resource_dir: PathBuf,
    /// Directory below `resource_dir` that is searched for schema documents
    pub model_directory: PathBuf,
    /// Package every generated type is placed under
    pub base_package: String,
    /// Where to write generated sources; derived from the build directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Build directory used when neither `output_dir` nor `OUT_DIR` is set
    pub build_dir: PathBuf,
    /// Worker threads for loading and writing (0 = available cores)
    pub jobs: usize,
    /// Mirror every generated unit to stdout
    pub echo: bool,
    /// Boilerplate methods appended to every generated type
    pub boilerplate: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from("resources"),
            model_directory: PathBuf::from("model"),
            base_package: "com.example.model".to_string(),
            output_dir: None,
            build_dir: PathBuf::from("target"),
            jobs: 0,
            echo: false,
            boilerplate: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/modelgen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("modelgen");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration a run should use
    ///
    /// An explicit path must exist. Otherwise the project-local `modelgen.toml` (found by
    /// walking up from the current directory) is used, then the per-user file, and
    /// finally the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        let project_file = std::env::current_dir()
            .ok()
            .and_then(|cwd| path::find_project_root_from(&cwd))
            .map(|root| root.join(path::PROJECT_CONFIG_FILE))
            .filter(|file| file.is_file());
        if let Some(file) = project_file {
            return Self::from_file(file);
        }

        match Self::default_path() {
            Ok(file) if file.is_file() => Self::from_file(file),
            _ => Ok(Self::default()),
        }
    }

    /// Directory searched for schema documents: `resource_dir/model_directory`
    pub fn schema_root(&self) -> PathBuf {
        self.codegen.resource_dir.join(&self.codegen.model_directory)
    }

    /// Directory generated sources are written to
    ///
    /// The configured `output_dir` when set, else `$OUT_DIR/generated-sources`, else
    /// `<build_dir>/generated-sources`.
    pub fn output_dir(&self) -> PathBuf {
        match &self.codegen.output_dir {
            Some(dir) => dir.clone(),
            None => Self::default_output_dir_internal(
                std::env::var("OUT_DIR").ok(),
                &self.codegen.build_dir,
            ),
        }
    }

    /// Internal function for testing - allows injection of environment values
    fn default_output_dir_internal(out_dir: Option<String>, build_dir: &Path) -> PathBuf {
        match out_dir.filter(|dir| !dir.is_empty()) {
            Some(out_dir) => PathBuf::from(out_dir).join(GENERATED_SOURCES_DIR),
            None => build_dir.join(GENERATED_SOURCES_DIR),
        }
    }
}
