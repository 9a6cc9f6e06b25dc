#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the modelgen CLI.
//!
//! Each subcommand is a function returning whether the run was clean; the binary turns
//! that into the process exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use adapters::YamlSchemaAdapter;
use config::Config;
use pipeline::{
    load_models, CancellationToken, FileError, GenerationSettings, NoopRegistrar, RunReport,
};
use thiserror::Error;

/// Errors that stop a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pipeline aborted.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// The configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// Models could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// I/O error while printing or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The Ctrl-C handler could not be installed.
    #[cfg(feature = "signals")]
    #[error(transparent)]
    CtrlC(#[from] ctrlc::Error),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Default, Clone)]
pub struct GenerateOverrides {
    /// Schema root
    pub schema_root: Option<PathBuf>,
    /// Output directory
    pub output: Option<PathBuf>,
    /// Base package
    pub base_package: Option<String>,
    /// Worker threads
    pub jobs: Option<usize>,
    /// Mirror generated units to stdout
    pub echo: bool,
    /// Boilerplate methods; replaces the configured list when not empty
    pub boilerplate: Vec<String>,
}

/// Resolve run settings from `config` and command-line overrides
pub fn resolve_settings(
    config: &Config,
    overrides: GenerateOverrides,
) -> Result<GenerationSettings> {
    let mut builder = GenerationSettings::from_config(config);
    if let Some(dir) = overrides.schema_root {
        builder = builder.schema_root(dir);
    }
    if let Some(dir) = overrides.output {
        builder = builder.output_dir(dir);
    }
    if let Some(package) = overrides.base_package {
        builder = builder.base_package(package);
    }
    if let Some(jobs) = overrides.jobs {
        builder = builder.jobs(jobs);
    }
    if overrides.echo {
        builder = builder.echo(true);
    }
    if !overrides.boilerplate.is_empty() {
        builder = builder.boilerplate(overrides.boilerplate);
    }
    Ok(builder.build()?)
}

/// A cancellation token set by Ctrl-C
pub fn interrupt_token() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    #[cfg(feature = "signals")]
    {
        let flag = token.flag();
        ctrlc::set_handler(move || {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        })?;
    }
    Ok(token)
}

/// Print the summary line to `out` and every problem to `err`
pub fn print_report<O: Write, E: Write>(
    report: &RunReport,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    writeln!(out, "{}", report)?;
    for warning in &report.warnings {
        writeln!(err, "warning: {}", warning)?;
    }
    print_errors(&report.errors, err)
}

fn print_errors<E: Write>(errors: &[FileError], err: &mut E) -> Result<()> {
    for error in errors {
        writeln!(err, "error[{}]: {}", error.kind(), error)?;
    }
    Ok(())
}

/// `modelgen generate`
pub fn generate(config: &Config, overrides: GenerateOverrides) -> Result<bool> {
    let settings = resolve_settings(config, overrides)?;
    let cancel = interrupt_token()?;
    let report = pipeline::run(&settings, &YamlSchemaAdapter::new(), &NoopRegistrar, &cancel)?;
    print_report(&report, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;
    Ok(report.is_success())
}

/// `modelgen dump-models`
pub fn dump_models(config: &Config, schema_root: Option<PathBuf>, json: bool) -> Result<bool> {
    let schema_root = schema_root.unwrap_or_else(|| config.schema_root());
    let outcome = load_models(
        &schema_root,
        &YamlSchemaAdapter::new(),
        config.codegen.jobs,
        &CancellationToken::new(),
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        let models: Vec<&model::Model> = outcome.models.iter().map(|(_, m)| m).collect();
        serde_json::to_writer_pretty(&mut out, &models)?;
        writeln!(out)?;
    } else {
        for (_, model) in &outcome.models {
            write!(out, "{}", model.describe())?;
        }
    }

    let mut err = std::io::stderr().lock();
    for warning in &outcome.warnings {
        writeln!(err, "warning: {}", warning)?;
    }
    print_errors(&outcome.errors, &mut err)?;
    Ok(outcome.errors.is_empty())
}

/// `modelgen init-config`
///
/// Writes the default configuration to `path` (default `./modelgen.toml`). An existing
/// file is only replaced with `force`.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(path::PROJECT_CONFIG_FILE));
    if path.exists() && !force {
        return Err(CliError::Message(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        config.codegen.boilerplate = vec!["sum_of_ten".to_string()];
        let settings = resolve_settings(
            &config,
            GenerateOverrides {
                output: Some(PathBuf::from("out")),
                base_package: Some("org.acme".to_string()),
                jobs: Some(2),
                ..GenerateOverrides::default()
            },
        )
        .expect("valid settings");
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.base_package, "org.acme");
        assert_eq!(settings.jobs, 2);
        assert_eq!(settings.schema_root, config.schema_root());
        assert_eq!(settings.boilerplate, vec!["sum_of_ten".to_string()]);
    }

    #[test]
    fn test_print_report() {
        let report = RunReport { discovered: 2, loaded: 2, generated: 2, ..RunReport::default() };
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_report(&report, &mut out, &mut err).expect("Failed to print report");
        let out = String::from_utf8(out).expect("utf-8");
        assert_eq!(out, "discovered 2, loaded 2, generated 2\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let temp = tempfile::tempdir().expect("Failed to create temporary directory");
        let target = temp.path().join("nested").join("modelgen.toml");
        let written = init_config(Some(&target), false).expect("Failed to write config");
        assert_eq!(written, target);
        assert_eq!(Config::from_file(&target).expect("valid config"), Config::default());

        assert!(matches!(init_config(Some(&target), false), Err(CliError::Message(_))));
        init_config(Some(&target), true).expect("force overwrites");
    }
}
