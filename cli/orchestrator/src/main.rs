//! modelgen CLI
//!
//! This binary provides the main entry point for modelgen,
//! offering subcommands to generate sources, inspect loaded models and
//! scaffold a configuration file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::Config;
use modelgen_cli::{dump_models, generate, init_config, GenerateOverrides};

/// Command-line interface configuration for modelgen.
#[derive(Parser, Debug)]
#[command(name = "modelgen", about = "Generate JavaBean sources from YAML model schemas", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Configuration file (default: ./modelgen.toml, then the per-user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level or filter directive; overrides the configuration file
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available modelgen commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate sources for every schema below the schema root
    Generate {
        /// Directory searched for schema documents
        #[arg(long)]
        schema_root: Option<PathBuf>,
        /// Directory generated sources are written under
        #[arg(long)]
        output: Option<PathBuf>,
        /// Package every generated type is placed under
        #[arg(long)]
        base_package: Option<String>,
        /// Worker threads (0 = available cores)
        #[arg(long)]
        jobs: Option<usize>,
        /// Also print every generated unit to stdout
        #[arg(long)]
        echo: bool,
        /// Boilerplate method to add to every type (repeatable)
        #[arg(long = "boilerplate", value_name = "NAME")]
        boilerplate: Vec<String>,
    },
    /// Load every schema and print the resulting models
    DumpModels {
        /// Directory searched for schema documents
        #[arg(long)]
        schema_root: Option<PathBuf>,
        /// Print JSON instead of the structural dump
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration
    InitConfig {
        /// Target file (default: ./modelgen.toml)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn run(cli: Cli) -> modelgen_cli::Result<bool> {
    if let Commands::InitConfig { path, force } = &cli.cmd {
        let written = init_config(path.as_deref(), *force)?;
        println!("wrote {}", written.display());
        return Ok(true);
    }

    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.log_level.as_deref().unwrap_or(&config.logging.level));

    match cli.cmd {
        Commands::Generate { schema_root, output, base_package, jobs, echo, boilerplate } => {
            let overrides =
                GenerateOverrides { schema_root, output, base_package, jobs, echo, boilerplate };
            generate(&config, overrides)
        }
        Commands::DumpModels { schema_root, json } => dump_models(&config, schema_root, json),
        Commands::InitConfig { .. } => Ok(true),
    }
}

/// Main entry point for the modelgen application.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
