//! Pipeline orchestration for the main entry points.
//!
//! A run is Locate → Load → Analyse → Emit → Write. Locate and Analyse run on the
//! calling thread; Load and Emit+Write run on the worker pool. Errors confined to one
//! document are collected in the report; anything else aborts the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use adapters::{locate, DiscoveryWarning, SchemaAdapter};
use analysis::{detect_collisions, ModelIndex};
use codegen::{
    echo_unit, write_unit, CodeGenerator, CodegenError, GeneratedUnit, JavaBeanGenerator,
};
use model::{Model, SchemaFile};

use crate::report::{FileError, RunReport};
use crate::worker_pool::{run_indexed, try_run_indexed};
use crate::{CancellationToken, GenerationSettings, PipelineError, SourceRootRegistrar};

/// Models loaded from a schema root
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Schema documents found by discovery
    pub discovered: usize,
    /// Loaded models with the document each came from, in discovery order
    pub models: Vec<(SchemaFile, Model)>,
    /// Documents that failed to load
    pub errors: Vec<FileError>,
    /// Directories skipped during discovery
    pub warnings: Vec<DiscoveryWarning>,
}

/// Locate and load every schema document below `schema_root`
pub fn load_models(
    schema_root: &Path,
    adapter: &dyn SchemaAdapter,
    jobs: usize,
    cancel: &CancellationToken,
) -> Result<LoadOutcome, PipelineError> {
    let located = locate(schema_root, adapter.extensions())?;
    let discovered = located.files.len();

    let results = run_indexed(&located.files, jobs, cancel, |schema| adapter.load_model(schema))?;

    let mut outcome =
        LoadOutcome { discovered, warnings: located.warnings, ..LoadOutcome::default() };
    for (schema, result) in located.files.into_iter().zip(results) {
        match result {
            Ok(model) => outcome.models.push((schema, model)),
            Err(err) => {
                tracing::error!("{}", err);
                outcome.errors.push(err.into());
            }
        }
    }
    Ok(outcome)
}

/// Run the pipeline with the shipped JavaBean generator.
///
/// # Returns
///
/// Returns the run report; file-scoped problems are listed in [`RunReport::errors`].
/// Run-scoped failures (unreadable root, unwritable output, cancellation) are errors.
pub fn run(
    settings: &GenerationSettings,
    adapter: &dyn SchemaAdapter,
    registrar: &dyn SourceRootRegistrar,
    cancel: &CancellationToken,
) -> Result<RunReport, PipelineError> {
    let generator = JavaBeanGenerator::new(settings.emit_options()?);
    run_with(settings, adapter, &generator, registrar, cancel)
}

/// Run the pipeline with an explicit generator
pub fn run_with(
    settings: &GenerationSettings,
    adapter: &dyn SchemaAdapter,
    generator: &dyn CodeGenerator,
    registrar: &dyn SourceRootRegistrar,
    cancel: &CancellationToken,
) -> Result<RunReport, PipelineError> {
    tracing::info!(
        "generating {} sources from {} into {}",
        generator.name(),
        settings.schema_root.display(),
        settings.output_dir.display()
    );

    let loaded = load_models(&settings.schema_root, adapter, settings.jobs, cancel)?;
    let mut report = RunReport {
        discovered: loaded.discovered,
        loaded: loaded.models.len(),
        errors: loaded.errors,
        warnings: loaded.warnings,
        ..RunReport::default()
    };

    if cancel.is_cancelled() {
        return Err(PipelineError::Cancelled);
    }
    let (schemas, models): (Vec<SchemaFile>, Vec<Model>) = loaded.models.into_iter().unzip();
    let (to_emit, index) = analyse(&schemas, &models, &mut report.errors);
    logging::trace(
        "PIPELINE",
        &format!("{} of {} models passed analysis", to_emit.len(), models.len()),
    );

    registrar.register_source_root(&settings.output_dir);
    fs::create_dir_all(&settings.output_dir).map_err(|source| codegen::WriteError {
        path: settings.output_dir.clone(),
        source,
    })?;

    // A write failure stops the remaining workers before it aborts the run
    let emitted = try_run_indexed(&to_emit, settings.jobs, cancel, |&i| {
        emit_and_write(generator, &models[i], &index, &settings.output_dir)
    })?;

    let mut units = Vec::new();
    for (&i, result) in to_emit.iter().zip(emitted) {
        match result {
            Ok((unit, written)) => {
                tracing::info!("generated {}", written.display());
                report.written.push(written);
                units.push(unit);
            }
            Err(error) => {
                let error = FileError::TypeResolution { path: schemas[i].path.clone(), error };
                tracing::error!("{}", error);
                report.errors.push(error);
            }
        }
    }
    report.generated = units.len();

    if settings.echo {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for unit in &units {
            echo_unit(unit, &mut out)?;
        }
        out.flush()?;
    }

    report.errors.sort_by(|a, b| a.path().cmp(b.path()));
    tracing::info!("{}", report);
    Ok(report)
}

/// Run-wide checks; returns the models that may be emitted and the index they resolve in
///
/// Rejected models are left out of the index, so a model referencing one of them is
/// rejected as well. Resolution repeats until no further model drops out.
fn analyse(
    schemas: &[SchemaFile],
    models: &[Model],
    errors: &mut Vec<FileError>,
) -> (Vec<usize>, ModelIndex) {
    let mut collisions = detect_collisions(models);
    let mut to_emit = Vec::with_capacity(models.len());
    for i in 0..models.len() {
        match collisions.remove(&i) {
            Some(error) => {
                let error = FileError::Collision { path: schemas[i].path.clone(), error };
                tracing::error!("{}", error);
                errors.push(error);
            }
            None => to_emit.push(i),
        }
    }

    loop {
        let index = ModelIndex::build(to_emit.iter().map(|&i| &models[i]));
        let before = to_emit.len();
        to_emit.retain(|&i| match index.check_references(&models[i]) {
            Ok(()) => true,
            Err(error) => {
                let error = FileError::TypeResolution { path: schemas[i].path.clone(), error };
                tracing::error!("{}", error);
                errors.push(error);
                false
            }
        });
        if to_emit.len() == before {
            return (to_emit, index);
        }
    }
}

type EmitResult = Result<(GeneratedUnit, PathBuf), analysis::TypeResolutionError>;

/// Emit one model and write it; only resolution failures stay file-scoped
fn emit_and_write(
    generator: &dyn CodeGenerator,
    model: &Model,
    index: &ModelIndex,
    output_dir: &Path,
) -> Result<EmitResult, PipelineError> {
    let unit = match generator.emit(model, index) {
        Ok(unit) => unit,
        Err(CodegenError::TypeResolution(error)) => return Ok(Err(error)),
        Err(other) => return Err(other.into()),
    };
    let written = write_unit(&unit, output_dir)?;
    Ok(Ok((unit, written)))
}
