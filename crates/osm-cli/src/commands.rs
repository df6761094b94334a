use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use osm_cli::audit::{AuditReport, audit_elements};
use osm_cli::config::{RunConfig, RunOverrides};
use osm_cli::pipeline::run_pipeline;
use osm_cli::types::ConvertResult;
use osm_ingest::ElementStream;
use osm_output::TableWriterSet;
use osm_validate::{JsonSchemaValidator, ValidationGate, default_schema};

use crate::cli::{AuditArgs, ConvertArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let config = resolve_config(args)?;
    let input = config
        .input
        .clone()
        .context("no input document: pass INPUT or set `input` in the config file")?;
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let rules = config.shaping_rules();
    let paths = config.table_paths()?;
    let mut gate = if config.validate {
        let validator = match &config.schema {
            Some(path) => JsonSchemaValidator::from_path(path)?,
            None => JsonSchemaValidator::builtin()?,
        };
        Some(ValidationGate::new(validator).sample_every(config.validate_every))
    } else {
        None
    };

    let elements = ElementStream::open(&input)?;
    let mut tables = TableWriterSet::create(&paths).context("create output tables")?;
    info!(
        output_dir = %config.output_dir.display(),
        validate = config.validate,
        validate_every = config.validate_every.get(),
        "converting"
    );
    let summary = run_pipeline(elements, &rules, gate.as_mut(), &mut tables)?;

    Ok(ConvertResult {
        input,
        tables: paths,
        summary,
    })
}

pub fn run_audit(args: &AuditArgs) -> Result<AuditReport> {
    let span = info_span!("audit", input = %args.input.display());
    let _guard = span.enter();
    let config = load_config(args.config.as_deref())?;
    let elements = ElementStream::open(&args.input)?;
    audit_elements(elements, &config.shaping_rules(), args.limit)
}

pub fn run_schema() -> Result<()> {
    let schema = default_schema()?;
    let text = serde_json::to_string_pretty(&schema).context("render schema")?;
    println!("{text}");
    Ok(())
}

/// Config file first, then command line flags on top.
fn resolve_config(args: &ConvertArgs) -> Result<RunConfig> {
    let mut config = load_config(args.config.as_deref())?;
    let validate = if args.no_validate {
        Some(false)
    } else if args.validate || args.validate_every.is_some() || args.schema.is_some() {
        Some(true)
    } else {
        None
    };
    config.apply(RunOverrides {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        validate,
        validate_every: args.validate_every,
        schema: args.schema.clone(),
    });
    Ok(config)
}

fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => RunConfig::load(path).with_context(|| format!("load {}", path.display())),
        None => Ok(RunConfig::default()),
    }
}
