//! Pipeline driver: shape, optionally validate, then write every element.
//!
//! Elements are handled one at a time in document order. Any ingest,
//! validation or write error stops the run; rows written before the failure
//! are flushed so the tables end on a complete record.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, trace, warn};

use osm_model::{RawElement, ShapedElement, Table};
use osm_output::TableWriterSet;
use osm_transform::{ShapingRules, shape_element};
use osm_validate::{SchemaValidator, ValidationError, ValidationGate};

use crate::logging::redact_value;
use crate::types::PipelineSummary;

/// Elements between progress events.
const PROGRESS_INTERVAL: usize = 100_000;

/// Runs every element of `elements` through the pipeline.
///
/// `gate` is `None` when validation is disabled.
pub fn run_pipeline<I, V, W>(
    elements: I,
    rules: &ShapingRules,
    gate: Option<&mut ValidationGate<V>>,
    tables: &mut TableWriterSet<W>,
) -> Result<PipelineSummary>
where
    I: IntoIterator<Item = osm_ingest::Result<RawElement>>,
    V: SchemaValidator,
    W: Write,
{
    let span = info_span!("pipeline", validate = gate.is_some());
    let _guard = span.enter();
    let start = Instant::now();

    let mut summary = PipelineSummary::default();
    let outcome = drive(elements, rules, gate, tables, &mut summary);
    let flushed = tables.flush().context("flush output tables");
    summary.rows = tables.row_counts();
    summary.elapsed = start.elapsed();

    if let Err(error) = outcome {
        if let Err(flush_error) = flushed {
            warn!(error = %flush_error, "output tables not flushed after failure");
        }
        error!(
            elements = summary.elements(),
            duration_ms = summary.elapsed.as_millis(),
            "pipeline aborted"
        );
        return Err(error);
    }
    flushed?;

    info!(
        nodes = summary.nodes,
        ways = summary.ways,
        rows = summary.total_rows(),
        dropped_tags = summary.dropped_tags,
        empty_postcodes = summary.empty_postcodes,
        validated = summary.validated,
        duration_ms = summary.elapsed.as_millis(),
        "pipeline complete"
    );
    Ok(summary)
}

fn drive<I, V, W>(
    elements: I,
    rules: &ShapingRules,
    mut gate: Option<&mut ValidationGate<V>>,
    tables: &mut TableWriterSet<W>,
    summary: &mut PipelineSummary,
) -> Result<()>
where
    I: IntoIterator<Item = osm_ingest::Result<RawElement>>,
    V: SchemaValidator,
    W: Write,
{
    for element in elements {
        let element = element.context("read OSM element")?;
        let shaped = shape_element(&element, rules);
        trace!(element = %shaped.label(), tags = shaped.tags().len(), "shaped element");

        if let Some(gate) = gate.as_deref_mut() {
            let checked = gate.check(&shaped);
            summary.validated = gate.validated();
            if let Err(error) = checked {
                log_rejected(&error);
                return Err(error.into());
            }
        }

        write_shaped(&shaped, tables)
            .with_context(|| format!("write rows for {}", shaped.label()))?;
        summary.record(element.tags().len(), &shaped);

        let seen = summary.elements();
        if seen % PROGRESS_INTERVAL == 0 {
            info!(elements = seen, "progress");
        }
    }
    Ok(())
}

fn log_rejected(error: &ValidationError) {
    if let ValidationError::SchemaViolation {
        element, shaped, ..
    } = error
    {
        let shaped = shaped.to_string();
        error!(element = %element, shaped = redact_value(&shaped), "rejected element");
    }
}

/// Writes the element row, then its way-node rows, then its tag rows.
pub fn write_shaped<W: Write>(
    shaped: &ShapedElement,
    tables: &mut TableWriterSet<W>,
) -> osm_output::Result<()> {
    let kind = shaped.kind();
    tables
        .writer_mut(kind.element_table())
        .write_row(shaped.element().to_record())?;

    let way_nodes = tables.writer_mut(Table::WayNodes);
    for row in shaped.way_nodes() {
        way_nodes.write_row(row.to_record())?;
    }

    let tag_writer = tables.writer_mut(kind.tag_table());
    for tag in shaped.tags() {
        tag_writer.write_row(tag.to_record())?;
    }
    Ok(())
}
