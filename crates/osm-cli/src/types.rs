use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use osm_model::{ElementKind, ShapedElement, Table};
use osm_output::TablePaths;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub nodes: usize,
    pub ways: usize,
    pub rows: BTreeMap<Table, usize>,
    /// Tags dropped for problem characters in their key.
    pub dropped_tags: usize,
    /// Postcode tags written with an empty value.
    pub empty_postcodes: usize,
    /// Elements checked against the schema.
    pub validated: usize,
    pub elapsed: Duration,
}

impl PipelineSummary {
    pub fn elements(&self) -> usize {
        self.nodes + self.ways
    }

    pub fn total_rows(&self) -> usize {
        self.rows.values().sum()
    }

    pub(crate) fn record(&mut self, raw_tags: usize, shaped: &ShapedElement) {
        match shaped.kind() {
            ElementKind::Node => self.nodes += 1,
            ElementKind::Way => self.ways += 1,
        }
        let tags = shaped.tags();
        self.dropped_tags += raw_tags.saturating_sub(tags.len());
        self.empty_postcodes += tags.iter().filter(|tag| tag.value.is_none()).count();
    }
}

/// A finished `convert` run.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub tables: TablePaths,
    pub summary: PipelineSummary,
}
