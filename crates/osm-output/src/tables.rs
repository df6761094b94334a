//! The full set of correlated output tables.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use osm_model::Table;

use crate::error::{OutputError, Result};
use crate::writer::TableWriter;

/// File location of every output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    paths: [PathBuf; 5],
}

impl TablePaths {
    /// Default file names (`nodes.csv`, `nodes_tags.csv`, ...) under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            paths: Table::ALL.map(|table| dir.join(table.default_file_name())),
        }
    }

    #[must_use]
    pub fn with_path(mut self, table: Table, path: impl Into<PathBuf>) -> Self {
        self.paths[table as usize] = path.into();
        self
    }

    pub fn get(&self, table: Table) -> &Path {
        &self.paths[table as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Table, &Path)> {
        Table::ALL.into_iter().zip(self.paths.iter().map(PathBuf::as_path))
    }
}

/// One open writer per output table.
///
/// Writers are opened together and live for the whole run. If opening any
/// of them fails, the ones already opened are dropped (and closed) before
/// the error is returned.
pub struct TableWriterSet<W: Write> {
    nodes: TableWriter<W>,
    node_tags: TableWriter<W>,
    ways: TableWriter<W>,
    way_nodes: TableWriter<W>,
    way_tags: TableWriter<W>,
}

impl TableWriterSet<File> {
    /// Creates every table file, and any missing parent directories.
    pub fn create(paths: &TablePaths) -> Result<Self> {
        Self::open_with(|table| {
            let path = paths.get(table);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            debug!(table = %table, path = %path.display(), "creating table");
            TableWriter::create(table, path)
        })
    }
}

impl<W: Write> TableWriterSet<W> {
    /// Opens all tables in [`Table::ALL`] order with `open`.
    pub fn open_with<F>(mut open: F) -> Result<Self>
    where
        F: FnMut(Table) -> Result<TableWriter<W>>,
    {
        Ok(Self {
            nodes: open(Table::Nodes)?,
            node_tags: open(Table::NodeTags)?,
            ways: open(Table::Ways)?,
            way_nodes: open(Table::WayNodes)?,
            way_tags: open(Table::WayTags)?,
        })
    }

    /// Wraps in-memory or other writers produced by `make`.
    pub fn from_writers<F>(mut make: F) -> Result<Self>
    where
        F: FnMut(Table) -> W,
    {
        Self::open_with(|table| TableWriter::new(table, make(table)))
    }

    pub fn writer_mut(&mut self, table: Table) -> &mut TableWriter<W> {
        match table {
            Table::Nodes => &mut self.nodes,
            Table::NodeTags => &mut self.node_tags,
            Table::Ways => &mut self.ways,
            Table::WayNodes => &mut self.way_nodes,
            Table::WayTags => &mut self.way_tags,
        }
    }

    fn writers(&self) -> [&TableWriter<W>; 5] {
        [
            &self.nodes,
            &self.node_tags,
            &self.ways,
            &self.way_nodes,
            &self.way_tags,
        ]
    }

    /// Rows written per table so far.
    pub fn row_counts(&self) -> BTreeMap<Table, usize> {
        self.writers()
            .into_iter()
            .map(|writer| (writer.table(), writer.rows()))
            .collect()
    }

    /// Flushes every table, stopping at the first failure.
    pub fn flush(&mut self) -> Result<()> {
        for table in Table::ALL {
            self.writer_mut(table).flush()?;
        }
        Ok(())
    }

    /// Flushes every table and returns the underlying writers.
    pub fn into_inner(self) -> Result<BTreeMap<Table, W>> {
        let writers = [
            self.nodes,
            self.node_tags,
            self.ways,
            self.way_nodes,
            self.way_tags,
        ];
        let mut inner = BTreeMap::new();
        for writer in writers {
            let table = writer.table();
            inner.insert(table, writer.into_inner()?);
        }
        Ok(inner)
    }
}
