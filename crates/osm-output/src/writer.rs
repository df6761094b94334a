//! CSV table writer.
//!
//! Writes one table: a fixed header on creation, then one record per row in
//! the order rows are handed in. Field text is written as UTF-8 and quoted
//! whenever it contains a delimiter, quote or line break, so values cannot
//! shift columns.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use osm_model::Table;

use crate::error::{OutputError, Result};

/// Writer for a single output table.
pub struct TableWriter<W: Write> {
    table: Table,
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    /// Wraps `inner` and writes the table's header.
    pub fn new(table: Table, inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new().from_writer(inner);
        writer
            .write_record(table.columns())
            .map_err(|source| OutputError::Csv { table, source })?;
        Ok(Self {
            table,
            writer,
            rows: 0,
        })
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Rows written so far, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Appends one row. The field count must match the header.
    pub fn write_row<I, T>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(record)
            .map_err(|source| OutputError::Csv {
                table: self.table,
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| OutputError::Flush {
            table: self.table,
            source,
        })
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let table = self.table;
        self.writer
            .into_inner()
            .map_err(|error| OutputError::Flush {
                table,
                source: error.into_error(),
            })
    }
}

impl TableWriter<File> {
    /// Creates (or truncates) the table file at `path`.
    pub fn create(table: Table, path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            table,
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(table, file)
    }
}
