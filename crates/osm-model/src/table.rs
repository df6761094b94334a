//! Output table definitions.
//!
//! Column lists match the column order of the relational schema the CSV
//! files are bulk loaded into, so they must not be reordered.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Element attributes copied into the `nodes` table.
pub const NODE_FIELDS: &[&str] = &[
    "id",
    "lat",
    "lon",
    "user",
    "uid",
    "version",
    "changeset",
    "timestamp",
];

/// Element attributes copied into the `ways` table.
pub const WAY_FIELDS: &[&str] = &["id", "user", "uid", "version", "changeset", "timestamp"];

/// Columns shared by `nodes_tags` and `ways_tags`.
pub const TAG_FIELDS: &[&str] = &["id", "key", "value", "type"];

/// Columns of `ways_nodes`.
pub const WAY_NODE_FIELDS: &[&str] = &["id", "node_id", "position"];

/// The five correlated output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    Nodes,
    NodeTags,
    Ways,
    WayNodes,
    WayTags,
}

impl Table {
    /// All tables in the order their writers are opened.
    pub const ALL: [Table; 5] = [
        Table::Nodes,
        Table::NodeTags,
        Table::Ways,
        Table::WayNodes,
        Table::WayTags,
    ];

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Nodes => NODE_FIELDS,
            Table::Ways => WAY_FIELDS,
            Table::NodeTags | Table::WayTags => TAG_FIELDS,
            Table::WayNodes => WAY_NODE_FIELDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Table::Nodes => "nodes",
            Table::NodeTags => "nodes_tags",
            Table::Ways => "ways",
            Table::WayNodes => "ways_nodes",
            Table::WayTags => "ways_tags",
        }
    }

    /// Default CSV file name, e.g. `nodes_tags.csv`.
    pub fn default_file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|table| table.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownTable {
                name: s.to_string(),
            })
    }
}
