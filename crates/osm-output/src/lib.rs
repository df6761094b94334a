//! CSV output for shaped OSM elements.
//!
//! Five correlated tables are written side by side:
//!
//! | Table        | Columns                                                   |
//! |--------------|-----------------------------------------------------------|
//! | `nodes`      | id, lat, lon, user, uid, version, changeset, timestamp    |
//! | `nodes_tags` | id, key, value, type                                      |
//! | `ways`       | id, user, uid, version, changeset, timestamp              |
//! | `ways_nodes` | id, node_id, position                                     |
//! | `ways_tags`  | id, key, value, type                                      |
//!
//! Writers only encode rows; deciding which rows go to which table is the
//! caller's job.

mod error;
mod tables;
mod writer;

pub use error::{OutputError, Result};
pub use tables::{TablePaths, TableWriterSet};
pub use writer::TableWriter;
