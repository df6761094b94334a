pub mod element;
pub mod error;
pub mod rows;
pub mod table;

pub use element::{Attributes, ElementKind, NodeRef, RawElement, RawTag};
pub use error::{ModelError, Result};
pub use rows::{ElementRow, ShapedElement, TagRow, WayNodeRow};
pub use table::{NODE_FIELDS, TAG_FIELDS, Table, WAY_FIELDS, WAY_NODE_FIELDS};
