//! Raw elements as streamed from an OSM XML document.

use std::collections::BTreeMap;
use std::fmt;

use crate::table::{NODE_FIELDS, Table, WAY_FIELDS};

/// Attribute name to value, exactly as found on the source element.
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Way,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
        }
    }

    /// Attributes copied verbatim into this kind's element table.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ElementKind::Node => NODE_FIELDS,
            ElementKind::Way => WAY_FIELDS,
        }
    }

    pub fn element_table(self) -> Table {
        match self {
            ElementKind::Node => Table::Nodes,
            ElementKind::Way => Table::Ways,
        }
    }

    pub fn tag_table(self) -> Table {
        match self {
            ElementKind::Node => Table::NodeTags,
            ElementKind::Way => Table::WayTags,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `<tag k=".." v=".."/>` child. Missing attributes are read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTag {
    pub key: String,
    pub value: String,
}

impl RawTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A `<nd ref=".."/>` child of a way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeRef {
    pub node_id: Option<String>,
}

impl NodeRef {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: Some(node_id.into()),
        }
    }
}

/// One complete top-level `node` or `way`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawElement {
    Node {
        attributes: Attributes,
        tags: Vec<RawTag>,
    },
    Way {
        attributes: Attributes,
        node_refs: Vec<NodeRef>,
        tags: Vec<RawTag>,
    },
}

impl RawElement {
    /// An element of `kind` with no children yet.
    pub fn empty(kind: ElementKind, attributes: Attributes) -> Self {
        match kind {
            ElementKind::Node => RawElement::Node {
                attributes,
                tags: Vec::new(),
            },
            ElementKind::Way => RawElement::Way {
                attributes,
                node_refs: Vec::new(),
                tags: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            RawElement::Node { .. } => ElementKind::Node,
            RawElement::Way { .. } => ElementKind::Way,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            RawElement::Node { attributes, .. } | RawElement::Way { attributes, .. } => attributes,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes().get("id").map(String::as_str)
    }

    pub fn tags(&self) -> &[RawTag] {
        match self {
            RawElement::Node { tags, .. } | RawElement::Way { tags, .. } => tags,
        }
    }

    /// Node references in traversal order; always empty for nodes.
    pub fn node_refs(&self) -> &[NodeRef] {
        match self {
            RawElement::Node { .. } => &[],
            RawElement::Way { node_refs, .. } => node_refs,
        }
    }

    pub fn push_tag(&mut self, tag: RawTag) {
        match self {
            RawElement::Node { tags, .. } | RawElement::Way { tags, .. } => tags.push(tag),
        }
    }

    /// Appends a node reference. Returns `false` for nodes, which carry none.
    pub fn push_node_ref(&mut self, node_ref: NodeRef) -> bool {
        match self {
            RawElement::Node { .. } => false,
            RawElement::Way { node_refs, .. } => {
                node_refs.push(node_ref);
                true
            }
        }
    }
}
