//! Shaped output rows.
//!
//! A shaped element serialises to the same dictionary layout the validation
//! schema describes: `{"node": {..}, "node_tags": [..]}` for nodes and
//! `{"way": {..}, "way_nodes": [..], "way_tags": [..]}` for ways.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::element::{Attributes, ElementKind};

/// An element's own attributes in fixed column order.
///
/// Attributes absent on the source element are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRow {
    kind: ElementKind,
    values: Vec<Option<String>>,
}

impl ElementRow {
    pub fn from_attributes(kind: ElementKind, attributes: &Attributes) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|field| attributes.get(*field).cloned())
            .collect();
        Self { kind, values }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.kind.fields()
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        let idx = self.fields().iter().position(|name| *name == field)?;
        self.values[idx].as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn to_record(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| value.clone().unwrap_or_default())
            .collect()
    }
}

impl Serialize for ElementRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.fields().iter().zip(&self.values) {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// One retained tag of a node or way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRow {
    pub id: Option<String>,
    pub key: String,
    /// `None` when the value was normalised away (an unextractable postcode).
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub tag_type: String,
}

impl TagRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.key.clone(),
            self.value.clone().unwrap_or_default(),
            self.tag_type.clone(),
        ]
    }
}

/// One `nd` reference of a way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WayNodeRow {
    pub id: Option<String>,
    pub node_id: Option<String>,
    pub position: usize,
}

impl WayNodeRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.node_id.clone().unwrap_or_default(),
            self.position.to_string(),
        ]
    }
}

/// All rows produced for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShapedElement {
    Node {
        node: ElementRow,
        node_tags: Vec<TagRow>,
    },
    Way {
        way: ElementRow,
        way_nodes: Vec<WayNodeRow>,
        way_tags: Vec<TagRow>,
    },
}

impl ShapedElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ShapedElement::Node { .. } => ElementKind::Node,
            ShapedElement::Way { .. } => ElementKind::Way,
        }
    }

    pub fn element(&self) -> &ElementRow {
        match self {
            ShapedElement::Node { node, .. } => node,
            ShapedElement::Way { way, .. } => way,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.element().id()
    }

    pub fn tags(&self) -> &[TagRow] {
        match self {
            ShapedElement::Node { node_tags, .. } => node_tags,
            ShapedElement::Way { way_tags, .. } => way_tags,
        }
    }

    pub fn way_nodes(&self) -> &[WayNodeRow] {
        match self {
            ShapedElement::Node { .. } => &[],
            ShapedElement::Way { way_nodes, .. } => way_nodes,
        }
    }

    /// Short label for diagnostics, e.g. `way 4213` or `node <no id>`.
    pub fn label(&self) -> String {
        format!("{} {}", self.kind(), self.id().unwrap_or("<no id>"))
    }
}
