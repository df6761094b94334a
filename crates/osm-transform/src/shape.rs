//! Element shaping: one raw element into its rows for every table.

use osm_model::{ElementRow, NodeRef, RawElement, RawTag, ShapedElement, TagRow, WayNodeRow};

use crate::classify::{TagOwner, classify_tag};
use crate::rules::ShapingRules;

/// Shapes `element` into its element row, way-node rows and tag rows.
///
/// Every child row carries the element's own `id` (or none, if the element
/// has none). No existence checks happen here; that is the validation
/// gate's job.
pub fn shape_element(element: &RawElement, rules: &ShapingRules) -> ShapedElement {
    let owner = TagOwner {
        kind: element.kind(),
        id: element.id(),
    };
    let row = ElementRow::from_attributes(owner.kind, element.attributes());

    match element {
        RawElement::Node { tags, .. } => ShapedElement::Node {
            node: row,
            node_tags: shape_tags(tags, owner, rules),
        },
        RawElement::Way {
            node_refs, tags, ..
        } => ShapedElement::Way {
            way: row,
            way_nodes: shape_way_nodes(node_refs, owner.id),
            way_tags: shape_tags(tags, owner, rules),
        },
    }
}

/// Way-node rows with contiguous positions starting at 0, in source order.
pub fn shape_way_nodes(node_refs: &[NodeRef], way_id: Option<&str>) -> Vec<WayNodeRow> {
    node_refs
        .iter()
        .enumerate()
        .map(|(position, node_ref)| WayNodeRow {
            id: way_id.map(str::to_string),
            node_id: node_ref.node_id.clone(),
            position,
        })
        .collect()
}

fn shape_tags(tags: &[RawTag], owner: TagOwner<'_>, rules: &ShapingRules) -> Vec<TagRow> {
    tags.iter()
        .filter_map(|tag| classify_tag(tag, owner, rules))
        .collect()
}
