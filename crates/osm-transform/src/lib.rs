//! Shaping of OpenStreetMap elements into flat table rows.
//!
//! - [`rules`]: the read-only dictionaries every step consults
//! - [`normalization`]: street, ordinal and postcode value rewriting
//! - [`classify`]: per-tag filtering, normalization and `type`/`key` split
//! - [`shape`]: whole-element shaping into rows for every output table

pub mod classify;
pub mod normalization;
pub mod rules;
pub mod shape;

pub use classify::{TagOwner, classify_tag, normalize_value, split_key};
pub use rules::{
    DEFAULT_TAG_TYPE, ORDINALS, POSTCODE_KEYS, RuleOverrides, STREET_KEY, STREET_SUFFIXES,
    ShapingRules,
};
pub use shape::{shape_element, shape_way_nodes};
