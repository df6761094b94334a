//! Tag classification: value normalization plus key/type splitting.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use osm_model::{ElementKind, RawTag, TagRow};

use crate::normalization::{extract_postcode, normalize_street_name};
use crate::rules::ShapingRules;

/// A lowercase namespace, a colon, then at least one lowercase character.
static LOWER_COLON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]+:[a-z_]+").expect("Invalid namespaced key regex"));

/// The element a tag belongs to.
#[derive(Debug, Clone, Copy)]
pub struct TagOwner<'a> {
    pub kind: ElementKind,
    pub id: Option<&'a str>,
}

/// Splits `key` into `(type, key)`.
///
/// `addr:street` gives `("addr", "street")` and `addr:street:name` gives
/// `("addr", "street:name")`. Keys without a lowercase namespace fall back to
/// the default tag type and are kept whole.
pub fn split_key<'k>(key: &'k str, rules: &'k ShapingRules) -> (&'k str, &'k str) {
    if LOWER_COLON_REGEX.is_match(key)
        && let Some((namespace, rest)) = key.split_once(':')
    {
        return (namespace, rest);
    }
    (rules.default_tag_type(), key)
}

/// Normalized value for a tag, or `None` when normalization leaves nothing
/// worth keeping (a postcode without five digits).
pub fn normalize_value(key: &str, value: &str, rules: &ShapingRules) -> Option<String> {
    if rules.is_street_key(key) {
        Some(normalize_street_name(value, rules))
    } else if rules.is_postcode_key(key) {
        extract_postcode(value)
    } else {
        Some(value.to_string())
    }
}

/// Classifies one tag of `owner`.
///
/// Returns `None` when the key contains a problem character; the tag is then
/// dropped without affecting any other tag. A postcode that cannot be
/// extracted still yields a row, with an empty value.
pub fn classify_tag(tag: &RawTag, owner: TagOwner<'_>, rules: &ShapingRules) -> Option<TagRow> {
    if rules.has_problem_chars(&tag.key) {
        debug!(
            element_kind = %owner.kind,
            element_id = owner.id.unwrap_or_default(),
            key = %tag.key,
            "dropping tag with problem characters"
        );
        return None;
    }

    let value = normalize_value(&tag.key, &tag.value, rules);
    if value.is_none() {
        debug!(
            element_kind = %owner.kind,
            element_id = owner.id.unwrap_or_default(),
            key = %tag.key,
            "postcode could not be extracted"
        );
    }
    let (tag_type, key) = split_key(&tag.key, rules);

    Some(TagRow {
        id: owner.id.map(str::to_string),
        key: key.to_string(),
        value,
        tag_type: tag_type.to_string(),
    })
}
