//! Street name normalization.

use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::normalization::ordinal::spell_out_ordinal;
use crate::rules::ShapingRules;

/// The final whitespace-delimited token, e.g. `St.` in `Main St.`.
static STREET_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\S+\.?$").expect("Invalid street type regex"));

/// Returns the street-type token of `name`, if one can be located.
pub fn street_type(name: &str) -> Option<Match<'_>> {
    STREET_TYPE_REGEX.find(name)
}

/// Expands an abbreviated street type at the end of `name`.
///
/// Only the trailing occurrence is replaced, so `St Marks St` becomes
/// `St Marks Street`. Returns `None` if there is no street-type token or the
/// token is not in the suffix dictionary.
pub fn expand_street_suffix(name: &str, rules: &ShapingRules) -> Option<String> {
    let token = street_type(name)?;
    let expansion = rules.street_suffix(token.as_str())?;
    let mut fixed = String::with_capacity(name.len() + expansion.len());
    fixed.push_str(&name[..token.start()]);
    fixed.push_str(expansion);
    fixed.push_str(&name[token.end()..]);
    Some(fixed)
}

/// Full street-name normalization: suffix expansion, then ordinal spelling.
///
/// A name without a locatable street-type token is returned unchanged and
/// skips the ordinal step as well.
pub fn normalize_street_name(name: &str, rules: &ShapingRules) -> String {
    if street_type(name).is_none() {
        return name.to_string();
    }
    let expanded = expand_street_suffix(name, rules).unwrap_or_else(|| name.to_string());
    match spell_out_ordinal(&expanded, rules) {
        Some(spelled) => spelled,
        None => expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_type_is_last_token() {
        assert_eq!(street_type("Main St.").map(|m| m.as_str()), Some("St."));
        assert_eq!(street_type("Broadway").map(|m| m.as_str()), Some("Broadway"));
        assert!(street_type("").is_none());
        assert!(street_type("Main St ").is_none());
    }

    #[test]
    fn expansion_replaces_trailing_token_only() {
        let rules = ShapingRules::new();
        assert_eq!(
            expand_street_suffix("St Marks St", &rules).as_deref(),
            Some("St Marks Street")
        );
        assert_eq!(expand_street_suffix("Main Street", &rules), None);
    }

    #[test]
    fn untouched_when_no_token() {
        let rules = ShapingRules::new();
        assert_eq!(normalize_street_name("", &rules), "");
        assert_eq!(normalize_street_name("1st St ", &rules), "1st St ");
    }
}
