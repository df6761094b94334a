//! Ordinal street number spelling (`5th` -> `Fifth`).

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::ShapingRules;

/// `1st` through `10th` as a whole word, optionally wrapped in parentheses.
static ORDINAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\((?:1ST|2ND|3RD|4TH|5TH|6TH|7TH|8TH|9TH|10TH)\)|\b(?:1ST|2ND|3RD|4TH|5TH|6TH|7TH|8TH|9TH|10TH)\b",
    )
    .expect("Invalid ordinal regex")
});

/// Spells out the first ordinal token in `street`.
///
/// Only the first match is rewritten. A parenthesised token keeps its
/// parentheses: `(2nd)` becomes `(Second)`. Returns `None` when the string
/// holds no ordinal token.
pub fn spell_out_ordinal(street: &str, rules: &ShapingRules) -> Option<String> {
    let found = ORDINAL_REGEX.find(street)?;
    let matched = found.as_str();
    let (open, token, close) = match matched.strip_prefix('(') {
        Some(inner) => ("(", inner.trim_end_matches(')'), ")"),
        None => ("", matched, ""),
    };
    let spelled = rules.ordinal(token)?;

    let mut fixed = String::with_capacity(street.len() + spelled.len());
    fixed.push_str(&street[..found.start()]);
    fixed.push_str(open);
    fixed.push_str(spelled);
    fixed.push_str(close);
    fixed.push_str(&street[found.end()..]);
    Some(fixed)
}
