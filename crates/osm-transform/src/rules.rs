//! Read-only dictionaries shared by the classifier and the normalizers.
//!
//! Built once per run and passed by reference; nothing here is mutated
//! while elements are being shaped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Tag type used when a key carries no lowercase namespace prefix.
pub const DEFAULT_TAG_TYPE: &str = "regular";

/// The only key whose value goes through street-name normalization.
pub const STREET_KEY: &str = "addr:street";

/// Key spellings whose value goes through postcode extraction.
pub const POSTCODE_KEYS: &[&str] = &["addr:postcode", "postcode", "postal_code"];

/// Street-type abbreviations and their expansions. Lookup is exact, so
/// case variants are listed separately.
pub const STREET_SUFFIXES: &[(&str, &str)] = &[
    ("St", "Street"),
    ("St.", "Street"),
    ("st", "Street"),
    ("STREET", "Street"),
    ("Blvd", "Boulevard"),
    ("Ave", "Avenue"),
    ("Ave.", "Avenue"),
    ("AVE", "Avenue"),
    ("Rd", "Road"),
    ("Rd.", "Road"),
    ("Pkwy", "Parkway"),
    ("PKWY", "Parkway"),
    ("Ln", "Lane"),
    ("Ct", "Court"),
    ("CT", "Court"),
    ("Cir", "Circle"),
    ("Cres", "Crescent"),
    ("Ter", "Terrace"),
    ("DRIVE", "Drive"),
];

/// Ordinal street numbers and their spelled-out form, keyed lowercase.
pub const ORDINALS: &[(&str, &str)] = &[
    ("1st", "First"),
    ("2nd", "Second"),
    ("3rd", "Third"),
    ("4th", "Fourth"),
    ("5th", "Fifth"),
    ("6th", "Sixth"),
    ("7th", "Seventh"),
    ("8th", "Eighth"),
    ("9th", "Ninth"),
    ("10th", "Tenth"),
];

/// Characters that make a tag key unusable as a column value.
static PROBLEM_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[=+/&<>;'"?%#$@,. \t\r\n]"#).expect("Invalid problem character regex")
});

/// Overrides read from the `[rules]` section of a run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverrides {
    pub default_tag_type: Option<String>,
    /// Extra or replacement street-type expansions.
    pub street_suffixes: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct ShapingRules {
    default_tag_type: String,
    street_suffixes: BTreeMap<String, String>,
    ordinals: BTreeMap<String, String>,
    postcode_keys: Vec<String>,
    problem_chars: Regex,
}

impl Default for ShapingRules {
    fn default() -> Self {
        Self {
            default_tag_type: DEFAULT_TAG_TYPE.to_string(),
            street_suffixes: to_map(STREET_SUFFIXES),
            ordinals: to_map(ORDINALS),
            postcode_keys: POSTCODE_KEYS.iter().map(|key| key.to_string()).collect(),
            problem_chars: PROBLEM_CHARS.clone(),
        }
    }
}

impl ShapingRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rules with `overrides` merged over the built-in dictionaries.
    pub fn with_overrides(overrides: &RuleOverrides) -> Self {
        let mut rules = Self::default();
        if let Some(tag_type) = &overrides.default_tag_type {
            rules.default_tag_type = tag_type.clone();
        }
        for (abbreviation, expansion) in &overrides.street_suffixes {
            rules
                .street_suffixes
                .insert(abbreviation.clone(), expansion.clone());
        }
        rules
    }

    #[must_use]
    pub fn with_default_tag_type(mut self, tag_type: impl Into<String>) -> Self {
        self.default_tag_type = tag_type.into();
        self
    }

    #[must_use]
    pub fn with_street_suffix(
        mut self,
        abbreviation: impl Into<String>,
        expansion: impl Into<String>,
    ) -> Self {
        self.street_suffixes
            .insert(abbreviation.into(), expansion.into());
        self
    }

    pub fn default_tag_type(&self) -> &str {
        &self.default_tag_type
    }

    /// Expansion for an exact street-type token.
    pub fn street_suffix(&self, token: &str) -> Option<&str> {
        self.street_suffixes.get(token).map(String::as_str)
    }

    /// Spelled-out form of an ordinal token, matched case-insensitively.
    pub fn ordinal(&self, token: &str) -> Option<&str> {
        self.ordinals
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_street_key(&self, key: &str) -> bool {
        key == STREET_KEY
    }

    pub fn is_postcode_key(&self, key: &str) -> bool {
        self.postcode_keys.iter().any(|candidate| candidate == key)
    }

    pub fn has_problem_chars(&self, key: &str) -> bool {
        self.problem_chars.is_match(key)
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
