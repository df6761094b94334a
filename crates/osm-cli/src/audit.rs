//! Read-only audit of street names and postcodes.
//!
//! Streams a document without writing anything and reports the values the
//! shaping rules would have to deal with: street-type tokens outside the
//! expected set (with the expansion the suffix dictionary would apply) and
//! postcodes no five-digit code can be extracted from.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use tracing::{debug, info};

use osm_model::RawElement;
use osm_transform::ShapingRules;
use osm_transform::normalization::{extract_postcode, street_type};

/// Street types that need no expansion.
pub const EXPECTED_STREET_TYPES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Drive", "Court", "Place", "Square", "Lane", "Road", "Trail",
    "Parkway", "Commons",
];

/// One unexpected street-type token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetTypeFinding {
    pub count: usize,
    /// What the suffix dictionary rewrites the token to, if anything.
    pub expansion: Option<String>,
    /// Up to the configured number of distinct street names using the token.
    pub examples: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub elements: usize,
    pub street_names: usize,
    pub postcodes: usize,
    pub street_types: BTreeMap<String, StreetTypeFinding>,
    /// Postcode value to occurrences, for values without a five-digit code.
    pub bad_postcodes: BTreeMap<String, usize>,
}

impl AuditReport {
    /// Unexpected street types, most frequent first.
    pub fn ranked_street_types(&self) -> Vec<(&str, &StreetTypeFinding)> {
        let mut ranked: Vec<_> = self
            .street_types
            .iter()
            .map(|(token, finding)| (token.as_str(), finding))
            .collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Street names the suffix dictionary would rewrite.
    pub fn fixable_street_names(&self) -> usize {
        self.street_types
            .values()
            .filter(|finding| finding.expansion.is_some())
            .map(|finding| finding.count)
            .sum()
    }
}

/// Audits every element, keeping at most `example_limit` names per token.
pub fn audit_elements<I>(
    elements: I,
    rules: &ShapingRules,
    example_limit: usize,
) -> Result<AuditReport>
where
    I: IntoIterator<Item = osm_ingest::Result<RawElement>>,
{
    let mut report = AuditReport::default();
    for element in elements {
        let element = element.context("read OSM element")?;
        report.elements += 1;
        for tag in element.tags() {
            if rules.is_street_key(&tag.key) {
                report.street_names += 1;
                audit_street_name(&mut report, &tag.value, rules, example_limit);
            } else if rules.is_postcode_key(&tag.key) {
                report.postcodes += 1;
                if extract_postcode(&tag.value).is_none() {
                    *report.bad_postcodes.entry(tag.value.clone()).or_default() += 1;
                }
            }
        }
    }
    info!(
        elements = report.elements,
        street_names = report.street_names,
        unexpected_street_types = report.street_types.len(),
        bad_postcodes = report.bad_postcodes.values().sum::<usize>(),
        "audit complete"
    );
    Ok(report)
}

fn audit_street_name(report: &mut AuditReport, name: &str, rules: &ShapingRules, limit: usize) {
    let Some(token) = street_type(name) else {
        debug!("street name without a street type");
        return;
    };
    let token = token.as_str();
    if EXPECTED_STREET_TYPES.contains(&token) {
        return;
    }
    let finding = report
        .street_types
        .entry(token.to_string())
        .or_insert_with(|| StreetTypeFinding {
            expansion: rules.street_suffix(token).map(str::to_string),
            ..StreetTypeFinding::default()
        });
    finding.count += 1;
    if finding.examples.len() < limit {
        finding.examples.insert(name.to_string());
    }
}
