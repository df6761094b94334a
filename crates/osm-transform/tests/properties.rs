//! Property tests for tag classification and value normalization.

use proptest::prelude::*;

use osm_model::{ElementKind, RawTag};
use osm_transform::normalization::{extract_postcode, normalize_street_name, spell_out_ordinal};
use osm_transform::{ORDINALS, STREET_SUFFIXES, ShapingRules, TagOwner, classify_tag};

fn any_kind() -> impl Strategy<Value = ElementKind> {
    prop_oneof![Just(ElementKind::Node), Just(ElementKind::Way)]
}

proptest! {
    #[test]
    fn keys_with_problem_chars_are_dropped(
        key in r#"[a-z:_]{0,8}[=+/&<>;'"?%#$@,. \t\r\n][a-zA-Z:_]{0,8}"#,
        value in "[ -~]{0,12}",
        kind in any_kind(),
    ) {
        let rules = ShapingRules::new();
        let owner = TagOwner { kind, id: Some("1") };
        prop_assert!(classify_tag(&RawTag::new(key, value), owner, &rules).is_none());
    }

    #[test]
    fn namespaced_keys_split_at_first_colon(
        prefix in "[a-z_]{1,8}",
        rest in "[a-z_]{1,8}(:[a-z_]{1,6})?",
        value in "[A-Za-z0-9]{0,12}",
        kind in any_kind(),
    ) {
        let rules = ShapingRules::new();
        let raw_key = format!("{prefix}:{rest}");
        let owner = TagOwner { kind, id: Some("7") };
        let row = classify_tag(&RawTag::new(raw_key.clone(), value), owner, &rules)
            .expect("namespaced key is retained");
        prop_assert_eq!(&row.tag_type, &prefix);
        prop_assert_eq!(&row.key, &rest);
        prop_assert_eq!(format!("{}:{}", row.tag_type, row.key), raw_key);
        prop_assert_eq!(row.id.as_deref(), Some("7"));
    }

    #[test]
    fn unprefixed_keys_use_default_type(key in "[A-Z][A-Za-z0-9_]{0,10}") {
        let rules = ShapingRules::new();
        let owner = TagOwner { kind: ElementKind::Node, id: None };
        let row = classify_tag(&RawTag::new(key.clone(), "v"), owner, &rules).expect("row");
        prop_assert_eq!(row.tag_type, "regular");
        prop_assert_eq!(row.key, key);
    }

    #[test]
    fn dictionary_suffix_is_expanded(
        name in "[A-Z][a-z]{1,10}",
        (abbreviation, expansion) in prop::sample::select(STREET_SUFFIXES.to_vec()),
    ) {
        let rules = ShapingRules::new();
        let fixed = normalize_street_name(&format!("{name} {abbreviation}"), &rules);
        prop_assert_eq!(fixed, format!("{name} {expansion}"));
    }

    #[test]
    fn first_ordinal_is_spelled_out(
        word in "[A-Z][a-z]{1,10}",
        (ordinal, spelled) in prop::sample::select(ORDINALS.to_vec()),
    ) {
        let rules = ShapingRules::new();
        let fixed = spell_out_ordinal(&format!("{word} {ordinal} Street"), &rules);
        prop_assert_eq!(fixed, Some(format!("{word} {spelled} Street")));
    }

    #[test]
    fn strings_without_ordinals_are_unchanged(street in "[A-Za-z ]{0,20}") {
        let rules = ShapingRules::new();
        prop_assert_eq!(spell_out_ordinal(&street, &rules), None);
    }

    #[test]
    fn street_normalization_is_idempotent(
        word in "[A-Z][a-z]{1,10}",
        ordinal in prop::option::of(prop::sample::select(ORDINALS.to_vec())),
        (abbreviation, _) in prop::sample::select(STREET_SUFFIXES.to_vec()),
    ) {
        let rules = ShapingRules::new();
        let street = match ordinal {
            Some((ordinal, _)) => format!("{word} {ordinal} {abbreviation}"),
            None => format!("{word} {abbreviation}"),
        };
        let once = normalize_street_name(&street, &rules);
        let twice = normalize_street_name(&once, &rules);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn postcode_digits_are_extracted(
        prefix in "[A-Za-z -]{0,6}",
        digits in "[0-9]{5}",
        suffix in "(-[0-9]{4})?",
    ) {
        let extracted = extract_postcode(&format!("{prefix}{digits}{suffix}"));
        prop_assert_eq!(extracted, Some(digits));
    }

    #[test]
    fn short_postcodes_have_no_value(value in "[A-Za-z -]{0,6}[0-9]{0,4}") {
        prop_assert_eq!(extract_postcode(&value), None);
    }
}
