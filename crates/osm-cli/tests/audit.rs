use std::io::Cursor;

use osm_cli::audit::audit_elements;
use osm_ingest::ElementStream;
use osm_transform::ShapingRules;

const STREETS: &str = r#"<osm>
  <node id="1" lat="1" lon="1">
    <tag k="addr:street" v="Broadway"/>
    <tag k="addr:postcode" v="10001"/>
  </node>
  <node id="2" lat="1" lon="1">
    <tag k="addr:street" v="Main St"/>
    <tag k="addr:postcode" v="NY"/>
  </node>
  <node id="3" lat="1" lon="1">
    <tag k="addr:street" v="Elm St"/>
    <tag k="postal_code" v="NY"/>
  </node>
  <way id="4">
    <tag k="addr:street" v="Court Street"/>
    <tag k="name" v="Oak St"/>
  </way>
  <way id="5">
    <tag k="addr:street" v="Oak St"/>
  </way>
</osm>"#;

#[test]
fn reports_unexpected_street_types_and_bad_postcodes() {
    let elements = ElementStream::from_reader(Cursor::new(STREETS.as_bytes()));
    let report = audit_elements(elements, &ShapingRules::default(), 2).expect("audit");

    assert_eq!(report.elements, 5);
    assert_eq!(report.street_names, 5);
    assert_eq!(report.postcodes, 3);

    let ranked = report.ranked_street_types();
    assert_eq!(ranked.len(), 2);
    let (token, st) = ranked[0];
    assert_eq!(token, "St");
    assert_eq!(st.count, 3);
    assert_eq!(st.expansion.as_deref(), Some("Street"));
    assert_eq!(
        st.examples.iter().collect::<Vec<_>>(),
        vec!["Elm St", "Main St"]
    );

    let (token, broadway) = ranked[1];
    assert_eq!(token, "Broadway");
    assert_eq!(broadway.expansion, None);

    assert_eq!(report.fixable_street_names(), 3);
    assert_eq!(report.bad_postcodes.get("NY"), Some(&2));
    assert!(!report.bad_postcodes.contains_key("10001"));
}

#[test]
fn audit_stops_on_malformed_input() {
    let xml = &b"<osm><node id=\"1\"></way></osm>"[..];
    let elements = ElementStream::from_reader(Cursor::new(xml));
    assert!(audit_elements(elements, &ShapingRules::default(), 3).is_err());
}
