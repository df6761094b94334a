//! Tests for the streaming element reader.

use std::fs;
use std::io::Cursor;

use osm_ingest::{ElementStream, IngestError};
use osm_model::{ElementKind, RawElement};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="test">
  <bounds minlat="40.70" minlon="-74.02" maxlat="40.88" maxlon="-73.90"/>
  <node id="1" lat="40.7302" lon="-73.9913" user="a &amp; b" uid="10" version="2" changeset="99" timestamp="2012-03-28T18:31:23Z"/>
  <node id="2" lat="40.7303" lon="-73.9914" user="mapper" uid="11" version="1" changeset="100" timestamp="2013-01-01T00:00:00Z">
    <tag k="addr:street" v="5th Ave"/>
    <tag k="addr:postcode" v="NY 10001"/>
  </node>
  <way id="10" user="mapper" uid="11" version="3" changeset="101" timestamp="2014-01-01T00:00:00Z">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="1"/>
    <tag k="highway" v="residential"/>
  </way>
  <relation id="100" version="1">
    <member type="way" ref="10" role="outer"/>
    <tag k="type" v="multipolygon"/>
  </relation>
</osm>
"#;

fn read_all(xml: &str) -> Vec<RawElement> {
    ElementStream::from_reader(Cursor::new(xml.as_bytes()))
        .collect::<Result<Vec<_>, _>>()
        .expect("parse sample")
}

#[test]
fn yields_nodes_and_ways_in_document_order() {
    let elements = read_all(SAMPLE);

    let kinds: Vec<_> = elements.iter().map(RawElement::kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Node, ElementKind::Node, ElementKind::Way]
    );
    let ids: Vec<_> = elements.iter().map(|e| e.id().unwrap_or("")).collect();
    assert_eq!(ids, vec!["1", "2", "10"]);
}

#[test]
fn reads_attributes_and_children() {
    let elements = read_all(SAMPLE);

    let first = &elements[0];
    assert_eq!(first.attributes().get("user").map(String::as_str), Some("a & b"));
    assert!(first.tags().is_empty());

    let second = &elements[1];
    assert_eq!(second.tags().len(), 2);
    assert_eq!(second.tags()[0].key, "addr:street");
    assert_eq!(second.tags()[0].value, "5th Ave");

    let way = &elements[2];
    let refs: Vec<_> = way
        .node_refs()
        .iter()
        .map(|r| r.node_id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(refs, vec!["1", "2", "1"]);
    assert_eq!(way.tags().len(), 1);
}

#[test]
fn relation_tags_are_not_attached_to_elements() {
    let elements = read_all(SAMPLE);
    assert!(
        elements
            .iter()
            .all(|e| e.tags().iter().all(|t| t.key != "type"))
    );
}

#[test]
fn missing_tag_attributes_read_as_empty() {
    let xml = r#"<osm><node id="5"><tag v="orphan"/><tag k="name"/></node></osm>"#;
    let elements = read_all(xml);
    let tags = elements[0].tags();
    assert_eq!(tags[0].key, "");
    assert_eq!(tags[0].value, "orphan");
    assert_eq!(tags[1].key, "name");
    assert_eq!(tags[1].value, "");
}

#[test]
fn non_ascii_text_is_preserved() {
    let xml = r#"<osm><node id="6"><tag k="name:zh" v="纽约"/><tag k="name" v="Café Zoë"/></node></osm>"#;
    let elements = read_all(xml);
    assert_eq!(elements[0].tags()[0].value, "纽约");
    assert_eq!(elements[0].tags()[1].value, "Café Zoë");
}

#[test]
fn mismatched_tag_is_fatal_and_ends_stream() {
    let xml = r#"<osm><node id="1"/><way id="2"><nd ref="1"/></node><node id="3"/></osm>"#;
    let mut stream = ElementStream::from_reader(Cursor::new(xml.as_bytes()));

    assert!(matches!(stream.next(), Some(Ok(_))));
    assert!(matches!(stream.next(), Some(Err(IngestError::Xml { .. }))));
    assert!(stream.next().is_none());
}

#[test]
fn truncated_element_is_fatal() {
    let xml = r#"<osm><node id="1"><tag k="a" v="b"/>"#;
    let mut stream = ElementStream::from_reader(Cursor::new(xml.as_bytes()));

    let error = stream.next().expect("item").expect_err("truncated");
    assert!(
        matches!(&error, IngestError::UnexpectedEof { element } if element == "node"),
        "{error}"
    );
    assert!(stream.next().is_none());
}

#[test]
fn truncation_between_elements_is_fatal() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6"><node id="1"/><node id="2"><tag k="a" v="b"/></node>"#;
    let results: Vec<_> = ElementStream::from_reader(Cursor::new(xml.as_bytes())).collect();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(
        matches!(&results[2], Err(IngestError::UnexpectedEof { element }) if element == "osm"),
        "{:?}",
        results[2]
    );
}

#[test]
fn element_after_root_is_fatal() {
    let xml = r#"<osm><node id="1"/></osm><node id="2"/>"#;
    let mut stream = ElementStream::from_reader(Cursor::new(xml.as_bytes()));

    assert!(matches!(stream.next(), Some(Ok(_))));
    assert!(matches!(
        stream.next(),
        Some(Err(IngestError::TrailingContent { .. }))
    ));
    assert!(stream.next().is_none());
}

#[test]
fn text_after_root_is_fatal() {
    let xml = "<osm><node id=\"1\"/></osm>\ngarbage";
    let results: Vec<_> = ElementStream::from_reader(Cursor::new(xml.as_bytes())).collect();

    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[1],
        Err(IngestError::TrailingContent { .. })
    ));
}

#[test]
fn comments_after_root_are_allowed() {
    let xml = "<osm><node id=\"1\"/></osm>\n<!-- end of extract -->\n";
    assert_eq!(read_all(xml).len(), 1);
}

#[test]
fn document_without_root_is_fatal() {
    let mut stream = ElementStream::from_reader(Cursor::new(&b"<?xml version=\"1.0\"?>\n"[..]));
    assert!(matches!(stream.next(), Some(Err(IngestError::MissingRoot))));
    assert!(stream.next().is_none());
}

#[test]
fn declared_latin1_encoding_is_decoded() {
    let xml: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
<osm><node id=\"1\" user=\"Ren\xE9\"><tag k=\"name\" v=\"Caf\xE9\"/></node></osm>";
    let elements = ElementStream::from_reader(Cursor::new(xml))
        .collect::<Result<Vec<_>, _>>()
        .expect("latin-1 document");

    assert_eq!(elements.len(), 1);
    assert_eq!(
        elements[0].attributes().get("user").map(String::as_str),
        Some("René")
    );
    assert_eq!(elements[0].tags()[0].value, "Café");
}

#[test]
fn opens_file_sources() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sample.osm");
    fs::write(&path, SAMPLE).expect("write sample");

    let stream = ElementStream::open(&path).expect("open");
    assert_eq!(stream.count(), 3);
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = ElementStream::open(&dir.path().join("missing.osm"));
    assert!(matches!(result, Err(IngestError::Open { .. })));
}
