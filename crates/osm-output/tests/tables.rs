use std::fs;

use osm_model::Table;
use osm_output::{OutputError, TablePaths, TableWriter, TableWriterSet};

#[test]
fn header_is_written_before_rows() {
    let mut writer = TableWriter::new(Table::WayNodes, Vec::new()).expect("writer");
    writer.write_row(["209809850", "2199822281", "0"]).expect("row");
    writer.write_row(["209809850", "2199822370", "1"]).expect("row");
    assert_eq!(writer.rows(), 2);

    let bytes = writer.into_inner().expect("flush");
    let text = String::from_utf8(bytes).expect("utf-8");
    insta::assert_snapshot!(text, @r"
    id,node_id,position
    209809850,2199822281,0
    209809850,2199822370,1
    ");
}

#[test]
fn awkward_values_do_not_shift_columns() {
    let values = [
        "Joe's \"Best\" Pizza, Deli",
        "line one\nline two",
        "纽约 Café Zoë",
        "",
    ];
    let mut writer = TableWriter::new(Table::NodeTags, Vec::new()).expect("writer");
    for value in values {
        writer.write_row(["42", "name", value, "regular"]).expect("row");
    }
    let bytes = writer.into_inner().expect("flush");

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), Table::NodeTags.columns());
    let records: Vec<_> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), values.len());
    for (record, value) in records.iter().zip(values) {
        assert_eq!(record.len(), 4);
        assert_eq!(&record[2], value);
        assert_eq!(&record[3], "regular");
    }
}

#[test]
fn wrong_field_count_is_an_error() {
    let mut writer = TableWriter::new(Table::Ways, Vec::new()).expect("writer");
    let result = writer.write_row(["1", "mapper"]);
    assert!(matches!(
        result,
        Err(OutputError::Csv {
            table: Table::Ways,
            ..
        })
    ));
}

#[test]
fn creates_all_tables_with_headers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("out");
    let paths = TablePaths::in_dir(&out).with_path(Table::Nodes, out.join("points.csv"));

    let mut tables = TableWriterSet::create(&paths).expect("create");
    tables
        .writer_mut(Table::Nodes)
        .write_row(["1", "40.7", "-73.9", "a", "2", "3", "4", "2012-01-01T00:00:00Z"])
        .expect("row");
    tables.flush().expect("flush");
    let counts = tables.row_counts();
    drop(tables);

    assert_eq!(counts[&Table::Nodes], 1);
    assert_eq!(counts[&Table::WayTags], 0);
    let nodes = fs::read_to_string(out.join("points.csv")).expect("nodes");
    assert!(nodes.starts_with("id,lat,lon,user,uid,version,changeset,timestamp\n"));
    let ways_nodes = fs::read_to_string(out.join("ways_nodes.csv")).expect("ways_nodes");
    assert_eq!(ways_nodes, "id,node_id,position\n");
    for (table, path) in paths.iter() {
        assert!(path.exists(), "{table} missing");
    }
}

#[test]
fn failed_open_reports_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write");
    let paths = TablePaths::in_dir(dir.path()).with_path(Table::Ways, blocker.join("ways.csv"));

    let result = TableWriterSet::create(&paths);

    assert!(matches!(result, Err(OutputError::CreateDir { .. })));
    assert!(dir.path().join("nodes.csv").exists());
    assert!(!dir.path().join("ways_nodes.csv").exists());
}

#[test]
fn in_memory_set_returns_writers() {
    let mut tables = TableWriterSet::from_writers(|_| Vec::new()).expect("tables");
    tables
        .writer_mut(Table::WayTags)
        .write_row(["7", "highway", "service", "regular"])
        .expect("row");
    let inner = tables.into_inner().expect("inner");
    assert_eq!(inner.len(), 5);
    assert_eq!(
        String::from_utf8_lossy(&inner[&Table::WayTags]),
        "id,key,value,type\n7,highway,service,regular\n"
    );
}
