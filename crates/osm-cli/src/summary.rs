use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_cli::audit::AuditReport;
use osm_cli::types::ConvertResult;

pub fn print_convert_summary(result: &ConvertResult) {
    let summary = &result.summary;
    println!("Input: {}", result.input.display());
    println!(
        "Elements: {} ({} nodes, {} ways) in {:.2}s",
        summary.elements(),
        summary.nodes,
        summary.ways,
        summary.elapsed.as_secs_f64()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, path) in result.tables.iter() {
        let rows = summary.rows.get(&name).copied().unwrap_or_default();
        table.add_row(vec![
            Cell::new(name.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(rows, Color::Green),
            dim_cell(&path.display().to_string()),
        ]);
    }
    table.add_row(vec![
        header_cell("TOTAL"),
        header_cell(&summary.total_rows().to_string()),
        Cell::new(""),
    ]);
    println!("{table}");

    println!(
        "Dropped tags: {}  Empty postcodes: {}  Validated: {}",
        summary.dropped_tags, summary.empty_postcodes, summary.validated
    );
}

pub fn print_audit_report(report: &AuditReport) {
    println!(
        "Audited {} elements: {} street names, {} postcodes",
        report.elements, report.street_names, report.postcodes
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Street type"),
        header_cell("Count"),
        header_cell("Expands to"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (token, finding) in report.ranked_street_types() {
        let expansion = match &finding.expansion {
            Some(expansion) => Cell::new(expansion).fg(Color::Green),
            None => dim_cell("-"),
        };
        let examples = finding
            .examples
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(token).fg(Color::Yellow),
            count_cell(finding.count, Color::Yellow),
            expansion,
            Cell::new(examples),
        ]);
    }
    println!("{table}");
    println!(
        "{} street names would be rewritten by the suffix dictionary",
        report.fixable_street_names()
    );

    if report.bad_postcodes.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Postcode"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (value, count) in &report.bad_postcodes {
        table.add_row(vec![
            Cell::new(value).fg(Color::Red),
            count_cell(*count, Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell("0")
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
