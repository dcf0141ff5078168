use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use rdbspec_store::Document;

/// Result of applying a batch of actions to a document file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub applied: usize,
    pub skipped: usize,
    pub revision: u64,
}

pub fn print_apply_summary(summary: &ApplySummary, dry_run: bool) {
    let suffix = if dry_run { " (dry run)" } else { "" };
    println!(
        "applied {} action(s), skipped {}, revision {}{}",
        summary.applied, summary.skipped, summary.revision, suffix
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn optional_text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub fn print_document(document: &Document) {
    let header = &document.header;
    println!("Document: {}", header.id);
    println!("Name: {}", optional_text(header.name.as_deref()));
    println!("Revision: {}", header.revision);
    println!(
        "Specification: {}",
        optional_text(document.state.name.as_deref())
    );
    if let Some(description) = &document.state.description {
        println!("Description: {description}");
    }

    if document.state.rdb_specification.is_empty() {
        println!("\nNo tables.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Table"),
            header_cell("Column"),
            header_cell("Type"),
            header_cell("PK"),
            header_cell("Description"),
            header_cell("Source"),
        ]);
        apply_table_style(&mut table);
        for rdb_table in &document.state.rdb_specification {
            let table_name = optional_text(rdb_table.name.as_deref());
            if rdb_table.columns.is_empty() {
                table.add_row(vec![table_name, "-".into(), "-".into(), "".into(), "-".into(), "-".into()]);
                continue;
            }
            for column in &rdb_table.columns {
                let source = match (&column.source_doc_model, &column.source_property) {
                    (Some(model), Some(property)) => format!("{model}.{property}"),
                    (Some(model), None) => model.clone(),
                    (None, Some(property)) => format!(".{property}"),
                    (None, None) => "-".to_string(),
                };
                table.add_row(vec![
                    table_name.clone(),
                    optional_text(column.name.as_deref()),
                    column.column_type.to_string(),
                    if column.primary_key { "*".to_string() } else { String::new() },
                    optional_text(column.description.as_deref()),
                    source,
                ]);
            }
        }
        println!("\n{table}");
    }

    if document.state.query_specifications.is_empty() {
        println!("\nNo query specifications.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Query"),
            header_cell("Param"),
            header_cell("Type"),
            header_cell("Optional"),
        ]);
        apply_table_style(&mut table);
        for spec in &document.state.query_specifications {
            let query_name = match spec.name.as_deref() {
                Some("") | None => spec.id.to_string(),
                Some(name) => name.to_string(),
            };
            if spec.filter.is_empty() {
                table.add_row(vec![query_name, "-".into(), "-".into(), "".into()]);
                continue;
            }
            for param in &spec.filter {
                table.add_row(vec![
                    query_name.clone(),
                    optional_text(param.name.as_deref()),
                    optional_text(param.param_type.as_deref()),
                    if param.optional { "yes".to_string() } else { "no".to_string() },
                ]);
            }
        }
        println!("\n{table}");
    }
}
