use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use i94_model::tables::table_spec;

use crate::types::{RunResult, TableSummary};

/// Prints the per-table run summary and echoes failures to stderr.
pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_root.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Rows"),
        header_cell("Partitioned by"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let mut total_rows = 0usize;
    for summary in &result.tables {
        total_rows += summary.rows;
        let description = table_spec(summary.name)
            .map(|spec| spec.description)
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(summary.name).fg(Color::Cyan),
            Cell::new(description),
            Cell::new(summary.rows),
            Cell::new(summary.partitioned_by.unwrap_or("-")),
            status_cell(summary),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All tables").add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new("-"),
        Cell::new("-"),
    ]);
    println!("{table}");

    let failures: Vec<_> = result
        .tables
        .iter()
        .filter_map(|summary| {
            summary
                .error
                .as_ref()
                .map(|error| (summary.name, error.as_str()))
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (name, error) in failures {
            eprintln!("- {name}: {error}");
        }
    }
}

/// Shared table styling for summaries and listings.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(summary: &TableSummary) -> Cell {
    if summary.error.is_some() {
        Cell::new("failed").fg(Color::Red)
    } else {
        Cell::new("written").fg(Color::Green)
    }
}
