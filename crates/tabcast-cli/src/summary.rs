//! End-of-run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

/// Print the conversion summary table to stdout.
pub fn print_summary(result: &ConvertResult) {
    println!("File: {}", result.file.display());
    if let Some(output) = &result.output {
        println!("Output: {}", output.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Estimated"),
        header_cell("Records"),
        header_cell("Skipped"),
        header_cell("Seconds"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.estimate),
        Cell::new(result.records),
        skipped_cell(result.skipped_rows),
        Cell::new(format!("{:.2}", result.elapsed.as_secs_f64())),
    ]);
    println!("{table}");
}

/// Shared table styling for CLI output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
