//! Human-readable summary of a parse result.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use menu_model::ParseResult;

pub fn print_summary(result: &ParseResult) {
    if !result.items.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Id"),
            header_cell("Dish"),
            header_cell("Price"),
            header_cell("Day"),
            header_cell("Meal"),
            header_cell("Weight"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for item in &result.items {
            table.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                format!("{:.2}", item.price),
                item.day_of_week.to_string(),
                item.meal_type.to_string(),
                item.weight.clone(),
            ]);
        }
        println!("{table}");
    }
    println!(
        "Rows: {} | Items: {} | Skipped: {} | Duplicates: {}",
        result.stats.total_rows,
        result.stats.valid_items,
        result.stats.skipped_rows,
        result.stats.duplicate_names.len()
    );
    for error in &result.errors {
        println!("error: {error}");
    }
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
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

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
