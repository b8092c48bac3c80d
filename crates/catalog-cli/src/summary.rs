use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_cli::pipeline::RunResult;
use catalog_model::PriceRange;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Rows read: {}", result.rows_read);
    println!("Rows transformed: {}", result.rows_transformed);
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Price range"), header_cell("Records")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for range in PriceRange::ALL {
        let count = result.range_counts.get(&range).copied().unwrap_or(0);
        table.add_row(vec![Cell::new(range.as_str()), count_cell(count)]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count)
    }
}
