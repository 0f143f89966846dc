//! Console tables for datasets, query results and the run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use banks_model::{Currency, Dataset, EXTRACT_FIELDS, RECORD_FIELDS, RankedBank};
use banks_output::{QueryResult, SqlValue};

use crate::pipeline::PipelineSummary;

pub fn print_banks(banks: &[RankedBank]) {
    println!("{}", banks_table(banks));
}

pub fn print_dataset(dataset: &Dataset) {
    println!("{}", dataset_table(dataset));
}

pub fn print_query_result(sql: &str, result: &QueryResult) {
    println!("{sql}");
    println!("{}", query_table(result));
}

pub fn print_summary(summary: &PipelineSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Output"), header_cell("Location")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("CSV"),
        Cell::new(summary.csv_path.display()),
    ]);
    table.add_row(vec![
        Cell::new("Database"),
        Cell::new(format!(
            "{} ({})",
            summary.db_path.display(),
            summary.table_name
        )),
    ]);
    table.add_row(vec![
        Cell::new("Progress log"),
        Cell::new(summary.progress_log.display()),
    ]);
    println!("{table}");
}

/// Extracted rows, before any conversion.
pub fn banks_table(banks: &[RankedBank]) -> Table {
    let mut table = Table::new();
    table.set_header(EXTRACT_FIELDS.map(header_cell));
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for bank in banks {
        table.add_row(vec![
            Cell::new(bank.rank),
            Cell::new(&bank.name),
            Cell::new(SqlValue::Real(bank.mc_usd_billion)),
        ]);
    }
    table
}

/// Fully converted rows.
pub fn dataset_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(RECORD_FIELDS.map(header_cell));
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for index in 2..RECORD_FIELDS.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in dataset {
        let mut row = vec![Cell::new(record.rank), Cell::new(&record.name)];
        row.extend(
            Currency::ALL
                .iter()
                .map(|currency| Cell::new(SqlValue::Real(record.market_cap(*currency)))),
        );
        table.add_row(row);
    }
    table
}

pub fn query_table(result: &QueryResult) -> Table {
    let mut table = Table::new();
    table.set_header(result.columns.iter().map(String::as_str).map(header_cell));
    apply_table_style(&mut table);
    for row in &result.rows {
        table.add_row(row.iter().map(value_cell));
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
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

fn value_cell(value: &SqlValue) -> Cell {
    match value {
        SqlValue::Null => dim_cell(value),
        SqlValue::Integer(_) | SqlValue::Real(_) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
        SqlValue::Text(_) | SqlValue::Blob(_) => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
