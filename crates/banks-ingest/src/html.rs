//! Ranking table parsing.
//!
//! The page is expected to hold the ranking as its first table body: one
//! header row followed by one row per bank with the cells
//! `rank | name | market cap (USD billion)`. Rows are validated against that
//! shape; the first mismatch fails the whole extraction.

use std::collections::BTreeSet;

use banks_model::RankedBank;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

/// Cells every data row must provide.
const REQUIRED_CELLS: usize = 3;

/// Parse the first table body of `html` into ranked banks, in row order.
///
/// The first row is skipped unconditionally as the header. Row numbers in
/// errors count data rows from 1.
pub fn parse_bank_table(html: &str) -> Result<Vec<RankedBank>> {
    let document = Html::parse_document(html);
    let tbody = selector("tbody")?;

    let table = document
        .select(&tbody)
        .next()
        .ok_or(IngestError::MissingTable)?;

    let mut banks = Vec::new();
    let mut seen_ranks = BTreeSet::new();
    for (index, row) in child_elements(table, "tr").skip(1).enumerate() {
        let row_number = index + 1;
        let cells: Vec<ElementRef<'_>> = child_elements(row, "td").collect();
        if cells.len() < REQUIRED_CELLS {
            return Err(IngestError::RowShape {
                row: row_number,
                expected: REQUIRED_CELLS,
                found: cells.len(),
            });
        }

        let rank = parse_rank(&cell_text(cells[0]), row_number)?;
        let name = parse_name(cells[1], row_number)?;
        let mc_usd_billion = parse_market_cap(&cell_text(cells[2]), row_number)?;

        if !seen_ranks.insert(rank) {
            return Err(IngestError::DuplicateRank {
                row: row_number,
                rank,
            });
        }
        trace!(rank, name = %name, mc_usd_billion, "parsed row");
        banks.push(RankedBank::new(rank, name, mc_usd_billion));
    }

    debug!(rows = banks.len(), "ranking table parsed");
    Ok(banks)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| IngestError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Direct element children of `parent` with the given tag name.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// Text content with whitespace runs collapsed to single spaces.
fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_rank(text: &str, row: usize) -> Result<u32> {
    text.parse::<u32>()
        .ok()
        .filter(|rank| *rank > 0)
        .ok_or_else(|| IngestError::InvalidValue {
            row,
            field: "Rank",
            value: text.to_string(),
        })
}

/// The bank name is the first link directly inside the cell that has text.
/// The flag icon sits in a `span` and footnote markers in a `sup`, so their
/// links are never direct children. Cells without such a link use their own
/// text minus the flag and footnotes.
fn parse_name(cell: ElementRef<'_>, row: usize) -> Result<String> {
    let name = child_elements(cell, "a")
        .map(cell_text)
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| name_text(cell));
    if name.is_empty() {
        return Err(IngestError::InvalidValue {
            row,
            field: "Name",
            value: name,
        });
    }
    Ok(name)
}

fn name_text(cell: ElementRef<'_>) -> String {
    let mut text = String::new();
    for child in cell.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if !is_decoration(el) {
                text.extend(el.text());
            }
        } else if let Some(fragment) = child.value().as_text() {
            text.push_str(fragment);
        }
    }
    normalize_ws(&text)
}

/// Flag icons and footnote references around a bank name.
fn is_decoration(el: ElementRef<'_>) -> bool {
    let element = el.value();
    match element.name() {
        "sup" => true,
        "span" => element.classes().any(|class| class == "flagicon"),
        _ => false,
    }
}

fn parse_market_cap(text: &str, row: usize) -> Result<f64> {
    text.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| IngestError::InvalidValue {
            row,
            field: "MC_USD_Billion",
            value: text.to_string(),
        })
}
