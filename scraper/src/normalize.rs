use std::collections::HashMap;

use log::debug;
use scraper::{ElementRef, Selector};

use crate::table::NormalizedTable;

/// Field identifier that is never carried into the table.
pub const AWARDS_FIELD: &str = "awards";

const FIELD_ATTR: &str = "data-stat";

/// Builds a table from data rows. Columns come from the cells' `data-stat`
/// attributes in order of first appearance; values stay raw text.
pub fn normalize_rows(rows: &[ElementRef]) -> NormalizedTable {
    let mut columns: Vec<String> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut parsed: Vec<HashMap<usize, Option<String>>> = Vec::with_capacity(rows.len());

    for row in rows {
        let mut record = HashMap::new();

        for (field, value) in extract_cells(*row) {
            let index = match positions.get(field) {
                Some(&index) => index,
                None => {
                    columns.push(field.to_string());
                    positions.insert(field.to_string(), columns.len() - 1);
                    columns.len() - 1
                }
            };
            // Repeated fields within a row: last one wins.
            record.insert(index, value);
        }

        parsed.push(record);
    }

    let records = parsed
        .into_iter()
        .map(|mut record| {
            (0..columns.len())
                .map(|index| record.remove(&index).flatten())
                .collect()
        })
        .collect();

    debug!(
        "Normalized {} rows into {} columns",
        rows.len(),
        columns.len()
    );

    NormalizedTable::new(columns, records)
}

/// `(field, value)` for each usable `td` of a row, in document order.
pub fn extract_cells<'a>(row: ElementRef<'a>) -> Vec<(&'a str, Option<String>)> {
    let td_selector = Selector::parse("td").unwrap();

    row.select(&td_selector)
        .filter_map(|cell| {
            let field = cell.value().attr(FIELD_ATTR)?;
            if field == AWARDS_FIELD {
                return None;
            }
            Some((field, cell_value(cell)))
        })
        .collect()
}

/// Cell text with whitespace runs collapsed to one space. Blank cells are missing.
fn cell_value(cell: ElementRef) -> Option<String> {
    let text = cell.text().collect::<String>();
    let value = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
