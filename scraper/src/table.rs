use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Placeholder shown for missing values in the text preview.
const MISSING: &str = "-";

/// Column-ordered table of raw cell text. `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    columns: Vec<String>,
    records: Vec<Vec<Option<String>>>,
}

impl NormalizedTable {
    /// Every record must already be laid out in `columns` order.
    pub(crate) fn new(columns: Vec<String>, records: Vec<Vec<Option<String>>>) -> Self {
        debug_assert!(records.iter().all(|record| record.len() == columns.len()));
        NormalizedTable { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Vec<Option<String>>] {
        &self.records
    }

    /// (records, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.records.get(row)?.get(index)?.as_deref()
    }

    pub fn head(&self, n: usize) -> NormalizedTable {
        NormalizedTable {
            columns: self.columns.clone(),
            records: self.records.iter().take(n).cloned().collect(),
        }
    }
}

impl fmt::Display for NormalizedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for record in &self.records {
            for (width, value) in widths.iter_mut().zip(record) {
                let len = value.as_deref().unwrap_or(MISSING).chars().count();
                *width = (*width).max(len);
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| format!("{:<width$}", column, width = width))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;

        for record in &self.records {
            let line: Vec<String> = record
                .iter()
                .zip(&widths)
                .map(|(value, width)| {
                    format!("{:<width$}", value.as_deref().unwrap_or(MISSING), width = width)
                })
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }

        Ok(())
    }
}

/// A record paired with the column names, serialized as an ordered map.
struct RecordView<'a> {
    columns: &'a [String],
    values: &'a [Option<String>],
}

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for NormalizedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for values in &self.records {
            seq.serialize_element(&RecordView {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}
