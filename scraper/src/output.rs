use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;

use crate::table::NormalizedTable;

/// File format for a saved table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Array of objects, missing values as null
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

pub fn output_path(dir: &Path, year: u32, format: OutputFormat) -> PathBuf {
    dir.join(format!("passing_adv_{}.{}", year, format.extension()))
}

/// Header row, then one line per record. Missing values become empty fields.
pub fn write_csv<W: Write>(table: &NormalizedTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // No columns means nothing to write, not a blank header line.
    if table.columns().is_empty() {
        return Ok(());
    }

    csv_writer
        .write_record(table.columns())
        .context("Failed to write CSV header")?;

    for record in table.records() {
        csv_writer
            .write_record(record.iter().map(|value| value.as_deref().unwrap_or("")))
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn write_json<W: Write>(table: &NormalizedTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table).context("Failed to serialize table")?;
    writeln!(writer).context("Failed to write JSON output")?;
    Ok(())
}

/// Writes the table under `dir`, creating it if needed, and returns the path.
pub fn save_table(
    table: &NormalizedTable,
    dir: &Path,
    year: u32,
    format: OutputFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = output_path(dir, year, format);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_csv(table, &mut writer)?,
        OutputFormat::Json => write_json(table, &mut writer)?,
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    info!("Wrote {} records to {}", table.records().len(), path.display());
    Ok(path)
}
