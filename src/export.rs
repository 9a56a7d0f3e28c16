//! CSV and JSON renderings of simulated tables for downstream charting.
//!
//! CSV layout: header row of column names, then one row per year. The year column is
//! written as an integer; indicator values use the shortest exact decimal form.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::engine::{Dataset, IndicatorTable, YEAR_COLUMN};
use crate::error::{IndicatorError, Result};

pub fn write_table_csv<W: Write>(writer: W, table: &IndicatorTable) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.column_names())?;

    for (index, year) in table.years().iter().enumerate() {
        let record = table.columns().iter().map(|column| {
            if column.name == YEAR_COLUMN {
                year.to_string()
            } else {
                column.values[index].to_string()
            }
        });
        csv_writer.write_record(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn table_to_csv_string(table: &IndicatorTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_table_csv(&mut buffer, table)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `table` to a CSV file, replacing any existing file.
pub fn export_table_csv(path: impl AsRef<Path>, table: &IndicatorTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IndicatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_csv(file, table)?;
    tracing::info!(path = %path.display(), rows = table.len(), "exported indicator table");
    Ok(())
}

pub fn dataset_to_json(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}
