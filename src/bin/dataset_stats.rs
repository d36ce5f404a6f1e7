use std::io::Read;

use anyhow::{Context, Result};
use ekstraklasa_scraper::record::IDENTITY_COLUMNS;
use ekstraklasa_scraper::MISSING_MARKER;

struct MissingCounts {
    headers: csv::StringRecord,
    rows: usize,
    /// Rows whose every statistic cell is missing.
    partial_rows: usize,
    /// Missing cells per column, in header order.
    per_column: Vec<usize>,
}

fn count_missing<R: Read>(mut reader: csv::Reader<R>) -> Result<MissingCounts> {
    let headers = reader.headers().context("read header")?.clone();

    let mut rows = 0usize;
    let mut partial_rows = 0usize;
    let mut per_column = vec![0usize; headers.len()];

    for record in reader.records() {
        let record = record.with_context(|| format!("row {}", rows + 1))?;
        rows += 1;

        for (i, cell) in record.iter().enumerate() {
            if cell == MISSING_MARKER {
                if let Some(m) = per_column.get_mut(i) {
                    *m += 1;
                }
            }
        }
        if record.iter().skip(IDENTITY_COLUMNS.len()).all(|cell| cell == MISSING_MARKER) {
            partial_rows += 1;
        }
    }

    Ok(MissingCounts {
        headers,
        rows,
        partial_rows,
        per_column,
    })
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DATASET_PATH").ok())
        .unwrap_or_else(|| "data_2021_2022.csv".to_string());

    let reader = csv::Reader::from_path(&path).with_context(|| format!("open dataset at {path}"))?;
    let counts = count_missing(reader)?;

    println!("dataset={path}");
    println!("rows: {}", counts.rows);
    println!("rows without statistics: {}", counts.partial_rows);
    for (name, count) in counts
        .headers
        .iter()
        .zip(&counts.per_column)
        .skip(IDENTITY_COLUMNS.len())
    {
        println!("{name}: {count} missing");
    }

    Ok(())
}
