use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// An uploaded menu sheet, fully materialized as trimmed string cells.
///
/// The first non-blank row of the file becomes `headers`; every later row
/// is padded or truncated to the header width so downstream column lookups
/// never go out of bounds.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV menu file into a [`RawTable`].
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    read_csv_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Reads CSV text from any reader into a [`RawTable`].
///
/// Blank rows are dropped and a UTF-8 BOM on the first cell is stripped.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("read record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers: Vec<String> = raw_rows[0]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "csv table loaded"
    );
    Ok(RawTable { headers, rows })
}
