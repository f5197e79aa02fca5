//! Upload pipeline: file -> raw table -> parse result.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info_span, warn};

use menu_ingest::read_csv_table;
use menu_model::ParseResult;
use menu_parse::MenuParser;

/// Reads and parses one uploaded menu file for a school.
///
/// I/O failures surface as `Err`; everything the parser itself rejects is
/// reported inside the returned [`ParseResult`].
pub fn parse_menu_file(
    path: &Path,
    school_id: &str,
    week_start: Option<NaiveDate>,
) -> Result<ParseResult> {
    let span = info_span!("upload", school_id = %school_id);
    let _guard = span.enter();
    let table = read_csv_table(path)
        .with_context(|| format!("read menu file: {}", path.display()))?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "menu table loaded"
    );
    let mut parser = MenuParser::new(school_id);
    if let Some(date) = week_start {
        parser = parser.with_week_start(date);
    }
    let result = parser.parse(&table);
    for warning in &result.warnings {
        warn!("{warning}");
    }
    Ok(result)
}
