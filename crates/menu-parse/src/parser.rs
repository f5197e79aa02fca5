//! Top-level parse orchestration.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use menu_ingest::RawTable;
use menu_model::{ParseResult, ParseStats};

use crate::dedupe::DedupeState;
use crate::header::detect_headers;
use crate::row::{RowContext, parse_row};

/// Returns the Monday of the calendar week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// One-shot menu parser for a single upload.
///
/// Stateless across invocations: every [`MenuParser::parse`] call starts
/// from a fresh [`ParseResult`] and ids restart at 1. The tenant id and
/// timestamps are fixed at construction so all items of a run carry the
/// same stamp; tests pin them via the `with_*` builders.
#[derive(Debug, Clone)]
pub struct MenuParser {
    school_id: String,
    week_start: NaiveDate,
    created_at: DateTime<Utc>,
}

impl MenuParser {
    /// Creates a parser stamping `school_id`, the Monday of the current
    /// week, and the current time onto every produced item.
    pub fn new(school_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            school_id: school_id.into(),
            week_start: week_start_of(now.date_naive()),
            created_at: now,
        }
    }

    /// Overrides the stamped week start.
    #[must_use]
    pub fn with_week_start(mut self, week_start: NaiveDate) -> Self {
        self.week_start = week_start;
        self
    }

    /// Overrides the stamped creation timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Parses a raw table into items plus diagnostics.
    ///
    /// Header detection failure aborts the run with a single fatal error;
    /// every row-level issue is recorded and parsing continues.
    pub fn parse(&self, table: &RawTable) -> ParseResult {
        let headers = match detect_headers(&table.headers) {
            Ok(map) => map,
            Err(error) => return ParseResult::fatal(error.to_string()),
        };
        let context = RowContext {
            school_id: self.school_id.clone(),
            week_start: self.week_start,
            created_at: self.created_at,
        };
        let mut items = Vec::new();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut stats = ParseStats {
            total_rows: table.rows.len(),
            ..ParseStats::default()
        };
        let mut dedupe = DedupeState::new();
        for (index, row) in table.rows.iter().enumerate() {
            let row_number = index + 1;
            let next_id = (items.len() + 1) as u32;
            match parse_row(row, &headers, next_id, &context) {
                Ok(item) => {
                    if dedupe.insert(&item.name, item.day_of_week, item.meal_type) {
                        stats.valid_items += 1;
                        items.push(item);
                    } else {
                        warnings.push(format!(
                            "row {row_number}: duplicate dish \"{}\"",
                            item.name
                        ));
                        stats.duplicate_names.push(item.name);
                    }
                }
                Err(issue) => {
                    stats.skipped_rows += 1;
                    errors.push(issue.message(row_number));
                }
            }
        }
        if items.is_empty() {
            errors.push("no dishes could be extracted from the file".to_string());
        }
        tracing::debug!(
            total_rows = stats.total_rows,
            valid_items = stats.valid_items,
            skipped_rows = stats.skipped_rows,
            duplicates = stats.duplicate_names.len(),
            "menu parse finished"
        );
        ParseResult {
            success: !items.is_empty(),
            items,
            errors,
            warnings,
            stats,
        }
    }
}
