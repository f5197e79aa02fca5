//! Output records produced by a menu parse run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DayOfWeek, MealType};

/// One dish offered on one day for one meal slot.
///
/// Constructed once per valid, non-duplicate row; immutable afterwards.
/// Wire names are camelCase to match the upload API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Sequential id, unique within one parse run, starting at 1.
    pub id: u32,
    /// Dish name, non-empty and trimmed.
    pub name: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Non-negative price; rows with a non-positive price never become items.
    pub price: f64,
    /// Day the dish is offered on (defaults to Monday when unrecognized).
    pub day_of_week: DayOfWeek,
    /// Meal slot (defaults to Lunch when unrecognized).
    pub meal_type: MealType,
    /// Portion weight as written in the sheet, default empty.
    pub weight: String,
    /// Recipe card number as written in the sheet, default empty.
    pub recipe_number: String,
    /// Portion descriptor as written in the sheet, default empty.
    pub portion: String,
    /// Monday of the calendar week the upload applies to.
    pub week_start: NaiveDate,
    /// Tenant the upload is scoped to; opaque to the parser.
    pub school_id: String,
    /// Timestamp stamped at parse time.
    pub created_at: DateTime<Utc>,
}

/// Counters accumulated over one parse run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Number of data rows in the input (everything after the header).
    pub total_rows: usize,
    /// Rows that produced an item.
    pub valid_items: usize,
    /// Rows rejected with a row-level error (missing name, bad price).
    pub skipped_rows: usize,
    /// Names of dishes seen more than once (duplicates are discarded).
    pub duplicate_names: Vec<String>,
}

/// Aggregate outcome of one parse run.
///
/// `errors` holds fatal or row-rejecting diagnostics; `warnings` holds
/// advisory ones (duplicates). Neither blocks the items that did parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// True iff at least one item was produced.
    pub success: bool,
    /// Surviving items in input-row order.
    pub items: Vec<MenuItem>,
    /// Fatal or row-level error messages, in row order.
    pub errors: Vec<String>,
    /// Advisory messages, in row order.
    pub warnings: Vec<String>,
    /// Run counters.
    pub stats: ParseStats,
}

impl ParseResult {
    /// An empty result carrying a single fatal error.
    pub fn fatal(message: String) -> Self {
        ParseResult {
            success: false,
            items: Vec::new(),
            errors: vec![message],
            warnings: Vec::new(),
            stats: ParseStats::default(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
