//! Per-row extraction into a [`MenuItem`].

use chrono::{DateTime, NaiveDate, Utc};

use menu_model::{DayOfWeek, MealType, MenuItem};

use crate::fields::MenuField;
use crate::header::HeaderMap;
use crate::price::normalize_price;

/// Values stamped uniformly on every item of one parse run.
#[derive(Debug, Clone)]
pub struct RowContext {
    pub school_id: String,
    pub week_start: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Why a single row was rejected. Never fatal to the whole file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIssue {
    MissingName,
    InvalidPrice,
}

impl RowIssue {
    /// Diagnostic message with the 1-based data-row number.
    pub fn message(&self, row_number: usize) -> String {
        match self {
            RowIssue::MissingName => format!("row {row_number}: dish name not specified"),
            RowIssue::InvalidPrice => {
                format!("row {row_number}: price not specified or invalid")
            }
        }
    }
}

/// Extracts one data row into a [`MenuItem`] with the given id.
///
/// Name and price gate the row; day and meal fall back to their defaults;
/// the remaining fields are carried verbatim.
pub fn parse_row(
    row: &[String],
    headers: &HeaderMap,
    id: u32,
    context: &RowContext,
) -> Result<MenuItem, RowIssue> {
    let name = headers.cell(row, MenuField::Name);
    if name.is_empty() {
        return Err(RowIssue::MissingName);
    }
    let price = normalize_price(headers.cell(row, MenuField::Price));
    if price <= 0.0 {
        return Err(RowIssue::InvalidPrice);
    }
    let day_of_week = DayOfWeek::from_text(headers.cell(row, MenuField::Day));
    let meal_type = MealType::from_text(headers.cell(row, MenuField::Meal));
    Ok(MenuItem {
        id,
        name: name.to_string(),
        description: headers.cell(row, MenuField::Description).to_string(),
        price,
        day_of_week,
        meal_type,
        weight: headers.cell(row, MenuField::Weight).to_string(),
        recipe_number: headers.cell(row, MenuField::Recipe).to_string(),
        portion: headers.cell(row, MenuField::Portion).to_string(),
        week_start: context.week_start,
        school_id: context.school_id.clone(),
        created_at: context.created_at,
    })
}
