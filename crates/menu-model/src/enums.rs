//! Type-safe enumerations for menu records.
//!
//! Days and meal slots appear in uploaded sheets as free text in two
//! languages. These enums carry the canonical forms; the permissive
//! `from_text` constructors fold unrecognized input into the documented
//! defaults instead of failing, so a missing day never discards an
//! otherwise-valid dish.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week a dish is offered on.
///
/// Canonical wire form is the uppercase English name (`MONDAY`…`SUNDAY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Returns the canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    /// Normalizes free-text input (Russian or English, any case) to a day.
    ///
    /// Unrecognized or empty input maps to Monday. Matching is by substring
    /// so cells like "в понедельник" still resolve.
    pub fn from_text(raw: &str) -> DayOfWeek {
        let text = raw.trim().to_lowercase();
        const ALIASES: [(&str, &str, DayOfWeek); 7] = [
            ("понедельник", "monday", DayOfWeek::Monday),
            ("вторник", "tuesday", DayOfWeek::Tuesday),
            ("среда", "wednesday", DayOfWeek::Wednesday),
            ("четверг", "thursday", DayOfWeek::Thursday),
            ("пятница", "friday", DayOfWeek::Friday),
            ("суббота", "saturday", DayOfWeek::Saturday),
            ("воскресенье", "sunday", DayOfWeek::Sunday),
        ];
        for (ru, en, day) in ALIASES {
            if text.contains(ru) || text.contains(en) {
                return day;
            }
        }
        DayOfWeek::Monday
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    /// Strict parse of the canonical name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MONDAY" => Ok(DayOfWeek::Monday),
            "TUESDAY" => Ok(DayOfWeek::Tuesday),
            "WEDNESDAY" => Ok(DayOfWeek::Wednesday),
            "THURSDAY" => Ok(DayOfWeek::Thursday),
            "FRIDAY" => Ok(DayOfWeek::Friday),
            "SATURDAY" => Ok(DayOfWeek::Saturday),
            "SUNDAY" => Ok(DayOfWeek::Sunday),
            _ => Err(format!("Unknown day of week: {s}")),
        }
    }
}

/// Meal slot a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    /// Returns the canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Snack => "SNACK",
            MealType::Dinner => "DINNER",
        }
    }

    /// Normalizes free-text input (Russian or English, any case) to a slot.
    ///
    /// Unrecognized or empty input maps to Lunch.
    pub fn from_text(raw: &str) -> MealType {
        let text = raw.trim().to_lowercase();
        const ALIASES: [(&str, &str, MealType); 4] = [
            ("завтрак", "breakfast", MealType::Breakfast),
            ("обед", "lunch", MealType::Lunch),
            ("полдник", "snack", MealType::Snack),
            ("ужин", "dinner", MealType::Dinner),
        ];
        for (ru, en, meal) in ALIASES {
            if text.contains(ru) || text.contains(en) {
                return meal;
            }
        }
        MealType::Lunch
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    /// Strict parse of the canonical name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BREAKFAST" => Ok(MealType::Breakfast),
            "LUNCH" => Ok(MealType::Lunch),
            "SNACK" => Ok(MealType::Snack),
            "DINNER" => Ok(MealType::Dinner),
            _ => Err(format!("Unknown meal type: {s}")),
        }
    }
}
