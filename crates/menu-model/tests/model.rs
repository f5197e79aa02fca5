//! Tests for menu-model types.

use chrono::{NaiveDate, TimeZone, Utc};

use menu_model::{DayOfWeek, MealType, MenuItem, ParseResult, ParseStats};

fn sample_item() -> MenuItem {
    MenuItem {
        id: 1,
        name: "Суп овощной".to_string(),
        description: String::new(),
        price: 50.0,
        day_of_week: DayOfWeek::Monday,
        meal_type: MealType::Lunch,
        weight: "250 г".to_string(),
        recipe_number: String::new(),
        portion: String::new(),
        week_start: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        school_id: "school-17".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap(),
    }
}

#[test]
fn item_serializes_with_wire_names() {
    let json = serde_json::to_value(sample_item()).expect("serialize item");
    assert_eq!(json["dayOfWeek"], "MONDAY");
    assert_eq!(json["mealType"], "LUNCH");
    assert_eq!(json["schoolId"], "school-17");
    assert_eq!(json["weekStart"], "2026-08-24");
    assert_eq!(json["recipeNumber"], "");
    assert!(json.get("day_of_week").is_none());
}

#[test]
fn result_round_trips() {
    let result = ParseResult {
        success: true,
        items: vec![sample_item()],
        errors: vec![],
        warnings: vec!["row 3: duplicate dish \"Суп овощной\"".to_string()],
        stats: ParseStats {
            total_rows: 3,
            valid_items: 1,
            skipped_rows: 1,
            duplicate_names: vec!["Суп овощной".to_string()],
        },
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: ParseResult = serde_json::from_str(&json).expect("deserialize result");
    assert!(round.success);
    assert_eq!(round.items.len(), 1);
    assert_eq!(round.stats.duplicate_names, vec!["Суп овощной"]);
    assert_eq!(round.warning_count(), 1);
    assert!(!round.has_errors());
}

#[test]
fn fatal_result_carries_one_error() {
    let result = ParseResult::fatal("required column \"name\" not found in header row".to_string());
    assert!(!result.success);
    assert!(result.items.is_empty());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.stats.total_rows, 0);
}
