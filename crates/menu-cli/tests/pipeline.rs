//! Integration tests for the upload pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};

use menu_cli::pipeline::parse_menu_file;
use menu_ingest::read_csv_from_reader;
use menu_model::{DayOfWeek, MealType};
use menu_parse::MenuParser;

const WEEKLY_MENU: &str = "\
Название блюда,Цена,День недели,Тип приема пищи
Суп овощной,50,понедельник,обед
Каша овсяная,30,понедельник,завтрак
Суп овощной,50,понедельник,обед
Пустое блюдо,0,вторник,обед
";

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("menu_cli_pipeline_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn parses_menu_file_end_to_end() {
    let path = temp_file("menu.csv", WEEKLY_MENU);
    let week_start = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let result =
        parse_menu_file(&path, "school-17", Some(week_start)).expect("parse menu file");

    assert!(result.success);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].name, "Суп овощной");
    assert_eq!(result.items[0].day_of_week, DayOfWeek::Monday);
    assert_eq!(result.items[1].meal_type, MealType::Breakfast);
    assert_eq!(result.items[0].week_start, week_start);
    assert_eq!(result.items[0].school_id, "school-17");
    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.warnings.len(), 1);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_run_matches_in_memory_run() {
    let path = temp_file("menu.csv", WEEKLY_MENU);
    let week_start = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let from_file = parse_menu_file(&path, "school-17", Some(week_start)).expect("parse file");

    let table = read_csv_from_reader(std::io::Cursor::new(WEEKLY_MENU)).expect("read");
    let in_memory = MenuParser::new("school-17")
        .with_week_start(week_start)
        .parse(&table);

    assert_eq!(from_file.success, in_memory.success);
    assert_eq!(from_file.items.len(), in_memory.items.len());
    for (a, b) in from_file.items.iter().zip(&in_memory.items) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.price, b.price);
        assert_eq!(a.day_of_week, b.day_of_week);
        assert_eq!(a.meal_type, b.meal_type);
    }
    assert_eq!(from_file.errors, in_memory.errors);
    assert_eq!(from_file.warnings, in_memory.warnings);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn missing_file_reports_io_error() {
    let path = PathBuf::from("/nonexistent/menu.csv");
    let error = parse_menu_file(&path, "school-17", None).unwrap_err();
    assert!(error.to_string().contains("read menu file"));
}

#[test]
fn json_report_wire_shape() {
    let table = read_csv_from_reader(std::io::Cursor::new(WEEKLY_MENU)).expect("read");
    let result = MenuParser::new("school-17")
        .with_week_start(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
        .with_timestamp(Utc.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap())
        .parse(&table);
    let json = serde_json::to_string_pretty(&result).expect("serialize result");
    insta::assert_snapshot!("json_report_wire_shape", json);
}
