//! Exhaustive alias coverage for header detection.

use menu_parse::{MenuField, detect_headers};

/// Every alias of every field, used alone as a header cell, must resolve
/// to its own field. A name column is appended where needed so detection
/// does not abort on the required-field check.
#[test]
fn every_alias_resolves_in_isolation() {
    for field in MenuField::ALL {
        for alias in field.aliases() {
            let mut headers = vec![(*alias).to_string()];
            if field != MenuField::Name {
                headers.push("Название".to_string());
            }
            let map = detect_headers(&headers)
                .unwrap_or_else(|error| panic!("{field}/{alias:?}: {error}"));
            assert_eq!(
                map.column(field),
                Some(0),
                "alias {alias:?} should map column 0 to {field}"
            );
        }
    }
}

#[test]
fn detection_is_case_insensitive() {
    let headers = vec!["НАЗВАНИЕ БЛЮДА".to_string(), "PRICE".to_string()];
    let map = detect_headers(&headers).expect("detect");
    assert_eq!(map.column(MenuField::Name), Some(0));
    assert_eq!(map.column(MenuField::Price), Some(1));
}

#[test]
fn unrelated_headers_stay_unmapped() {
    let headers = vec!["Название".to_string(), "Колонка Х".to_string()];
    let map = detect_headers(&headers).expect("detect");
    for field in MenuField::ALL {
        if field == MenuField::Name {
            continue;
        }
        assert_eq!(map.column(field), None, "{field} should be unmapped");
    }
}
