//! Header-row detection: logical field to column index.

use std::collections::BTreeMap;

use menu_model::{MenuError, Result};

use crate::fields::MenuField;

/// Resolved mapping from logical fields to zero-based column indexes.
///
/// Built once per table. `name` is guaranteed present; every other field
/// may be absent, in which case its output value is empty/default.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: BTreeMap<MenuField, usize>,
}

impl HeaderMap {
    pub fn column(&self, field: MenuField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Returns the trimmed cell for `field` in `row`, or "" when the field
    /// has no column or the row is short.
    pub fn cell<'a>(&self, row: &'a [String], field: MenuField) -> &'a str {
        self.column(field)
            .and_then(|idx| row.get(idx))
            .map(|value| value.trim())
            .unwrap_or("")
    }
}

/// Scans the header row and assigns each logical field its column.
///
/// Per field, the leftmost matching column wins; later matches are ignored.
/// Fails only when no column matches the required `name` field.
pub fn detect_headers(headers: &[String]) -> Result<HeaderMap> {
    let lowered: Vec<String> = headers.iter().map(|cell| cell.to_lowercase()).collect();
    let mut columns = BTreeMap::new();
    for field in MenuField::ALL {
        for (idx, header) in lowered.iter().enumerate() {
            if field.matches(header) {
                columns.insert(field, idx);
                break;
            }
        }
        if field.is_required() && !columns.contains_key(&field) {
            return Err(MenuError::MissingRequiredColumn(field.as_str()));
        }
    }
    Ok(HeaderMap { columns })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn maps_russian_headers() {
        let map = detect_headers(&headers(&[
            "Название блюда",
            "Цена",
            "День недели",
            "Тип приема пищи",
        ]))
        .expect("detect");
        assert_eq!(map.column(MenuField::Name), Some(0));
        assert_eq!(map.column(MenuField::Price), Some(1));
        assert_eq!(map.column(MenuField::Day), Some(2));
        assert_eq!(map.column(MenuField::Meal), Some(3));
        assert_eq!(map.column(MenuField::Weight), None);
    }

    #[test]
    fn first_matching_column_wins() {
        let map = detect_headers(&headers(&["Dish name", "Dish name (alt)", "Price"]))
            .expect("detect");
        assert_eq!(map.column(MenuField::Name), Some(0));
        assert_eq!(map.column(MenuField::Price), Some(2));
    }

    #[test]
    fn missing_name_column_fails() {
        let error = detect_headers(&headers(&["Цена", "День недели"])).unwrap_err();
        assert!(error.to_string().contains("required column \"name\""));
    }

    #[test]
    fn missing_price_column_is_allowed() {
        let map = detect_headers(&headers(&["Название"])).expect("detect");
        assert_eq!(map.column(MenuField::Price), None);
    }

    #[test]
    fn cell_is_empty_for_unmapped_field_and_short_row() {
        let map = detect_headers(&headers(&["Название", "Цена"])).expect("detect");
        let row = vec!["Суп".to_string()];
        assert_eq!(map.cell(&row, MenuField::Name), "Суп");
        assert_eq!(map.cell(&row, MenuField::Price), "");
        assert_eq!(map.cell(&row, MenuField::Weight), "");
    }
}
