//! Logical menu fields and their header aliases.
//!
//! Uploaded sheets name their columns freely, in Russian or English. Each
//! logical field carries a fixed list of lowercase substrings; a header cell
//! belongs to a field when it contains any of them. The lists are static
//! data so detection stays deterministic.

use std::fmt;

/// A logical column of the menu sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuField {
    Name,
    Price,
    Day,
    Meal,
    Weight,
    Recipe,
    Portion,
    Description,
}

impl MenuField {
    /// All fields, in detection order.
    pub const ALL: [MenuField; 8] = [
        MenuField::Name,
        MenuField::Price,
        MenuField::Day,
        MenuField::Meal,
        MenuField::Weight,
        MenuField::Recipe,
        MenuField::Portion,
        MenuField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuField::Name => "name",
            MenuField::Price => "price",
            MenuField::Day => "day",
            MenuField::Meal => "meal",
            MenuField::Weight => "weight",
            MenuField::Recipe => "recipe",
            MenuField::Portion => "portion",
            MenuField::Description => "description",
        }
    }

    /// Lowercase substrings that identify this field in a header cell.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            MenuField::Name => &["название", "блюдо", "наименование", "dish", "name"],
            MenuField::Price => &["цена", "стоимость", "price", "cost"],
            MenuField::Day => &["день", "дата", "day", "weekday"],
            MenuField::Meal => &["прием", "приём", "питани", "meal"],
            MenuField::Weight => &["вес", "масса", "weight", "грамм"],
            MenuField::Recipe => &["рецепт", "recipe", "карта"],
            MenuField::Portion => &["порци", "portion", "выход"],
            MenuField::Description => &["описание", "состав", "description", "comment"],
        }
    }

    /// True for fields without which a sheet cannot be parsed at all.
    pub fn is_required(&self) -> bool {
        matches!(self, MenuField::Name)
    }

    /// True when a lowercase header cell names this field.
    pub fn matches(&self, header_lower: &str) -> bool {
        self.aliases().iter().any(|alias| header_lower.contains(alias))
    }
}

impl fmt::Display for MenuField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
