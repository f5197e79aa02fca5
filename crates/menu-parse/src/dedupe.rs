//! Duplicate-dish detection within one parse run.

use std::collections::BTreeSet;

use menu_model::{DayOfWeek, MealType};

/// Tracks (name, day, meal) keys seen so far; first occurrence wins.
///
/// Price and description deliberately do not participate in the key: two
/// rows naming the same dish in the same slot are one dish, and the later
/// row is dropped.
#[derive(Debug, Default)]
pub struct DedupeState {
    seen: BTreeSet<String>,
}

impl DedupeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the key; returns true when it is the first occurrence.
    pub fn insert(&mut self, name: &str, day: DayOfWeek, meal: MealType) -> bool {
        self.seen.insert(composite_key(name, day, meal))
    }
}

fn composite_key(name: &str, day: DayOfWeek, meal: MealType) -> String {
    format!("{}|{}|{}", name.trim(), day, meal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut state = DedupeState::new();
        assert!(state.insert("Суп овощной", DayOfWeek::Monday, MealType::Lunch));
        assert!(!state.insert("Суп овощной", DayOfWeek::Monday, MealType::Lunch));
    }

    #[test]
    fn key_spans_name_day_and_meal() {
        let mut state = DedupeState::new();
        assert!(state.insert("Суп", DayOfWeek::Monday, MealType::Lunch));
        assert!(state.insert("Суп", DayOfWeek::Tuesday, MealType::Lunch));
        assert!(state.insert("Суп", DayOfWeek::Monday, MealType::Dinner));
        assert!(!state.insert("Суп ", DayOfWeek::Monday, MealType::Lunch));
    }
}
