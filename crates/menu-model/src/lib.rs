pub mod enums;
pub mod error;
pub mod item;

pub use enums::{DayOfWeek, MealType};
pub use error::{MenuError, Result};
pub use item::{MenuItem, ParseResult, ParseStats};
