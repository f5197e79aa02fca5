pub mod dedupe;
pub mod fields;
pub mod header;
pub mod parser;
pub mod price;
pub mod row;

pub use dedupe::DedupeState;
pub use fields::MenuField;
pub use header::{HeaderMap, detect_headers};
pub use parser::{MenuParser, week_start_of};
pub use price::normalize_price;
pub use row::{RowContext, RowIssue, parse_row};
