pub mod csv_table;

pub use csv_table::{RawTable, read_csv_from_reader, read_csv_table};
