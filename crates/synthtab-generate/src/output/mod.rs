pub mod csv;

pub use self::csv::{table_to_csv_string, write_table_csv};
