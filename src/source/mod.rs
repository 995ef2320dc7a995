//! Row source for the ipinfo country CSV.
//!
//! - [`reader`] - reads the whole file into memory
//! - [`row`] - normalized data rows

mod reader;
mod row;

pub use reader::read_records;
pub use row::{Row, ROW_FIELDS};
