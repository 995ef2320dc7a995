//! Output formatting for container data.
//!
//! This module handles writing converted groups:
//! - [`csv`] - CSV summary and range file
//! - [`json`] - JSON dump of merged ranges
//! - [`text`] - per-group CIDR text files
//! - [`terminal`] - terminal helpers

mod csv;
mod json;
mod terminal;
mod text;

pub use self::csv::{print_summary, summary_rows, write_csv, SummaryRow, RANGES_CSV};
pub use json::{write_json, GROUPS_JSON};
pub use terminal::{format_field, print_converters};
pub use text::{group_file_name, write_text};
