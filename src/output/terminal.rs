//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::converter::Registry;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Print the registered converters, one per line.
pub fn print_converters(registry: &Registry) {
    println!("{}", "Input converters:".bold());
    for (name, description) in registry.descriptions() {
        println!("  - {:<12} {}", name.green(), description);
    }
}
