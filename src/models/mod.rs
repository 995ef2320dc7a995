//! Domain models for the ipinfo CSV converter.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`IpRange`] - validated inclusive address range
//! - [`Entry`] - ranges collected for one group key
//! - [`Action`] and [`IpTypeFilter`] - run-wide options

mod entry;
mod options;
mod range;

// Re-export public types
pub use entry::Entry;
pub use options::{Action, IpTypeFilter};
pub use range::{IpFamily, IpRange};
