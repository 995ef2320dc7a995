//! Row processing logic.
//!
//! This module contains the conversion core:
//! - [`classify`] - country/continent to group key
//! - [`want`] - allow-list of group keys
//! - [`aggregate`] - rows into per-group entries
//! - [`apply`] - entries onto a container

mod aggregate;
mod apply;
mod classify;
mod want;

// Re-export public functions
pub use aggregate::aggregate;
pub use apply::apply;
pub use classify::classify;
pub use want::WantSet;
