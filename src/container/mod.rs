//! IP range containers that converters write into.
//!
//! - [`Container`] - the sink a converter applies its groups to
//! - [`MemoryContainer`] - merged ranges kept in memory

mod memory;

use crate::models::{Entry, IpTypeFilter};

pub use memory::{GroupRanges, MemoryContainer};

/// Error type a container reports from [`Container::add`].
pub type ContainerError = Box<dyn std::error::Error + Send + Sync>;

/// Storage for named groups of IP ranges.
///
/// Implementations own merging. Both operations only touch ranges of the
/// families `filter` allows.
pub trait Container {
    /// Merge the ranges of `entry` into the group named after it.
    fn add(&mut self, entry: &Entry, filter: IpTypeFilter) -> Result<(), ContainerError>;

    /// Drop the ranges stored under `name`. A missing group is a no-op.
    fn remove(&mut self, name: &str, filter: IpTypeFilter);
}
