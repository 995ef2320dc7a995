//! Input converters and their registry.
//!
//! - [`ipinfo_csv`] - the ipinfo country/continent CSV converter
//! - [`registry`] - type name to constructor map

mod ipinfo_csv;
mod registry;

use crate::container::Container;
use crate::error::Result;
use crate::models::Action;

pub use ipinfo_csv::{default_file, IpinfoCsv, IPINFO_CSV_DESCRIPTION, IPINFO_CSV_TYPE};
pub use registry::{ConverterCreator, Registry};

/// A configured input that writes its groups into a container.
pub trait InputConverter {
    /// Registry type name.
    fn kind(&self) -> &str;

    fn action(&self) -> Action;

    fn description(&self) -> &str;

    /// Run the conversion against `container`.
    fn input(&self, container: &mut dyn Container) -> Result<()>;
}
