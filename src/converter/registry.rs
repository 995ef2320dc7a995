//! Name to constructor map for input converters.

use super::ipinfo_csv::{IpinfoCsv, IPINFO_CSV_DESCRIPTION, IPINFO_CSV_TYPE};
use super::InputConverter;
use crate::error::{ConvertError, Result};
use crate::models::Action;
use std::collections::HashMap;

/// Builds a converter from its action and JSON args.
pub type ConverterCreator =
    fn(Action, Option<&serde_json::Value>) -> Result<Box<dyn InputConverter>>;

struct Registration {
    description: &'static str,
    creator: ConverterCreator,
}

/// Input converters known by type name.
///
/// Filled explicitly at startup, usually through [`Registry::with_defaults`].
#[derive(Default)]
pub struct Registry {
    converters: HashMap<&'static str, Registration>,
}

fn create_ipinfo_csv(
    action: Action,
    args: Option<&serde_json::Value>,
) -> Result<Box<dyn InputConverter>> {
    Ok(Box::new(IpinfoCsv::new(action, args)?))
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registry with every converter this crate ships.
    pub fn with_defaults() -> Registry {
        let mut registry = Registry::new();
        registry.converters.insert(
            IPINFO_CSV_TYPE,
            Registration {
                description: IPINFO_CSV_DESCRIPTION,
                creator: create_ipinfo_csv,
            },
        );
        registry
    }

    /// Add a converter under `name`. Names are unique.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        creator: ConverterCreator,
    ) -> Result<()> {
        if self.converters.contains_key(name) {
            return Err(ConvertError::DuplicateConverter(name.to_string()));
        }
        self.converters.insert(
            name,
            Registration {
                description,
                creator,
            },
        );
        Ok(())
    }

    /// Build the converter registered as `name`.
    ///
    /// `action` is parsed before the converter is looked up, so an unknown
    /// action never reaches a container.
    pub fn create(
        &self,
        name: &str,
        action: &str,
        args: Option<&serde_json::Value>,
    ) -> Result<Box<dyn InputConverter>> {
        let action: Action = action.parse()?;
        let registration = self
            .converters
            .get(name)
            .ok_or_else(|| ConvertError::UnknownConverter(name.to_string()))?;
        log::debug!("create converter {name} action={action}");
        (registration.creator)(action, args)
    }

    /// `(name, description)` pairs sorted by name.
    pub fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        let mut list: Vec<_> = self
            .converters
            .iter()
            .map(|(name, r)| (*name, r.description))
            .collect();
        list.sort();
        list
    }
}
