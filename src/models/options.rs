//! Run-wide options: the action and the IP family filter.

use super::IpFamily;
use crate::error::ConvertError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// What a converter does with its groups.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

impl FromStr for Action {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Action, ConvertError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            _ => Err(ConvertError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Add => write!(f, "add"),
            Action::Remove => write!(f, "remove"),
        }
    }
}

/// Restricts which address family is applied to the container.
///
/// Decoded from the `onlyIPType` config value: exactly `"ipv4"` or `"ipv6"`
/// selects a family, anything else means no filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum IpTypeFilter {
    #[default]
    None,
    V4Only,
    V6Only,
}

impl IpTypeFilter {
    pub fn allows(&self, family: IpFamily) -> bool {
        match self {
            IpTypeFilter::None => true,
            IpTypeFilter::V4Only => family == IpFamily::V4,
            IpTypeFilter::V6Only => family == IpFamily::V6,
        }
    }
}

impl From<String> for IpTypeFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ipv4" => IpTypeFilter::V4Only,
            "ipv6" => IpTypeFilter::V6Only,
            _ => IpTypeFilter::None,
        }
    }
}
