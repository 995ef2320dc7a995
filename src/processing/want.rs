//! Allow-list of group keys.

use std::collections::HashSet;

/// Normalized set of wanted group keys. Empty means keep everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantSet {
    keys: HashSet<String>,
}

impl WantSet {
    /// Build from raw config values: trimmed, uppercased, blanks dropped.
    pub fn new<I, S>(wanted: I) -> WantSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = wanted
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        WantSet { keys }
    }

    pub fn accepts(&self, group_key: &str) -> bool {
        self.keys.is_empty() || self.keys.contains(group_key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
