//! Per-group accumulation of IP ranges.

use super::{IpRange, IpTypeFilter};
use crate::error::RangeError;

/// Ranges collected for one group key before they reach a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    ranges: Vec<IpRange>,
}

impl Entry {
    pub fn new(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            ranges: Vec::new(),
        }
    }

    /// Group key this entry belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append the range `start..=end` given as address text.
    ///
    /// Nothing is appended when the text does not form a valid range.
    pub fn add_range(&mut self, start: &str, end: &str) -> Result<(), RangeError> {
        let range = IpRange::parse(start, end)?;
        self.ranges.push(range);
        Ok(())
    }

    /// Ranges in the order they were added.
    pub fn ranges(&self) -> &[IpRange] {
        &self.ranges
    }

    /// Ranges whose family passes `filter`.
    pub fn filtered(&self, filter: IpTypeFilter) -> impl Iterator<Item = &IpRange> + '_ {
        self.ranges
            .iter()
            .filter(move |r| filter.allows(r.family()))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_range_keeps_order() {
        let mut entry = Entry::new("NA");
        entry.add_range("8.8.8.0", "8.8.8.255").unwrap();
        entry.add_range("1.1.1.0", "1.1.1.255").unwrap();
        assert_eq!(entry.name(), "NA");
        assert_eq!(entry.len(), 2);
        assert_eq!(entry.ranges()[0].to_string(), "8.8.8.0-8.8.8.255");
        assert_eq!(entry.ranges()[1].to_string(), "1.1.1.0-1.1.1.255");
    }

    #[test]
    fn test_add_invalid_range_leaves_entry_untouched() {
        let mut entry = Entry::new("AS");
        entry.add_range("1.0.0.0", "1.0.0.255").unwrap();
        assert!(entry.add_range("not-an-ip", "1.0.0.255").is_err());
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_filtered() {
        let mut entry = Entry::new("EU");
        entry.add_range("2.0.0.0", "2.0.0.255").unwrap();
        entry.add_range("2a00::", "2a00::ffff").unwrap();
        assert_eq!(entry.filtered(IpTypeFilter::None).count(), 2);
        assert_eq!(entry.filtered(IpTypeFilter::V4Only).count(), 1);
        let v6: Vec<String> = entry
            .filtered(IpTypeFilter::V6Only)
            .map(|r| r.to_string())
            .collect();
        assert_eq!(v6, vec!["2a00::-2a00::ffff"]);
    }
}
