//! In-memory container keeping merged ranges per group.

use super::{Container, ContainerError};
use crate::models::{Entry, IpFamily, IpRange, IpTypeFilter};
use ipnet::IpNet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Merged ranges of one group, split by family.
///
/// Each list is sorted and holds no overlapping or adjacent ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupRanges {
    pub v4: Vec<IpRange>,
    pub v6: Vec<IpRange>,
}

impl GroupRanges {
    fn insert(&mut self, range: IpRange) {
        match range.family() {
            IpFamily::V4 => self.v4.push(range),
            IpFamily::V6 => self.v6.push(range),
        }
    }

    fn merge(&mut self) {
        self.v4 = merge_ranges(std::mem::take(&mut self.v4));
        self.v6 = merge_ranges(std::mem::take(&mut self.v6));
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// All ranges, IPv4 first.
    pub fn iter(&self) -> impl Iterator<Item = &IpRange> + '_ {
        self.v4.iter().chain(self.v6.iter())
    }

    /// Minimal CIDR prefixes covering the group, IPv4 first.
    pub fn cidrs(&self) -> Vec<IpNet> {
        self.iter().flat_map(|r| r.cidrs()).collect()
    }
}

/// Sort and coalesce overlapping or adjacent ranges of a single family.
fn merge_ranges(mut ranges: Vec<IpRange>) -> Vec<IpRange> {
    ranges.sort();
    let mut merged: Vec<IpRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if last.touches(&range) => *last = last.span(&range),
            _ => merged.push(range),
        }
    }
    merged
}

/// Container holding every group in memory, ordered by group key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryContainer {
    groups: BTreeMap<String, GroupRanges>,
}

impl MemoryContainer {
    pub fn new() -> MemoryContainer {
        MemoryContainer::default()
    }

    pub fn get(&self, name: &str) -> Option<&GroupRanges> {
        self.groups.get(name)
    }

    /// Groups sorted by key.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &GroupRanges)> + '_ {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn cidrs(&self, name: &str) -> Vec<IpNet> {
        self.groups
            .get(name)
            .map(|g| g.cidrs())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Container for MemoryContainer {
    fn add(&mut self, entry: &Entry, filter: IpTypeFilter) -> Result<(), ContainerError> {
        let mut ranges = entry.filtered(filter).peekable();
        if ranges.peek().is_none() {
            log::debug!("add '{}': no ranges pass {filter:?}", entry.name());
            return Ok(());
        }

        let group = self.groups.entry(entry.name().to_string()).or_default();
        for range in ranges {
            group.insert(*range);
        }
        group.merge();
        log::debug!(
            "add '{}': now {} v4 / {} v6 ranges",
            entry.name(),
            group.v4.len(),
            group.v6.len()
        );
        Ok(())
    }

    fn remove(&mut self, name: &str, filter: IpTypeFilter) {
        match filter {
            IpTypeFilter::None => {
                self.groups.remove(name);
            }
            IpTypeFilter::V4Only | IpTypeFilter::V6Only => {
                let now_empty = match self.groups.get_mut(name) {
                    Some(group) => {
                        if filter == IpTypeFilter::V4Only {
                            group.v4.clear();
                        } else {
                            group.v6.clear();
                        }
                        group.is_empty()
                    }
                    None => false,
                };
                if now_empty {
                    self.groups.remove(name);
                }
            }
        }
        log::debug!("remove '{name}' ({filter:?})");
    }
}
