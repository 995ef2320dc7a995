//! Inclusive IP address ranges.
//!
//! Provides [`IpRange`], a validated `start-end` pair of addresses of a single
//! family, along with helpers the container uses for merging and for CIDR
//! output. Ranges serialize as `start-end` text for the JSON output.

use crate::error::RangeError;
use ipnet::{IpNet, Ipv4Subnets, Ipv6Subnets};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Address family of a range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpFamily {
    V4,
    V6,
}

/// Inclusive range of addresses, `start <= end`, both of the same family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpRange {
    start: IpAddr,
    end: IpAddr,
}

impl IpRange {
    /// Build a range from two addresses.
    pub fn new(start: IpAddr, end: IpAddr) -> Result<IpRange, RangeError> {
        if start.is_ipv4() != end.is_ipv4() {
            return Err(RangeError::FamilyMismatch);
        }
        if start > end {
            return Err(RangeError::Reversed);
        }
        Ok(IpRange { start, end })
    }

    /// Parse a range from its textual start and end addresses.
    ///
    /// # Examples
    /// ```
    /// use ipinfo_csv::models::{IpFamily, IpRange};
    /// let range = IpRange::parse("1.0.0.0", "1.0.0.255").unwrap();
    /// assert_eq!(range.family(), IpFamily::V4);
    /// assert_eq!(range.to_string(), "1.0.0.0-1.0.0.255");
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<IpRange, RangeError> {
        let start_addr: IpAddr = start
            .parse()
            .map_err(|_| RangeError::InvalidAddress(start.to_string()))?;
        let end_addr: IpAddr = end
            .parse()
            .map_err(|_| RangeError::InvalidAddress(end.to_string()))?;
        IpRange::new(start_addr, end_addr)
    }

    pub fn start(&self) -> IpAddr {
        self.start
    }

    pub fn end(&self) -> IpAddr {
        self.end
    }

    pub fn family(&self) -> IpFamily {
        match self.start {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Bounds as integers, for overlap and adjacency checks.
    pub fn bounds(&self) -> (u128, u128) {
        (addr_bits(self.start), addr_bits(self.end))
    }

    /// True when `other` overlaps this range or starts right after it.
    /// `other` must not start before `self`.
    pub fn touches(&self, other: &IpRange) -> bool {
        if self.family() != other.family() {
            return false;
        }
        let (_, hi) = self.bounds();
        let (other_lo, _) = other.bounds();
        other_lo <= hi.saturating_add(1)
    }

    /// Smallest range covering both `self` and `other`.
    pub fn span(&self, other: &IpRange) -> IpRange {
        IpRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Minimal list of CIDR prefixes covering exactly this range.
    pub fn cidrs(&self) -> Vec<IpNet> {
        match (self.start, self.end) {
            (IpAddr::V4(lo), IpAddr::V4(hi)) => {
                Ipv4Subnets::new(lo, hi, 0).map(IpNet::V4).collect()
            }
            (IpAddr::V6(lo), IpAddr::V6(hi)) => {
                Ipv6Subnets::new(lo, hi, 0).map(IpNet::V6).collect()
            }
            // new() never builds a mixed range
            _ => Vec::new(),
        }
    }
}

fn addr_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for IpRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
