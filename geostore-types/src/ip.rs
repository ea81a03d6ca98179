use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Inclusive IPv4 interval `[first, last]` mapped to a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRange {
    pub first: u32,
    pub last: u32,
    pub location_id: u32,
}

impl IpRange {
    pub fn new(first: u32, last: u32, location_id: u32) -> Self {
        Self {
            first,
            last,
            location_id,
        }
    }

    /// Range covered by a CIDR block such as `81.0.0.0/16`.
    ///
    /// ```
    /// use geostore_types::ip::IpRange;
    /// use std::net::Ipv4Addr;
    ///
    /// let range = IpRange::from_cidr(Ipv4Addr::new(10, 1, 0, 0), 16, 7).unwrap();
    /// assert!(range.contains(Ipv4Addr::new(10, 1, 255, 255)));
    /// assert!(!range.contains(Ipv4Addr::new(10, 2, 0, 0)));
    /// ```
    pub fn from_cidr(network: Ipv4Addr, prefix_len: u8, location_id: u32) -> Option<Self> {
        if prefix_len > 32 {
            return None;
        }
        let mask = if prefix_len == 0 {
            0
        } else {
            u32::MAX << (32 - prefix_len)
        };
        let first = u32::from(network) & mask;
        Some(Self::new(first, first | !mask, location_id))
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let value = u32::from(addr);
        value >= self.first && value <= self.last
    }
}
