//! Device model

use super::EntityRef;
use serde::{Deserialize, Serialize};

/// An inventory item located at a site.
///
/// NetBox permits unnamed devices, so `name` is optional and serializes as
/// `null` rather than being skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<EntityRef>,
    #[serde(default)]
    pub primary_ip4: Option<IpAssignment>,
    #[serde(default)]
    pub primary_ip6: Option<IpAssignment>,
}

/// A primary IP assignment; `address` is in CIDR notation
/// (e.g. `10.0.0.1/24` or `2001:db8::1/64`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAssignment {
    pub address: String,
}

impl Device {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            site: None,
            primary_ip4: None,
            primary_ip6: None,
        }
    }

    pub fn at_site(mut self, site_id: i64) -> Self {
        self.site = Some(EntityRef::new(site_id));
        self
    }

    pub fn with_ip4(mut self, address: impl Into<String>) -> Self {
        self.primary_ip4 = Some(IpAssignment {
            address: address.into(),
        });
        self
    }

    pub fn with_ip6(mut self, address: impl Into<String>) -> Self {
        self.primary_ip6 = Some(IpAssignment {
            address: address.into(),
        });
        self
    }

    /// Management IP: the IPv4 address with its prefix length stripped if
    /// present, else the IPv6 address similarly stripped, else `None`.
    pub fn mgmt_ip(&self) -> Option<String> {
        self.primary_ip4
            .as_ref()
            .or(self.primary_ip6.as_ref())
            .map(|ip| strip_prefix_len(&ip.address))
    }
}

/// Drop the `/len` suffix from a CIDR-notation address.
fn strip_prefix_len(address: &str) -> String {
    address
        .split_once('/')
        .map(|(addr, _)| addr)
        .unwrap_or(address)
        .to_string()
}
