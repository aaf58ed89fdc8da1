//! Data model for NetBox DCIM entities
//!
//! Mirrors the subset of the NetBox API response shapes the exporter
//! consumes. References to other entities arrive as nested brief objects;
//! only their `id` is kept. Unknown fields are ignored on deserialization.

mod device;
mod region;
mod site;

pub use device::{Device, IpAssignment};
pub use region::Region;
pub use site::Site;

use serde::{Deserialize, Serialize};

/// Brief reference to another entity, as nested in API payloads
/// (e.g. a region's `parent` or a device's `site`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Envelope for NetBox list endpoints: `{ "results": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiList<T> {
    pub results: Vec<T>,
}
