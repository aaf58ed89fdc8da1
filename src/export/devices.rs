//! Device projector

use crate::index::{RegionIndex, SiteIndex};
use crate::models::Device;
use crate::resolve::{PathTarget, resolve};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One entry of the device export. `mgmt_ip` and `name` serialize as
/// `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: i64,
    pub name: Option<String>,
    pub mgmt_ip: Option<String>,
    pub path: String,
}

/// Project devices into a list sorted by path.
///
/// A device whose site reference is absent, or points at a site missing
/// from the index, is skipped entirely rather than exported without
/// location context.
pub fn project_devices(
    devices: &[Device],
    sites: &SiteIndex,
    regions: &RegionIndex,
) -> Vec<DeviceRecord> {
    let mut records = Vec::with_capacity(devices.len());

    for device in devices {
        let site = match device.site.and_then(|site_ref| sites.get(site_ref.id)) {
            Some(site) => site,
            None => {
                warn!(device_id = device.id, "skipping device without resolvable site");
                continue;
            }
        };

        let resolved = resolve(PathTarget::Site(site), regions);
        if !resolved.complete {
            warn!(device_id = device.id, site_id = site.id, "truncated ancestor chain");
        }

        records.push(DeviceRecord {
            id: device.id,
            name: device.name.clone(),
            mgmt_ip: device.mgmt_ip(),
            path: resolved.render(),
        });
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    records
}
