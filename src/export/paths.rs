//! Region/site path projector

use crate::index::RegionIndex;
use crate::models::{Region, Site};
use crate::resolve::{PathTarget, resolve};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Discriminator for combined location output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Region,
    Site,
}

/// One entry of the combined region/site export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub slug: String,
    pub name: String,
    pub path: String,
}

/// Project every region and site into one combined list sorted by path.
///
/// Unlike the device export there is no exclusion: entities whose ancestry
/// cannot be fully resolved still get a best-effort path.
pub fn project_locations(
    regions: &[Region],
    sites: &[Site],
    index: &RegionIndex,
) -> Vec<LocationRecord> {
    let mut records = Vec::with_capacity(regions.len() + sites.len());

    for region in regions {
        let resolved = resolve(PathTarget::Region(region), index);
        if !resolved.complete {
            warn!(region_id = region.id, slug = %region.slug, "truncated ancestor chain");
        }
        records.push(LocationRecord {
            kind: LocationKind::Region,
            slug: region.slug.clone(),
            name: region.name.clone(),
            path: resolved.render(),
        });
    }

    for site in sites {
        let resolved = resolve(PathTarget::Site(site), index);
        if !resolved.complete {
            warn!(site_id = site.id, slug = %site.slug, "truncated ancestor chain");
        }
        records.push(LocationRecord {
            kind: LocationKind::Site,
            slug: site.slug.clone(),
            name: site.name.clone(),
            path: resolved.render(),
        });
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    records
}
