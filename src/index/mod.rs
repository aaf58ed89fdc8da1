//! Read-only id indexes for regions and sites
//!
//! Built once per run from the fetched collections and only read afterwards.
//! Identifiers are assumed unique at the source; if duplicates occur the
//! later record wins. A failed lookup means "stop ascending" for the path
//! resolver, never a fatal error.

use crate::models::{Region, Site};
use std::collections::HashMap;

/// Identifier to record mapping for regions.
#[derive(Debug, Default)]
pub struct RegionIndex {
    by_id: HashMap<i64, Region>,
}

impl RegionIndex {
    pub fn build(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            by_id: regions.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Region> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Identifier to record mapping for sites.
#[derive(Debug, Default)]
pub struct SiteIndex {
    by_id: HashMap<i64, Site>,
}

impl SiteIndex {
    pub fn build(sites: impl IntoIterator<Item = Site>) -> Self {
        Self {
            by_id: sites.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Site> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
