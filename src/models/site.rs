//! Site model

use super::EntityRef;
use serde::{Deserialize, Serialize};

/// A physical location attached to at most one region.
///
/// Sites are always leaves of the location tree, never parents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub region: Option<EntityRef>,
}

impl Site {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            region: None,
        }
    }

    pub fn in_region(mut self, region_id: i64) -> Self {
        self.region = Some(EntityRef::new(region_id));
        self
    }
}
