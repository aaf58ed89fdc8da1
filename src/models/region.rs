//! Region model

use super::EntityRef;
use serde::{Deserialize, Serialize};

/// A hierarchical grouping node in the location tree.
///
/// Regions form a forest: each region has at most one parent. Acyclicity is
/// not enforced by the source; the resolver guards against corrupted chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent: Option<EntityRef>,
}

impl Region {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent = Some(EntityRef::new(parent_id));
        self
    }
}
