//! Hierarchy path resolver
//!
//! Reconstructs the ordered ancestor chain for a site or region by walking
//! parent references through a [`RegionIndex`], and renders it as a
//! slash-delimited path under the synthetic `/World` root.
//!
//! Resolution is a pure read of the index snapshot: the same target and
//! index always yield the same path. Data inconsistencies never fail the
//! walk; a dangling reference truncates the ascent and the result is
//! marked incomplete so stricter callers can opt into failing loudly.

use crate::index::RegionIndex;
use crate::models::{Region, Site};
use std::collections::{HashSet, VecDeque};

/// Synthetic root label prepended to every rendered path, representing the
/// top of the hierarchy above all regions.
pub const WORLD_ROOT: &str = "World";

/// What to resolve a path for. Each variant carries only the fields its
/// ascent rule needs: regions climb via `parent`, sites enter the region
/// forest via `region` and append their own name last.
#[derive(Debug, Clone, Copy)]
pub enum PathTarget<'a> {
    Region(&'a Region),
    Site(&'a Site),
}

/// Ordered name sequence from outermost ancestor to the entity itself,
/// excluding the synthetic root. `complete` is false when a dangling
/// reference or a parent cycle truncated the ascent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub segments: Vec<String>,
    pub complete: bool,
}

impl ResolvedPath {
    /// Render as `/World/<seg>/<seg>/...`.
    pub fn render(&self) -> String {
        format!("/{}/{}", WORLD_ROOT, self.segments.join("/"))
    }
}

/// Resolve the ancestor chain for `target` against the region index.
///
/// A site with no region reference resolves to just its own name. A parent
/// reference that is absent from the index stops the ascent at the current
/// region; the source hierarchy does not enforce acyclicity, so a visited
/// set bounds the walk instead of trusting the chain to terminate.
pub fn resolve(target: PathTarget<'_>, regions: &RegionIndex) -> ResolvedPath {
    let mut segments = VecDeque::new();
    let mut complete = true;

    let start = match target {
        PathTarget::Region(region) => Some(region),
        PathTarget::Site(site) => match site.region {
            Some(region_ref) => {
                let found = regions.get(region_ref.id);
                if found.is_none() {
                    complete = false;
                }
                found
            }
            None => None,
        },
    };

    let mut visited: HashSet<i64> = HashSet::new();
    let mut current = start;
    while let Some(region) = current {
        if !visited.insert(region.id) {
            complete = false;
            break;
        }
        segments.push_front(region.name.clone());
        current = match region.parent {
            Some(parent_ref) => {
                let parent = regions.get(parent_ref.id);
                if parent.is_none() {
                    complete = false;
                }
                parent
            }
            None => None,
        };
    }

    if let PathTarget::Site(site) = target {
        segments.push_back(site.name.clone());
    }

    ResolvedPath {
        segments: segments.into(),
        complete,
    }
}
