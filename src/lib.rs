//! NetBox Export SDK - flat JSON exports annotated with hierarchy paths
//!
//! Provides the pieces shared by the `netbox-export` CLI:
//! - Data model for NetBox regions, sites and devices
//! - HTTP client for the NetBox DCIM API (via the `api-backend` feature)
//! - Read-only id indexes built once per run
//! - The hierarchy path resolver (`/World/Region/.../Site`)
//! - Projectors producing the two sorted export lists

pub mod export;
pub mod index;
pub mod models;
pub mod resolve;

#[cfg(feature = "api-backend")]
pub mod client;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use export::{DeviceRecord, ExportError, LocationKind, LocationRecord};
pub use index::{RegionIndex, SiteIndex};
pub use models::{ApiList, Device, EntityRef, IpAssignment, Region, Site};
pub use resolve::{PathTarget, ResolvedPath, WORLD_ROOT, resolve};

#[cfg(feature = "api-backend")]
pub use client::{ClientError, NetBoxClient};
