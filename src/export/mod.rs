//! Export projectors and writer
//!
//! Two pipelines share the path resolver:
//! - `paths`: every region and site, projected to `{type, slug, name, path}`
//! - `devices`: every device with a resolvable site, projected to
//!   `{id, name, mgmt_ip, path}`
//!
//! Both output lists are sorted by the rendered path string; the sort is
//! stable, so entities with identical paths keep source enumeration order.
//! The writer runs only after all data is fetched and resolved, so a fatal
//! error never leaves a partial output file behind.

pub mod devices;
pub mod paths;

pub use devices::{DeviceRecord, project_devices};
pub use paths::{LocationKind, LocationRecord, project_locations};

use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error writing {path}: {message}")]
    Io { path: String, message: String },
}

/// Write a record list as a pretty-printed JSON array, creating parent
/// directories as needed.
pub fn write_pretty_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::Io {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    let body = serde_json::to_string_pretty(records)?;
    std::fs::write(path, body).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), count = records.len(), "wrote export");
    Ok(())
}
