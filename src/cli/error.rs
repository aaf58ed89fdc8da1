//! Error types for the CLI

use crate::client::ClientError;
use crate::export::ExportError;

/// Error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing NetBox URL (pass --url or set NETBOX_URL)")]
    MissingUrl,
    #[error("Missing NetBox token (pass --token or set NETBOX_TOKEN)")]
    MissingToken,
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
