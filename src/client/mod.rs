//! NetBox API client
//!
//! Blocking HTTP client for the DCIM endpoints the exporter consumes.
//! Each run fetches every collection in a single bounded-size request;
//! cursor-following pagination is out of scope. Any transport failure or
//! non-success status aborts the run with no retries and no partial output.

use crate::models::{ApiList, Device, Region, Site};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

/// Fixed page size; a single request is assumed to satisfy each collection.
const PAGE_LIMIT: u32 = 1000;

/// Request timeout at the collaborator boundary.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for NetBox API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(String),
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("HTTP error {status} fetching {url}")]
    Http { status: u16, url: String },
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Client for a NetBox instance.
pub struct NetBoxClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl NetBoxClient {
    /// Create a client for the given base URL and API token.
    ///
    /// The base URL is the instance root (e.g. `https://netbox.example.com`);
    /// a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Fetch all regions.
    pub fn regions(&self) -> Result<Vec<Region>, ClientError> {
        self.fetch_collection("regions")
    }

    /// Fetch all sites.
    pub fn sites(&self) -> Result<Vec<Site>, ClientError> {
        self.fetch_collection("sites")
    }

    /// Fetch all devices.
    pub fn devices(&self) -> Result<Vec<Device>, ClientError> {
        self.fetch_collection("devices")
    }

    fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, ClientError> {
        let url = format!(
            "{}/api/dcim/{}/?limit={}",
            self.base_url, collection, PAGE_LIMIT
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| ClientError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ClientError::Http {
                status: response.status().as_u16(),
                url,
            });
        }

        let list: ApiList<T> = response.json().map_err(|e| ClientError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        info!(collection, count = list.results.len(), "fetched collection");
        Ok(list.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = NetBoxClient::new("https://netbox.example.com/", "token").unwrap();
        assert_eq!(client.base_url, "https://netbox.example.com");
    }
}
