//! Client for npm registry

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::http_client::create_shared_client;
use super::{PackageInfo, Registry};
use crate::config::{DEFAULT_REGISTRY_URL, RegistryConfig};

/// Public package pages, linked from every table row
const NPM_PACKAGE_PAGE_URL: &str = "https://www.npmjs.com/package";

/// Client for the npm registry
pub struct NpmRegistry {
    client: Arc<Client>,
    base_url: String,
}

impl NpmRegistry {
    /// Creates an NpmRegistry targeting the public registry with the given client.
    pub fn with_client(client: Arc<Client>) -> Self {
        Self::with_client_and_base_url(client, DEFAULT_REGISTRY_URL)
    }

    /// Creates an NpmRegistry targeting `base_url` (a mirror, a private
    /// registry or a mock server).
    pub fn with_client_and_base_url(client: Arc<Client>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build a registry client from configuration, with its own HTTP client.
    pub fn from_config(config: &RegistryConfig) -> anyhow::Result<Self> {
        let client = create_shared_client(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_client_and_base_url(client, config.url.as_str()))
    }

    pub fn http_client(&self) -> Arc<Client> {
        Arc::clone(&self.client)
    }
}

// API response structures
#[derive(Debug, Deserialize)]
struct PackageResponse {
    name: String,
    description: Option<String>,
    license: Option<LicenseField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    String(String),
    Object { r#type: Option<String> },
}

impl LicenseField {
    fn into_string(self) -> Option<String> {
        match self {
            LicenseField::String(s) => Some(s),
            LicenseField::Object { r#type } => r#type,
        }
    }
}

/// Encode a package name for use as a registry path segment.
///
/// Scoped packages keep their `@` but escape the slash
/// (`@scope/name` becomes `@scope%2fname`).
fn encode_package_name(package_name: &str) -> String {
    if package_name.starts_with('@') {
        package_name.replace('/', "%2f")
    } else {
        package_name.to_string()
    }
}

impl Registry for NpmRegistry {
    async fn get_package_info(&self, package_name: &str) -> anyhow::Result<PackageInfo> {
        if package_name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        let url = format!("{}/{}", self.base_url, encode_package_name(package_name));
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => anyhow::bail!("{} not found in registry", package_name),
            status if !status.is_success() => anyhow::bail!(
                "Failed to fetch package info for {}: {}",
                package_name,
                status
            ),
            _ => {}
        }

        let pkg: PackageResponse = response.json().await?;

        Ok(PackageInfo {
            name: pkg.name,
            description: pkg.description,
            license: pkg.license.and_then(LicenseField::into_string),
        })
    }

    fn package_link(&self, package_name: &str) -> String {
        format!("{NPM_PACKAGE_PAGE_URL}/{package_name}")
    }
}
