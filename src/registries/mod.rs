//! Registry clients for fetching package metadata

use crate::markdown::DependencyRecord;

/// Package metadata relevant to the dependency tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Canonical package name as reported by the registry
    pub name: String,
    /// Package description
    pub description: Option<String>,
    /// SPDX license identifier
    pub license: Option<String>,
}

/// Trait for registry clients
/// Note: async_fn_in_trait is allowed because this trait is internal and already bounds Send + Sync
#[allow(async_fn_in_trait)]
pub trait Registry: Send + Sync {
    /// Get metadata for a package
    async fn get_package_info(&self, package_name: &str) -> anyhow::Result<PackageInfo>;

    /// Public web page of a package
    fn package_link(&self, package_name: &str) -> String;
}

/// Look a dependency up and turn the result into a table record.
///
/// A package that cannot be found, or a request that fails, yields
/// [`DependencyRecord::placeholder`] so the table still lists the dependency.
/// Line breaks in the metadata are folded into spaces, since every record
/// must render as a single row.
pub async fn lookup_record<R: Registry>(registry: &R, package_name: &str) -> DependencyRecord {
    match registry.get_package_info(package_name).await {
        Ok(info) => DependencyRecord::new(
            package_name,
            registry.package_link(package_name),
            single_line(info.description.as_deref().unwrap_or_default()),
            single_line(info.license.as_deref().unwrap_or_default()),
        ),
        Err(e) => {
            tracing::warn!("Could not find {}: {:#}", package_name, e);
            DependencyRecord::placeholder(package_name)
        }
    }
}

/// Replace each run of `\r`/`\n` characters with one space
fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

pub mod http_client;
pub mod npm;
