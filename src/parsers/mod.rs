//! Parsers for dependency manifests (package.json)

use std::path::Path;

use anyhow::Context;

/// Represents a dependency declared in a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Whether this is a dev dependency
    pub dev: bool,
}

/// Dependency names split by kind, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDependencies {
    pub runtime: Vec<String>,
    pub development: Vec<String>,
}

impl ManifestDependencies {
    /// Group parsed dependencies into runtime and development names.
    ///
    /// A name listed twice in the same section is kept once, at its first
    /// position.
    pub fn from_dependencies(dependencies: &[Dependency]) -> Self {
        let mut manifest = Self::default();
        for dep in dependencies {
            let names = if dep.dev {
                &mut manifest.development
            } else {
                &mut manifest.runtime
            };
            if !names.contains(&dep.name) {
                names.push(dep.name.clone());
            }
        }
        manifest
    }

    /// Parse `package.json` text, failing on malformed JSON.
    pub fn from_package_json(content: &str) -> anyhow::Result<Self> {
        let dependencies = npm::NpmParser::new().parse(content)?;
        Ok(Self::from_dependencies(&dependencies))
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.development.is_empty()
    }
}

/// Read and parse a `package.json` manifest
pub async fn load_manifest(path: &Path) -> anyhow::Result<ManifestDependencies> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read manifest {}", path.display()))?;

    let manifest = ManifestDependencies::from_package_json(&content)
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    tracing::debug!(
        "Manifest {} declares {} runtime and {} development dependencies",
        path.display(),
        manifest.runtime.len(),
        manifest.development.len()
    );
    Ok(manifest)
}

pub mod npm;
