//! Parser for package.json files

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Dependency;

/// Parser for npm package.json dependency files
#[derive(Debug, Default)]
pub struct NpmParser;

/// The two sections of package.json that end up in the README
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<Map<String, Value>>,
}

impl NpmParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse dependencies, reporting malformed JSON as an error.
    ///
    /// Keys keep their order in the file. Sections other than
    /// `dependencies` and `devDependencies` are ignored, and so are the
    /// version specifiers.
    pub fn parse(&self, content: &str) -> anyhow::Result<Vec<Dependency>> {
        let package: PackageJson = serde_json::from_str(content)?;

        let runtime = package
            .dependencies
            .into_iter()
            .flatten()
            .map(|(name, _)| Dependency { name, dev: false });
        let dev = package
            .dev_dependencies
            .into_iter()
            .flatten()
            .map(|(name, _)| Dependency { name, dev: true });

        Ok(runtime.chain(dev).collect())
    }
}
