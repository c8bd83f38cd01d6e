//! Markdown dependency table reconciliation
//!
//! The tables handled here are the ones this tool writes itself:
//!
//! ```text
//! ### Runtime Dependencies
//!
//! Name | Description | License
//! ---- | ----------- | -------
//! [left-pad](https://www.npmjs.com/package/left-pad)|String left pad|WTFPL
//!
//! ```
//!
//! No general markdown parsing is attempted. Headings are matched by exact
//! string equality and rows by a small scanner, so a document edited by hand
//! keeps working only as long as it keeps this exact shape.

use std::collections::HashMap;

pub mod heading;
pub mod reader;
pub mod render;
pub mod row;
pub mod writer;

pub use heading::{HeadingKind, classify, has_dependency_headings, is_dependency_heading};
pub use reader::read_tables;
pub use render::{render_section, render_table};
pub use row::parse_row;
pub use writer::write_tables;

/// Heading of the top-level section created when appending tables to a document
pub const DEPENDENCY_SECTION_HEADING: &str = "## Dependencies";

/// Heading of the runtime dependency table
pub const RUNTIME_DEPENDENCY_HEADING: &str = "### Runtime Dependencies";

/// Heading of the development dependency table
pub const DEVELOPMENT_DEPENDENCY_HEADING: &str = "### Development Dependencies";

/// Column titles and separator row of every rendered table
pub const TABLE_HEADER: &str = "Name | Description | License \n---- | ----------- | ------- \n";

/// One dependency as it appears in a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Package name, never empty
    pub name: String,
    /// Link to the package page on the registry
    pub npm_link: String,
    /// Package description
    pub description: String,
    /// SPDX license expression
    pub license: String,
}

impl DependencyRecord {
    pub fn new(
        name: impl Into<String>,
        npm_link: impl Into<String>,
        description: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            npm_link: npm_link.into(),
            description: description.into(),
            license: license.into(),
        }
    }

    /// Record for a package whose metadata could not be fetched.
    ///
    /// Only the name is known; every other field is an empty string so the
    /// table still gets one row per declared dependency.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, "", "", "")
    }

    /// Whether this record carries nothing but a name
    pub fn is_placeholder(&self) -> bool {
        self.npm_link.is_empty() && self.description.is_empty() && self.license.is_empty()
    }
}

/// Records found in a document, keyed by package name
pub type DependencyMapping = HashMap<String, DependencyRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_only_name() {
        let record = DependencyRecord::placeholder("left-pad");
        assert_eq!(record.name, "left-pad");
        assert_eq!(record.npm_link, "");
        assert_eq!(record.description, "");
        assert_eq!(record.license, "");
        assert!(record.is_placeholder());
    }

    #[test]
    fn test_full_record_is_not_placeholder() {
        let record = DependencyRecord::new("foo", "", "", "MIT");
        assert!(!record.is_placeholder());
    }
}
