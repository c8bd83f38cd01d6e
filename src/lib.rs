//! readme-deps - keeps the dependency tables of a README in sync with package.json
//!
//! This crate locates the `### Runtime Dependencies` and
//! `### Development Dependencies` tables inside a markdown document, reads the
//! records they already hold, and rewrites them from freshly fetched npm
//! registry metadata while leaving the rest of the document untouched.

pub mod config;
pub mod document;
pub mod markdown;
pub mod parsers;
pub mod prompt;
pub mod registries;
pub mod sync;
