//! Markdown document storage
//!
//! A [`Document`] holds the full text of the target file in memory. The
//! reader and writer consume it through [`Document::lines`], which can be
//! called any number of times; replacement content is persisted with
//! [`Document::replace`], which renames a temp file over the target so the
//! file is never left half written.
//!
//! Nothing here guards against another process editing the file between
//! [`Document::load`] and [`Document::replace`]: such an edit is lost.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::markdown::render_section;

/// I/O failures on the target document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// In-memory copy of a markdown file
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    /// Read the whole document from disk.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let path = path.into();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DocumentError::Read {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Loaded {} ({} bytes)", path.display(), content.len());
        Ok(Self { path, content })
    }

    /// Wrap content that did not come from disk.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Iterate the document line by line, without line terminators.
    ///
    /// Both `\n` and `\r\n` endings are accepted.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.content.lines()
    }

    /// Content of the document with a new dependency section appended.
    pub fn with_appended_section(&self, runtime_table: &str, dev_table: &str) -> String {
        let mut content = self.content.clone();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&render_section(runtime_table, dev_table));
        content
    }

    /// Atomically replace the file at `path` with `content`.
    ///
    /// The content is written to a temp file in the same directory, which is
    /// then renamed over the target.
    pub async fn replace(path: &Path, content: String) -> Result<(), DocumentError> {
        let target = path.to_path_buf();
        tokio::task::spawn_blocking(move || persist(&target, content.as_bytes()))
            .await
            .map_err(|e| DocumentError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?
    }
}

fn persist(path: &Path, content: &[u8]) -> Result<(), DocumentError> {
    let write_err = |source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
