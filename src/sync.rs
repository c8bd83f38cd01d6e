//! Reconciliation of the README tables with the manifest
//!
//! One run reads the records already documented, resolves a record for every
//! declared dependency, renders both tables and either rewrites the existing
//! sections in place or, after confirmation, appends a new section.

use std::path::PathBuf;

use anyhow::Context;
use futures::StreamExt;
use futures::stream;

use crate::config::{Config, MergePolicy};
use crate::document::Document;
use crate::markdown::{
    DependencyMapping, DependencyRecord, has_dependency_headings, read_tables, render_table,
    write_tables,
};
use crate::parsers::load_manifest;
use crate::prompt::{Answer, Confirm};
use crate::registries::{Registry, lookup_record};

/// Resolve one record per name, in the order given.
///
/// Lookups run concurrently, at most `concurrency` at a time. With
/// [`MergePolicy::PreferExisting`] a documented record is reused without a
/// lookup; with [`MergePolicy::PreferFresh`] the fetched record wins unless the
/// lookup failed and the document already knows the package.
pub async fn resolve_records<R: Registry>(
    names: &[String],
    existing: &DependencyMapping,
    registry: &R,
    policy: MergePolicy,
    concurrency: usize,
) -> Vec<DependencyRecord> {
    stream::iter(names)
        .map(|name| async move {
            let known = existing.get(name);
            if let (MergePolicy::PreferExisting, Some(record)) = (policy, known) {
                tracing::debug!("Reusing documented record for {}", name);
                return record.clone();
            }

            let fetched = lookup_record(registry, name).await;
            match known {
                Some(record) if fetched.is_placeholder() => {
                    tracing::debug!("Keeping documented record for {}", name);
                    record.clone()
                }
                _ => fetched,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// How the document was (or would be) changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Existing tables were rewritten in place
    Overwritten,
    /// A new `## Dependencies` section was added at the end
    Appended,
}

/// Result of a run that produced a document
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub action: SyncAction,
    pub runtime: Vec<DependencyRecord>,
    pub development: Vec<DependencyRecord>,
    /// Full text of the new document
    pub content: String,
    /// Whether `content` was written to disk
    pub written: bool,
}

#[derive(Debug, Clone)]
pub enum SyncOutcome {
    Updated(SyncReport),
    /// No tables were found and the user did not want them added
    Declined,
    /// The manifest declares no dependencies
    NoDependencies,
}

/// Run-level settings
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub readme: PathBuf,
    pub manifest: PathBuf,
    pub merge_policy: MergePolicy,
    pub concurrency: usize,
    /// Build the new document without writing it
    pub dry_run: bool,
}

impl From<&Config> for SyncOptions {
    fn from(config: &Config) -> Self {
        Self {
            readme: config.readme.clone(),
            manifest: config.manifest.clone(),
            merge_policy: config.sync.merge_policy,
            concurrency: config.registry.concurrency,
            dry_run: false,
        }
    }
}

/// Drives one reconciliation run
pub struct Synchronizer<R, C> {
    registry: R,
    prompt: C,
    options: SyncOptions,
}

impl<R: Registry, C: Confirm> Synchronizer<R, C> {
    pub fn new(registry: R, prompt: C, options: SyncOptions) -> Self {
        Self {
            registry,
            prompt,
            options,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<SyncOutcome> {
        let document = Document::load(&self.options.readme).await?;
        let existing = read_tables(document.lines());
        let has_tables = has_dependency_headings(document.lines());

        let action = if has_tables {
            SyncAction::Overwritten
        } else {
            let file_name = document.path().display().to_string();
            tracing::info!("There were no dependencies found in {}", file_name);
            let question =
                format!("Would you like to append the dependency tables to {file_name}?");
            match self.prompt.confirm(&question)? {
                Answer::Yes => SyncAction::Appended,
                Answer::No => {
                    tracing::info!("No dependency tables found and appending was declined");
                    return Ok(SyncOutcome::Declined);
                }
            }
        };

        let manifest = load_manifest(&self.options.manifest).await?;
        if manifest.is_empty() {
            tracing::info!("No dependencies found in {}", self.options.manifest.display());
            return Ok(SyncOutcome::NoDependencies);
        }

        let runtime = resolve_records(
            &manifest.runtime,
            &existing,
            &self.registry,
            self.options.merge_policy,
            self.options.concurrency,
        )
        .await;
        let development = resolve_records(
            &manifest.development,
            &existing,
            &self.registry,
            self.options.merge_policy,
            self.options.concurrency,
        )
        .await;

        tracing::info!("Found {} packages in dependencies", runtime.len());
        tracing::info!("Found {} packages in dev dependencies", development.len());

        let runtime_table = render_table(&runtime);
        let dev_table = render_table(&development);

        let content = match action {
            SyncAction::Overwritten => write_tables(document.lines(), &runtime_table, &dev_table),
            SyncAction::Appended => document.with_appended_section(&runtime_table, &dev_table),
        };

        let written = !self.options.dry_run;
        if written {
            Document::replace(document.path(), content.clone())
                .await
                .with_context(|| format!("failed to update {}", document.path().display()))?;
        }

        Ok(SyncOutcome::Updated(SyncReport {
            action,
            runtime,
            development,
            content,
            written,
        }))
    }
}
