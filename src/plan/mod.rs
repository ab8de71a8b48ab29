//! Migration planning: one item per catalog entry, with resolved paths.
//!
//! A [`MigrationPlan`] is built without touching the filesystem and then
//! walked by [`execute`], which attaches an [`ItemOutcome`] to every item.
mod context;
mod execute;

pub use context::Context;
pub use execute::execute;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::catalog::Catalog;
use crate::config::category::classify;
use crate::error::ConfigError;
use crate::platform::{Environment, Platform, join_fragment};

/// What happened to a single item during execution.
///
/// # Examples
///
/// ```
/// use profilesync::plan::ItemOutcome;
///
/// assert!(ItemOutcome::SkippedExists.is_skipped());
/// assert!(!ItemOutcome::WouldMigrate.is_skipped());
/// assert_eq!(ItemOutcome::SkippedMissingSource.label(), "skipped (not found)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// The file was copied.
    Migrated,
    /// Dry run: the file would have been copied.
    WouldMigrate,
    /// The source path does not exist.
    SkippedMissingSource,
    /// The destination exists and `--force` was not given, or it is the
    /// source itself.
    SkippedExists,
    /// Directory creation or copy failed.
    Failed {
        /// Error chain of the failure.
        reason: String,
    },
}

impl ItemOutcome {
    /// Whether the item was skipped for either reason.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedMissingSource | Self::SkippedExists)
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Migrated => "migrated",
            Self::WouldMigrate => "would migrate",
            Self::SkippedMissingSource => "skipped (not found)",
            Self::SkippedExists => "skipped (exists)",
            Self::Failed { .. } => "failed",
        }
    }
}

/// A single planned copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationItem {
    /// Absolute source path.
    pub source_path: PathBuf,
    /// Absolute destination path.
    pub destination_path: PathBuf,
    /// Classifier label of the source fragment.
    pub category: &'static str,
    /// Catalog description of the source fragment.
    pub description: String,
    /// Set once by [`execute`]; `None` until then.
    pub outcome: Option<ItemOutcome>,
}

/// Ordered list of items for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationPlan {
    /// Items in catalog order.
    pub items: Vec<MigrationItem>,
    /// Number of items in the plan.
    pub total_items: usize,
    /// Items skipped during execution (missing source or existing target).
    pub skipped_items: usize,
}

impl MigrationPlan {
    /// Build a plan from `catalog` against two home directories.
    ///
    /// Pure: no filesystem access, same input gives the same plan.
    #[must_use]
    pub fn build(catalog: &Catalog, source_home: &Path, destination_home: &Path) -> Self {
        let items: Vec<MigrationItem> = catalog
            .entries()
            .map(|entry| MigrationItem {
                source_path: join_fragment(source_home, &entry.source),
                destination_path: join_fragment(destination_home, &entry.destination),
                category: classify(&entry.source),
                description: catalog.description(&entry.source).to_string(),
                outcome: None,
            })
            .collect();
        Self {
            total_items: items.len(),
            skipped_items: 0,
            items,
        }
    }

    /// Resolve both home directories from `env` and build the plan.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHome`] when either home directory resolves
    /// to an empty path.
    pub fn for_platforms(
        catalog: &Catalog,
        source: Platform,
        destination: Platform,
        env: &dyn Environment,
    ) -> Result<Self, ConfigError> {
        let source_home = resolve_home(source, env)?;
        let destination_home = resolve_home(destination, env)?;
        Ok(Self::build(catalog, &source_home, &destination_home))
    }

    /// Tally the outcomes recorded so far.
    #[must_use]
    pub fn stats(&self) -> ExecutionStats {
        let mut stats = ExecutionStats::default();
        for outcome in self.items.iter().filter_map(|i| i.outcome.as_ref()) {
            match outcome {
                ItemOutcome::Migrated => stats.migrated += 1,
                ItemOutcome::WouldMigrate => stats.would_migrate += 1,
                ItemOutcome::SkippedMissingSource => stats.skipped_missing_source += 1,
                ItemOutcome::SkippedExists => stats.skipped_exists += 1,
                ItemOutcome::Failed { .. } => stats.failed += 1,
            }
        }
        stats
    }
}

fn resolve_home(platform: Platform, env: &dyn Environment) -> Result<PathBuf, ConfigError> {
    let home = platform.home_dir(env);
    if home.as_os_str().is_empty() {
        return Err(ConfigError::EmptyHome {
            platform: platform.to_string(),
        });
    }
    Ok(home)
}

/// Per-outcome counters for an executed plan.
///
/// # Examples
///
/// ```
/// use profilesync::plan::ExecutionStats;
///
/// let stats = ExecutionStats { migrated: 3, skipped_exists: 1, ..Default::default() };
/// assert_eq!(stats.skipped(), 1);
/// assert_eq!(stats.summary(false), "3 migrated, 1 skipped, 0 failed");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
    /// Items copied.
    pub migrated: usize,
    /// Items that would be copied (dry run).
    pub would_migrate: usize,
    /// Items whose source does not exist.
    pub skipped_missing_source: usize,
    /// Items whose destination already exists.
    pub skipped_exists: usize,
    /// Items whose copy failed.
    pub failed: usize,
}

impl ExecutionStats {
    /// Items skipped for either reason.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_missing_source + self.skipped_exists
    }

    /// Items with any recorded outcome.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.migrated + self.would_migrate + self.skipped() + self.failed
    }

    /// Format the summary line (e.g. "3 migrated, 1 skipped, 0 failed").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        if dry_run {
            format!(
                "{} would migrate, {} skipped, {} failed",
                self.would_migrate,
                self.skipped(),
                self.failed
            )
        } else {
            format!(
                "{} migrated, {} skipped, {} failed",
                self.migrated,
                self.skipped(),
                self.failed
            )
        }
    }
}
