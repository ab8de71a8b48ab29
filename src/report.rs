//! Aggregated migration report: summary counts, category groups, and
//! per-item records, rendered as text or JSON.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Config;
use crate::logging::Log;
use crate::plan::{ExecutionStats, MigrationItem, MigrationPlan};
use crate::platform::Platform;

const RULE_WIDTH: usize = 60;

/// Summary of an executed plan.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Platform the profile was read from.
    pub source: Platform,
    /// Platform the profile was written to.
    pub destination: Platform,
    /// Whether this was a preview run.
    pub dry_run: bool,
    /// Number of items in the plan.
    pub total: usize,
    /// `total - skipped`; includes failed items.
    pub migrated: usize,
    /// Items skipped for either reason.
    pub skipped: usize,
    /// Items whose copy failed.
    pub failed: usize,
    /// Exact per-outcome counters.
    pub stats: ExecutionStats,
    /// Item count per category label, sorted by label.
    pub categories: BTreeMap<&'static str, usize>,
    /// Every item with its outcome, in plan order.
    pub items: Vec<MigrationItem>,
}

impl Report {
    /// Aggregate an executed plan.
    #[must_use]
    pub fn from_plan(plan: &MigrationPlan, config: &Config) -> Self {
        let stats = plan.stats();
        let mut categories = BTreeMap::new();
        for item in &plan.items {
            *categories.entry(item.category).or_insert(0) += 1;
        }
        Self {
            source: config.source,
            destination: config.destination,
            dry_run: config.dry_run,
            total: plan.total_items,
            migrated: plan.total_items.saturating_sub(plan.skipped_items),
            skipped: plan.skipped_items,
            failed: stats.failed,
            stats,
            categories,
            items: plan.items.clone(),
        }
    }

    /// Render the human-readable report body, one line per entry.
    #[must_use]
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mode = if self.dry_run { "DRY RUN" } else { "LIVE" };
        let mut lines = vec![
            rule.clone(),
            "MIGRATION REPORT".to_string(),
            rule.clone(),
            format!("Source platform:   {}", self.source),
            format!("Destination:       {}", self.destination),
            format!("Mode:              {mode}"),
            format!("Migrated:          {}", self.migrated),
            format!("Skipped:           {}", self.skipped),
            format!("Failed:            {}", self.failed),
            rule.clone(),
            "Items by category:".to_string(),
        ];
        lines.extend(self.categories.iter().map(|(category, count)| {
            let noun = if *count == 1 { "item" } else { "items" };
            format!("  • {category}: {count} {noun}")
        }));
        lines.push(rule);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Closing notice for the run mode.
    #[must_use]
    pub fn notice(&self) -> &'static [&'static str] {
        if self.dry_run {
            &[
                "This was a DRY RUN. No files were actually migrated.",
                "Run with --dry-run=false to perform the actual migration.",
            ]
        } else {
            &["Migration complete!"]
        }
    }

    /// Print the text report through `log`.
    pub fn print(&self, log: &dyn Log) {
        for line in self.render_text().lines() {
            log.info(line);
        }
        for line in self.notice() {
            if self.dry_run {
                log.dry_run(line);
            } else {
                log.success(line);
            }
        }
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
