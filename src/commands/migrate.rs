//! The `migrate` command: plan, execute, report.
use std::io::Write as _;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::config::catalog::Catalog;
use crate::logging::Log;
use crate::plan::{Context, MigrationPlan, execute};
use crate::platform::{Environment, SystemEnvironment};
use crate::report::Report;

/// Run the migration with the built-in catalog and the process environment.
///
/// # Errors
///
/// Returns an error if a home directory cannot be resolved or the JSON report
/// cannot be written. Per-item copy failures are reported, not returned.
pub fn run(config: &Config, log: Arc<dyn Log>) -> Result<Report> {
    run_with(config, log, &Catalog::builtin(), &SystemEnvironment)
}

/// Run the migration against an explicit catalog and environment.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    config: &Config,
    log: Arc<dyn Log>,
    catalog: &Catalog,
    env: &dyn Environment,
) -> Result<Report> {
    log.debug(&format!("profilesync {}", env!("PROFILESYNC_VERSION")));

    log.stage("Planning migration");
    log.info(&format!(
        "{} -> {} ({})",
        config.source,
        config.destination,
        if config.dry_run { "dry run" } else { "live" }
    ));
    let mut plan = MigrationPlan::for_platforms(catalog, config.source, config.destination, env)?;
    log.info(&format!("{} items planned", plan.total_items));

    let ctx = Context::from_config(config, Arc::clone(&log));
    execute(&mut plan, &ctx);

    let report = Report::from_plan(&plan, config);
    if config.json {
        let json = report.to_json().context("serializing report")?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{json}").context("writing report")?;
    } else {
        report.print(log.as_ref());
    }
    Ok(report)
}
