//! Execution context shared by every plan item.
use std::sync::Arc;

use crate::config::Config;
use crate::logging::Log;

/// Shared context for plan execution.
pub struct Context {
    /// Logger for output and progress.
    pub log: Arc<dyn Log>,
    /// Preview changes without touching the filesystem.
    pub dry_run: bool,
    /// Overwrite destinations that already exist.
    pub force: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("force", &self.force)
            .finish()
    }
}

impl Context {
    /// Creates a new execution context.
    #[must_use]
    pub fn new(log: Arc<dyn Log>, dry_run: bool, force: bool) -> Self {
        Self {
            log,
            dry_run,
            force,
        }
    }

    /// Creates a context carrying the run-mode options of `config`.
    #[must_use]
    pub fn from_config(config: &Config, log: Arc<dyn Log>) -> Self {
        Self::new(log, config.dry_run, config.force)
    }
}
