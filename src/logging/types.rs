//! The [`Log`] trait shared by the console logger and test doubles.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) writes through `tracing` to the console
/// and the log file; tests substitute a recording implementation so engine
/// code can be checked without a subscriber.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (shown on the console only when verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Log a completed change.
    fn success(&self, msg: &str);
    /// Show `done` of `total` items processed.
    fn progress(&self, done: usize, total: usize);
    /// Remove the progress line, if any.
    fn finish_progress(&self);
}
