//! Structured console logger with dry-run awareness and a progress line.
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

use super::types::Log;
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger backed by [`tracing`].
///
/// Every message is emitted as a tracing event; the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) renders it on the
/// console and appends it to `$XDG_CACHE_HOME/profilesync/<command>.log`.
/// The logger itself only owns the single-row progress line.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
    show_progress: bool,
    /// Whether a progress line is currently displayed.
    progress_shown: Mutex<bool>,
}

impl Logger {
    /// Create a new logger for `command`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
            show_progress: true,
            progress_shown: Mutex::new(false),
        }
    }

    /// Disable the console progress line (e.g. when stdout carries JSON).
    #[must_use]
    pub const fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        self.clear_progress();
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.clear_progress();
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        self.clear_progress();
        tracing::info!(target: "profilesync::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        self.clear_progress();
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        self.clear_progress();
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        self.clear_progress();
        tracing::info!(target: "profilesync::dry_run", "{msg}");
    }

    /// Log a completed change.
    pub fn success(&self, msg: &str) {
        self.clear_progress();
        tracing::info!(target: "profilesync::success", "{msg}");
    }

    /// Draw the progress line `done/total`, replacing any previous one.
    pub fn progress(&self, done: usize, total: usize) {
        if !self.show_progress {
            return;
        }
        let mut shown = self
            .progress_shown
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut out = std::io::stdout().lock();
        write!(out, "\r\x1b[K  \x1b[2m▹ Progress: {done}/{total}\x1b[0m").ok();
        out.flush().ok();
        *shown = true;
    }

    /// Erase the progress line from the console.
    ///
    /// No-op if no progress line is currently shown.
    pub fn clear_progress(&self) {
        let mut shown = self
            .progress_shown
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *shown {
            let mut out = std::io::stdout().lock();
            write!(out, "\r\x1b[K").ok();
            out.flush().ok();
            *shown = false;
        }
    }

    /// Whether a progress line is currently displayed (test-only).
    #[cfg(test)]
    pub(crate) fn progress_is_shown(&self) -> bool {
        *self
            .progress_shown
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run, success);

    fn progress(&self, done: usize, total: usize) {
        self.progress(done, total);
    }

    fn finish_progress(&self) {
        self.clear_progress();
    }
}
