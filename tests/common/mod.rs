// Shared helpers for integration tests.
//
// Provides a pair of temporary home directories, a fixed environment that
// points the platform resolver at them, and a logger that records every
// message so each integration test can run the engine in isolation.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use profilesync::config::Config;
use profilesync::logging::Log;
use profilesync::platform::{Environment, Platform};

/// [`Environment`] backed by a fixed map of variables.
#[derive(Debug, Default, Clone)]
pub struct FixedEnv(pub HashMap<String, String>);

impl FixedEnv {
    /// Add or replace a variable.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for FixedEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// A [`Log`] that records `(kind, message)` pairs.
#[derive(Debug, Default)]
pub struct CaptureLog {
    entries: Mutex<Vec<(&'static str, String)>>,
}

impl CaptureLog {
    fn push(&self, kind: &'static str, msg: &str) {
        self.entries
            .lock()
            .expect("log mutex")
            .push((kind, msg.to_string()));
    }

    /// Messages recorded under `kind`.
    pub fn messages(&self, kind: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("log mutex")
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Log for CaptureLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push("dry_run", msg);
    }
    fn success(&self, msg: &str) {
        self.push("success", msg);
    }
    fn progress(&self, _done: usize, _total: usize) {}
    fn finish_progress(&self) {}
}

/// Source and destination home directories backed by a [`tempfile::TempDir`].
///
/// The source is resolved as a Linux home (`HOME`) and the destination as a
/// Windows home (`USERPROFILE`), so the two never collide.
pub struct Homes {
    /// Temporary directory containing both homes.
    pub root: tempfile::TempDir,
    /// Source home directory.
    pub source: PathBuf,
    /// Destination home directory.
    pub dest: PathBuf,
}

impl Homes {
    /// Create empty source and destination homes.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let source = root.path().join("linux-home");
        let dest = root.path().join("windows-home");
        std::fs::create_dir_all(&source).expect("create source home");
        std::fs::create_dir_all(&dest).expect("create dest home");
        Self { root, source, dest }
    }

    /// Environment resolving the source and destination homes.
    pub fn env(&self) -> FixedEnv {
        FixedEnv::default()
            .with("HOME", &self.source.to_string_lossy())
            .with("USERPROFILE", &self.dest.to_string_lossy())
    }

    /// Write a file under the source home, creating parents.
    pub fn write_source(&self, fragment: &str, contents: &str) -> PathBuf {
        write_file(&self.source, fragment, contents)
    }

    /// Write a file under the destination home, creating parents.
    pub fn write_dest(&self, fragment: &str, contents: &str) -> PathBuf {
        write_file(&self.dest, fragment, contents)
    }

    /// Read a file under the destination home.
    pub fn read_dest(&self, fragment: &str) -> Option<String> {
        std::fs::read_to_string(self.dest.join(fragment)).ok()
    }
}

fn write_file(home: &Path, fragment: &str, contents: &str) -> PathBuf {
    let path = home.join(fragment);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(&path, contents).expect("write file");
    path
}

/// Linux → Windows run configuration.
pub fn config(dry_run: bool, force: bool) -> Config {
    Config {
        source: Platform::Linux,
        destination: Platform::Windows,
        dry_run,
        force,
        verbose: false,
        json: false,
    }
}

/// A fresh shared [`CaptureLog`].
pub fn capture_log() -> Arc<CaptureLog> {
    Arc::new(CaptureLog::default())
}
