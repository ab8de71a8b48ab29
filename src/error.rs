//! Domain-specific error types for the profile migration engine.
//!
//! Internal modules return typed errors built with [`thiserror`]; the command
//! layer converts them to [`anyhow::Error`] via `?`, so a fatal error ends the
//! process with exit code 1.
//!
//! # Error hierarchy
//!
//! ```text
//! PlatformError: unparseable platform name
//! ConfigError:   invalid CLI platform, unusable home directory
//! CatalogError:  malformed mapping catalog
//! ```
//!
//! Per-item copy failures are not part of this hierarchy: they
//! are recorded as [`ItemOutcome::Failed`](crate::plan::ItemOutcome::Failed)
//! and never abort a run.

use thiserror::Error;

/// Errors that arise when parsing a platform identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The name is not one of the supported platforms.
    #[error("unknown platform '{0}': must be one of linux, macos, windows")]
    Unknown(String),
}

/// Errors that arise while turning CLI arguments into a run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `--source` or `--dest` value is not a supported platform.
    #[error("invalid {role} platform: {source}")]
    InvalidPlatform {
        /// Which argument was rejected (`"source"` or `"destination"`).
        role: &'static str,
        /// Underlying parse error.
        source: PlatformError,
    },

    /// The home directory for a platform resolved to an empty path.
    #[error("cannot resolve home directory for platform '{platform}'")]
    EmptyHome {
        /// Platform whose home directory is empty.
        platform: String,
    },
}

/// Errors that arise when constructing a mapping catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share the same source fragment.
    #[error("duplicate source fragment in catalog: {0}")]
    Duplicate(String),

    /// An entry has an empty source or destination fragment.
    #[error("empty fragment in catalog entry for '{0}'")]
    EmptyFragment(String),
}
