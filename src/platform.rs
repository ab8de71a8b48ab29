//! Platform identifiers and home-directory resolution.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PlatformError;

/// Operating system layout a profile is migrated from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux (`/home/<user>`).
    Linux,
    /// macOS (`/Users/<user>`).
    Macos,
    /// Windows (`C:\Users\<user>`).
    Windows,
    /// Any other operating system.
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Macos => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    /// Parse a platform accepted on the command line.
    ///
    /// `unknown` is rejected; it only comes from detection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::Macos),
            "windows" => Ok(Self::Windows),
            other => Err(PlatformError::Unknown(other.to_string())),
        }
    }
}

impl Platform {
    /// Detect the platform of the running process.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// Resolve the home directory for this platform from `env`.
    ///
    /// Missing variables interpolate as empty strings, so the result is only
    /// empty for [`Platform::Unknown`] with `HOME` unset; callers decide
    /// whether that is an error.
    pub fn home_dir(self, env: &dyn Environment) -> PathBuf {
        let var = |key: &str| env.var(key).unwrap_or_default();
        let home = match self {
            Self::Linux => {
                non_empty(var("HOME")).unwrap_or_else(|| format!("/home/{}", var("USER")))
            }
            Self::Macos => {
                non_empty(var("HOME")).unwrap_or_else(|| format!("/Users/{}", var("USER")))
            }
            Self::Windows => non_empty(var("USERPROFILE"))
                .unwrap_or_else(|| format!("C:\\Users\\{}", var("USERNAME"))),
            Self::Unknown => var("HOME"),
        };
        PathBuf::from(home)
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Join a catalog fragment onto a home directory.
///
/// Plain segment join: `..` components and symlinks are left untouched.
#[must_use]
pub fn join_fragment(home: &Path, fragment: &str) -> PathBuf {
    home.join(fragment)
}

/// Read-only view of environment variables.
///
/// Abstracted so that home-directory resolution is a pure function of its
/// input in tests.  Production code uses [`SystemEnvironment`].
pub trait Environment: fmt::Debug {
    /// Value of `key`, or `None` when unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`Environment`] backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// [`Environment`] backed by a fixed map, for tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MapEnvironment(pub std::collections::HashMap<String, String>);

#[cfg(test)]
impl MapEnvironment {
    /// Build an environment from `(key, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
