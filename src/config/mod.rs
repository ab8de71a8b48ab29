//! Run configuration: the built-in catalog, the classifier, and the
//! validated options derived from the command line.
pub mod catalog;
pub mod category;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::platform::Platform;

/// Validated options for a single migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Platform whose home layout is read.
    pub source: Platform,
    /// Platform whose home layout is written.
    pub destination: Platform,
    /// Preview only; never touch the filesystem.
    pub dry_run: bool,
    /// Overwrite destinations that already exist.
    pub force: bool,
    /// Show per-item debug output (including missing sources).
    pub verbose: bool,
    /// Emit the report as JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Validate CLI arguments, defaulting platforms to the current OS.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlatform`] if `--source` or `--dest`
    /// is not a supported platform, or if it was omitted and the current OS
    /// is not one.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_cli_with_default(cli, Platform::detect())
    }

    /// Like [`from_cli`](Self::from_cli) with an explicit default platform.
    ///
    /// # Errors
    ///
    /// See [`from_cli`](Self::from_cli).
    pub fn from_cli_with_default(cli: &Cli, default: Platform) -> Result<Self, ConfigError> {
        Ok(Self {
            source: resolve_platform("source", cli.source.as_deref(), default)?,
            destination: resolve_platform("destination", cli.dest.as_deref(), default)?,
            dry_run: cli.dry_run,
            force: cli.force,
            verbose: cli.verbose,
            json: cli.json,
        })
    }
}

fn resolve_platform(
    role: &'static str,
    arg: Option<&str>,
    default: Platform,
) -> Result<Platform, ConfigError> {
    let name = arg.map_or_else(|| default.to_string(), str::to_string);
    name.parse::<Platform>()
        .map_err(|source| ConfigError::InvalidPlatform { role, source })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("profilesync").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_detected_platform() {
        let config = Config::from_cli_with_default(&cli(&[]), Platform::Macos).unwrap();
        assert_eq!(config.source, Platform::Macos);
        assert_eq!(config.destination, Platform::Macos);
        assert!(config.dry_run);
        assert!(!config.force);
    }

    #[test]
    fn explicit_platforms_override_default() {
        let config = Config::from_cli_with_default(
            &cli(&["--source", "windows", "--dest", "linux"]),
            Platform::Macos,
        )
        .unwrap();
        assert_eq!(config.source, Platform::Windows);
        assert_eq!(config.destination, Platform::Linux);
    }

    #[test]
    fn invalid_source_is_rejected() {
        let err = Config::from_cli_with_default(&cli(&["--source", "amiga"]), Platform::Linux)
            .unwrap_err();
        assert!(err.to_string().contains("invalid source platform"));
        assert!(err.to_string().contains("amiga"));
    }

    #[test]
    fn invalid_dest_is_rejected() {
        let err =
            Config::from_cli_with_default(&cli(&["--dest", "unknown"]), Platform::Linux)
                .unwrap_err();
        assert!(err.to_string().contains("invalid destination platform"));
    }

    #[test]
    fn undetectable_os_without_flags_is_rejected() {
        let result = Config::from_cli_with_default(&cli(&[]), Platform::Unknown);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPlatform { role: "source", .. })
        ));
    }

    #[test]
    fn undetectable_os_with_flags_is_accepted() {
        let config = Config::from_cli_with_default(
            &cli(&["--source", "linux", "--dest", "macos"]),
            Platform::Unknown,
        )
        .unwrap();
        assert_eq!(config.source, Platform::Linux);
        assert_eq!(config.destination, Platform::Macos);
    }

    #[test]
    fn run_mode_flags_are_carried_over() {
        let config = Config::from_cli_with_default(
            &cli(&["--dry-run=false", "--force", "--verbose", "--json"]),
            Platform::Linux,
        )
        .unwrap();
        assert!(!config.dry_run);
        assert!(config.force);
        assert!(config.verbose);
        assert!(config.json);
    }
}
