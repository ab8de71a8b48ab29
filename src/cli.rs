//! Command-line argument definitions.
use clap::Parser;

/// Command-line interface for the profile migration tool.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "profilesync",
    about = "Migrate developer tool configuration between platforms",
    version = env!("PROFILESYNC_VERSION")
)]
pub struct Cli {
    /// Source platform (linux, macos, windows) [default: current OS]
    #[arg(long)]
    pub source: Option<String>,

    /// Destination platform (linux, macos, windows) [default: current OS]
    #[arg(long)]
    pub dest: Option<String>,

    /// Preview migration without making changes (use --dry-run=false to apply)
    #[arg(
        short = 'd',
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub dry_run: bool,

    /// Overwrite existing files at the destination
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the migration report as JSON
    #[arg(long)]
    pub json: bool,
}
