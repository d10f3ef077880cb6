//! CLI argument surface parsed by the embedding shell.

use clap::Parser;
use std::path::PathBuf;

use super::app_config::{FailurePolicy, LogLevel, PlatformOverride};

/// Command-line arguments merged over the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "huddle",
    version,
    about = "Headless team-chat client core",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Seconds between periodic presence updates.
    #[arg(long, value_name = "SECONDS")]
    pub presence_interval_secs: Option<u64>,

    /// Channel-load failure policy.
    #[arg(long, value_enum)]
    pub load_policy: Option<FailurePolicy>,

    /// Platform hint reported to the server.
    #[arg(long, value_enum)]
    pub platform: Option<PlatformOverride>,
}
