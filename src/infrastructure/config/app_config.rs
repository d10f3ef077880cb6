//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::load_sequencer::LoadPolicy;
use crate::domain::platform::Platform;

const APP_NAME: &str = "huddle";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What to do when the initial channel load fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Attempt channel selection anyway (degrade, don't hang).
    #[default]
    Proceed,
    /// Surface the load error without selecting.
    Surface,
}

impl FailurePolicy {
    /// Converts to the sequencer's load policy.
    #[must_use]
    pub const fn to_load_policy(self) -> LoadPolicy {
        match self {
            Self::Proceed => LoadPolicy::ProceedOnFailure,
            Self::Surface => LoadPolicy::SurfaceFailure,
        }
    }
}

/// Platform hint override for the transport handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlatformOverride {
    /// Report iOS to the server.
    Ios,
    /// Report Android to the server.
    Android,
    /// Report desktop to the server.
    Desktop,
}

impl PlatformOverride {
    /// Converts to the domain platform hint.
    #[must_use]
    pub const fn to_platform(self) -> Platform {
        match self {
            Self::Ios => Platform::Ios,
            Self::Android => Platform::Android,
            Self::Desktop => Platform::Desktop,
        }
    }
}

/// Application configuration merged from file and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Seconds between periodic presence updates.
    #[serde(default = "default_presence_interval_secs")]
    pub presence_interval_secs: u64,

    /// Channel-load failure policy.
    #[serde(default)]
    pub load_policy: FailurePolicy,

    /// Platform hint override; detected from the build target when unset.
    #[serde(default)]
    pub platform: Option<PlatformOverride>,
}

fn default_presence_interval_secs() -> u64 {
    60
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(interval) = args.presence_interval_secs {
            self.presence_interval_secs = interval;
        }
        if let Some(load_policy) = args.load_policy {
            self.load_policy = load_policy;
        }
        if let Some(platform) = args.platform {
            self.platform = Some(platform);
        }
    }

    /// Returns the effective transport platform hint.
    #[must_use]
    pub fn effective_platform(&self) -> Platform {
        self.platform
            .map_or_else(Platform::detect, PlatformOverride::to_platform)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("huddle.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            presence_interval_secs: default_presence_interval_secs(),
            load_policy: FailurePolicy::Proceed,
            platform: None,
        }
    }
}
