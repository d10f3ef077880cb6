//! Application configuration.

pub mod app_config;
pub mod args;

pub use app_config::{AppConfig, FailurePolicy, LogLevel, PlatformOverride};
pub use args::CliArgs;
