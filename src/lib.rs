//! Huddle - a headless team-chat client core.
//!
//! This crate provides the channel lifecycle and connectivity orchestration
//! that sits behind a chat client's Channel screen: per-team channel loading,
//! reachability-driven transport lifecycle, and teardown. Rendering and the
//! concrete transport live in the embedding shell.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the lifecycle controller and sequencers.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "huddle";
