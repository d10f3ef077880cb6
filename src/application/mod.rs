//! Application layer with the lifecycle controller and its sequencers.

/// Connectivity-driven transport and presence orchestration.
pub mod connectivity;
/// The channel lifecycle controller.
pub mod controller;
/// Per-team channel-load sequencing.
pub mod load_sequencer;
/// Explicit team reselection.
pub mod team_switcher;

pub use connectivity::{ConnectivityOrchestrator, SchedulerAction, TransitionPlan, TransportAction};
pub use controller::{ChannelLifecycleController, ControllerDeps, ControllerHandle};
pub use load_sequencer::{LoadPolicy, LoadSequencer};
pub use team_switcher::TeamSwitcher;
