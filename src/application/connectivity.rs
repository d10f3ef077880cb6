//! Connectivity-driven transport and presence orchestration.

use std::sync::Arc;

use tracing::info;

use crate::domain::connection::ConnectionStatus;
use crate::domain::platform::Platform;
use crate::domain::ports::{ConnectionStatePort, PresencePort, TransportPort};

/// Transport side of a connectivity transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    /// Open the persistent connection.
    Open,
    /// Close the persistent connection.
    Close {
        /// Whether a reconnect may follow this close.
        retryable: bool,
    },
}

/// Presence-scheduler side of a connectivity transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    /// Start periodic presence updates.
    Start,
    /// Stop periodic presence updates.
    Stop,
}

/// The full, ordered effect of entering a connectivity state.
///
/// Execution order is fixed: transport action, then scheduler action, then
/// the connection-state record write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Transport action to issue first.
    pub transport: TransportAction,
    /// Scheduler action to issue second.
    pub scheduler: SchedulerAction,
    /// Connection state to record last.
    pub record_connected: bool,
}

/// Transition table: one plan per reachable state.
#[must_use]
pub const fn plan_for(status: ConnectionStatus) -> TransitionPlan {
    match status {
        ConnectionStatus::Connected => TransitionPlan {
            transport: TransportAction::Open,
            scheduler: SchedulerAction::Start,
            record_connected: true,
        },
        ConnectionStatus::Disconnected => TransitionPlan {
            transport: TransportAction::Close { retryable: true },
            scheduler: SchedulerAction::Stop,
            record_connected: false,
        },
    }
}

/// Translates reachability signals into transport and presence actions.
///
/// Every monitor signal is processed, in order, into exactly one transport
/// action and one scheduler action; rapid flapping produces a matching
/// number of open/close and start/stop calls. No debouncing, no coalescing.
pub struct ConnectivityOrchestrator {
    transport: Arc<dyn TransportPort>,
    presence: Arc<dyn PresencePort>,
    connection_state: Arc<dyn ConnectionStatePort>,
    platform: Platform,
}

impl ConnectivityOrchestrator {
    /// Creates an orchestrator over the given collaborators.
    #[must_use]
    pub fn new(
        transport: Arc<dyn TransportPort>,
        presence: Arc<dyn PresencePort>,
        connection_state: Arc<dyn ConnectionStatePort>,
        platform: Platform,
    ) -> Self {
        Self {
            transport,
            presence,
            connection_state,
            platform,
        }
    }

    /// Applies the transition for a reachability signal.
    pub fn handle_reachability(&self, reachable: bool) {
        let status = ConnectionStatus::from_reachable(reachable);
        let plan = plan_for(status);

        info!(status = %status, "Network reachability changed");

        match plan.transport {
            TransportAction::Open => self.transport.open_connection(self.platform),
            TransportAction::Close { retryable } => self.transport.close_connection(retryable),
        }

        match plan.scheduler {
            SchedulerAction::Start => self.presence.start_periodic_updates(),
            SchedulerAction::Stop => self.presence.stop_periodic_updates(),
        }

        self.connection_state.set_connection_state(plan.record_connected);
    }
}
