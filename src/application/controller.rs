//! The channel lifecycle controller.
//!
//! One controller instance is mounted per Channel screen. It owns the
//! subscriptions to the three signal sources (team selection, network
//! reachability, membership events) and drives the loader, transport,
//! presence scheduler, and connection-state collaborators. It renders
//! nothing.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::connectivity::ConnectivityOrchestrator;
use super::load_sequencer::{LoadPolicy, LoadSequencer};
use crate::domain::entities::TeamId;
use crate::domain::events::MembershipEvent;
use crate::domain::platform::Platform;
use crate::domain::ports::{
    ChannelLoaderPort, ConnectionStatePort, MembershipEventsPort, NetworkMonitorPort,
    PresencePort, SubscriptionId, TransportPort,
};

/// Collaborator bundle handed to [`ChannelLifecycleController::mount`].
pub struct ControllerDeps {
    /// Store-backed channel loading operations.
    pub loader: Arc<dyn ChannelLoaderPort>,
    /// Persistent live-update transport.
    pub transport: Arc<dyn TransportPort>,
    /// Periodic presence-update scheduler.
    pub presence: Arc<dyn PresencePort>,
    /// Shared connection-state record.
    pub connection_state: Arc<dyn ConnectionStatePort>,
    /// Network reachability monitor.
    pub network_monitor: Arc<dyn NetworkMonitorPort>,
    /// Team-membership event bus.
    pub membership_events: Arc<dyn MembershipEventsPort>,
}

/// Host-side handle paired with a mounted controller.
///
/// Dropping the handle also requests shutdown, since the controller cannot
/// outlive its host surface meaningfully.
pub struct ControllerHandle {
    shutdown_tx: watch::Sender<bool>,
    sequencer: Arc<LoadSequencer>,
    team_rx: watch::Receiver<Option<TeamId>>,
}

impl ControllerHandle {
    /// Requests the controller loop to stop and tear down.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Returns whether the most recent channel-list fetch failed.
    ///
    /// The host's error surface uses this to offer a retry instead of a
    /// perpetual loading indicator.
    #[must_use]
    pub fn channels_request_failed(&self) -> bool {
        self.sequencer.channels_request_failed()
    }

    /// Re-runs the load sequence for the currently selected team.
    pub fn retry_load(&self) {
        let team = self.team_rx.borrow().clone().filter(|t| !t.is_empty());
        match team {
            Some(team) => {
                info!(team_id = %team, "Retrying channel load");
                spawn_load(&self.sequencer, team);
            }
            None => warn!("Load retry requested with no team selected"),
        }
    }
}

/// Orchestrates channel loading, connectivity, and teardown for the Channel
/// screen.
pub struct ChannelLifecycleController {
    loader: Arc<dyn ChannelLoaderPort>,
    transport: Arc<dyn TransportPort>,
    presence: Arc<dyn PresencePort>,
    network_monitor: Arc<dyn NetworkMonitorPort>,
    membership_events: Arc<dyn MembershipEventsPort>,
    sequencer: Arc<LoadSequencer>,
    orchestrator: ConnectivityOrchestrator,
    team_rx: watch::Receiver<Option<TeamId>>,
    network_sub: SubscriptionId,
    network_rx: mpsc::UnboundedReceiver<bool>,
    membership_sub: SubscriptionId,
    membership_rx: mpsc::UnboundedReceiver<MembershipEvent>,
    shutdown_rx: watch::Receiver<bool>,
    current_team: Option<TeamId>,
    torn_down: bool,
}

impl ChannelLifecycleController {
    /// Mounts a controller: subscribes to the signal sources and, if a team
    /// is already selected, starts loading it.
    #[must_use]
    pub fn mount(
        deps: ControllerDeps,
        mut team_rx: watch::Receiver<Option<TeamId>>,
        platform: Platform,
        policy: LoadPolicy,
    ) -> (Self, ControllerHandle) {
        let (membership_sub, membership_rx) = deps.membership_events.subscribe();
        let (network_sub, network_rx) = deps.network_monitor.subscribe();

        let sequencer = Arc::new(LoadSequencer::new(Arc::clone(&deps.loader), policy));
        let orchestrator = ConnectivityOrchestrator::new(
            Arc::clone(&deps.transport),
            Arc::clone(&deps.presence),
            Arc::clone(&deps.connection_state),
            platform,
        );

        let current_team = team_rx.borrow_and_update().clone().filter(|t| !t.is_empty());
        if let Some(team) = &current_team {
            debug!(team_id = %team, "Team already selected at mount");
            spawn_load(&sequencer, team.clone());
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = ControllerHandle {
            shutdown_tx,
            sequencer: Arc::clone(&sequencer),
            team_rx: team_rx.clone(),
        };

        let controller = Self {
            loader: deps.loader,
            transport: deps.transport,
            presence: deps.presence,
            network_monitor: deps.network_monitor,
            membership_events: deps.membership_events,
            sequencer,
            orchestrator,
            team_rx,
            network_sub,
            network_rx,
            membership_sub,
            membership_rx,
            shutdown_rx,
            current_team,
            torn_down: false,
        };

        (controller, handle)
    }

    /// Runs the signal loop until shutdown is requested, then tears down.
    ///
    /// Handlers never block the loop: load chains are spawned, so
    /// connectivity and membership signals interleave freely with pending
    /// loads. Loss of the team-selection source is treated as shutdown.
    pub async fn run(&mut self) {
        loop {
            tokio::select! {
                changed = self.team_rx.changed() => {
                    if changed.is_err() {
                        debug!("Team selection source closed");
                        break;
                    }
                    let next = self.team_rx.borrow_and_update().clone();
                    self.handle_team_selection(next);
                }

                Some(reachable) = self.network_rx.recv() => {
                    self.orchestrator.handle_reachability(reachable);
                }

                Some(event) = self.membership_rx.recv() => {
                    self.handle_membership_event(&event);
                }

                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        self.teardown();
    }

    fn handle_team_selection(&mut self, next: Option<TeamId>) {
        let next = next.filter(|t| !t.is_empty());

        let Some(team) = next else {
            self.current_team = None;
            return;
        };

        if self.current_team.as_ref() == Some(&team) {
            return;
        }

        info!(team_id = %team, "Current team changed");
        self.current_team = Some(team.clone());
        spawn_load(&self.sequencer, team);
    }

    fn handle_membership_event(&self, event: &MembershipEvent) {
        match event {
            MembershipEvent::LeftTeam { team_id } => {
                info!(team_id = %team_id, "Left current team, falling back");

                // The resulting team-selection change retriggers loading;
                // no direct load sequencing here.
                let loader = Arc::clone(&self.loader);
                tokio::spawn(async move {
                    if let Err(e) = loader.select_first_available_team().await {
                        warn!(error = %e, "Fallback team selection failed");
                    }
                });
            }
        }
    }

    /// Tears the controller down: releases both signal subscriptions, then
    /// issues a terminal transport close and stops the presence scheduler.
    ///
    /// Runs at most once; later calls (including the `Drop` backstop) are
    /// no-ops. In-flight load chains are not cancelled.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        // Signal sources first, so no further orchestration can fire.
        self.membership_events.release(self.membership_sub);
        self.network_monitor.release(self.network_sub);

        self.transport.close_connection(false);
        self.presence.stop_periodic_updates();

        info!("Channel lifecycle controller torn down");
    }
}

impl Drop for ChannelLifecycleController {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn spawn_load(sequencer: &Arc<LoadSequencer>, team_id: TeamId) {
    let sequencer = Arc::clone(sequencer);
    tokio::spawn(async move {
        match sequencer.run(&team_id).await {
            Ok(()) => debug!(team_id = %team_id, "Load chain resolved"),
            Err(e) => warn!(team_id = %team_id, error = %e, "Load chain failed"),
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::watch;

    use super::*;
    use crate::domain::ports::mocks::{
        MockChannelLoader, MockConnectionState, MockPresenceScheduler, MockTransport, Recorder,
    };
    use crate::infrastructure::membership_bus::MembershipBus;
    use crate::infrastructure::network_hub::NetworkMonitorHub;

    struct Fixture {
        recorder: Recorder,
        loader: Arc<MockChannelLoader>,
        hub: Arc<NetworkMonitorHub>,
        bus: Arc<MembershipBus>,
        team_tx: watch::Sender<Option<TeamId>>,
    }

    fn fixture() -> Fixture {
        let recorder = Recorder::new();
        let (team_tx, _) = watch::channel(None);
        Fixture {
            loader: MockChannelLoader::new(recorder.clone()),
            hub: Arc::new(NetworkMonitorHub::new()),
            bus: Arc::new(MembershipBus::new()),
            recorder,
            team_tx,
        }
    }

    fn mount(fixture: &Fixture) -> (ChannelLifecycleController, ControllerHandle) {
        let deps = ControllerDeps {
            loader: fixture.loader.clone(),
            transport: MockTransport::new(fixture.recorder.clone()),
            presence: MockPresenceScheduler::new(fixture.recorder.clone()),
            connection_state: MockConnectionState::new(fixture.recorder.clone()),
            network_monitor: fixture.hub.clone(),
            membership_events: fixture.bus.clone(),
        };
        ChannelLifecycleController::mount(
            deps,
            fixture.team_tx.subscribe(),
            Platform::Desktop,
            LoadPolicy::ProceedOnFailure,
        )
    }

    async fn wait_until(recorder: &Recorder, pred: impl Fn(&[String]) -> bool) {
        for _ in 0..500 {
            if pred(&recorder.calls()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("condition not met, calls: {:?}", recorder.calls());
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_with_selected_team_loads_it() {
        let fixture = fixture();
        fixture.team_tx.send_replace(Some(TeamId::new("team-a")));

        let (_controller, _handle) = mount(&fixture);

        wait_until(&fixture.recorder, |calls| {
            calls.contains(&"select_initial_channel(team-a)".to_string())
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_team_selection_change_triggers_load_once() {
        let fixture = fixture();
        let (mut controller, _handle) = mount(&fixture);
        tokio::spawn(async move { controller.run().await });

        fixture.team_tx.send_replace(Some(TeamId::new("team-b")));
        wait_until(&fixture.recorder, |calls| {
            calls.contains(&"select_initial_channel(team-b)".to_string())
        })
        .await;

        // Same id again is not a change.
        fixture.team_tx.send_replace(Some(TeamId::new("team-b")));
        settle().await;

        assert_eq!(
            fixture.recorder.count_of("load_channels_if_necessary(team-b)"),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_left_team_event_selects_fallback_without_loading() {
        let fixture = fixture();
        let (mut controller, _handle) = mount(&fixture);
        tokio::spawn(async move { controller.run().await });

        fixture.bus.publish(MembershipEvent::left_team("team-a"));

        wait_until(&fixture.recorder, |calls| {
            calls.contains(&"select_first_available_team()".to_string())
        })
        .await;
        settle().await;

        assert_eq!(fixture.recorder.count_of("select_first_available_team"), 1);
        assert_eq!(fixture.recorder.count_of("load_channels_if_necessary"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reachability_signals_processed_in_order() {
        let fixture = fixture();
        let (mut controller, _handle) = mount(&fixture);
        tokio::spawn(async move { controller.run().await });

        fixture.hub.publish(false);
        fixture.hub.publish(true);

        wait_until(&fixture.recorder, |calls| calls.len() >= 6).await;

        assert_eq!(
            fixture.recorder.calls(),
            vec![
                "close_connection(retryable=true)",
                "stop_periodic_updates()",
                "set_connection_state(false)",
                "open_connection(desktop)",
                "start_periodic_updates()",
                "set_connection_state(true)",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_tears_down_exactly_once() {
        let fixture = fixture();
        let (mut controller, handle) = mount(&fixture);
        assert_eq!(fixture.hub.subscriber_count(), 1);
        assert_eq!(fixture.bus.subscriber_count(), 1);

        let join = tokio::spawn(async move { controller.run().await });

        handle.shutdown();
        join.await.unwrap();

        assert_eq!(fixture.hub.subscriber_count(), 0);
        assert_eq!(fixture.bus.subscriber_count(), 0);
        assert_eq!(
            fixture.recorder.count_of("close_connection(retryable=false)"),
            1
        );
        assert_eq!(fixture.recorder.count_of("stop_periodic_updates"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_is_idempotent() {
        let fixture = fixture();
        let (mut controller, _handle) = mount(&fixture);

        controller.teardown();
        controller.teardown();
        drop(controller);

        assert_eq!(fixture.recorder.count_of("close_connection"), 1);
        assert_eq!(fixture.recorder.count_of("stop_periodic_updates"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_chain_still_selects_for_old_team() {
        let fixture = fixture();
        let team_a = TeamId::new("team-a");
        fixture.loader.delay_load_for(&team_a, Duration::from_millis(200));
        fixture.loader.fail_load_for(&team_a);
        fixture.team_tx.send_replace(Some(team_a));

        let (mut controller, _handle) = mount(&fixture);
        tokio::spawn(async move { controller.run().await });

        fixture.team_tx.send_replace(Some(TeamId::new("team-b")));

        // Both chains run to completion; neither is cancelled.
        wait_until(&fixture.recorder, |calls| {
            calls.contains(&"select_initial_channel(team-a)".to_string())
                && calls.contains(&"select_initial_channel(team-b)".to_string())
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_reruns_load_for_current_team() {
        let fixture = fixture();
        let team_a = TeamId::new("team-a");
        fixture.loader.fail_load_for(&team_a);
        fixture.team_tx.send_replace(Some(team_a));

        let (mut controller, handle) = mount(&fixture);
        tokio::spawn(async move { controller.run().await });

        wait_until(&fixture.recorder, |calls| {
            calls.contains(&"select_initial_channel(team-a)".to_string())
        })
        .await;
        assert!(handle.channels_request_failed());

        handle.retry_load();
        wait_until(&fixture.recorder, |calls| {
            calls
                .iter()
                .filter(|c| c.as_str() == "load_channels_if_necessary(team-a)")
                .count()
                == 2
        })
        .await;
    }
}
