//! Discovery session coordinator.
//!
//! [`ZonePlayers::discover`] issues the network search and returns
//! immediately; a listener thread then drains the transport's device
//! events for as long as the search horizon lasts. Each qualifying
//! device is registered and handed its own group-refresh worker.
//! Readers can call the timeout-bounded accessors at any point and see
//! whatever has accumulated so far.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::ZoneError;
use crate::groups::GroupStore;
use crate::model::{ZoneGroup, ZonePlayer};
use crate::refresher::{spawn_group_refresher, RefreshMode, DEFAULT_REFRESH_DEADLINE};
use crate::registry::{PlayerRegistry, DEFAULT_POLL_INTERVAL};
use crate::upnp::{
    is_zone_player, ControlPoint, DeviceEvent, TopologyClient, AV_TRANSPORT_SERVICE_TYPE,
};

/// Default search horizon: how long the transport keeps announcing
/// devices before it drops the event channel
pub const DEFAULT_SEARCH_HORIZON: Duration = Duration::from_secs(120);

/// Tunables for one discovery session
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Horizon passed to the transport's search
    pub search_horizon: Duration,
    /// Per-player deadline for a group refresh to succeed
    pub refresh_deadline: Duration,
    /// Sleep interval used by all bounded polling waits
    pub poll_interval: Duration,
    /// How refreshers reconcile the shared group collection
    pub refresh_mode: RefreshMode,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_horizon: DEFAULT_SEARCH_HORIZON,
            refresh_deadline: DEFAULT_REFRESH_DEADLINE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            refresh_mode: RefreshMode::default(),
        }
    }
}

/// One discovery session over the local network's zone players.
///
/// A session never completes explicitly: once the search horizon lapses
/// the transport stops announcing and the snapshots stop growing, but
/// accessors keep working. Discovery is best-effort; an accessor called
/// before convergence legitimately returns a partial (or empty)
/// snapshot, which is not an error.
pub struct ZonePlayers {
    registry: Arc<PlayerRegistry>,
    groups: Arc<GroupStore>,
    refreshers: Arc<Mutex<Vec<JoinHandle<()>>>>,
    _listener: JoinHandle<()>,
}

impl ZonePlayers {
    /// Start a discovery session with default settings.
    ///
    /// Issues the search and returns without blocking.
    pub fn discover(
        control_point: &dyn ControlPoint,
        topology: Arc<dyn TopologyClient + Send + Sync>,
    ) -> Result<Self, ZoneError> {
        Self::discover_with_config(control_point, topology, DiscoveryConfig::default())
    }

    /// Start a discovery session with explicit settings.
    pub fn discover_with_config(
        control_point: &dyn ControlPoint,
        topology: Arc<dyn TopologyClient + Send + Sync>,
        config: DiscoveryConfig,
    ) -> Result<Self, ZoneError> {
        let registry = Arc::new(PlayerRegistry::with_poll_interval(config.poll_interval));
        let groups = Arc::new(GroupStore::new());
        let refreshers = Arc::new(Mutex::new(Vec::new()));

        let events = control_point.search(AV_TRANSPORT_SERVICE_TYPE, config.search_horizon)?;
        let listener = spawn_device_listener(
            events,
            Arc::clone(&registry),
            Arc::clone(&groups),
            topology,
            Arc::clone(&refreshers),
            config,
        );

        Ok(Self {
            registry,
            groups,
            refreshers,
            _listener: listener,
        })
    }

    /// Players discovered so far, in registration order. Non-blocking.
    pub fn discovered_players(&self) -> Vec<ZonePlayer> {
        self.registry.discovered_players()
    }

    /// Block for the full timeout, then return the player snapshot.
    pub fn players(&self, timeout: Duration) -> Vec<ZonePlayer> {
        self.registry.players(timeout)
    }

    /// Look up a player by zone name (case-insensitive), waiting up to
    /// the timeout for it to appear.
    pub fn get(&self, zone_name: &str, timeout: Duration) -> Option<ZonePlayer> {
        self.registry.get(zone_name, timeout)
    }

    /// Block for the full timeout, then return the deduplicated group
    /// snapshot.
    pub fn zone_groups(&self, timeout: Duration) -> Vec<ZoneGroup> {
        let _ = self.registry.players(timeout);
        self.groups.deduped_snapshot()
    }

    /// Deduplicated group snapshot without waiting.
    pub fn discovered_zone_groups(&self) -> Vec<ZoneGroup> {
        self.groups.deduped_snapshot()
    }

    /// Join all refresh workers spawned so far.
    ///
    /// Each worker self-terminates at its own deadline, so this blocks
    /// at most one refresh-deadline. Workers spawned for devices that
    /// announce afterwards are picked up by a later call.
    pub fn wait_for_refreshers(&self) {
        let handles: Vec<_> = self.refreshers.lock().drain(..).collect();
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("A group refresh worker panicked");
            }
        }
    }
}

/// Spawns the thread that reacts to transport device events.
///
/// Runs until the transport drops its sender (the search horizon), then
/// exits. Each accepted device is registered synchronously; its group
/// refresh runs on a separate worker so a slow player cannot stall
/// later announcements.
fn spawn_device_listener(
    events: mpsc::Receiver<DeviceEvent>,
    registry: Arc<PlayerRegistry>,
    groups: Arc<GroupStore>,
    topology: Arc<dyn TopologyClient + Send + Sync>,
    refreshers: Arc<Mutex<Vec<JoinHandle<()>>>>,
    config: DiscoveryConfig,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for event in events {
            let DeviceEvent::Added(device) = event;

            if !is_zone_player(&device) {
                tracing::debug!("Ignoring non-zone-player device {}", device.udn);
                continue;
            }

            let player = ZonePlayer::new(device);
            tracing::info!("Discovered {}", player);
            registry.add(player.clone());

            let handle = spawn_group_refresher(
                player,
                Arc::clone(&groups),
                Arc::clone(&topology),
                config.refresh_deadline,
                config.poll_interval,
                config.refresh_mode,
            );
            refreshers.lock().push(handle);
        }

        tracing::debug!("Device listener stopped, search horizon lapsed");
    })
}
