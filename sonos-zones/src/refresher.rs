//! Per-player zone-group refresh worker.
//!
//! Each newly registered player gets its own background thread that
//! polls the player's zone-group-state until one query succeeds or the
//! deadline lapses. Query failures are expected while a player is still
//! booting its services, so they are logged and retried, never surfaced.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::groups::GroupStore;
use crate::model::ZonePlayer;
use crate::upnp::TopologyClient;

/// Default per-player deadline for a refresh to succeed
pub const DEFAULT_REFRESH_DEADLINE: Duration = Duration::from_millis(5000);

/// How a refresher reconciles its contribution with the shared store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Wipe the whole store before refreshing.
    ///
    /// This is the historical behavior: every refresher rebuilds the
    /// group view from scratch. Known limitation: with several players
    /// refreshing concurrently, a late-starting refresher's wipe can
    /// erase groups an earlier-finishing refresher already contributed,
    /// so the surviving set depends on thread scheduling.
    #[default]
    ClearAll,
    /// Withdraw only this player's previous contribution.
    ///
    /// Opt-in corrected strategy: entries contributed by other players
    /// are left untouched, so concurrent refreshers cannot erase each
    /// other's results.
    ReplaceOwn,
}

/// Spawns the refresh worker thread for one player.
///
/// The worker reconciles the store per `mode`, then loops until
/// `deadline` has elapsed: query the player's zone-group-state, append
/// all returned groups and stop on success, sleep `poll_interval` and
/// retry on failure. A worker that never succeeds simply leaves the
/// store without this player's contribution.
///
/// Fire-and-forget relative to the caller; the returned handle lets the
/// owning session track or join the worker.
pub fn spawn_group_refresher(
    player: ZonePlayer,
    store: Arc<GroupStore>,
    topology: Arc<dyn TopologyClient + Send + Sync>,
    deadline: Duration,
    poll_interval: Duration,
    mode: RefreshMode,
) -> JoinHandle<()> {
    thread::spawn(move || {
        match mode {
            RefreshMode::ClearAll => store.clear(),
            RefreshMode::ReplaceOwn => store.remove_contribution(player.id()),
        }

        let start = Instant::now();
        while start.elapsed() < deadline {
            match topology.zone_group_state(player.device()) {
                Ok(groups) => {
                    tracing::debug!(
                        "Adding {} group(s) reported by {}",
                        groups.len(),
                        player
                    );
                    store.append(player.id(), groups);
                    return;
                }
                Err(e) => {
                    tracing::debug!("Zone groups not yet available from {}: {}", player, e);
                }
            }

            thread::sleep(poll_interval);
        }

        tracing::debug!("Group refresh for {} gave up after {:?}", player, deadline);
    })
}
