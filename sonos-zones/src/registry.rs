//! Insertion-order registry of discovered zone players.
//!
//! The transport's listener thread appends while caller threads read, so
//! everything goes through one mutex. Players are never removed or
//! replaced for the lifetime of a discovery session; add-once semantics
//! come from the transport delivering each device announcement at most
//! once, not from any re-check here.

use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::model::ZonePlayer;

/// Default interval between polls of the player collection
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Concurrency-safe, append-only collection of discovered players.
///
/// The timed accessors are bounded polling waits, not event waits:
/// [`PlayerRegistry::players`] always sleeps out its full window so
/// late-arriving devices get a chance to register, while
/// [`PlayerRegistry::get`] returns as soon as a name matches.
pub struct PlayerRegistry {
    players: Mutex<Vec<ZonePlayer>>,
    poll_interval: Duration,
}

impl PlayerRegistry {
    /// Create an empty registry with the default poll interval
    pub fn new() -> Self {
        Self::with_poll_interval(DEFAULT_POLL_INTERVAL)
    }

    /// Create an empty registry polling at the given interval
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self {
            players: Mutex::new(Vec::new()),
            poll_interval,
        }
    }

    /// Append a player.
    ///
    /// Never rejects duplicates; uniqueness is the transport's contract.
    pub fn add(&self, player: ZonePlayer) {
        tracing::debug!("Registering player {}", player);
        self.players.lock().push(player);
    }

    /// Snapshot of everything discovered so far, in insertion order.
    /// Returns immediately.
    pub fn discovered_players(&self) -> Vec<ZonePlayer> {
        self.players.lock().clone()
    }

    /// Block for the full timeout, then snapshot.
    ///
    /// Deliberately never early-exits, even if the set stops growing:
    /// the whole window is the grace period for devices that announce
    /// late in the search.
    pub fn players(&self, timeout: Duration) -> Vec<ZonePlayer> {
        let deadline = Instant::now() + timeout;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(self.poll_interval.min(deadline - now));
        }

        self.discovered_players()
    }

    /// Look up a player by zone name, polling until found or the timeout
    /// is exhausted.
    ///
    /// The match is case-insensitive and, unlike [`PlayerRegistry::players`],
    /// short-circuits on the first hit. `None` means the timeout elapsed
    /// without a match, not a fault.
    pub fn get(&self, zone_name: &str, timeout: Duration) -> Option<ZonePlayer> {
        let deadline = Instant::now() + timeout;
        loop {
            let found = self
                .players
                .lock()
                .iter()
                .find(|player| player.zone_name().eq_ignore_ascii_case(zone_name))
                .cloned();
            if found.is_some() {
                return found;
            }

            let now = Instant::now();
            if now >= deadline {
                tracing::debug!("No player named {:?} within {:?}", zone_name, timeout);
                return None;
            }
            thread::sleep(self.poll_interval.min(deadline - now));
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
