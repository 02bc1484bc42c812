//! Discovery of Sonos zone players and zone groups over UPnP.
//!
//! The transport stack (SSDP search, SOAP, device-description parsing)
//! lives behind the [`upnp::ControlPoint`] and [`upnp::TopologyClient`]
//! traits; this crate supplies the session logic on top: filtering
//! announcements down to zone players, keeping a duplicate-free view of
//! players and groups while discovery is still in flight, and bounding
//! every blocking read with a caller-supplied timeout.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use sonos_zones::ZonePlayers;
//!
//! // control_point / topology come from your UPnP transport layer.
//! let session = ZonePlayers::discover(&control_point, topology)?;
//!
//! // Give the network a few seconds, then look around.
//! for player in session.players(Duration::from_secs(3)) {
//!     println!("Found {}", player);
//! }
//!
//! // Name lookup returns as soon as the zone appears.
//! if let Some(kitchen) = session.get("Kitchen", Duration::from_secs(5)) {
//!     println!("Kitchen is {}", kitchen.id());
//! }
//!
//! for group in session.discovered_zone_groups() {
//!     println!("Group {} has {} member(s)", group.id, group.member_count());
//! }
//! ```
//!
//! Discovery is best-effort: accessors called before the network has
//! converged return partial snapshots, which is expected behavior
//! rather than an error.

pub mod discovery;
pub mod error;
pub mod groups;
pub mod logging;
pub mod model;
pub mod refresher;
pub mod registry;
pub mod upnp;

// Re-export key types for easier access
pub use discovery::{DiscoveryConfig, ZonePlayers, DEFAULT_SEARCH_HORIZON};
pub use error::{TopologyError, ZoneError};
pub use groups::{dedupe, GroupStore};
pub use model::{GroupId, PlayerId, ZoneGroup, ZonePlayer};
pub use refresher::RefreshMode;
pub use registry::PlayerRegistry;
pub use upnp::{
    ControlPoint, DeviceDescriptor, DeviceEvent, TopologyClient, AV_TRANSPORT_SERVICE_TYPE,
    ZONE_PLAYER_DEVICE_TYPE,
};
