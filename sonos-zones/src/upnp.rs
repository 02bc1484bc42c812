//! Seams to the external UPnP transport and control-point stack.
//!
//! The SSDP/SOAP plumbing lives outside this crate. What the discovery
//! core needs from it is narrow: a way to issue a search that feeds
//! device announcements into a channel, and a way to ask one player for
//! its view of the zone-group topology. Both are expressed as traits so
//! the coordinator can be exercised with fake implementations.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TopologyError, ZoneError};
use crate::model::ZoneGroup;

/// Device type URN advertised by Sonos zone players
pub const ZONE_PLAYER_DEVICE_TYPE: &str = "urn:schemas-upnp-org:device:ZonePlayer:1";

/// Service type the network search is issued for
///
/// Sonos players answer searches on the AVTransport service; the device
/// filter then narrows responses down to the ZonePlayer device type.
pub const AV_TRANSPORT_SERVICE_TYPE: &str = "urn:schemas-upnp-org:service:AVTransport:1";

/// Metadata describing a network-announced remote device.
///
/// Produced and owned by the transport layer; the core holds it behind
/// an `Arc` and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Unique device name, e.g. "uuid:RINCON_000E58A0123456"
    pub udn: String,
    /// Advertised device type URN, if the announcement carried one
    pub device_type: Option<String>,
    /// Zone (room) name from the device description
    pub zone_name: String,
    /// Description URL, enough addressing information for further queries
    pub location: String,
}

/// Events delivered by the transport while a search is in flight.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// A remote device was announced. Delivered at most once per device.
    Added(Arc<DeviceDescriptor>),
}

/// The control-point side of the transport stack.
///
/// `search` is fire-and-forget: it returns a channel the transport feeds
/// from its own worker thread(s), one [`DeviceEvent::Added`] per newly
/// announced device. The transport drops its sender once the search
/// horizon lapses, which ends the stream.
pub trait ControlPoint {
    /// Issue a network search for the given service type.
    fn search(
        &self,
        service_type: &str,
        horizon: Duration,
    ) -> Result<mpsc::Receiver<DeviceEvent>, ZoneError>;
}

/// The SOAP-level zone-group-state query.
///
/// Asks one player for its current view of the topology. Failures
/// (no network path, malformed response, timeout) all surface as a
/// single opaque [`TopologyError`]; callers only need to distinguish
/// failure from success.
pub trait TopologyClient {
    /// Query the player's reported zone groups.
    fn zone_group_state(&self, device: &DeviceDescriptor) -> Result<Vec<ZoneGroup>, TopologyError>;
}

/// Check whether an announced device is a Sonos zone player.
///
/// True iff the advertised device type exactly equals
/// [`ZONE_PLAYER_DEVICE_TYPE`]. A missing or malformed type compares
/// false, never errors.
pub fn is_zone_player(device: &DeviceDescriptor) -> bool {
    device.device_type.as_deref() == Some(ZONE_PLAYER_DEVICE_TYPE)
}
