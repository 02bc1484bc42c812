//! ZonePlayer type

use std::fmt;
use std::sync::Arc;

use crate::model::PlayerId;
use crate::upnp::DeviceDescriptor;

/// One discovered Sonos zone player.
///
/// Created exactly once per device announcement that passes the zone
/// player filter. Immutable after creation; lives for the duration of
/// the discovery session. The underlying device descriptor is owned by
/// the transport layer, so cloning a ZonePlayer is cheap.
#[derive(Debug, Clone)]
pub struct ZonePlayer {
    id: PlayerId,
    zone_name: String,
    device: Arc<DeviceDescriptor>,
}

impl ZonePlayer {
    /// Create a ZonePlayer from an announced device descriptor
    pub fn new(device: Arc<DeviceDescriptor>) -> Self {
        Self {
            id: PlayerId::new(device.udn.clone()),
            zone_name: device.zone_name.clone(),
            device,
        }
    }

    /// Stable identity, derived from the device UDN
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Human-readable zone name (e.g. "Living Room")
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// Handle to the underlying device descriptor, for issuing further
    /// queries through the transport layer
    pub fn device(&self) -> &Arc<DeviceDescriptor> {
        &self.device
    }
}

impl fmt::Display for ZonePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.zone_name, self.id)
    }
}
