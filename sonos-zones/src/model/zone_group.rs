//! ZoneGroup type

use serde::{Deserialize, Serialize};

use crate::model::{GroupId, PlayerId};

/// A zone group: a set of players Sonos has grouped for synchronized
/// playback.
///
/// Instances are produced by zone-group-state queries. Several instances
/// for the same id may coexist in the shared group collection while
/// discovery is in flight; reads go through [`crate::groups::dedupe`],
/// which keeps the first-seen entry per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneGroup {
    /// Unique group identifier
    pub id: GroupId,
    /// Player coordinating playback for the group
    pub coordinator: PlayerId,
    /// All members of the group, coordinator included
    pub members: Vec<PlayerId>,
}

impl ZoneGroup {
    /// Create a new ZoneGroup
    pub fn new(id: GroupId, coordinator: PlayerId, members: Vec<PlayerId>) -> Self {
        Self {
            id,
            coordinator,
            members,
        }
    }

    /// Number of members in the group
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the given player belongs to this group
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.members.contains(player)
    }
}
