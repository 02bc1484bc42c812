//! Core data model: typed identities, players, and groups

mod group_id;
mod player_id;
mod zone_group;
mod zone_player;

pub use group_id::GroupId;
pub use player_id::PlayerId;
pub use zone_group::ZoneGroup;
pub use zone_player::ZonePlayer;
