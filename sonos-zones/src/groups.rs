//! Shared zone-group collection and read-time deduplication.
//!
//! Refreshers for different players write into one [`GroupStore`]
//! concurrently, so the same group id can transiently appear several
//! times. The store never enforces uniqueness on write; readers take a
//! snapshot and run it through [`dedupe`], which keeps the first-seen
//! entry per id.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::model::{PlayerId, ZoneGroup};

/// Concurrency-safe collection of zone groups contributed by refreshers.
///
/// Every entry is tagged with the player whose query produced it, so a
/// refresher running in [`crate::refresher::RefreshMode::ReplaceOwn`]
/// can withdraw its own stale contribution without touching anyone
/// else's. Clear, append, and snapshot are each atomic; a snapshot is an
/// owned copy and is never invalidated by later writes.
pub struct GroupStore {
    entries: Mutex<Vec<(PlayerId, ZoneGroup)>>,
}

impl GroupStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Remove every entry, regardless of contributor
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Remove only the entries previously contributed by one player
    pub fn remove_contribution(&self, contributor: &PlayerId) {
        self.entries
            .lock()
            .retain(|(player, _)| player != contributor);
    }

    /// Append groups on behalf of the contributing player
    pub fn append(&self, contributor: &PlayerId, groups: Vec<ZoneGroup>) {
        let mut entries = self.entries.lock();
        entries.extend(groups.into_iter().map(|g| (contributor.clone(), g)));
    }

    /// Owned copy of the current contents, in insertion order
    pub fn snapshot(&self) -> Vec<ZoneGroup> {
        self.entries
            .lock()
            .iter()
            .map(|(_, group)| group.clone())
            .collect()
    }

    /// Snapshot with duplicate group ids collapsed, first-seen wins
    pub fn deduped_snapshot(&self) -> Vec<ZoneGroup> {
        dedupe(self.snapshot())
    }

    /// Number of entries currently held, duplicates included
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse a group sequence to one entry per distinct group id.
///
/// Order-preserving and stable: the first entry carrying a given id is
/// kept, later entries with the same id are dropped. Pure function;
/// callers pass an owned snapshot, so a collection being appended to
/// concurrently is never observed mid-mutation.
pub fn dedupe(groups: Vec<ZoneGroup>) -> Vec<ZoneGroup> {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|group| seen.insert(group.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupId;
    use proptest::prelude::*;

    fn group(id: &str, coordinator: &str) -> ZoneGroup {
        let coordinator = PlayerId::new(coordinator);
        ZoneGroup::new(GroupId::new(id), coordinator.clone(), vec![coordinator])
    }

    #[test]
    fn test_dedupe_first_seen_wins() {
        let input = vec![
            group("1", "uuid:RINCON_AAA"),
            group("2", "uuid:RINCON_BBB"),
            group("1", "uuid:RINCON_CCC"),
        ];

        let output = dedupe(input);

        assert_eq!(output.len(), 2);
        assert_eq!(output[0].id, GroupId::new("1"));
        assert_eq!(output[0].coordinator, PlayerId::new("uuid:RINCON_AAA"));
        assert_eq!(output[1].id, GroupId::new("2"));
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn test_store_append_and_snapshot() {
        let store = GroupStore::new();
        let contributor = PlayerId::new("uuid:RINCON_111");

        store.append(&contributor, vec![group("RINCON_111:1", "uuid:RINCON_111")]);
        store.append(&contributor, vec![group("RINCON_222:1", "uuid:RINCON_222")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, GroupId::new("RINCON_111:1"));
        assert_eq!(snapshot[1].id, GroupId::new("RINCON_222:1"));
    }

    #[test]
    fn test_store_clear_removes_everything() {
        let store = GroupStore::new();
        let a = PlayerId::new("uuid:RINCON_AAA");
        let b = PlayerId::new("uuid:RINCON_BBB");

        store.append(&a, vec![group("RINCON_AAA:1", "uuid:RINCON_AAA")]);
        store.append(&b, vec![group("RINCON_BBB:1", "uuid:RINCON_BBB")]);
        store.clear();

        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_contribution_keeps_other_players_entries() {
        let store = GroupStore::new();
        let a = PlayerId::new("uuid:RINCON_AAA");
        let b = PlayerId::new("uuid:RINCON_BBB");

        store.append(&a, vec![group("RINCON_AAA:1", "uuid:RINCON_AAA")]);
        store.append(&b, vec![group("RINCON_BBB:1", "uuid:RINCON_BBB")]);
        store.remove_contribution(&a);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, GroupId::new("RINCON_BBB:1"));
    }

    #[test]
    fn test_deduped_snapshot() {
        let store = GroupStore::new();
        let a = PlayerId::new("uuid:RINCON_AAA");
        let b = PlayerId::new("uuid:RINCON_BBB");

        // Both players report the same group; b also knows a second one.
        store.append(&a, vec![group("RINCON_AAA:1", "uuid:RINCON_AAA")]);
        store.append(
            &b,
            vec![
                group("RINCON_AAA:1", "uuid:RINCON_AAA"),
                group("RINCON_BBB:1", "uuid:RINCON_BBB"),
            ],
        );

        let deduped = store.deduped_snapshot();
        assert_eq!(deduped.len(), 2);
        assert_eq!(store.len(), 3);
    }

    proptest! {
        #[test]
        fn test_dedupe_idempotent(ids in prop::collection::vec(0u8..16, 0..64)) {
            let input: Vec<ZoneGroup> = ids
                .iter()
                .enumerate()
                .map(|(i, id)| group(&format!("RINCON_{id}:1"), &format!("uuid:RINCON_{i}")))
                .collect();

            let once = dedupe(input);
            let twice = dedupe(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_dedupe_output_ids_unique(ids in prop::collection::vec(0u8..16, 0..64)) {
            let input: Vec<ZoneGroup> = ids
                .iter()
                .map(|id| group(&format!("RINCON_{id}:1"), "uuid:RINCON_X"))
                .collect();

            let output = dedupe(input);
            let mut seen = HashSet::new();
            for g in &output {
                prop_assert!(seen.insert(g.id.clone()));
            }
        }
    }
}
