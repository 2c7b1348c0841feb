// In-memory unlinked-item store.
//
// Holds the current unlinked set plus every id it was ever seeded with, so
// "never existed" can be told apart from "already linked". Owned by the
// service behind a tokio Mutex; nothing here is async.

use std::collections::HashSet;

use crate::catalog::models::UnlinkedItem;
use crate::error::{GapError, GapResult};

/// What to do with a requested id that the store has never held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownIdPolicy {
    /// Skip it, like ids that were already removed.
    #[default]
    Filter,
    /// Fail the whole call with `GapError::UnknownItem`.
    Reject,
}

pub struct UnlinkedStore {
    items: Vec<UnlinkedItem>,
    known: HashSet<String>,
    version: u64,
}

impl UnlinkedStore {
    pub fn new(items: Vec<UnlinkedItem>) -> Self {
        let known = items.iter().map(|i| i.id.clone()).collect();
        Self {
            items,
            known,
            version: 0,
        }
    }

    pub fn snapshot(&self) -> Vec<UnlinkedItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Bumped once per mutation that removed at least one item.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Resolve `ids` to the items currently held, in request order with
    /// duplicates dropped.
    pub fn resolve<S: AsRef<str>>(
        &self,
        ids: &[S],
        policy: UnknownIdPolicy,
    ) -> GapResult<Vec<UnlinkedItem>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut resolved = Vec::new();

        for id in ids {
            let id = id.as_ref();
            if !seen.insert(id) {
                continue;
            }
            if policy == UnknownIdPolicy::Reject && !self.known.contains(id) {
                return Err(GapError::UnknownItem(id.to_string()));
            }
            if let Some(item) = self.items.iter().find(|i| i.id == id) {
                resolved.push(item.clone());
            }
        }

        Ok(resolved)
    }

    /// Apply the unknown-id policy to a whole batch before anything is
    /// committed.
    pub fn check_known<S: AsRef<str>>(&self, ids: &[S], policy: UnknownIdPolicy) -> GapResult<()> {
        if policy == UnknownIdPolicy::Reject {
            if let Some(id) = ids.iter().map(|s| s.as_ref()).find(|id| !self.known.contains(*id)) {
                return Err(GapError::UnknownItem(id.to_string()));
            }
        }
        Ok(())
    }

    /// Remove every held item whose id is in `ids`. Returns the removed ids
    /// in store order.
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) -> Vec<String> {
        let targets: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
        let mut removed = Vec::new();

        self.items.retain(|item| {
            if targets.contains(item.id.as_str()) {
                removed.push(item.id.clone());
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            self.version += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn ids(items: &[UnlinkedItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_resolve_keeps_request_order_and_dedups() {
        let store = UnlinkedStore::new(seed::unlinked_items());
        let resolved = store
            .resolve(
                &["orphan-issue-001", "missing", "orphan-tc-001", "orphan-issue-001"],
                UnknownIdPolicy::Filter,
            )
            .unwrap();
        assert_eq!(ids(&resolved), vec!["orphan-issue-001", "orphan-tc-001"]);
    }

    #[test]
    fn test_reject_only_never_seen_ids() {
        let mut store = UnlinkedStore::new(seed::unlinked_items());
        store.remove(&["orphan-tc-001"]);

        // Removed but known: still filtered quietly
        let resolved = store.resolve(&["orphan-tc-001"], UnknownIdPolicy::Reject).unwrap();
        assert!(resolved.is_empty());

        let err = store.resolve(&["ghost"], UnknownIdPolicy::Reject).unwrap_err();
        assert!(matches!(err, GapError::UnknownItem(id) if id == "ghost"));
    }

    #[test]
    fn test_version_bumps_only_on_removal() {
        let mut store = UnlinkedStore::new(seed::unlinked_items());
        let before = store.len();
        assert_eq!(store.remove(&["orphan-mtg-001"]), vec!["orphan-mtg-001"]);
        assert_eq!(store.version(), 1);
        assert!(store.remove(&["orphan-mtg-001"]).is_empty());
        assert_eq!(store.version(), 1);
        assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn test_empty_after_removing_everything() {
        let mut store = UnlinkedStore::new(seed::unlinked_items());
        assert!(!store.is_empty());
        let all: Vec<String> = store.snapshot().into_iter().map(|i| i.id).collect();
        store.remove(&all);
        assert!(store.is_empty());
        assert_eq!(store.version(), 1);
    }
}
