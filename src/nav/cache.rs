//! Per-subject cache of built symbol trees.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::BufferId;
use crate::tree::SymbolTree;

/// One built tree per subject, replaced wholesale on rebuild.
///
/// Readers take [`Arc`] snapshots: a path walk holds the tree it started
/// with, so a rebuild that lands mid-walk can at worst serve a stale
/// listing, never a half-built one. Only [`replace`](Self::replace)
/// writes a slot; entries live until replaced or explicitly invalidated.
///
/// Thread-safe via internal locking.
#[derive(Default)]
pub struct SymbolCache {
    inner: RwLock<FxHashMap<BufferId, Arc<SymbolTree>>>,
}

impl SymbolCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of the tree cached for a subject, if any.
    pub fn snapshot(&self, buf: BufferId) -> Option<Arc<SymbolTree>> {
        self.inner.read().get(&buf).cloned()
    }

    /// Replace a subject's tree wholesale, returning the new snapshot.
    pub fn replace(&self, buf: BufferId, tree: SymbolTree) -> Arc<SymbolTree> {
        let tree = Arc::new(tree);
        self.inner.write().insert(buf, Arc::clone(&tree));
        tree
    }

    /// Drop a subject's cached tree.
    pub fn invalidate(&self, buf: BufferId) {
        self.inner.write().remove(&buf);
    }

    /// Number of subjects with a cached tree.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check whether anything is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for SymbolCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolCache")
            .field("subjects", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_missing_subject() {
        let cache = SymbolCache::new();
        assert!(cache.snapshot(BufferId::new(1)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let cache = SymbolCache::new();
        let buf = BufferId::new(1);

        let first = cache.replace(buf, SymbolTree::new());
        let second = cache.replace(buf, SymbolTree::new());

        assert_eq!(cache.len(), 1);
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&cache.snapshot(buf).unwrap(), &second));
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let cache = SymbolCache::new();
        let buf = BufferId::new(1);

        let snapshot = cache.replace(buf, SymbolTree::new());
        cache.replace(buf, SymbolTree::new());

        // The walk that started on the old snapshot still owns it.
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_invalidate() {
        let cache = SymbolCache::new();
        let buf = BufferId::new(2);

        cache.replace(buf, SymbolTree::new());
        cache.invalidate(buf);

        assert!(cache.snapshot(buf).is_none());
    }
}
