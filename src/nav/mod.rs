//! Lazy navigation — cached trees, drilled into by path.
//!
//! A root listing (empty path) is the only operation that talks to the
//! query collaborator: it rebuilds the subject's tree and replaces the
//! cache entry wholesale. Every non-root listing resolves against the
//! cached tree by splitting the path on "/" and descending one segment
//! at a time, so drilling into a subtree never re-queries the server.

mod cache;

pub use cache::SymbolCache;

use tracing::{debug, warn};

use crate::base::{BufferId, KindLabelMap};
use crate::error::Error;
use crate::host::SymbolSource;
use crate::tree::{SymbolNode, SymbolTree, TreeBuilder};

/// Presentation order for a listed sibling set.
///
/// The two orderings reproduce the two provider variants observed in
/// the wild; neither is "more correct", so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Ascending source line, ties keeping mapping order (stable).
    #[default]
    ByLine,
    /// Raw sibling-map iteration order (arrival order).
    Insertion,
}

/// Resolves listing requests against per-subject cached trees.
///
/// Owns an explicit [`SymbolCache`], injected at construction or created
/// fresh; the cache lives as long as the navigator does.
pub struct Navigator<S> {
    source: S,
    cache: SymbolCache,
    labels: KindLabelMap,
    order: ListOrder,
}

impl<S: SymbolSource> Navigator<S> {
    /// Create a navigator with a fresh cache and line-sorted listings.
    pub fn new(source: S, labels: KindLabelMap) -> Self {
        Self {
            source,
            cache: SymbolCache::new(),
            labels,
            order: ListOrder::default(),
        }
    }

    /// Use an explicit ordering policy.
    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    /// Use an existing cache (e.g. one shared across reconstructions).
    pub fn with_cache(mut self, cache: SymbolCache) -> Self {
        self.cache = cache;
        self
    }

    /// The navigator's cache.
    pub fn cache(&self) -> &SymbolCache {
        &self.cache
    }

    /// Drop the cached tree for a subject without rebuilding it.
    pub fn invalidate(&self, buf: BufferId) {
        self.cache.invalidate(buf);
    }

    /// List the direct children of the subtree at `path`.
    ///
    /// An empty `path` addresses the root and unconditionally refreshes
    /// the subject's tree first; any other path resolves against the
    /// cached tree as-is. A null query result yields an empty listing;
    /// a failed query propagates and leaves the previous cache entry in
    /// place, so later lookups are served data from before the failure.
    pub fn list(&self, buf: BufferId, path: &str) -> Result<Vec<SymbolNode>, Error> {
        let tree = if path.is_empty() {
            match self.refresh(buf)? {
                Some(tree) => tree,
                None => return Ok(Vec::new()),
            }
        } else {
            // No refresh: walk whatever the last root listing built.
            self.cache.snapshot(buf).unwrap_or_default()
        };

        let mut level: &SymbolTree = &tree;
        for segment in path.split('/') {
            if segment.is_empty() {
                continue;
            }
            level = level
                .children_of(segment)
                .ok_or_else(|| Error::PathNotFound {
                    segment: segment.to_string(),
                    path: path.to_string(),
                })?;
        }

        let mut nodes: Vec<SymbolNode> = level.nodes().cloned().collect();
        if self.order == ListOrder::ByLine {
            nodes.sort_by_key(|node| node.location.line);
        }
        Ok(nodes)
    }

    /// Rebuild the subject's tree from a fresh query.
    ///
    /// Returns `None` for a null query result, leaving the cache
    /// untouched.
    fn refresh(&self, buf: BufferId) -> Result<Option<std::sync::Arc<SymbolTree>>, Error> {
        let batches = match self.source.document_symbols(buf) {
            Ok(batches) => batches,
            Err(err) => {
                warn!(subject = %buf, error = %err, "symbol query failed; cache left as-was");
                return Err(Error::Query(err));
            }
        };

        let Some(batches) = batches else {
            debug!(subject = %buf, "null symbol result, listing empty");
            return Ok(None);
        };

        let tree = TreeBuilder::new(buf, &self.labels).build("", &batches);
        debug!(subject = %buf, symbols = tree.len(), "rebuilt symbol tree");
        Ok(Some(self.cache.replace(buf, tree)))
    }
}
