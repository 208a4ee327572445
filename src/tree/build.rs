//! Symbol tree construction from query result batches.

use std::sync::Arc;

use crate::base::{BufferId, KindLabelMap, Location, SourcePos, SymbolKind};

use super::entry::{SymbolBatch, SymbolEntry};
use super::node::{SymbolNode, SymbolTree};

/// Builds a keyed [`SymbolTree`] out of nested query results.
///
/// Building is a pure function of the input batches: no I/O, no sorting
/// (presentation order is a listing-time concern), and entries land in
/// the sibling maps in arrival order with duplicate names collapsing to
/// the last occurrence.
pub struct TreeBuilder<'a> {
    buf: BufferId,
    labels: &'a KindLabelMap,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder for one subject buffer.
    pub fn new(buf: BufferId, labels: &'a KindLabelMap) -> Self {
        Self { buf, labels }
    }

    /// Build a tree level from result batches.
    ///
    /// `parent_path` is the slash-joined chain above this level; the
    /// root level uses the empty string, so root children get paths with
    /// no leading slash.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range kind code (see [`SymbolKind::from_code`]).
    pub fn build(&self, parent_path: &str, batches: &[SymbolBatch]) -> SymbolTree {
        let mut tree = SymbolTree::new();

        for batch in batches {
            for entry in batch.entries() {
                let (node, children) = self.build_entry(parent_path, entry);
                tree.insert(node, children);
            }
        }

        tree
    }

    fn build_entry(&self, parent_path: &str, entry: &SymbolEntry) -> (SymbolNode, SymbolTree) {
        let name = entry.name().clone();
        let path: Arc<str> = if parent_path.is_empty() {
            Arc::from(name.as_str())
        } else {
            format!("{parent_path}/{name}").into()
        };

        let kind = SymbolKind::from_code(entry.kind_code());
        let label = self.labels.resolve(kind).label;
        let word: Arc<str> = format!("{label} {name}").into();

        let start = entry.range().map(|r| r.start).unwrap_or(SourcePos::new(0, 0));
        let location = Location::from_protocol(self.buf, start);

        let children = match entry {
            SymbolEntry::Hierarchical { children, .. } if !children.is_empty() => {
                self.build(&path, &[SymbolBatch::of(children.clone())])
            }
            _ => SymbolTree::new(),
        };

        let node = SymbolNode {
            name,
            word,
            kind,
            location,
            is_expandable: entry.is_expandable(),
            path,
        };

        (node, children)
    }
}
