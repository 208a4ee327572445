//! The built symbol tree and its nodes.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::{Location, SymbolKind};

/// One resolved symbol, ready for listing and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    /// The symbol's name; unique among siblings in principle, though the
    /// server may emit duplicates (see [`SymbolTree::insert`]).
    pub name: SmolStr,
    /// The display word, "label name" with the label resolved at build
    /// time through the configured overrides.
    pub word: Arc<str>,
    /// The resolved kind, carried through for render-time label styling.
    pub kind: SymbolKind,
    /// 1-based jump target.
    pub location: Location,
    /// Whether the node has children to drill into, independent of
    /// whether they are currently materialized.
    pub is_expandable: bool,
    /// Slash-joined ancestor chain addressing this node from the tree
    /// root. Segments are raw names; a name containing "/" corrupts
    /// addressing (documented limitation, not handled).
    pub path: Arc<str>,
}

impl SymbolNode {
    /// The node's depth in the tree, derived from its path.
    ///
    /// Root children have depth 0.
    pub fn depth(&self) -> u32 {
        self.path.matches('/').count() as u32
    }
}

/// A sibling level of the symbol tree: name-keyed nodes plus their
/// child levels, in insertion order.
///
/// Invariant: every key equals the `name` of its paired node. Iteration
/// order is the order entries arrived in; presentation order is decided
/// at listing time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTree {
    entries: IndexMap<SmolStr, (SymbolNode, SymbolTree)>,
}

impl SymbolTree {
    /// Create an empty tree level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with its subtree.
    ///
    /// A duplicate sibling name silently replaces the earlier entry
    /// (last write wins) while keeping the earlier entry's slot in the
    /// iteration order.
    pub fn insert(&mut self, node: SymbolNode, children: SymbolTree) {
        self.entries.insert(node.name.clone(), (node, children));
    }

    /// Look up one sibling level entry by name.
    pub fn get(&self, name: &str) -> Option<&(SymbolNode, SymbolTree)> {
        self.entries.get(name)
    }

    /// The child level under `name`, if present.
    pub fn children_of(&self, name: &str) -> Option<&SymbolTree> {
        self.entries.get(name).map(|(_, children)| children)
    }

    /// Iterate this level's nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &SymbolNode> {
        self.entries.values().map(|(node, _)| node)
    }

    /// Iterate this level's entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(SymbolNode, SymbolTree)> {
        self.entries.values()
    }

    /// Number of direct entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether this level has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
