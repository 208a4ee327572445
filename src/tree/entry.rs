//! Symbol query results as they arrive from the language server.
//!
//! A server answers a symbol request in one of two shapes: a nested
//! "document symbol" carrying its own range and optional children, or a
//! flat "symbol information" whose range sits inside a location object.
//! The two are modeled as an explicit sum type; discrimination happens
//! when the collaborator decodes the wire response, not by probing for
//! fields downstream.

use smol_str::SmolStr;

use crate::base::SourceRange;

/// One symbol entry from a query result batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolEntry {
    /// A range-bearing document symbol, possibly nested.
    Hierarchical {
        name: SmolStr,
        /// Raw 1-based protocol kind code, resolved during tree building.
        kind: u32,
        range: SourceRange,
        /// Nested child entries; empty means the node is a leaf.
        children: Vec<SymbolEntry>,
    },
    /// A flat symbol whose range sits nested under a `location` field.
    /// Never has children.
    Flat {
        name: SmolStr,
        /// Raw 1-based protocol kind code, resolved during tree building.
        kind: u32,
        location: FlatLocation,
    },
}

/// The location object of a flat symbol, one level deeper than the
/// hierarchical shape keeps its range.
///
/// Workspace-symbol results address by URI and may omit the range, in
/// which case the symbol locates at the buffer start; document-symbol
/// results always carry the range and the URI goes unused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatLocation {
    pub uri: Option<SmolStr>,
    pub range: Option<SourceRange>,
}

impl FlatLocation {
    /// A location with a range and no URI.
    pub fn with_range(range: SourceRange) -> Self {
        Self {
            uri: None,
            range: Some(range),
        }
    }
}

impl SymbolEntry {
    /// The symbol's name, the sibling-map key during tree building.
    pub fn name(&self) -> &SmolStr {
        match self {
            SymbolEntry::Hierarchical { name, .. } => name,
            SymbolEntry::Flat { name, .. } => name,
        }
    }

    /// The raw protocol kind code.
    pub fn kind_code(&self) -> u32 {
        match self {
            SymbolEntry::Hierarchical { kind, .. } => *kind,
            SymbolEntry::Flat { kind, .. } => *kind,
        }
    }

    /// The range that drives navigation, if the entry carries one.
    pub fn range(&self) -> Option<SourceRange> {
        match self {
            SymbolEntry::Hierarchical { range, .. } => Some(*range),
            SymbolEntry::Flat { location, .. } => location.range,
        }
    }

    /// The URI of a flat entry's location, if present.
    pub fn uri(&self) -> Option<&SmolStr> {
        match self {
            SymbolEntry::Hierarchical { .. } => None,
            SymbolEntry::Flat { location, .. } => location.uri.as_ref(),
        }
    }

    /// Whether this entry can be drilled into.
    ///
    /// True only for a hierarchical entry with at least one child; the
    /// children need not be materialized anywhere yet.
    pub fn is_expandable(&self) -> bool {
        match self {
            SymbolEntry::Hierarchical { children, .. } => !children.is_empty(),
            SymbolEntry::Flat { .. } => false,
        }
    }
}

/// One response batch from a symbol query.
///
/// A request covering a sub-range may legitimately come back with no
/// result; such batches contribute nothing to the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBatch {
    pub result: Option<Vec<SymbolEntry>>,
}

impl SymbolBatch {
    /// A batch wrapping the given entries.
    pub fn of(entries: Vec<SymbolEntry>) -> Self {
        Self {
            result: Some(entries),
        }
    }

    /// A batch with no result.
    pub fn empty() -> Self {
        Self { result: None }
    }

    /// The entries, or an empty slice for a null result.
    pub fn entries(&self) -> &[SymbolEntry] {
        self.result.as_deref().unwrap_or(&[])
    }
}
