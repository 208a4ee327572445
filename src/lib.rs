//! # symlens-base
//!
//! Core library for fuzzy-list symbol browsing: it turns nested,
//! possibly-duplicated symbol results from a language server into a
//! cached, lazily navigable hierarchy, and renders each node into a
//! fixed-width, byte-accurate, highlighted text line.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! provider → list-framework data providers (document/workspace symbols, diagnostics)
//!   ↓
//! render   → column rendering with byte-exact highlight spans
//! nav      → per-subject tree cache and path navigation
//!   ↓
//! tree     → symbol tree construction from query results
//!   ↓
//! base     → primitives (BufferId, positions, kinds, labels)
//! ```
//!
//! `host` defines the collaborator traits (language-server queries,
//! editor primitives) the providers consume; `diagnostic` is the flat
//! sibling pipeline with no tree or cache step.
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-request: the only external
//! waits are the query calls and display-width lookups behind the
//! [`host`] traits. The per-subject cache is safe to share across
//! threads; lookups walk [`std::sync::Arc`] snapshots, so a rebuild
//! landing mid-walk can produce a stale listing but never a torn one.

/// Foundation types: BufferId, positions, symbol kinds, label overrides
pub mod base;

/// Diagnostic flattening: per-buffer diagnostics to displayable rows
pub mod diagnostic;

/// Error taxonomy for listing operations
pub mod error;

/// Collaborator traits implemented by the embedding host
pub mod host;

/// Lazy navigation: per-subject tree cache, path descent, ordering
pub mod nav;

/// List-framework data providers
pub mod provider;

/// Column rendering: fixed-width rows and highlight spans
pub mod render;

/// Symbol tree construction from query result batches
pub mod tree;

// Re-export commonly needed items
pub use base::{BufferId, KindLabel, KindLabelMap, Location, SymbolKind};
pub use error::Error;
pub use nav::{ListOrder, Navigator, SymbolCache};
pub use render::ColumnConfig;
pub use tree::{SymbolBatch, SymbolEntry, SymbolNode, SymbolTree};
