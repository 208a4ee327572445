//! Symbol tree construction — from query results to a keyed hierarchy.
//!
//! The language server answers a symbol request with batches of nested
//! entries; this module turns them into a name-keyed [`SymbolTree`] that
//! the navigator can drill into by path without re-querying.

mod build;
mod entry;
mod node;

pub use build::TreeBuilder;
pub use entry::{FlatLocation, SymbolBatch, SymbolEntry};
pub use node::{SymbolNode, SymbolTree};
