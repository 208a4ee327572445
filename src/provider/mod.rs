//! List-framework data providers.
//!
//! One provider per listing flavor, mirroring the requests the query
//! collaborator can answer: document symbols (tree-shaped, cached,
//! drillable), workspace symbols (flat search), and diagnostics (flat).
//! Each listing call returns a fully materialized row sequence; result
//! sets are bounded by a single document or query, so nothing streams,
//! and returning is the end-of-sequence signal.

mod diagnostics;
mod document_symbols;
mod workspace_symbols;

pub use diagnostics::DiagnosticProvider;
pub use document_symbols::DocumentSymbolProvider;
pub use workspace_symbols::WorkspaceSymbolProvider;

use std::sync::Arc;

use crate::base::{BufferId, Location};
use crate::render::HighlightSpan;

/// What activating a row should do, as structured data for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump to a position in an open buffer.
    Buffer { buf: BufferId, line: u32, col: u32 },
    /// Open a file (or URI) and jump to a position.
    File { path: Arc<str>, line: u32, col: u32 },
}

impl Action {
    /// Jump action for a resolved symbol location.
    pub fn jump(location: Location) -> Self {
        Action::Buffer {
            buf: location.buf,
            line: location.line,
            col: location.col,
        }
    }
}

/// One listing row handed to the host list-framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Final display text (already padded for tree listings).
    pub text: String,
    /// Highlight spans within `text`, byte-addressed.
    pub highlights: Vec<HighlightSpan>,
    /// Structured action data for activating the row.
    pub action: Action,
    /// Whether the row can be drilled into.
    pub is_tree: bool,
    /// The node path for drilling, when `is_tree` rows come from a tree.
    pub tree_path: Option<Arc<str>>,
}
