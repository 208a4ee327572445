//! Collaborator interfaces consumed by the providers.
//!
//! The crate never talks to a language server or an editor directly; it
//! consumes these traits and converts everything to its own types at
//! this boundary. Implementations live in the embedding host (the piece
//! that owns the RPC plumbing and the buffer table).
//!
//! Calls are plain blocking calls: result sets are bounded by one
//! document or one workspace query, so there is nothing to stream. A
//! stalled call delays only the listing request that issued it.

use crate::base::BufferId;
use crate::diagnostic::DiagnosticEntry;
use crate::error::BoxError;
use crate::tree::SymbolBatch;

/// The language-server query collaborator.
///
/// `Ok(None)` models a null response (a server with nothing to say for
/// this subject); it is recovered as an empty listing, not an error.
/// `Err` propagates to the caller of the listing operation untouched.
pub trait SymbolSource {
    /// Request document symbols for a buffer.
    fn document_symbols(&self, buf: BufferId) -> Result<Option<Vec<SymbolBatch>>, BoxError>;

    /// Request workspace symbols matching a query string.
    ///
    /// Entries come back in the flat shape, with a URI-based path in
    /// place of a buffer number.
    fn workspace_symbols(
        &self,
        buf: BufferId,
        query: &str,
    ) -> Result<Option<Vec<SymbolBatch>>, BoxError>;

    /// Request the current diagnostics across buffers.
    fn diagnostics(&self, buf: BufferId) -> Result<Option<Vec<DiagnosticEntry>>, BoxError>;
}

/// The host editor collaborator.
pub trait EditorHost {
    /// Resolve a buffer's display name.
    fn buffer_name(&self, buf: BufferId) -> String;

    /// Measure text in display cells (glyph width, not byte length).
    fn display_width(&self, text: &str) -> u32;

    /// Prompt the user for a workspace-symbol query string.
    fn prompt_query(&self) -> String;
}
