//! Error taxonomy for listing operations.

use thiserror::Error;

/// A boxed error from an external collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by listing operations.
///
/// Collaborator failures are wrapped and propagated, never retried; a
/// null query result is not an error (it yields an empty listing).
#[derive(Debug, Error)]
pub enum Error {
    /// A path segment named no sibling at its level of the cached tree.
    /// Hard failure, not recovered.
    #[error("path not found: no symbol named '{segment}' under '{path}'")]
    PathNotFound {
        /// The segment that failed to resolve.
        segment: String,
        /// The full path being resolved.
        path: String,
    },

    /// The query collaborator itself failed. The previous cache entry,
    /// if any, is left in place.
    #[error("symbol query failed")]
    Query(#[source] BoxError),
}

impl Error {
    /// True for a path lookup failure.
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound { .. })
    }
}
