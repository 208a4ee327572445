//! Buffer identifiers for addressing listing subjects.

use std::fmt;

/// An identifier for the buffer a symbol tree is built for.
///
/// `BufferId` is a lightweight handle (just a u32) wrapping the host
/// editor's buffer number. The buffer's display name is resolved through
/// the editor collaborator, never stored here.
///
/// Using `BufferId` instead of a raw integer throughout the codebase:
/// - Keeps buffer numbers from being confused with line/column numbers
/// - Makes the cache key type explicit
/// - Enables cheap copying and hashing
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BufferId(pub u32);

impl BufferId {
    /// Create a new BufferId from a raw buffer number.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw buffer number.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BufferId({})", self.0)
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buf#{}", self.0)
    }
}

impl From<u32> for BufferId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<BufferId> for u32 {
    #[inline]
    fn from(id: BufferId) -> Self {
        id.0
    }
}
