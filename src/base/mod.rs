//! Foundation types for the symlens providers.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`BufferId`] - Subject identifiers
//! - [`SourcePos`], [`SourceRange`], [`Location`] - Protocol and display positions
//! - [`SymbolKind`] - The protocol's closed kind enumeration
//! - [`KindLabel`], [`KindLabelMap`] - Caller-supplied label overrides
//!
//! This module has NO dependencies on other symlens modules.

mod buffer_id;
mod kind;
mod labels;
mod position;

pub use buffer_id::BufferId;
pub use kind::{KINDS, SymbolKind};
pub use labels::{KindLabel, KindLabelMap, ResolvedLabel};
pub use position::{Location, SourcePos, SourceRange};
