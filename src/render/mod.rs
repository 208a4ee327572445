//! Column rendering — node to fixed-width highlighted text.

mod column;
mod config;

pub use column::{COLUMN_MARGIN, HIGHLIGHT_NAME, HighlightSpan, RenderedCell, column_width, render};
pub use config::ColumnConfig;

#[cfg(feature = "config")]
pub use config::ConfigError;
