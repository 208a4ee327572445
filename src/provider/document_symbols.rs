//! Document symbol provider — the tree-shaped listing.

use crate::base::BufferId;
use crate::error::Error;
use crate::host::{EditorHost, SymbolSource};
use crate::nav::{ListOrder, Navigator, SymbolCache};
use crate::render::{ColumnConfig, column_width, render};
use crate::tree::SymbolNode;

use super::{Action, Row};

/// Lists a buffer's symbols as a lazily navigable tree.
///
/// A root request (empty path) rebuilds the buffer's cached tree; any
/// other path drills into the cache without touching the server. Rows
/// come back rendered for the requested column: freshly listed
/// expandable rows carry the collapsed icon, and the host re-renders a
/// row through [`crate::render::render`] when it expands it.
pub struct DocumentSymbolProvider<S, H> {
    nav: Navigator<S>,
    host: H,
    config: ColumnConfig,
}

impl<S, H> DocumentSymbolProvider<S, H>
where
    S: SymbolSource,
    H: EditorHost + Sync,
{
    /// Create a provider over a query source and editor host.
    ///
    /// The configured kind labels drive both the build-time display
    /// words and the render-time label styling.
    pub fn new(source: S, host: H, config: ColumnConfig) -> Self {
        let nav = Navigator::new(source, config.kind_labels.clone());
        Self { nav, host, config }
    }

    /// Use an explicit listing order.
    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.nav = self.nav.with_order(order);
        self
    }

    /// The provider's cache, for explicit invalidation.
    pub fn cache(&self) -> &SymbolCache {
        self.nav.cache()
    }

    /// List the nodes under `path` without rendering them.
    ///
    /// Hosts that size the column first call this once, then
    /// [`column_width`](Self::column_width) and
    /// [`render_rows`](Self::render_rows), so the root query is not
    /// issued twice.
    pub fn nodes(&self, buf: BufferId, path: &str) -> Result<Vec<SymbolNode>, Error> {
        self.nav.list(buf, path)
    }

    /// The display-cell width needed to fit the given nodes.
    pub fn column_width(&self, nodes: &[SymbolNode]) -> u32 {
        column_width(nodes, &self.config, &self.host)
    }

    /// Render listed nodes into rows for the `[start_col, end_col)`
    /// column window.
    pub fn render_rows(&self, nodes: &[SymbolNode], start_col: u32, end_col: u32) -> Vec<Row> {
        nodes
            .iter()
            .map(|node| {
                let cell = render(node, node.depth(), false, &self.config, start_col, end_col);
                Row {
                    text: cell.text,
                    highlights: cell.highlights,
                    action: Action::jump(node.location),
                    is_tree: node.is_expandable,
                    tree_path: Some(node.path.clone()),
                }
            })
            .collect()
    }

    /// One-call listing: nodes under `path`, rendered.
    pub fn list(
        &self,
        buf: BufferId,
        path: &str,
        start_col: u32,
        end_col: u32,
    ) -> Result<Vec<Row>, Error> {
        let nodes = self.nodes(buf, path)?;
        Ok(self.render_rows(&nodes, start_col, end_col))
    }
}
