//! Workspace symbol provider — flat search across the project.

use tracing::debug;

use crate::base::{BufferId, Location, SourcePos};
use crate::error::Error;
use crate::host::{EditorHost, SymbolSource};

use super::{Action, Row};

/// Searches workspace symbols by a user-supplied query string.
///
/// Results are flat entries addressed by URI; they go straight to rows
/// in arrival order, with the bare symbol name as display text. No tree
/// is built and nothing is cached: every search is a fresh query.
pub struct WorkspaceSymbolProvider<S, H> {
    source: S,
    host: H,
}

impl<S, H> WorkspaceSymbolProvider<S, H>
where
    S: SymbolSource,
    H: EditorHost,
{
    /// Create a provider over a query source and editor host.
    pub fn new(source: S, host: H) -> Self {
        Self { source, host }
    }

    /// Prompt the user for a query string, then search.
    pub fn search(&self, buf: BufferId) -> Result<Vec<Row>, Error> {
        let query = self.host.prompt_query();
        self.search_with(buf, &query)
    }

    /// Search with an explicit query string.
    ///
    /// A null result yields an empty listing. An entry without a range
    /// locates at line 1, column 1.
    pub fn search_with(&self, buf: BufferId, query: &str) -> Result<Vec<Row>, Error> {
        let batches = self
            .source
            .workspace_symbols(buf, query)
            .map_err(Error::Query)?;
        let Some(batches) = batches else {
            debug!(subject = %buf, query, "null workspace symbol result");
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        for batch in &batches {
            for entry in batch.entries() {
                let start = entry.range().map(|r| r.start).unwrap_or(SourcePos::new(0, 0));
                let location = Location::from_protocol(buf, start);
                rows.push(Row {
                    text: entry.name().to_string(),
                    highlights: Vec::new(),
                    action: Action::File {
                        path: entry.uri().map(|uri| uri.as_str().into()).unwrap_or_default(),
                        line: location.line,
                        col: location.col,
                    },
                    is_tree: false,
                    tree_path: None,
                });
            }
        }
        Ok(rows)
    }
}
