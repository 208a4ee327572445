//! Diagnostics provider — the flat severity listing.

use crate::base::BufferId;
use crate::diagnostic::{DiagnosticRow, flatten};
use crate::error::Error;
use crate::host::{EditorHost, SymbolSource};

use super::{Action, Row};

/// Lists current diagnostics as displayable rows.
pub struct DiagnosticProvider<S, H> {
    source: S,
    host: H,
}

impl<S, H> DiagnosticProvider<S, H>
where
    S: SymbolSource,
    H: EditorHost,
{
    /// Create a provider over a query source and editor host.
    pub fn new(source: S, host: H) -> Self {
        Self { source, host }
    }

    /// List diagnostics for the subject.
    ///
    /// A null result yields an empty listing; rows keep the
    /// collaborator's order.
    pub fn list(&self, buf: BufferId) -> Result<Vec<Row>, Error> {
        let entries = self.source.diagnostics(buf).map_err(Error::Query)?;
        Ok(flatten(entries, &self.host).into_iter().map(into_row).collect())
    }
}

fn into_row(row: DiagnosticRow) -> Row {
    Row {
        action: Action::File {
            path: row.path.into(),
            line: row.line,
            col: row.col,
        },
        text: row.text,
        highlights: Vec::new(),
        is_tree: false,
        tree_path: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticEntry;
    use crate::error::BoxError;
    use crate::tree::SymbolBatch;

    struct DiagSource(Option<Vec<DiagnosticEntry>>);

    impl SymbolSource for DiagSource {
        fn document_symbols(&self, _: BufferId) -> Result<Option<Vec<SymbolBatch>>, BoxError> {
            Ok(None)
        }

        fn workspace_symbols(
            &self,
            _: BufferId,
            _: &str,
        ) -> Result<Option<Vec<SymbolBatch>>, BoxError> {
            Ok(None)
        }

        fn diagnostics(&self, _: BufferId) -> Result<Option<Vec<DiagnosticEntry>>, BoxError> {
            Ok(self.0.clone())
        }
    }

    struct OneBuffer;

    impl EditorHost for OneBuffer {
        fn buffer_name(&self, _: BufferId) -> String {
            "main.go".to_string()
        }

        fn display_width(&self, text: &str) -> u32 {
            text.len() as u32
        }

        fn prompt_query(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_list_wraps_flattened_rows() {
        let provider = DiagnosticProvider::new(
            DiagSource(Some(vec![DiagnosticEntry {
                line: 4,
                col: 2,
                buf: BufferId::new(7),
                severity: 2,
                message: "unused var".to_string(),
            }])),
            OneBuffer,
        );

        let rows = provider.list(BufferId::new(7)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "main.go:5:3 unused var [Warning]");
        assert!(!rows[0].is_tree);
        assert_eq!(
            rows[0].action,
            Action::File {
                path: "main.go".into(),
                line: 5,
                col: 3
            }
        );
    }

    #[test]
    fn test_list_null_result_is_empty() {
        let provider = DiagnosticProvider::new(DiagSource(None), OneBuffer);
        assert!(provider.list(BufferId::new(1)).unwrap().is_empty());
    }
}
