//! Column rendering — fixed-width rows with byte-exact highlight spans.
//!
//! The host consumer addresses row text by byte offset, so highlight
//! placement and padding are computed over encoded bytes. Column sizing
//! is the one place that measures display cells instead: it goes through
//! the editor collaborator's width call, which accounts for wide glyphs.

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::host::EditorHost;
use crate::tree::SymbolNode;

use super::config::ColumnConfig;

/// Span name tagging every label highlight emitted by this renderer.
pub const HIGHLIGHT_NAME: &str = "symlens-kind-label";

/// Extra display cells reserved beyond the widest row when sizing the
/// column.
pub const COLUMN_MARGIN: u32 = 10;

/// A highlighted byte range within a rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Span name, for the host to manage highlight lifetimes.
    pub name: &'static str,
    /// Highlight group to apply.
    pub group: SmolStr,
    /// 1-based byte offset of the span within the row.
    pub col: u32,
    /// Span width in bytes.
    pub width: u32,
}

/// The rendered text for one row, plus any highlight spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub text: String,
    pub highlights: Vec<HighlightSpan>,
}

/// Render one node into a fixed-width row.
///
/// Layout: `indent` spaces (`depth * indent_width`), the expand icon (or
/// a blank for leaves) plus one space, the kind label, one space, then
/// the node's display word. The row is right-padded with spaces until
/// its byte length reaches `end_col - start_col`; a row already that
/// long or longer is left unpadded (never truncated).
pub fn render(
    node: &SymbolNode,
    depth: u32,
    expanded: bool,
    config: &ColumnConfig,
    start_col: u32,
    end_col: u32,
) -> RenderedCell {
    let icon: &str = if node.is_expandable {
        if expanded {
            &config.expanded_icon
        } else {
            &config.collapsed_icon
        }
    } else {
        " "
    };
    let prefix = format!("{icon} ");
    let indent = (config.indent_width * depth) as usize;

    let resolved = config.kind_labels.resolve(node.kind);
    let highlights = match &resolved.highlight_group {
        Some(group) => vec![HighlightSpan {
            name: HIGHLIGHT_NAME,
            group: group.clone(),
            col: indent as u32 + prefix.len() as u32 + 1,
            width: resolved.label.len() as u32,
        }],
        None => Vec::new(),
    };

    let mut text = format!(
        "{:indent$}{prefix}{label} {word}",
        "",
        label = resolved.label,
        word = node.word,
    );

    let target = end_col.saturating_sub(start_col) as usize;
    let padding = target.saturating_sub(text.len());
    text.extend(std::iter::repeat_n(' ', padding));

    RenderedCell { text, highlights }
}

/// Compute the display-cell width required to fit every row.
///
/// Per row: `depth * indent_width + 1 + icon_width + display_width(word)`
/// plus a fixed margin. Width lookups are read-only and independent, so
/// they fan out across items.
pub fn column_width<H>(nodes: &[SymbolNode], config: &ColumnConfig, host: &H) -> u32
where
    H: EditorHost + Sync + ?Sized,
{
    nodes
        .par_iter()
        .map(|node| {
            node.depth() * config.indent_width
                + 1
                + config.icon_width
                + host.display_width(&node.word)
                + COLUMN_MARGIN
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{BufferId, KindLabel, Location, SymbolKind};

    fn node(word: &str, kind: SymbolKind, path: &str, expandable: bool) -> SymbolNode {
        SymbolNode {
            name: path.rsplit('/').next().unwrap_or(path).into(),
            word: word.into(),
            kind,
            location: Location::new(BufferId::new(1), 1, 1),
            is_expandable: expandable,
            path: path.into(),
        }
    }

    /// Cell widths equal byte lengths for the ASCII fixtures used here.
    struct AsciiHost;

    impl EditorHost for AsciiHost {
        fn buffer_name(&self, _: BufferId) -> String {
            "test.rs".to_string()
        }

        fn display_width(&self, text: &str) -> u32 {
            text.len() as u32
        }

        fn prompt_query(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_render_leaf_layout() {
        let config = ColumnConfig::default();
        let n = node("Function foo", SymbolKind::Function, "foo", false);

        let cell = render(&n, 0, false, &config, 0, 0);

        // Blank icon slot for a leaf, then label, then the word.
        assert_eq!(cell.text, "  Function Function foo");
        assert!(cell.highlights.is_empty());
    }

    #[test]
    fn test_render_expandable_icons() {
        let config = ColumnConfig::default();
        let n = node("Class Widget", SymbolKind::Class, "Widget", true);

        let collapsed = render(&n, 0, false, &config, 0, 0);
        assert!(collapsed.text.starts_with("+ "));

        let expanded = render(&n, 0, true, &config, 0, 0);
        assert!(expanded.text.starts_with("- "));
    }

    #[test]
    fn test_render_indents_by_depth() {
        let config = ColumnConfig::default();
        let n = node("Method draw", SymbolKind::Method, "Widget/draw", false);

        let cell = render(&n, 1, false, &config, 0, 0);
        assert!(cell.text.starts_with("      Method ")); // 4 indent + 2 prefix
    }

    #[test]
    fn test_render_pads_to_column_width() {
        let config = ColumnConfig::default();
        let n = node("Function foo", SymbolKind::Function, "foo", false);

        let cell = render(&n, 0, false, &config, 2, 42);
        assert_eq!(cell.text.len(), 40);
        assert_eq!(cell.text.trim_end(), "  Function Function foo");
    }

    #[test]
    fn test_render_never_truncates() {
        let config = ColumnConfig::default();
        let n = node("Function a_rather_long_name", SymbolKind::Function, "x", false);

        let unpadded = render(&n, 0, false, &config, 0, 0);
        let narrow = render(&n, 0, false, &config, 0, 5);

        // Narrower than the text: padding clamps to zero, text intact.
        assert_eq!(narrow.text, unpadded.text);
    }

    #[test]
    fn test_render_highlight_span_is_byte_exact() {
        let mut config = ColumnConfig::default();
        config
            .kind_labels
            .insert(SymbolKind::Function, KindLabel::Styled("ƒ".into(), "Special".into()));
        let n = node("ƒ fmt", SymbolKind::Function, "outer/fmt", false);

        let cell = render(&n, 1, false, &config, 0, 0);

        assert_eq!(cell.highlights.len(), 1);
        let span = &cell.highlights[0];
        assert_eq!(span.name, HIGHLIGHT_NAME);
        assert_eq!(span.group, "Special");
        // 4 indent bytes + 2 prefix bytes + 1 (1-based).
        assert_eq!(span.col, 7);
        // "ƒ" is two bytes, not one glyph.
        assert_eq!(span.width, 2);

        // The span lands exactly on the label bytes.
        let start = (span.col - 1) as usize;
        let end = start + span.width as usize;
        assert_eq!(&cell.text.as_bytes()[start..end], "ƒ".as_bytes());
    }

    #[test]
    fn test_column_width_takes_max_over_rows() {
        let config = ColumnConfig::default();
        let nodes = vec![
            node("Function a", SymbolKind::Function, "a", false),
            node("Function deeper", SymbolKind::Function, "a/b/deeper", false),
        ];

        // Depth 2 row: 2*4 + 1 + 1 + 15 + 10 = 35; depth 0 row: 22.
        assert_eq!(column_width(&nodes, &config, &AsciiHost), 35);
    }

    #[test]
    fn test_column_width_empty_batch() {
        let config = ColumnConfig::default();
        assert_eq!(column_width(&[], &config, &AsciiHost), 0);
    }
}
