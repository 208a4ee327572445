//! Property-based tests for the listing and rendering laws.
//!
//! Uses proptest to generate arbitrary sibling sets (with deliberately
//! colliding names) and arbitrary column geometry, and checks the laws
//! the providers promise: exactly-once listing with last-write-wins
//! duplicates, stable by-line ordering, and clamp-only padding.
#![cfg(feature = "proptest")]

use proptest::prelude::*;

use symlens::base::{BufferId, KindLabelMap, SourcePos, SourceRange, SymbolKind};
use symlens::diagnostic::DiagnosticEntry;
use symlens::error::BoxError;
use symlens::host::SymbolSource;
use symlens::nav::{ListOrder, Navigator};
use symlens::render::{ColumnConfig, render};
use symlens::tree::{SymbolBatch, SymbolEntry, SymbolNode};
use symlens::Location;

/// Serves a fixed entry list as the document-symbol result.
struct ListSource(Vec<SymbolEntry>);

impl SymbolSource for ListSource {
    fn document_symbols(&self, _: BufferId) -> Result<Option<Vec<SymbolBatch>>, BoxError> {
        Ok(Some(vec![SymbolBatch::of(self.0.clone())]))
    }

    fn workspace_symbols(
        &self,
        _: BufferId,
        _: &str,
    ) -> Result<Option<Vec<SymbolBatch>>, BoxError> {
        Ok(None)
    }

    fn diagnostics(&self, _: BufferId) -> Result<Option<Vec<DiagnosticEntry>>, BoxError> {
        Ok(None)
    }
}

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Names from a tiny pool so duplicates actually occur.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("gamma".to_string()),
        Just("delta".to_string()),
        "[a-z]{1,6}",
    ]
}

fn arb_entry() -> impl Strategy<Value = SymbolEntry> {
    (arb_name(), 1u32..=26, 0u32..50, 0u32..80).prop_map(|(name, kind, line, character)| {
        SymbolEntry::Hierarchical {
            name: name.into(),
            kind,
            range: SourceRange::at(SourcePos::new(line, character)),
            children: Vec::new(),
        }
    })
}

fn arb_entries() -> impl Strategy<Value = Vec<SymbolEntry>> {
    proptest::collection::vec(arb_entry(), 0..12)
}

/// Independent model of the sibling-map semantics: first-occurrence
/// slot, last-occurrence data.
fn dedup_last_wins(entries: &[SymbolEntry]) -> Vec<SymbolEntry> {
    let mut out: Vec<SymbolEntry> = Vec::new();
    for entry in entries {
        match out.iter_mut().find(|e| e.name() == entry.name()) {
            Some(slot) => *slot = entry.clone(),
            None => out.push(entry.clone()),
        }
    }
    out
}

fn list(entries: Vec<SymbolEntry>, order: ListOrder) -> Vec<SymbolNode> {
    let nav = Navigator::new(ListSource(entries), KindLabelMap::new()).with_order(order);
    nav.list(BufferId::new(1), "").unwrap()
}

// ============================================================================
// LISTING LAWS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every distinct input name appears exactly once.
    #[test]
    fn listing_is_exactly_once(entries in arb_entries()) {
        let expected = dedup_last_wins(&entries);
        let nodes = list(entries, ListOrder::ByLine);

        prop_assert_eq!(nodes.len(), expected.len());
        for entry in &expected {
            let matches = nodes.iter().filter(|n| n.name == *entry.name()).count();
            prop_assert_eq!(matches, 1, "name {} listed {} times", entry.name(), matches);
        }
    }

    /// Duplicate siblings carry the last occurrence's data.
    #[test]
    fn duplicates_collapse_to_last(entries in arb_entries()) {
        let expected = dedup_last_wins(&entries);
        let nodes = list(entries, ListOrder::ByLine);

        for entry in &expected {
            let node = nodes.iter().find(|n| n.name == *entry.name()).unwrap();
            let line = entry.range().unwrap().start.line + 1;
            prop_assert_eq!(node.location.line, line);
        }
    }

    /// ByLine listings are non-decreasing in line, ties in mapping order.
    #[test]
    fn by_line_is_stable_sort(entries in arb_entries()) {
        let mut expected = dedup_last_wins(&entries);
        expected.sort_by_key(|e| e.range().unwrap().start.line);
        let nodes = list(entries, ListOrder::ByLine);

        let got: Vec<_> = nodes.iter().map(|n| n.name.as_str().to_string()).collect();
        let want: Vec<_> = expected.iter().map(|e| e.name().to_string()).collect();
        prop_assert_eq!(got, want);
    }

    /// Insertion listings reproduce mapping order unsorted.
    #[test]
    fn insertion_order_is_mapping_order(entries in arb_entries()) {
        let expected = dedup_last_wins(&entries);
        let nodes = list(entries, ListOrder::Insertion);

        let got: Vec<_> = nodes.iter().map(|n| n.name.as_str().to_string()).collect();
        let want: Vec<_> = expected.iter().map(|e| e.name().to_string()).collect();
        prop_assert_eq!(got, want);
    }
}

// ============================================================================
// RENDERING LAWS
// ============================================================================

fn arb_node() -> impl Strategy<Value = SymbolNode> {
    (arb_name(), "[a-zA-Zàéß ]{0,12}", 1u32..=26, any::<bool>()).prop_map(
        |(name, word, kind, expandable)| SymbolNode {
            name: name.clone().into(),
            word: word.into(),
            kind: SymbolKind::from_code(kind),
            location: Location::new(BufferId::new(1), 1, 1),
            is_expandable: expandable,
            path: name.into(),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Row length is exactly the column width when it fits, and the
    /// unpadded length when it does not; nothing is ever truncated.
    #[test]
    fn padding_clamps_and_never_truncates(
        node in arb_node(),
        depth in 0u32..5,
        expanded in any::<bool>(),
        start_col in 0u32..20,
        end_col in 0u32..80,
    ) {
        let config = ColumnConfig::default();
        let unpadded = render(&node, depth, expanded, &config, 0, 0).text;
        let cell = render(&node, depth, expanded, &config, start_col, end_col);

        let target = end_col.saturating_sub(start_col) as usize;
        prop_assert_eq!(cell.text.len(), target.max(unpadded.len()));
        prop_assert!(cell.text.starts_with(&unpadded));
    }
}
