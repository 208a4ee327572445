//! Caller-supplied kind label overrides.
//!
//! Hosts can replace a kind's display label with anything from a short
//! word to a single glyph, optionally paired with a highlight group for
//! the renderer. Kinds without an override fall back to the raw
//! enumeration name.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::SymbolKind;

/// A configured label override for one symbol kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindLabel {
    /// Replace the label text only.
    Plain(SmolStr),
    /// Replace the label text and tag it with a highlight group.
    Styled(SmolStr, SmolStr),
}

impl KindLabel {
    /// The label text, regardless of styling.
    pub fn text(&self) -> &str {
        match self {
            KindLabel::Plain(label) => label,
            KindLabel::Styled(label, _) => label,
        }
    }

    /// The highlight group, if this override carries one.
    pub fn highlight_group(&self) -> Option<&str> {
        match self {
            KindLabel::Plain(_) => None,
            KindLabel::Styled(_, group) => Some(group),
        }
    }
}

/// The result of resolving a kind through a [`KindLabelMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    /// The display label (override or raw enumeration name).
    pub label: SmolStr,
    /// Highlight group, present only for styled overrides.
    pub highlight_group: Option<SmolStr>,
}

/// Mapping from symbol kind to a configured label override.
///
/// Keys are the closed [`SymbolKind`] enumeration, so an invalid kind
/// name can only arise while loading external configuration, never at
/// lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindLabelMap {
    labels: IndexMap<SymbolKind, KindLabel>,
}

impl KindLabelMap {
    /// Create an empty map (every kind falls back to its raw name).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for a kind, replacing any previous one.
    pub fn insert(&mut self, kind: SymbolKind, label: KindLabel) {
        self.labels.insert(kind, label);
    }

    /// Get the override for a kind, if configured.
    pub fn get(&self, kind: SymbolKind) -> Option<&KindLabel> {
        self.labels.get(&kind)
    }

    /// Resolve the display label for a kind.
    ///
    /// Falls back to the raw enumeration name when no override exists.
    /// Pure lookup, no side effects.
    pub fn resolve(&self, kind: SymbolKind) -> ResolvedLabel {
        match self.labels.get(&kind) {
            Some(KindLabel::Plain(label)) => ResolvedLabel {
                label: label.clone(),
                highlight_group: None,
            },
            Some(KindLabel::Styled(label, group)) => ResolvedLabel {
                label: label.clone(),
                highlight_group: Some(group.clone()),
            },
            None => ResolvedLabel {
                label: SmolStr::new_static(kind.name()),
                highlight_group: None,
            },
        }
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether any overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over configured overrides.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolKind, &KindLabel)> {
        self.labels.iter().map(|(&kind, label)| (kind, label))
    }
}

impl FromIterator<(SymbolKind, KindLabel)> for KindLabelMap {
    fn from_iter<I: IntoIterator<Item = (SymbolKind, KindLabel)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fallback_is_raw_name() {
        let map = KindLabelMap::new();
        let resolved = map.resolve(SymbolKind::Class);

        assert_eq!(resolved.label, "Class");
        assert_eq!(resolved.highlight_group, None);
    }

    #[test]
    fn test_resolve_plain_override() {
        let mut map = KindLabelMap::new();
        map.insert(SymbolKind::Method, KindLabel::Plain("m".into()));

        let resolved = map.resolve(SymbolKind::Method);
        assert_eq!(resolved.label, "m");
        assert_eq!(resolved.highlight_group, None);
    }

    #[test]
    fn test_resolve_styled_override() {
        let mut map = KindLabelMap::new();
        map.insert(
            SymbolKind::Function,
            KindLabel::Styled("ƒ".into(), "Special".into()),
        );

        let resolved = map.resolve(SymbolKind::Function);
        assert_eq!(resolved.label, "ƒ");
        assert_eq!(resolved.highlight_group.as_deref(), Some("Special"));

        // Other kinds are untouched by the override.
        let other = map.resolve(SymbolKind::Variable);
        assert_eq!(other.label, "Variable");
        assert_eq!(other.highlight_group, None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = KindLabelMap::new();
        map.insert(SymbolKind::Enum, KindLabel::Plain("e".into()));
        map.insert(SymbolKind::Enum, KindLabel::Plain("E".into()));

        assert_eq!(map.len(), 1);
        assert_eq!(map.resolve(SymbolKind::Enum).label, "E");
    }
}
