//! Column rendering configuration.

use smol_str::SmolStr;

use crate::base::KindLabelMap;

/// Rendering parameters for the symbol column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Icon shown before an expandable node that is collapsed.
    pub collapsed_icon: SmolStr,
    /// Icon shown before an expandable node that is expanded.
    pub expanded_icon: SmolStr,
    /// Display-cell width reserved for the icon.
    pub icon_width: u32,
    /// Display cells of indentation per tree level.
    pub indent_width: u32,
    /// Kind label overrides applied at render time.
    pub kind_labels: KindLabelMap,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            collapsed_icon: SmolStr::new_static("+"),
            expanded_icon: SmolStr::new_static("-"),
            icon_width: 1,
            indent_width: 4,
            kind_labels: KindLabelMap::new(),
        }
    }
}

#[cfg(feature = "config")]
mod load {
    use indexmap::IndexMap;
    use serde::Deserialize;
    use thiserror::Error;

    use super::ColumnConfig;
    use crate::base::{KindLabel, KindLabelMap, SymbolKind};

    /// A configuration file failed to load.
    ///
    /// Kind names are checked against the closed enumeration here, at
    /// load time, so lookups never meet an invalid key.
    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("configuration is not valid JSON")]
        Parse(#[from] serde_json::Error),

        #[error("unknown symbol kind name '{0}' in kindLabels")]
        UnknownKind(String),
    }

    /// A label override as written in configuration: a bare string or a
    /// `[label, highlightGroup]` pair.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    enum LabelSpec {
        Plain(String),
        Styled(String, String),
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct RawConfig {
        collapsed_icon: Option<String>,
        expanded_icon: Option<String>,
        icon_width: Option<u32>,
        indent_width: Option<u32>,
        kind_labels: IndexMap<String, LabelSpec>,
    }

    impl ColumnConfig {
        /// Load a column configuration from JSON, validating kind names.
        ///
        /// Absent fields keep their defaults.
        pub fn from_json(text: &str) -> Result<Self, ConfigError> {
            let raw: RawConfig = serde_json::from_str(text)?;
            let mut config = Self::default();

            if let Some(icon) = raw.collapsed_icon {
                config.collapsed_icon = icon.into();
            }
            if let Some(icon) = raw.expanded_icon {
                config.expanded_icon = icon.into();
            }
            if let Some(width) = raw.icon_width {
                config.icon_width = width;
            }
            if let Some(width) = raw.indent_width {
                config.indent_width = width;
            }

            let mut labels = KindLabelMap::new();
            for (name, spec) in raw.kind_labels {
                let kind = SymbolKind::from_name(&name)
                    .ok_or_else(|| ConfigError::UnknownKind(name.clone()))?;
                let label = match spec {
                    LabelSpec::Plain(text) => KindLabel::Plain(text.into()),
                    LabelSpec::Styled(text, group) => {
                        KindLabel::Styled(text.into(), group.into())
                    }
                };
                labels.insert(kind, label);
            }
            config.kind_labels = labels;

            Ok(config)
        }
    }

}

#[cfg(feature = "config")]
pub use load::ConfigError;
