//! Diagnostic flattening — per-buffer diagnostics to displayable rows.
//!
//! Diagnostics arrive already flat, so this pipeline has no tree and no
//! cache: each entry becomes one row, in whatever order the collaborator
//! returned them.

use crate::base::BufferId;
use crate::host::EditorHost;

/// Severity level of a diagnostic (1-based protocol codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Severity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

impl Severity {
    /// Resolve a 1-based protocol severity code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is outside `1..=4`; like kind codes, an
    /// out-of-range severity is a collaborator contract violation.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Severity::Error,
            2 => Severity::Warning,
            3 => Severity::Information,
            4 => Severity::Hint,
            _ => panic!("severity code out of range: {code}"),
        }
    }

    /// The protocol severity number.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// The display label used in rendered rows.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Information => "Information",
            Severity::Hint => "Hint",
        }
    }
}

/// One diagnostic as received from the query collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column number.
    pub col: u32,
    /// The buffer the diagnostic belongs to.
    pub buf: BufferId,
    /// Raw 1-based severity code.
    pub severity: u32,
    /// The diagnostic message.
    pub message: String,
}

/// A displayable diagnostic row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRow {
    /// Human-readable summary: `name:line:col message [Severity]`.
    pub text: String,
    /// The buffer's display name, resolved through the editor.
    pub path: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub col: u32,
    /// Resolved severity.
    pub severity: Severity,
}

/// Flatten a diagnostics result into displayable rows.
///
/// A null result yields an empty output, not an error. Ordering is the
/// collaborator's; nothing is sorted here.
///
/// # Panics
///
/// Panics on an out-of-range severity code (see [`Severity::from_code`]).
pub fn flatten<H>(entries: Option<Vec<DiagnosticEntry>>, host: &H) -> Vec<DiagnosticRow>
where
    H: EditorHost + ?Sized,
{
    let Some(entries) = entries else {
        return Vec::new();
    };

    entries
        .into_iter()
        .map(|entry| {
            let path = host.buffer_name(entry.buf);
            let severity = Severity::from_code(entry.severity);
            let line = entry.line + 1;
            let col = entry.col + 1;
            let text = format!(
                "{path}:{line}:{col} {message} [{label}]",
                message = entry.message,
                label = severity.label(),
            );
            DiagnosticRow {
                text,
                path,
                line,
                col,
                severity,
            }
        })
        .collect()
}
