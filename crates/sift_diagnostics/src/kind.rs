//! Diagnostic kinds and the primary/note distinction used for routing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a diagnostic event.
///
/// Errors, warnings and remarks are *primary* diagnostics: each one is routed
/// on its own location. A [`Note`](DiagnosticKind::Note) elaborates on the
/// primary diagnostic emitted just before it and follows that diagnostic's route.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A definite problem that prevents successful compilation.
    Error,
    /// A potential issue that doesn't prevent compilation.
    Warning,
    /// Informational output requested by the user (e.g., optimization reports).
    Remark,
    /// Additional context attached to the preceding primary diagnostic.
    Note,
}

impl DiagnosticKind {
    /// Returns `true` for errors, warnings and remarks.
    pub fn is_primary(self) -> bool {
        !matches!(self, DiagnosticKind::Note)
    }

    /// Returns `true` if this kind is [`Error`](DiagnosticKind::Error).
    pub fn is_error(self) -> bool {
        self == DiagnosticKind::Error
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "error"),
            DiagnosticKind::Warning => write!(f, "warning"),
            DiagnosticKind::Remark => write!(f, "remark"),
            DiagnosticKind::Note => write!(f, "note"),
        }
    }
}
