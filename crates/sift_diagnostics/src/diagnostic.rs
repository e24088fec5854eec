//! Fully formatted diagnostic events as delivered to consumers.

use crate::kind::DiagnosticKind;
use serde::{Deserialize, Serialize};
use sift_source::SourceLoc;

/// A single diagnostic event: its kind, where it points, and its formatted text.
///
/// Formatting happens before the event reaches a consumer; consumers decide
/// only where and how the message is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Whether this is an error, warning, remark or note.
    pub kind: DiagnosticKind,
    /// The location the diagnostic refers to, possibly [`SourceLoc::INVALID`].
    pub loc: SourceLoc,
    /// The formatted diagnostic message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic of the given kind.
    pub fn new(kind: DiagnosticKind, loc: SourceLoc, message: impl Into<String>) -> Self {
        Self {
            kind,
            loc,
            message: message.into(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, loc, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, loc, message)
    }

    /// Creates a remark diagnostic.
    pub fn remark(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Remark, loc, message)
    }

    /// Creates a note attached to the preceding primary diagnostic.
    pub fn note(loc: SourceLoc, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Note, loc, message)
    }
}
