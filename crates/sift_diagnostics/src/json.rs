//! Serialized diagnostics: one JSON object per line, written on finish.

use crate::consumer::DiagnosticConsumer;
use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use serde::{Deserialize, Serialize};
use sift_source::LocationAuthority;
use std::io::{self, Write};

/// A diagnostic with its location already resolved, as written by [`JsonLinesConsumer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// The diagnostic kind.
    pub kind: DiagnosticKind,
    /// The formatted message.
    pub message: String,
    /// The file the diagnostic points into, if its location resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// The 1-indexed line, if the location resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// The 1-indexed column, if the location resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl DiagnosticRecord {
    /// Resolves `diag` against `sources`.
    pub fn new(diag: &Diagnostic, sources: &dyn LocationAuthority) -> Self {
        let resolved = sources.resolve(diag.loc);
        Self {
            kind: diag.kind,
            message: diag.message.clone(),
            file: resolved
                .as_ref()
                .map(|r| r.file_path.to_string_lossy().into_owned()),
            line: resolved.as_ref().map(|r| r.line),
            column: resolved.as_ref().map(|r| r.col),
        }
    }
}

/// Collects diagnostics and serializes them as JSON lines when finished.
///
/// Locations are resolved as diagnostics arrive, so the output does not
/// depend on the source database outliving the consumer's last event.
pub struct JsonLinesConsumer<W: Write> {
    out: W,
    records: Vec<DiagnosticRecord>,
    saw_error: bool,
}

impl<W: Write> JsonLinesConsumer<W> {
    /// Creates a consumer that writes to `out` on finish.
    pub fn new(out: W) -> Self {
        Self {
            out,
            records: Vec::new(),
            saw_error: false,
        }
    }

    /// Returns the records collected but not yet written.
    pub fn pending(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_records(&mut self) -> io::Result<()> {
        for record in &self.records {
            serde_json::to_writer(&mut self.out, record)?;
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        self.records.clear();
        Ok(())
    }
}

impl<W: Write> DiagnosticConsumer for JsonLinesConsumer<W> {
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic) {
        self.saw_error |= diag.kind.is_error();
        self.records.push(DiagnosticRecord::new(diag, sources));
    }

    fn finish(&mut self) -> bool {
        match self.write_records() {
            Ok(()) => self.saw_error,
            Err(err) => {
                tracing::warn!(error = %err, "failed to write serialized diagnostics");
                true
            }
        }
    }
}
