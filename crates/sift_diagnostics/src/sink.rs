//! In-memory diagnostic accumulator.

use crate::consumer::DiagnosticConsumer;
use crate::diagnostic::Diagnostic;
use sift_source::LocationAuthority;
use std::cell::{Cell, RefCell};

/// An accumulator for diagnostics emitted during compilation.
///
/// Diagnostics can be emitted through a shared reference via
/// [`emit`](Self::emit), so a driver can hand `&sink` to a router as one of
/// its consumers and still inspect the sink afterwards.
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
    error_count: Cell<usize>,
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            error_count: Cell::new(0),
        }
    }

    /// Emits a diagnostic into the sink.
    ///
    /// If the diagnostic is an error, the error count is incremented.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.kind.is_error() {
            self.error_count.set(self.error_count.get() + 1);
        }
        self.diagnostics.borrow_mut().push(diag);
    }

    /// Returns `true` if any error diagnostics have been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.get() > 0
    }

    /// Returns the number of error diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    /// Returns the number of diagnostics currently held.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns `true` if the sink currently holds no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Returns the messages of all accumulated diagnostics, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticConsumer for DiagnosticSink {
    fn handle_diagnostic(&mut self, _sources: &dyn LocationAuthority, diag: &Diagnostic) {
        self.emit(diag.clone());
    }

    fn finish(&mut self) -> bool {
        self.has_errors()
    }
}

impl DiagnosticConsumer for &DiagnosticSink {
    fn handle_diagnostic(&mut self, _sources: &dyn LocationAuthority, diag: &Diagnostic) {
        self.emit(diag.clone());
    }

    fn finish(&mut self) -> bool {
        self.has_errors()
    }
}
