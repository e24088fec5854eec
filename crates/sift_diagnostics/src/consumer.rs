//! The interface every diagnostic destination implements.

use crate::diagnostic::Diagnostic;
use sift_source::LocationAuthority;

/// An object that receives diagnostics as they are emitted.
///
/// Consumers are driven from a single thread, one diagnostic at a time, in
/// emission order. [`finish`](Self::finish) is called exactly once after the
/// last diagnostic.
pub trait DiagnosticConsumer {
    /// Handles one diagnostic.
    ///
    /// `sources` resolves the diagnostic's location for consumers that print
    /// file/line information.
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic);

    /// Finishes processing (flushing any output) and returns `true` if an
    /// error was emitted through this consumer or its output failed.
    fn finish(&mut self) -> bool {
        false
    }
}

impl<C: DiagnosticConsumer + ?Sized> DiagnosticConsumer for Box<C> {
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic) {
        (**self).handle_diagnostic(sources, diag);
    }

    fn finish(&mut self) -> bool {
        (**self).finish()
    }
}

impl<C: DiagnosticConsumer + ?Sized> DiagnosticConsumer for &mut C {
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic) {
        (**self).handle_diagnostic(sources, diag);
    }

    fn finish(&mut self) -> bool {
        (**self).finish()
    }
}
