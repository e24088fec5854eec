//! A consumer that swallows everything.

use crate::consumer::DiagnosticConsumer;
use crate::diagnostic::Diagnostic;
use sift_source::LocationAuthority;

/// Discards every diagnostic.
///
/// Used where diagnostics must still be produced but never surfaced. Each
/// discarded diagnostic is visible at `trace` level under the `sift::null` target.
#[derive(Debug, Default)]
pub struct NullConsumer;

impl DiagnosticConsumer for NullConsumer {
    fn handle_diagnostic(&mut self, _sources: &dyn LocationAuthority, diag: &Diagnostic) {
        tracing::trace!(
            target: "sift::null",
            kind = %diag.kind,
            loc = %diag.loc,
            "discarding diagnostic: {}",
            diag.message
        );
    }
}
