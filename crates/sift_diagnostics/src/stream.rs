//! A consumer that prints rendered diagnostics to an output stream.

use crate::consumer::DiagnosticConsumer;
use crate::diagnostic::Diagnostic;
use crate::renderer::{DiagnosticRenderer, TerminalRenderer};
use sift_source::LocationAuthority;
use std::io::{self, BufWriter, Write};

/// Writes each diagnostic through a [`TerminalRenderer`] into a buffered stream.
///
/// The first write failure is logged and remembered; later diagnostics are
/// dropped and [`finish`](DiagnosticConsumer::finish) reports the failure.
pub struct StreamConsumer<W: Write> {
    stream: BufWriter<W>,
    renderer: TerminalRenderer,
    saw_error: bool,
    write_failed: bool,
}

impl<W: Write> StreamConsumer<W> {
    /// Creates a consumer writing to `stream`.
    pub fn new(stream: W, color: bool) -> Self {
        Self {
            stream: BufWriter::new(stream),
            renderer: TerminalRenderer::new(color),
            saw_error: false,
            write_failed: false,
        }
    }

    /// Flushes and returns the underlying stream.
    pub fn into_inner(self) -> io::Result<W> {
        self.stream.into_inner().map_err(|e| e.into_error())
    }

    fn record_failure(&mut self, err: io::Error) {
        tracing::warn!(error = %err, "failed to write diagnostic output");
        self.write_failed = true;
    }
}

impl<W: Write> DiagnosticConsumer for StreamConsumer<W> {
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic) {
        self.saw_error |= diag.kind.is_error();
        if self.write_failed {
            return;
        }
        let text = self.renderer.render(diag, sources);
        if let Err(err) = self.stream.write_all(text.as_bytes()) {
            self.record_failure(err);
        }
    }

    fn finish(&mut self) -> bool {
        if !self.write_failed {
            if let Err(err) = self.stream.flush() {
                self.record_failure(err);
            }
        }
        self.saw_error || self.write_failed
    }
}

/// Returns a consumer printing to standard error.
pub fn stderr_consumer(color: bool) -> StreamConsumer<io::Stderr> {
    StreamConsumer::new(io::stderr(), color)
}
