//! Human-readable rendering of diagnostics.

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use sift_source::LocationAuthority;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string ending in a newline.
    fn render(&self, diag: &Diagnostic, sources: &dyn LocationAuthority) -> String;
}

/// Renders diagnostics in the classic compiler terminal format.
///
/// Produces output like:
/// ```text
/// src/a.x:3:9: error: use of undeclared name 'y'
/// let x = y + 1;
///         ^
/// ```
/// Diagnostics whose location cannot be resolved get a `<unknown>` header
/// and no source excerpt.
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn kind_label(&self, kind: DiagnosticKind) -> String {
        if !self.color {
            return kind.to_string();
        }
        let code = match kind {
            DiagnosticKind::Error => "1;31",
            DiagnosticKind::Warning => "1;35",
            DiagnosticKind::Remark => "1;34",
            DiagnosticKind::Note => "1;30",
        };
        format!("\x1b[{code}m{kind}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, sources: &dyn LocationAuthority) -> String {
        let label = self.kind_label(diag.kind);
        let Some(resolved) = sources.resolve(diag.loc) else {
            return format!("<unknown>: {label}: {}\n", diag.message);
        };

        let mut out = format!("{resolved}: {label}: {}\n", diag.message);
        if let Some(line) = sources.line_text(diag.loc) {
            let col_padding = " ".repeat((resolved.col as usize).saturating_sub(1));
            out.push_str(line);
            out.push('\n');
            out.push_str(&col_padding);
            out.push_str("^\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_source::{SourceDb, SourceLoc};

    #[test]
    fn render_error_with_location() {
        let mut db = SourceDb::new();
        db.add_source("test.x", "let x = 1\nlet y = z\n".to_string());
        let loc = db.loc_in("test.x", 18).unwrap();
        let diag = Diagnostic::error(loc, "use of undeclared name 'z'");

        let output = TerminalRenderer::new(false).render(&diag, &db);

        assert_eq!(
            output,
            "test.x:2:9: error: use of undeclared name 'z'\nlet y = z\n        ^\n"
        );
    }

    #[test]
    fn render_note_without_location() {
        let db = SourceDb::new();
        let diag = Diagnostic::note(SourceLoc::INVALID, "while building module 'core'");

        let output = TerminalRenderer::new(false).render(&diag, &db);

        assert_eq!(output, "<unknown>: note: while building module 'core'\n");
    }

    #[test]
    fn render_with_color() {
        let db = SourceDb::new();
        let diag = Diagnostic::warning(SourceLoc::INVALID, "unused import");

        let output = TerminalRenderer::new(true).render(&diag, &db);

        assert!(output.contains("\x1b[1;35mwarning\x1b[0m"));
        assert!(output.ends_with("unused import\n"));
    }
}
