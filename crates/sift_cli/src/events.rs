//! Diagnostic event logs: one JSON object per line.
//!
//! ```text
//! {"kind": "error", "file": "src/a.x", "offset": 12, "message": "expected ';'"}
//! {"kind": "note", "file": "src/b.x", "offset": 0, "message": "declared here"}
//! {"kind": "warning", "message": "no input files"}
//! ```
//!
//! `file` and `offset` are optional; an event without a file has no location.

use std::io::BufRead;

use serde::Deserialize;
use sift_diagnostics::{Diagnostic, DiagnosticKind};
use sift_source::{SourceDb, SourceLoc};

/// A single diagnostic event as written in the log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// Error, warning, remark or note.
    pub kind: DiagnosticKind,
    /// The identifier of the buffer the event points into.
    #[serde(default)]
    pub file: Option<String>,
    /// Byte offset within `file` (defaults to the start of the file).
    #[serde(default)]
    pub offset: Option<u32>,
    /// The formatted message.
    pub message: String,
}

impl Event {
    /// Converts this event into a diagnostic located in `db`.
    ///
    /// Events naming an unknown file, or an offset past the file's end, get
    /// an invalid location.
    pub fn to_diagnostic(&self, db: &SourceDb) -> Diagnostic {
        let loc = match &self.file {
            Some(file) => db
                .loc_in(file, self.offset.unwrap_or(0))
                .unwrap_or_else(|| {
                    tracing::warn!(
                        file = %file,
                        offset = ?self.offset,
                        "event points outside loaded sources; treating it as unlocated"
                    );
                    SourceLoc::INVALID
                }),
            None => SourceLoc::INVALID,
        };
        Diagnostic::new(self.kind, loc, self.message.clone())
    }
}

/// Reads every event from `reader`, skipping blank lines.
pub fn read_events(reader: impl BufRead) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .map_err(|e| format!("invalid event on line {}: {e}", idx + 1))?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_mixed_events() {
        let log = r#"
{"kind": "error", "file": "a.x", "offset": 2, "message": "bad"}

{"kind": "note", "file": "a.x", "message": "here"}
{"kind": "warning", "message": "global"}
"#;
        let events = read_events(log.as_bytes()).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, DiagnosticKind::Error);
        assert_eq!(events[0].offset, Some(2));
        assert_eq!(events[1].offset, None);
        assert_eq!(events[2].file, None);
    }

    #[test]
    fn invalid_line_reports_line_number() {
        let log = "{\"kind\": \"error\", \"message\": \"ok\"}\n{\"kind\": \"fatal\", \"message\": \"x\"}\n";
        let err = read_events(log.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn locates_events_in_sources() {
        let mut db = SourceDb::new();
        db.add_source("a.x", "abcdef".to_string());
        let event = Event {
            kind: DiagnosticKind::Remark,
            file: Some("a.x".to_string()),
            offset: Some(3),
            message: "inlined".to_string(),
        };
        let diag = event.to_diagnostic(&db);
        assert_eq!(diag.loc, db.loc_in("a.x", 3).unwrap());
        assert_eq!(diag.kind, DiagnosticKind::Remark);
    }

    #[test]
    fn unknown_file_is_unlocated() {
        let db = SourceDb::new();
        let event = Event {
            kind: DiagnosticKind::Error,
            file: Some("missing.x".to_string()),
            offset: None,
            message: "lost".to_string(),
        };
        assert!(!event.to_diagnostic(&db).loc.is_valid());
    }

    #[test]
    fn offset_past_end_is_unlocated() {
        let mut db = SourceDb::new();
        db.add_source("a.x", "ab".to_string());
        let event = Event {
            kind: DiagnosticKind::Error,
            file: Some("a.x".to_string()),
            offset: Some(10),
            message: "too far".to_string(),
        };
        assert!(!event.to_diagnostic(&db).loc.is_valid());
    }
}
