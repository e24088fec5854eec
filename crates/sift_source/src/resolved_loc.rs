//! Human-readable resolved source locations with line/column coordinates.

use std::fmt;
use std::path::PathBuf;

/// A location resolved to human-readable line/column coordinates.
///
/// Line and column values are 1-indexed for display to users.
/// Produced by [`SourceDb::resolve`](crate::SourceDb::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLoc {
    /// The path (or identifier) of the buffer containing the location.
    pub file_path: PathBuf,
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number in bytes (1-indexed).
    pub col: u32,
}

impl fmt::Display for ResolvedLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path.display(), self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let loc = ResolvedLoc {
            file_path: PathBuf::from("src/a.x"),
            line: 10,
            col: 5,
        };
        assert_eq!(format!("{loc}"), "src/a.x:10:5");
    }

    #[test]
    fn equality() {
        let a = ResolvedLoc {
            file_path: PathBuf::from("a.x"),
            line: 1,
            col: 1,
        };
        let b = ResolvedLoc {
            file_path: PathBuf::from("b.x"),
            ..a.clone()
        };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
