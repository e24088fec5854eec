//! Source buffer representation with line-start indexing for fast line/column lookup.

use crate::buffer_id::BufferId;
use crate::range::{ByteRange, SourceLoc};
use std::path::PathBuf;

/// A buffer loaded into the compilation session.
///
/// Stores the buffer's content, the slice of the location space it occupies,
/// and precomputed line-start offsets for line/column resolution.
#[derive(Debug)]
pub struct SourceBuffer {
    /// The identifier of this buffer within the [`SourceDb`](crate::SourceDb).
    pub id: BufferId,
    /// The path of this buffer (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the buffer.
    pub content: String,
    /// The slice of the location space this buffer occupies.
    pub range: ByteRange,
    /// Offsets of each line start relative to the buffer (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    /// Creates a new buffer whose first byte sits at `base` in the location space.
    pub fn new(id: BufferId, path: PathBuf, content: String, base: u32) -> Self {
        let line_starts = compute_line_starts(&content);
        let range = ByteRange::new(base, base + content.len() as u32);
        Self {
            id,
            path,
            content,
            range,
            line_starts,
        }
    }

    /// Returns the location of the byte at `offset` within this buffer.
    pub fn loc_at(&self, offset: u32) -> SourceLoc {
        debug_assert!(offset <= self.range.len(), "offset past end of buffer");
        self.range.start.advanced_by(offset)
    }

    /// Returns `true` if `loc` points into this buffer or at its end-of-file position.
    pub fn owns(&self, loc: SourceLoc) -> bool {
        self.owned_range().contains(loc)
    }

    /// Returns the half-open range of every location this buffer owns: its
    /// content plus the end-of-file position.
    pub fn owned_range(&self) -> ByteRange {
        ByteRange::new(self.range.start.as_raw(), self.range.end.as_raw() + 1)
    }

    /// Converts a buffer-relative byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line_idx = self.line_index(offset);
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text of the line containing the buffer-relative `offset`,
    /// without its trailing newline.
    pub fn line_text(&self, offset: u32) -> &str {
        let line_idx = self.line_index(offset);
        let start = self.line_starts[line_idx] as usize;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map_or(self.content.len(), |&next| next as usize - 1);
        &self.content[start..end]
    }

    fn line_index(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
