//! Central database of all source buffers in a compilation session.

use crate::authority::LocationAuthority;
use crate::buffer_id::BufferId;
use crate::range::{ByteRange, SourceLoc};
use crate::resolved_loc::ResolvedLoc;
use crate::source_buffer::SourceBuffer;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// The source database, owning all loaded source text and mapping locations
/// back to buffers and line/column coordinates.
///
/// Buffers are laid out one after another in the location space with a
/// one-byte gap between them, so the end-of-file location of one buffer is
/// never the first byte of the next.
#[derive(Debug)]
pub struct SourceDb {
    buffers: Vec<SourceBuffer>,
    by_identifier: HashMap<String, BufferId>,
    next_base: u32,
}

impl SourceDb {
    /// Creates an empty source database.
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            by_identifier: HashMap::new(),
            next_base: 0,
        }
    }

    /// Loads a source file from the filesystem and returns its [`BufferId`].
    ///
    /// The path as given (lossily converted to UTF-8) becomes the buffer identifier.
    pub fn load_file(&mut self, path: &Path) -> Result<BufferId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path, content))
    }

    /// Adds a buffer from an in-memory string.
    ///
    /// The `name` is used both as the buffer identifier and as the path in
    /// rendered diagnostics. Adding a second buffer under the same name makes
    /// the identifier refer to the newer buffer.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> BufferId {
        let path = name.into();
        let id = BufferId::from_raw(self.buffers.len() as u32);
        let buffer = SourceBuffer::new(id, path, content, self.next_base);
        self.next_base = buffer.range.end.as_raw() + 1;
        self.by_identifier
            .insert(buffer.path.to_string_lossy().into_owned(), id);
        self.buffers.push(buffer);
        id
    }

    /// Returns the buffer registered under `identifier`.
    pub fn id_for_identifier(&self, identifier: &str) -> Option<BufferId> {
        self.by_identifier.get(identifier).copied()
    }

    /// Returns the [`SourceBuffer`] for the given [`BufferId`].
    ///
    /// # Panics
    ///
    /// Panics if the `BufferId` was not produced by this database.
    pub fn get_buffer(&self, id: BufferId) -> &SourceBuffer {
        &self.buffers[id.index()]
    }

    /// Returns the number of loaded buffers.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns `true` if no buffers have been loaded.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Returns the location of byte `offset` in the buffer registered under
    /// `identifier`, or `None` if the buffer is unknown or the offset is past
    /// its end-of-file position.
    pub fn loc_in(&self, identifier: &str, offset: u32) -> Option<SourceLoc> {
        let buffer = self.get_buffer(self.id_for_identifier(identifier)?);
        (offset <= buffer.range.len()).then(|| buffer.loc_at(offset))
    }

    fn buffer_for_loc(&self, loc: SourceLoc) -> Option<&SourceBuffer> {
        if !loc.is_valid() {
            return None;
        }
        // Buffers are appended in increasing location order.
        let idx = self
            .buffers
            .partition_point(|buffer| buffer.range.end < loc);
        self.buffers.get(idx).filter(|buffer| buffer.owns(loc))
    }
}

impl LocationAuthority for SourceDb {
    fn range_for_identifier(&self, identifier: &str) -> Option<ByteRange> {
        self.id_for_identifier(identifier)
            .map(|id| self.get_buffer(id).owned_range())
    }

    fn locate_buffer(&self, loc: SourceLoc) -> Option<BufferId> {
        self.buffer_for_loc(loc).map(|buffer| buffer.id)
    }

    fn resolve(&self, loc: SourceLoc) -> Option<ResolvedLoc> {
        let buffer = self.buffer_for_loc(loc)?;
        let (line, col) = buffer.line_col(loc.as_raw() - buffer.range.start.as_raw());
        Some(ResolvedLoc {
            file_path: buffer.path.clone(),
            line,
            col,
        })
    }

    fn line_text(&self, loc: SourceLoc) -> Option<&str> {
        let buffer = self.buffer_for_loc(loc)?;
        Some(buffer.line_text(loc.as_raw() - buffer.range.start.as_raw()))
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}
