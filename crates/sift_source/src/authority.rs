//! The narrow view of the source database that diagnostic consumers rely on.

use crate::buffer_id::BufferId;
use crate::range::{ByteRange, SourceLoc};
use crate::resolved_loc::ResolvedLoc;

/// Resolves buffer identifiers and locations on behalf of diagnostic consumers.
///
/// Implementations must guarantee that the ranges of distinct buffers never
/// overlap, and that every location [`locate_buffer`](Self::locate_buffer)
/// attributes to a buffer lies inside that buffer's reported range. Routing only needs [`range_for_identifier`](Self::range_for_identifier)
/// and [`locate_buffer`](Self::locate_buffer); rendering consumers also use
/// [`resolve`](Self::resolve) and [`line_text`](Self::line_text).
pub trait LocationAuthority {
    /// Returns the range of locations owned by the buffer registered under
    /// `identifier` (including its end-of-file position), if it is loaded.
    fn range_for_identifier(&self, identifier: &str) -> Option<ByteRange>;

    /// Returns the buffer that `loc` points into, or `None` for invalid or
    /// unknown locations.
    fn locate_buffer(&self, loc: SourceLoc) -> Option<BufferId>;

    /// Resolves `loc` to file/line/column coordinates.
    fn resolve(&self, loc: SourceLoc) -> Option<ResolvedLoc>;

    /// Returns the text of the source line containing `loc`.
    fn line_text(&self, loc: SourceLoc) -> Option<&str>;
}
