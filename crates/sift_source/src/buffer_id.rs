//! Opaque identifier for buffers loaded into a compilation session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a buffer loaded into the [`SourceDb`](crate::SourceDb).
///
/// Buffer IDs are handed out densely in load order, starting at zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct BufferId(u32);

impl BufferId {
    /// Creates a `BufferId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `BufferId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
