//! Locations and half-open byte ranges in the session-wide location space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque position in the session-wide location space.
///
/// Every buffer loaded into the [`SourceDb`](crate::SourceDb) occupies its own
/// disjoint slice of this space, so a location alone is enough to find the
/// buffer it points into. [`SourceLoc::INVALID`] stands for "no position".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SourceLoc(u32);

impl SourceLoc {
    /// A location that does not point anywhere (e.g., command-line diagnostics).
    pub const INVALID: SourceLoc = SourceLoc(u32::MAX);

    /// Creates a location from a raw offset in the location space.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw offset of this location.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is [`SourceLoc::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Returns the location `bytes` further along.
    pub fn advanced_by(self, bytes: u32) -> SourceLoc {
        debug_assert!(self.is_valid(), "cannot advance an invalid location");
        SourceLoc(self.0 + bytes)
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "@{}", self.0)
        } else {
            f.write_str("@invalid")
        }
    }
}

/// A half-open byte range `[start, end)` in the location space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ByteRange {
    /// First location in the range (inclusive).
    pub start: SourceLoc,
    /// One past the last location in the range (exclusive).
    pub end: SourceLoc,
}

impl ByteRange {
    /// Creates a range from raw offsets.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "range end {end} precedes start {start}");
        Self {
            start: SourceLoc(start),
            end: SourceLoc(end),
        }
    }

    /// Returns the length of this range in bytes.
    pub fn len(&self) -> u32 {
        self.end.0 - self.start.0
    }

    /// Returns `true` if this range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `loc` lies in `[start, end)`.
    pub fn contains(&self, loc: SourceLoc) -> bool {
        self.start <= loc && loc < self.end
    }

    /// Returns `true` if the two ranges share at least one byte.
    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_location() {
        assert!(!SourceLoc::INVALID.is_valid());
        assert!(SourceLoc::from_raw(0).is_valid());
        assert_eq!(format!("{}", SourceLoc::INVALID), "@invalid");
        assert_eq!(format!("{}", SourceLoc::from_raw(12)), "@12");
    }

    #[test]
    fn advance() {
        let loc = SourceLoc::from_raw(10).advanced_by(5);
        assert_eq!(loc.as_raw(), 15);
    }

    #[test]
    fn half_open_containment() {
        let r = ByteRange::new(10, 20);
        assert!(!r.contains(SourceLoc::from_raw(9)));
        assert!(r.contains(SourceLoc::from_raw(10)));
        assert!(r.contains(SourceLoc::from_raw(19)));
        assert!(!r.contains(SourceLoc::from_raw(20)));
        assert!(!r.contains(SourceLoc::INVALID));
    }

    #[test]
    fn len_and_empty() {
        let r = ByteRange::new(10, 20);
        assert_eq!(r.len(), 10);
        assert!(!r.is_empty());

        let empty = ByteRange::new(5, 5);
        assert!(empty.is_empty());
        assert!(!empty.contains(SourceLoc::from_raw(5)));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = ByteRange::new(0, 100);
        let b = ByteRange::new(100, 250);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn overlapping_ranges() {
        let a = ByteRange::new(0, 100);
        let b = ByteRange::new(99, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&ByteRange::new(10, 20)));
    }

    #[test]
    #[should_panic(expected = "precedes start")]
    fn reversed_range_panics() {
        let _ = ByteRange::new(20, 10);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ByteRange::new(0, 100)), "[0, 100)");
    }

    #[test]
    fn serde_roundtrip() {
        let r = ByteRange::new(3, 9);
        let json = serde_json::to_string(&r).unwrap();
        let back: ByteRange = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
