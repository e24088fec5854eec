//! Sorted table mapping file byte ranges to the consumers registered for them.

use sift_source::{ByteRange, LocationAuthority, SourceLoc};

/// One row of a [`RangeIndex`]: a file's range and the registration that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeEntry {
    /// The byte range of the registered file.
    pub range: ByteRange,
    /// Index of the owning registration in the router's registration list.
    pub consumer: usize,
}

/// A table of non-overlapping file ranges, sorted by range end.
///
/// Sorting by end lets [`lookup`](Self::lookup) binary-search for the first
/// range ending strictly after a location: that range is the only one that can contain
/// it, and if it doesn't, the location falls in a gap or past every known file.
#[derive(Debug, Default)]
pub struct RangeIndex {
    entries: Vec<RangeEntry>,
}

impl RangeIndex {
    /// Builds the index by resolving every `(registration index, file identifier)`
    /// pair through `sources`.
    ///
    /// Returns `Err` with the first file `sources` cannot resolve yet; nothing
    /// is built until every file is loaded.
    ///
    /// # Panics
    ///
    /// Panics if two files resolve to overlapping ranges.
    pub fn build<'a>(
        files: impl IntoIterator<Item = (usize, &'a str)>,
        sources: &dyn LocationAuthority,
    ) -> Result<Self, &'a str> {
        let entries = files
            .into_iter()
            .map(|(consumer, file)| {
                sources
                    .range_for_identifier(file)
                    .map(|range| RangeEntry { range, consumer })
                    .ok_or(file)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_entries(entries))
    }

    /// Sorts `entries` by range end and checks that no two ranges overlap.
    ///
    /// # Panics
    ///
    /// Panics if two entries overlap.
    pub fn from_entries(mut entries: Vec<RangeEntry>) -> Self {
        // Sorting by start would give the same order for disjoint ranges, but
        // lookup compares against ends.
        entries.sort_by_key(|entry| entry.range.end);

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].range.overlaps(&pair[1].range))
        {
            panic!(
                "overlapping ranges despite having distinct files: {} and {}",
                pair[0].range, pair[1].range
            );
        }

        Self { entries }
    }

    /// Returns the registration whose range contains `loc`, if any.
    pub fn lookup(&self, loc: SourceLoc) -> Option<usize> {
        let idx = self.entries.partition_point(|entry| entry.range.end <= loc);
        self.entries
            .get(idx)
            .filter(|entry| entry.range.contains(loc))
            .map(|entry| entry.consumer)
    }

    /// Returns the entries in lookup order.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no files are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
