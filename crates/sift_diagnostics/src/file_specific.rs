//! Routing diagnostics to the consumer registered for the file they point into.
//!
//! A [`FileSpecificConsumer`] owns a list of [`ConsumerPair`] registrations.
//! Each primary diagnostic (error, warning, remark) is sent to exactly one of
//! three places:
//!
//! - the consumer registered for the file containing its location,
//! - every consumer ([`Route::Broadcast`]) when the location can't be tied to a file,
//! - nobody ([`Route::Suppress`]) when the location is in a file this
//!   invocation registered without a consumer, or in a file nobody registered
//!   and no catch-all consumer exists.
//!
//! Notes follow the route of the primary diagnostic before them, wherever the
//! note itself points.

use crate::consumer::DiagnosticConsumer;
use crate::diagnostic::Diagnostic;
use crate::error::RoutingError;
use crate::range_index::RangeIndex;
use sift_source::{LocationAuthority, SourceLoc};
use std::cell::OnceCell;
use std::collections::HashSet;

/// A consumer registration: a file identifier and the consumer for that file.
///
/// An empty file identifier registers a catch-all consumer that only receives
/// broadcast diagnostics. A file registered without a consumer claims its
/// range but swallows everything located in it.
pub struct ConsumerPair<'c> {
    file: String,
    consumer: Option<Box<dyn DiagnosticConsumer + 'c>>,
}

impl<'c> ConsumerPair<'c> {
    /// Registers `consumer` for diagnostics located in `file`.
    pub fn new(file: impl Into<String>, consumer: impl DiagnosticConsumer + 'c) -> Self {
        Self {
            file: file.into(),
            consumer: Some(Box::new(consumer)),
        }
    }

    /// Registers a catch-all consumer not associated with any file.
    pub fn unassociated(consumer: impl DiagnosticConsumer + 'c) -> Self {
        Self::new(String::new(), consumer)
    }

    /// Claims `file` without a consumer: diagnostics located in it are dropped.
    pub fn suppressed(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            consumer: None,
        }
    }

    /// Returns the file identifier, empty for catch-all registrations.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns `true` if this registration has a consumer.
    pub fn has_consumer(&self) -> bool {
        self.consumer.is_some()
    }
}

/// Where a diagnostic goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// Only the consumer of the registration at this index.
    Consumer(usize),
    /// Every registered consumer.
    Broadcast,
    /// No consumer at all.
    Suppress,
}

/// A consumer that forwards each diagnostic to the consumer registered for
/// the file it points into.
///
/// The file-to-range table is built from the [`LocationAuthority`] on the
/// first lookup that needs it, so a router can be set up before any source
/// buffer is loaded.
pub struct FileSpecificConsumer<'c> {
    registrations: Vec<ConsumerPair<'c>>,
    ranges: OnceCell<RangeIndex>,
    note_route: Route,
}

impl<'c> FileSpecificConsumer<'c> {
    /// Creates a router over `registrations`.
    ///
    /// Fails if `registrations` is empty or if two registrations name the
    /// same non-empty file. Catch-all registrations may repeat.
    pub fn new(registrations: Vec<ConsumerPair<'c>>) -> Result<Self, RoutingError> {
        if registrations.is_empty() {
            return Err(RoutingError::NoConsumers);
        }

        let mut seen = HashSet::new();
        for pair in registrations.iter().filter(|pair| !pair.file.is_empty()) {
            if !seen.insert(pair.file.as_str()) {
                return Err(RoutingError::DuplicateFile(pair.file.clone()));
            }
        }

        Ok(Self {
            registrations,
            ranges: OnceCell::new(),
            note_route: Route::Broadcast,
        })
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if there are no registrations.
    ///
    /// Never true for a router built by [`new`](Self::new), which rejects an
    /// empty registration list.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Returns the registered file identifiers in registration order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.registrations.iter().map(|pair| pair.file.as_str())
    }

    /// Returns `true` once the range table has been built.
    pub fn is_indexed(&self) -> bool {
        self.ranges.get().is_some()
    }

    /// Returns the route the next note will take.
    pub fn note_route(&self) -> Route {
        self.note_route
    }

    /// Decides where a primary diagnostic at `loc` goes.
    pub fn route_for_location(&self, sources: &dyn LocationAuthority, loc: SourceLoc) -> Route {
        // A lone consumer receives everything, inside its file or not.
        if self.registrations.len() == 1 {
            return self.route_to(0);
        }

        if !loc.is_valid() {
            return Route::Broadcast;
        }

        let Some(ranges) = self.ranges(sources) else {
            return Route::Broadcast;
        };

        match ranges.lookup(loc) {
            Some(idx) => self.route_to(idx),
            None if self.has_unassociated() => Route::Broadcast,
            None => Route::Suppress,
        }
    }

    /// Returns the range table, building it once every registered file is loaded.
    ///
    /// Returns `None` when there are no file registrations or when some
    /// registered file can't be resolved yet (diagnostics emitted while inputs
    /// are still being loaded). In the latter case the build is retried next time.
    fn ranges(&self, sources: &dyn LocationAuthority) -> Option<&RangeIndex> {
        if let Some(ranges) = self.ranges.get() {
            return Some(ranges);
        }
        if self.registrations.iter().all(|pair| pair.file.is_empty()) {
            return None;
        }

        let files = self
            .registrations
            .iter()
            .enumerate()
            .filter(|(_, pair)| !pair.file.is_empty())
            .map(|(idx, pair)| (idx, pair.file.as_str()));
        match RangeIndex::build(files, sources) {
            Ok(ranges) => {
                tracing::debug!(files = ranges.len(), "built diagnostic range index");
                Some(self.ranges.get_or_init(|| ranges))
            }
            Err(file) => {
                tracing::debug!(
                    file = %file,
                    "registered file not loaded yet; deferring range index"
                );
                None
            }
        }
    }

    fn route_to(&self, idx: usize) -> Route {
        if self.registrations[idx].has_consumer() {
            Route::Consumer(idx)
        } else {
            Route::Suppress
        }
    }

    fn has_unassociated(&self) -> bool {
        self.registrations.iter().any(|pair| pair.file.is_empty())
    }
}

impl DiagnosticConsumer for FileSpecificConsumer<'_> {
    fn handle_diagnostic(&mut self, sources: &dyn LocationAuthority, diag: &Diagnostic) {
        let route = if diag.kind.is_primary() {
            let route = self.route_for_location(sources, diag.loc);
            self.note_route = route;
            route
        } else {
            self.note_route
        };
        tracing::trace!(kind = %diag.kind, loc = %diag.loc, ?route, "routing diagnostic");

        match route {
            Route::Consumer(idx) => {
                if let Some(consumer) = self.registrations[idx].consumer.as_mut() {
                    consumer.handle_diagnostic(sources, diag);
                }
            }
            Route::Broadcast => {
                for consumer in self
                    .registrations
                    .iter_mut()
                    .filter_map(|pair| pair.consumer.as_mut())
                {
                    consumer.handle_diagnostic(sources, diag);
                }
            }
            Route::Suppress => {}
        }
    }

    fn finish(&mut self) -> bool {
        // Every consumer must flush, so no short-circuiting.
        let mut had_error = false;
        for consumer in self
            .registrations
            .iter_mut()
            .filter_map(|pair| pair.consumer.as_mut())
        {
            had_error |= consumer.finish();
        }
        had_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::DiagnosticSink;
    use sift_source::SourceDb;

    fn two_file_db() -> SourceDb {
        let mut db = SourceDb::new();
        db.add_source("a.x", "a".repeat(100));
        db.add_source("b.x", "b".repeat(150));
        db
    }

    #[test]
    fn empty_registration_rejected() {
        let err = FileSpecificConsumer::new(Vec::new()).err();
        assert_eq!(err, Some(RoutingError::NoConsumers));
    }

    #[test]
    fn duplicate_file_rejected() {
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let err = FileSpecificConsumer::new(vec![
            ConsumerPair::new("a.x", &a),
            ConsumerPair::new("a.x", &b),
        ])
        .err();
        assert_eq!(err, Some(RoutingError::DuplicateFile("a.x".to_string())));
    }

    #[test]
    fn duplicate_suppressed_file_rejected() {
        let a = DiagnosticSink::new();
        let err = FileSpecificConsumer::new(vec![
            ConsumerPair::new("a.x", &a),
            ConsumerPair::suppressed("a.x"),
        ])
        .err();
        assert!(matches!(err, Some(RoutingError::DuplicateFile(_))));
    }

    #[test]
    fn multiple_unassociated_allowed() {
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let router =
            FileSpecificConsumer::new(vec![ConsumerPair::unassociated(&a), ConsumerPair::unassociated(&b)])
                .unwrap();
        assert_eq!(router.len(), 2);
        assert!(!router.is_empty());
        assert_eq!(router.file_names().collect::<Vec<_>>(), vec!["", ""]);
    }

    #[test]
    fn routes_by_file() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let router =
            FileSpecificConsumer::new(vec![ConsumerPair::new("a.x", &a), ConsumerPair::new("b.x", &b)])
                .unwrap();

        assert_eq!(
            router.route_for_location(&db, db.loc_in("a.x", 50).unwrap()),
            Route::Consumer(0)
        );
        assert_eq!(
            router.route_for_location(&db, db.loc_in("b.x", 0).unwrap()),
            Route::Consumer(1)
        );
        assert!(router.is_indexed());
    }

    #[test]
    fn invalid_location_broadcasts_without_indexing() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let router =
            FileSpecificConsumer::new(vec![ConsumerPair::new("a.x", &a), ConsumerPair::new("b.x", &b)])
                .unwrap();
        assert_eq!(router.route_for_location(&db, SourceLoc::INVALID), Route::Broadcast);
        assert!(!router.is_indexed());
    }

    #[test]
    fn single_consumer_takes_everything() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let router = FileSpecificConsumer::new(vec![ConsumerPair::new("a.x", &a)]).unwrap();
        assert_eq!(
            router.route_for_location(&db, db.loc_in("b.x", 3).unwrap()),
            Route::Consumer(0)
        );
        assert_eq!(router.route_for_location(&db, SourceLoc::INVALID), Route::Consumer(0));
        assert!(!router.is_indexed());
    }

    #[test]
    fn single_suppressed_registration_swallows_everything() {
        let db = two_file_db();
        let router = FileSpecificConsumer::new(vec![ConsumerPair::suppressed("a.x")]).unwrap();
        assert_eq!(router.route_for_location(&db, SourceLoc::INVALID), Route::Suppress);
    }

    #[test]
    fn only_unassociated_consumers_broadcast() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let router =
            FileSpecificConsumer::new(vec![ConsumerPair::unassociated(&a), ConsumerPair::unassociated(&b)])
                .unwrap();
        assert_eq!(
            router.route_for_location(&db, db.loc_in("a.x", 1).unwrap()),
            Route::Broadcast
        );
        assert!(!router.is_indexed());
    }

    #[test]
    fn suppressed_file_claims_its_range() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let rest = DiagnosticSink::new();
        let router = FileSpecificConsumer::new(vec![
            ConsumerPair::new("a.x", &a),
            ConsumerPair::suppressed("b.x"),
            ConsumerPair::unassociated(&rest),
        ])
        .unwrap();
        assert_eq!(
            router.route_for_location(&db, db.loc_in("b.x", 20).unwrap()),
            Route::Suppress
        );
    }

    #[test]
    fn note_route_starts_as_broadcast() {
        let a = DiagnosticSink::new();
        let router = FileSpecificConsumer::new(vec![ConsumerPair::new("a.x", &a)]).unwrap();
        assert_eq!(router.note_route(), Route::Broadcast);
    }

    #[test]
    fn primary_diagnostic_sets_note_route() {
        let db = two_file_db();
        let a = DiagnosticSink::new();
        let b = DiagnosticSink::new();
        let mut router =
            FileSpecificConsumer::new(vec![ConsumerPair::new("a.x", &a), ConsumerPair::new("b.x", &b)])
                .unwrap();
        let loc = db.loc_in("b.x", 7).unwrap();
        router.handle_diagnostic(&db, &Diagnostic::remark(loc, "inlined"));
        assert_eq!(router.note_route(), Route::Consumer(1));
        drop(router);
        assert_eq!(b.messages(), vec!["inlined"]);
        assert!(a.is_empty());
    }
}
