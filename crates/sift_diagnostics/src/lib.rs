//! Diagnostic consumers and file-specific diagnostic routing.
//!
//! This crate defines the [`DiagnosticConsumer`] interface, a handful of
//! concrete consumers (in-memory [`DiagnosticSink`], terminal
//! [`StreamConsumer`], serialized [`JsonLinesConsumer`], discarding
//! [`NullConsumer`]), and the [`FileSpecificConsumer`] router, which sends each
//! diagnostic to the consumer registered for the file it points into.

#![warn(missing_docs)]

pub mod consumer;
pub mod diagnostic;
pub mod error;
pub mod file_specific;
pub mod json;
pub mod kind;
pub mod null;
pub mod range_index;
pub mod renderer;
pub mod sink;
pub mod stream;

pub use consumer::DiagnosticConsumer;
pub use diagnostic::Diagnostic;
pub use error::RoutingError;
pub use file_specific::{ConsumerPair, FileSpecificConsumer, Route};
pub use json::{DiagnosticRecord, JsonLinesConsumer};
pub use kind::DiagnosticKind;
pub use null::NullConsumer;
pub use range_index::{RangeEntry, RangeIndex};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use sink::DiagnosticSink;
pub use stream::{stderr_consumer, StreamConsumer};
