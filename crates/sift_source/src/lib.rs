//! Source buffer management and location resolution for diagnostic routing.
//!
//! This crate provides the [`SourceDb`], which places every loaded buffer in a
//! single location space so that a bare [`SourceLoc`] identifies both a buffer
//! and a byte within it. The [`LocationAuthority`] trait is the narrow view of
//! that database the diagnostic router depends on.

#![warn(missing_docs)]

pub mod authority;
pub mod buffer_id;
pub mod range;
pub mod resolved_loc;
pub mod source_buffer;
pub mod source_db;

pub use authority::LocationAuthority;
pub use buffer_id::BufferId;
pub use range::{ByteRange, SourceLoc};
pub use resolved_loc::ResolvedLoc;
pub use source_buffer::SourceBuffer;
pub use source_db::SourceDb;
