//! Addressing primitives for adaptive streaming.
//!
//! A manifest parser produces an [`InitializationSegmentReference`] per representation
//! and an ordered run of [`MediaSegmentReference`]s per timeline. Segment indexes,
//! downloaders and buffers consume them. All of them are immutable once built.
pub mod error;
pub mod segment;
pub mod timeline;
mod util;

pub use error::*;
pub use segment::*;
pub use util::range::{ByteRange, EndByte};

/// Where the bytes of a segment live.
///
/// `uris` are mirrors of the same content, tried in order until one succeeds.
/// `byte_range` applies to whichever of them is used.
pub trait SegmentLocation {
    fn uris(&self) -> &[String];

    fn byte_range(&self) -> ByteRange;
}
