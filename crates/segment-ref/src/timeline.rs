//! Ordering law shared by every collection of [`MediaSegmentReference`]s from one timeline.
//!
//! A segment index building, merging or searching these collections must uphold it.
//! Boundaries may tie (representations realigning), but position and time may never
//! move in opposite directions.
use crate::{MediaSegmentReference, SegmentError, SegmentResult};

/// Whether `next` may come after `prev` on the same timeline.
///
/// Only times are compared. Positions are the caller's concern.
pub fn follows(prev: &MediaSegmentReference, next: &MediaSegmentReference) -> bool {
    next.start_time() > prev.start_time()
        || (next.start_time() == prev.start_time() && next.end_time() >= prev.end_time())
}

/// Validate a position-sorted run of references from a single timeline.
///
/// Positions must strictly increase and every reference must [`follows`] its predecessor.
/// Both relations are transitive, so checking neighbours covers every pair.
pub fn check_order(references: &[MediaSegmentReference]) -> SegmentResult<()> {
    for (index, pair) in references.windows(2).enumerate() {
        let [prev, next] = pair else { continue };
        let index = index + 1;

        if next.position() <= prev.position() {
            tracing::warn!(
                index,
                previous_position = prev.position(),
                position = next.position(),
                "Segment positions are not increasing"
            );
            return Err(SegmentError::PositionNotIncreasing {
                index,
                previous_position: prev.position(),
                position: next.position(),
            });
        }

        if !follows(prev, next) {
            tracing::warn!(
                index,
                previous_position = prev.position(),
                position = next.position(),
                previous_start_time = prev.start_time(),
                start_time = next.start_time(),
                previous_end_time = prev.end_time(),
                end_time = next.end_time(),
                "Segment position and time disagree"
            );
            return Err(SegmentError::OutOfOrder {
                index,
                previous_position: prev.position(),
                previous_start_time: prev.start_time(),
                previous_end_time: prev.end_time(),
                position: next.position(),
                start_time: next.start_time(),
                end_time: next.end_time(),
            });
        }
    }

    tracing::trace!(len = references.len(), "Segment timeline is ordered");
    Ok(())
}

pub fn is_ordered(references: &[MediaSegmentReference]) -> bool {
    check_order(references).is_ok()
}
