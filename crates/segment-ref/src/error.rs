use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    #[error("startTime must be less than endTime: {start_time} >= {end_time}")]
    InvalidTimeRange { start_time: f64, end_time: f64 },

    #[error("startByte must be less than endByte: {start_byte} >= {end_byte}")]
    InvalidByteRange { start_byte: u64, end_byte: u64 },

    #[error("Segment at index {index} has position {position}, not greater than {previous_position}")]
    PositionNotIncreasing {
        index: usize,
        previous_position: i64,
        position: i64,
    },

    #[error(
        "Segment at index {index} (position {position}, {start_time}-{end_time}) is ordered before position {previous_position} ({previous_start_time}-{previous_end_time})"
    )]
    OutOfOrder {
        index: usize,
        previous_position: i64,
        previous_start_time: f64,
        previous_end_time: f64,
        position: i64,
        start_time: f64,
        end_time: f64,
    },
}

impl SegmentError {
    /// Whether this error means the caller handed over data breaking a segment invariant.
    ///
    /// Every variant currently does. Manifest parsers should surface these as parse failures.
    pub fn is_invariant_violation(&self) -> bool {
        match self {
            Self::InvalidTimeRange { .. }
            | Self::InvalidByteRange { .. }
            | Self::PositionNotIncreasing { .. }
            | Self::OutOfOrder { .. } => true,
        }
    }
}

pub type SegmentResult<T> = Result<T, SegmentError>;
