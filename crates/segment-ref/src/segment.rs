use serde::{Deserialize, Deserializer, Serialize};

use crate::{ByteRange, EndByte, SegmentError, SegmentLocation, SegmentResult};

/// Location of the codec initialization data that precedes the media segments
/// of a representation.
///
/// No ordering is checked between `start_byte` and `end_byte`. Values are kept
/// exactly as the manifest describes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializationSegmentReference {
    uris: Vec<String>,
    start_byte: u64,
    #[serde(default)]
    end_byte: EndByte,
}

impl InitializationSegmentReference {
    pub fn new(uris: Vec<String>, start_byte: u64, end_byte: EndByte) -> Self {
        Self {
            uris,
            start_byte,
            end_byte,
        }
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn start_byte(&self) -> u64 {
        self.start_byte
    }

    pub fn end_byte(&self) -> EndByte {
        self.end_byte
    }

    pub fn byte_range(&self) -> ByteRange {
        ByteRange::new(self.start_byte, self.end_byte)
    }
}

impl SegmentLocation for InitializationSegmentReference {
    fn uris(&self) -> &[String] {
        self.uris()
    }

    fn byte_range(&self) -> ByteRange {
        self.byte_range()
    }
}

/// A timed chunk of media within one timeline (a single period of a single
/// representation).
///
/// The presentation interval is half-open: the segment ends the instant before
/// `end_time`. Times are in seconds relative to the start of the period.
///
/// `position` orders references within the same timeline. For any two references
/// `r1` and `r2` of one timeline with `r2.position() > r1.position()`, either
/// `r2.start_time() > r1.start_time()`, or the start times are equal and
/// `r2.end_time() >= r1.end_time()`. A single reference cannot check this; see
/// [`crate::timeline::check_order`] for collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSegmentReference {
    position: i64,
    start_time: f64,
    end_time: f64,
    uris: Vec<String>,
    start_byte: u64,
    end_byte: EndByte,
}

impl MediaSegmentReference {
    pub fn new(
        position: i64,
        start_time: f64,
        end_time: f64,
        uris: Vec<String>,
        start_byte: u64,
        end_byte: EndByte,
    ) -> SegmentResult<Self> {
        // negated so that NaN is rejected as well
        if !(start_time < end_time) {
            tracing::debug!(position, start_time, end_time, "Rejected segment time range");
            return Err(SegmentError::InvalidTimeRange {
                start_time,
                end_time,
            });
        }

        if let EndByte::Bounded(end) = end_byte {
            if start_byte >= end {
                tracing::debug!(position, start_byte, end_byte = end, "Rejected segment byte range");
                return Err(SegmentError::InvalidByteRange {
                    start_byte,
                    end_byte: end,
                });
            }
        }

        Ok(Self {
            position,
            start_time,
            end_time,
            uris,
            start_byte,
            end_byte,
        })
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn start_byte(&self) -> u64 {
        self.start_byte
    }

    pub fn end_byte(&self) -> EndByte {
        self.end_byte
    }

    pub fn byte_range(&self) -> ByteRange {
        ByteRange::new(self.start_byte, self.end_byte)
    }
}

impl SegmentLocation for MediaSegmentReference {
    fn uris(&self) -> &[String] {
        self.uris()
    }

    fn byte_range(&self) -> ByteRange {
        self.byte_range()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMediaSegmentReference {
    position: i64,
    start_time: f64,
    end_time: f64,
    uris: Vec<String>,
    start_byte: u64,
    #[serde(default)]
    end_byte: EndByte,
}

impl<'de> Deserialize<'de> for MediaSegmentReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMediaSegmentReference::deserialize(deserializer)?;
        Self::new(
            raw.position,
            raw.start_time,
            raw.end_time,
            raw.uris,
            raw.start_byte,
            raw.end_byte,
        )
        .map_err(serde::de::Error::custom)
    }
}
