use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset of the last byte of a segment, inclusive.
///
/// `Unbounded` means the segment extends to the end of the resource.
/// Serialized as a number, or `null` when unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum EndByte {
    Bounded(u64),
    #[default]
    Unbounded,
}

impl EndByte {
    pub fn get(&self) -> Option<u64> {
        match self {
            Self::Bounded(end) => Some(*end),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl From<u64> for EndByte {
    fn from(end: u64) -> Self {
        Self::Bounded(end)
    }
}

impl From<Option<u64>> for EndByte {
    fn from(end: Option<u64>) -> Self {
        end.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl From<EndByte> for Option<u64> {
    fn from(end: EndByte) -> Self {
        end.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: u64,
    pub end: EndByte,
}

impl ByteRange {
    pub fn new(start: u64, end: EndByte) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered, `None` if the range runs to the end of the resource.
    pub fn len(&self) -> Option<u64> {
        self.end
            .get()
            .map(|end| end.checked_sub(self.start).map_or(0, |diff| diff.saturating_add(1)))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn to_http_range(&self) -> String {
        format!("bytes={self}")
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            EndByte::Bounded(end) => write!(f, "{}-{}", self.start, end),
            EndByte::Unbounded => write!(f, "{}-", self.start),
        }
    }
}
