//! Error types shared by the topology manager and the path engine

use crate::models::{LineId, StationId};
use thiserror::Error;

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Why a segment could not be inserted into a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentRejection {
    #[error("segment distance must be greater than zero")]
    NonPositiveDistance,

    #[error("segment must connect two different stations")]
    SameEndpoints,

    #[error("both stations are already on the line")]
    BothStationsPresent,

    #[error("neither station is on the line")]
    NeitherStationPresent,

    #[error("distance {requested} does not fit inside the existing segment of {available}")]
    DistanceTooLong { requested: u32, available: u32 },

    #[error("segments do not form a single unbranched path")]
    NotSinglePath,

    #[error("segment belongs to line {found}, not line {expected}")]
    ForeignLine { expected: LineId, found: LineId },
}

/// Why a station could not be removed from a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemovalRejection {
    #[error("a line must keep at least one segment")]
    LastSegment,

    #[error("station {0} is not on the line")]
    StationNotOnLine(StationId),

    #[error("merged segment distance would exceed {}", u32::MAX)]
    DistanceOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("invalid segment: {0}")]
    InvalidSegment(SegmentRejection),

    #[error("invalid removal: {0}")]
    InvalidRemoval(RemovalRejection),

    #[error("source and target are the same station ({0})")]
    SameStation(StationId),

    #[error("station {0} does not exist")]
    StationNotFound(StationId),

    #[error("no route between station {from} and station {to}")]
    NoRoute { from: StationId, to: StationId },
}

impl NetworkError {
    /// Whether the error was caused by the caller's input rather than the system.
    ///
    /// Every kind the core produces describes invalid input or topology state,
    /// so a transport boundary maps all of them to a 400-class response.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::InvalidSegment(_)
            | Self::InvalidRemoval(_)
            | Self::SameStation(_)
            | Self::StationNotFound(_)
            | Self::NoRoute { .. } => true,
        }
    }
}

impl From<SegmentRejection> for NetworkError {
    fn from(reason: SegmentRejection) -> Self {
        Self::InvalidSegment(reason)
    }
}

impl From<RemovalRejection> for NetworkError {
    fn from(reason: RemovalRejection) -> Self {
        Self::InvalidRemoval(reason)
    }
}
