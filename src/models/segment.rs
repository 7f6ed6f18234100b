use serde::{Deserialize, Serialize};
use crate::error::{RemovalRejection, Result, SegmentRejection};
use super::StationId;

/// Unique identifier for a line.
pub type LineId = u64;

/// A piece of track between two adjacent stations on one line.
///
/// `up_station` and `down_station` fix the segment's place in the line's
/// ordering; for path finding the connection is traversable both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub(crate) line_id: LineId,
    pub(crate) up_station: StationId,
    pub(crate) down_station: StationId,
    pub(crate) distance: u32,
}

impl Segment {
    /// Create a segment owned by `line_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if the distance is zero or both ends are the
    /// same station
    pub fn new(line_id: LineId, up_station: StationId, down_station: StationId, distance: u32) -> Result<Self> {
        let segment = Self {
            line_id,
            up_station,
            down_station,
            distance,
        };
        segment.validate()?;
        Ok(segment)
    }

    /// Check the invariants a deserialized segment may have skipped
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if the distance is zero or both ends are the
    /// same station
    pub fn validate(&self) -> Result<()> {
        if self.distance == 0 {
            return Err(SegmentRejection::NonPositiveDistance.into());
        }
        if self.up_station == self.down_station {
            return Err(SegmentRejection::SameEndpoints.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    #[must_use]
    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    #[must_use]
    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Whether either end of the segment is `station`
    #[must_use]
    pub fn connects(&self, station: StationId) -> bool {
        self.up_station == station || self.down_station == station
    }

    /// Split this segment around `inserted`, which shares its up station.
    /// Returns the two segments that replace it, in line order.
    pub(crate) fn split_from_up(&self, inserted: &Segment) -> Result<(Segment, Segment)> {
        let remainder = self.remaining_distance(inserted.distance)?;
        Ok((
            Segment { line_id: self.line_id, ..*inserted },
            Segment {
                line_id: self.line_id,
                up_station: inserted.down_station,
                down_station: self.down_station,
                distance: remainder,
            },
        ))
    }

    /// Split this segment around `inserted`, which shares its down station.
    /// Returns the two segments that replace it, in line order.
    pub(crate) fn split_from_down(&self, inserted: &Segment) -> Result<(Segment, Segment)> {
        let remainder = self.remaining_distance(inserted.distance)?;
        Ok((
            Segment {
                line_id: self.line_id,
                up_station: self.up_station,
                down_station: inserted.up_station,
                distance: remainder,
            },
            Segment { line_id: self.line_id, ..*inserted },
        ))
    }

    /// Join this segment with the one that continues from its down station
    pub(crate) fn merge(&self, next: &Segment) -> Result<Segment> {
        let distance = self
            .distance
            .checked_add(next.distance)
            .ok_or(RemovalRejection::DistanceOverflow)?;
        Ok(Segment {
            line_id: self.line_id,
            up_station: self.up_station,
            down_station: next.down_station,
            distance,
        })
    }

    fn remaining_distance(&self, taken: u32) -> Result<u32> {
        if taken >= self.distance {
            return Err(SegmentRejection::DistanceTooLong {
                requested: taken,
                available: self.distance,
            }
            .into());
        }
        Ok(self.distance - taken)
    }
}
