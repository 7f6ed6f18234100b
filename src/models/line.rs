use serde::{Deserialize, Serialize};
use crate::constants::NO_SURCHARGE;
use crate::error::{NetworkError, Result, SegmentRejection};
use crate::logging::debug_log;
use super::{LineId, Segment, StationId, Topology};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "LineRecord")]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub surcharge: u32,
    #[serde(default, rename = "segments")]
    topology: Topology,
}

/// A line as stored, before its segments are checked against its id
#[derive(Deserialize)]
struct LineRecord {
    id: LineId,
    name: String,
    color: String,
    #[serde(default)]
    surcharge: u32,
    #[serde(default)]
    segments: Topology,
}

impl TryFrom<LineRecord> for Line {
    type Error = NetworkError;

    fn try_from(record: LineRecord) -> Result<Self> {
        if let Some(foreign) = record.segments.segments().iter().find(|segment| segment.line_id() != record.id) {
            return Err(SegmentRejection::ForeignLine {
                expected: record.id,
                found: foreign.line_id(),
            }
            .into());
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            color: record.color,
            surcharge: record.surcharge,
            topology: record.segments,
        })
    }
}

impl Line {
    /// Create a line with no segments and no surcharge
    #[must_use]
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            surcharge: NO_SURCHARGE,
            topology: Topology::new(),
        }
    }

    #[must_use]
    pub fn with_surcharge(mut self, surcharge: u32) -> Self {
        self.surcharge = surcharge;
        self
    }

    /// Create a line seeded with its first segment
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if the seed segment is malformed
    pub fn with_seed(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Self> {
        let mut line = Self::new(id, name, color);
        line.add_segment(up_station, down_station, distance)?;
        Ok(line)
    }

    /// Change the line's name and color, leaving its segments untouched
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.topology.segments()
    }

    /// Stations served by this line, from the up terminus to the down terminus
    #[must_use]
    pub fn stations(&self) -> Vec<StationId> {
        self.topology.ordered_stations()
    }

    #[must_use]
    pub fn serves(&self, station: StationId) -> bool {
        self.topology.contains_station(station)
    }

    /// Add a segment between two stations to this line
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if the segment cannot be placed on the line
    pub fn add_segment(&mut self, up_station: StationId, down_station: StationId, distance: u32) -> Result<()> {
        let segment = Segment::new(self.id, up_station, down_station, distance)?;
        self.topology.add_segment(segment)?;
        debug_log!(
            "line {} gained segment {up_station} -> {down_station} ({distance}), now {} segments",
            self.id,
            self.topology.len()
        );
        Ok(())
    }

    /// Remove a station from this line, merging around it if it is interior
    ///
    /// # Errors
    ///
    /// Returns `InvalidRemoval` if the station is not on the line or it is
    /// the line's last segment
    pub fn remove_station(&mut self, station: StationId) -> Result<()> {
        self.topology.remove_station(station)?;
        debug_log!("line {} dropped station {station}, now {} segments", self.id, self.topology.len());
        Ok(())
    }
}
