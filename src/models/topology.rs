use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use crate::error::{NetworkError, RemovalRejection, Result, SegmentRejection};
use super::{Segment, StationId};

/// The ordered chain of segments that makes up one line.
///
/// Segments are kept in travel order from the up terminus to the down
/// terminus, so `segments[i].down_station == segments[i + 1].up_station`
/// always holds. Together they form a single simple path: no station appears
/// twice, there are no branches and no gaps.
///
/// Every mutation validates before touching the chain, so a rejected call
/// leaves the topology exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Topology {
    segments: Vec<Segment>,
}

impl Topology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a topology from segments in any order
    ///
    /// Stored segments carry no ordering, so this re-chains them by matching
    /// each down station to the next up station.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if any segment is malformed, the segments
    /// belong to different lines, or they do not form exactly one simple path
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Ok(Self::new());
        }

        let mut by_up_station = HashMap::with_capacity(segments.len());
        let mut down_stations = HashSet::with_capacity(segments.len());
        let line_id = segments[0].line_id;
        for segment in &segments {
            segment.validate()?;
            if segment.line_id != line_id {
                return Err(SegmentRejection::ForeignLine {
                    expected: line_id,
                    found: segment.line_id,
                }
                .into());
            }
            let branched = by_up_station.insert(segment.up_station, *segment).is_some()
                || !down_stations.insert(segment.down_station);
            if branched {
                return Err(SegmentRejection::NotSinglePath.into());
            }
        }

        let mut heads = segments.iter().filter(|segment| !down_stations.contains(&segment.up_station));
        let (Some(head), None) = (heads.next(), heads.next()) else {
            return Err(SegmentRejection::NotSinglePath.into());
        };

        let mut ordered = Vec::with_capacity(segments.len());
        let mut visited = HashSet::with_capacity(segments.len() + 1);
        visited.insert(head.up_station);
        let mut current = Some(*head);
        while let Some(segment) = current {
            if !visited.insert(segment.down_station) {
                return Err(SegmentRejection::NotSinglePath.into());
            }
            ordered.push(segment);
            current = by_up_station.get(&segment.down_station).copied();
        }

        if ordered.len() != segments.len() {
            return Err(SegmentRejection::NotSinglePath.into());
        }

        Ok(Self { segments: ordered })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn contains_station(&self, station: StationId) -> bool {
        self.segments.iter().any(|segment| segment.connects(station))
    }

    /// Stations from the up terminus to the down terminus
    #[must_use]
    pub fn ordered_stations(&self) -> Vec<StationId> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };

        let mut stations = Vec::with_capacity(self.segments.len() + 1);
        stations.push(first.up_station);
        stations.extend(self.segments.iter().map(|segment| segment.down_station));
        stations
    }

    /// Sum of every segment distance along the line
    #[must_use]
    pub fn total_distance(&self) -> u64 {
        self.segments.iter().map(|segment| u64::from(segment.distance)).sum()
    }

    /// Insert a segment, extending the line or splitting an existing segment
    ///
    /// - On an empty topology the segment becomes the seed.
    /// - If it continues from the down terminus or leads into the up
    ///   terminus, it is appended or prepended.
    /// - Otherwise the existing segment sharing its known station is split,
    ///   which requires the new distance to be strictly shorter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegment` if the segment is malformed, belongs to
    /// another line, has both or neither of its stations already on the line,
    /// or does not fit inside the segment it would split
    pub fn add_segment(&mut self, segment: Segment) -> Result<()> {
        segment.validate()?;

        let (Some(first), Some(last)) = (self.segments.first().copied(), self.segments.last().copied()) else {
            self.segments.push(segment);
            return Ok(());
        };

        if segment.line_id != first.line_id {
            return Err(SegmentRejection::ForeignLine {
                expected: first.line_id,
                found: segment.line_id,
            }
            .into());
        }

        let up_present = self.contains_station(segment.up_station);
        let down_present = self.contains_station(segment.down_station);
        match (up_present, down_present) {
            (true, true) => return Err(SegmentRejection::BothStationsPresent.into()),
            (false, false) => return Err(SegmentRejection::NeitherStationPresent.into()),
            _ => {}
        }

        if segment.up_station == last.down_station {
            self.segments.push(segment);
            return Ok(());
        }
        if segment.down_station == first.up_station {
            self.segments.insert(0, segment);
            return Ok(());
        }

        let (index, (front, back)) = if up_present {
            let index = self
                .position_from(segment.up_station)
                .ok_or(SegmentRejection::NotSinglePath)?;
            (index, self.segments[index].split_from_up(&segment)?)
        } else {
            let index = self
                .position_into(segment.down_station)
                .ok_or(SegmentRejection::NotSinglePath)?;
            (index, self.segments[index].split_from_down(&segment)?)
        };

        self.segments[index] = front;
        self.segments.insert(index + 1, back);
        Ok(())
    }

    /// Remove a station from the line
    ///
    /// A terminus loses its adjoining segment. An interior station's two
    /// segments are merged into one spanning its neighbours, carrying the
    /// sum of both distances.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRemoval` if the station is not on the line, the line
    /// is down to its last segment, or the merged distance would not fit in
    /// a `u32`
    pub fn remove_station(&mut self, station: StationId) -> Result<()> {
        if !self.contains_station(station) {
            return Err(RemovalRejection::StationNotOnLine(station).into());
        }
        if self.segments.len() <= 1 {
            return Err(RemovalRejection::LastSegment.into());
        }

        match (self.position_into(station), self.position_from(station)) {
            (Some(incoming), Some(outgoing)) => {
                let merged = self.segments[incoming].merge(&self.segments[outgoing])?;
                self.segments[incoming] = merged;
                self.segments.remove(outgoing);
            }
            (Some(index), None) | (None, Some(index)) => {
                self.segments.remove(index);
            }
            (None, None) => return Err(RemovalRejection::StationNotOnLine(station).into()),
        }

        Ok(())
    }

    /// Index of the segment leaving `station`
    fn position_from(&self, station: StationId) -> Option<usize> {
        self.segments.iter().position(|segment| segment.up_station == station)
    }

    /// Index of the segment arriving at `station`
    fn position_into(&self, station: StationId) -> Option<usize> {
        self.segments.iter().position(|segment| segment.down_station == station)
    }
}

impl TryFrom<Vec<Segment>> for Topology {
    type Error = NetworkError;

    fn try_from(segments: Vec<Segment>) -> Result<Self> {
        Self::from_segments(segments)
    }
}

impl From<Topology> for Vec<Segment> {
    fn from(topology: Topology) -> Self {
        topology.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: u64 = 1;

    fn segment(up: StationId, down: StationId, distance: u32) -> Segment {
        Segment::new(LINE, up, down, distance).expect("valid segment")
    }

    /// 1 --7-- 2 --5-- 3
    fn create_test_topology() -> Topology {
        let mut topology = Topology::new();
        topology.add_segment(segment(1, 2, 7)).expect("seed");
        topology.add_segment(segment(2, 3, 5)).expect("extend");
        topology
    }

    fn distances(topology: &Topology) -> Vec<u32> {
        topology.segments().iter().map(Segment::distance).collect()
    }

    #[test]
    fn test_seed_segment() {
        let mut topology = Topology::new();
        assert!(topology.is_empty());
        assert!(topology.ordered_stations().is_empty());

        topology.add_segment(segment(1, 2, 7)).expect("seed");
        assert_eq!(topology.len(), 1);
        assert_eq!(topology.ordered_stations(), vec![1, 2]);
    }

    #[test]
    fn test_extend_down_terminus() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(3, 4, 100)).expect("extend down");

        assert_eq!(topology.ordered_stations(), vec![1, 2, 3, 4]);
        assert_eq!(distances(&topology), vec![7, 5, 100]);
    }

    #[test]
    fn test_extend_up_terminus() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(0, 1, 100)).expect("extend up");

        assert_eq!(topology.ordered_stations(), vec![0, 1, 2, 3]);
        assert_eq!(distances(&topology), vec![100, 7, 5]);
    }

    #[test]
    fn test_split_after_known_up_station() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(1, 9, 3)).expect("split");

        assert_eq!(topology.ordered_stations(), vec![1, 9, 2, 3]);
        assert_eq!(distances(&topology), vec![3, 4, 5]);
    }

    #[test]
    fn test_split_before_known_down_station() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(9, 3, 2)).expect("split");

        assert_eq!(topology.ordered_stations(), vec![1, 2, 9, 3]);
        assert_eq!(distances(&topology), vec![7, 3, 2]);
    }

    #[test]
    fn test_split_interior_station() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(2, 9, 1)).expect("split");

        assert_eq!(topology.ordered_stations(), vec![1, 2, 9, 3]);
        assert_eq!(distances(&topology), vec![7, 1, 4]);
        assert_eq!(topology.total_distance(), 12);
    }

    #[test]
    fn test_split_too_long_leaves_topology_unchanged() {
        let mut topology = create_test_topology();
        let before = topology.clone();

        for distance in [7, 8] {
            let result = topology.add_segment(segment(1, 9, distance));
            assert_eq!(
                result,
                Err(NetworkError::InvalidSegment(SegmentRejection::DistanceTooLong {
                    requested: distance,
                    available: 7,
                }))
            );
            assert_eq!(topology, before);
        }
    }

    #[test]
    fn test_both_stations_present_rejected() {
        let mut topology = create_test_topology();
        let before = topology.clone();

        assert_eq!(
            topology.add_segment(segment(1, 3, 2)),
            Err(NetworkError::InvalidSegment(SegmentRejection::BothStationsPresent))
        );
        assert_eq!(topology, before);
    }

    #[test]
    fn test_neither_station_present_rejected() {
        let mut topology = create_test_topology();
        let before = topology.clone();

        assert_eq!(
            topology.add_segment(segment(8, 9, 2)),
            Err(NetworkError::InvalidSegment(SegmentRejection::NeitherStationPresent))
        );
        assert_eq!(topology, before);
    }

    #[test]
    fn test_remove_interior_station_merges_distances() {
        let mut topology = create_test_topology();
        topology.remove_station(2).expect("remove interior");

        assert_eq!(topology.ordered_stations(), vec![1, 3]);
        assert_eq!(distances(&topology), vec![12]);
        assert_eq!(topology.segments()[0].line_id(), LINE);
    }

    #[test]
    fn test_remove_interior_station_rejects_overflowing_merge() {
        let mut topology = Topology::new();
        topology.add_segment(segment(1, 2, 3_000_000_000)).expect("seed");
        topology.add_segment(segment(2, 3, 3_000_000_000)).expect("extend");
        let before = topology.clone();

        assert_eq!(
            topology.remove_station(2),
            Err(NetworkError::InvalidRemoval(RemovalRejection::DistanceOverflow))
        );
        assert_eq!(topology, before);
        assert_eq!(topology.total_distance(), 6_000_000_000);
    }

    #[test]
    fn test_segment_from_another_line_rejected() {
        let mut topology = create_test_topology();
        let before = topology.clone();
        let foreign = Segment::new(99, 3, 4, 2).expect("valid segment");

        assert_eq!(
            topology.add_segment(foreign),
            Err(NetworkError::InvalidSegment(SegmentRejection::ForeignLine {
                expected: LINE,
                found: 99,
            }))
        );
        assert_eq!(topology, before);
    }

    #[test]
    fn test_from_segments_rejects_mixed_lines() {
        let foreign = Segment::new(99, 2, 3, 5).expect("valid segment");
        assert_eq!(
            Topology::from_segments(vec![segment(1, 2, 7), foreign]),
            Err(NetworkError::InvalidSegment(SegmentRejection::ForeignLine {
                expected: LINE,
                found: 99,
            }))
        );
    }

    #[test]
    fn test_remove_termini() {
        let mut topology = create_test_topology();
        topology.add_segment(segment(3, 4, 1)).expect("extend");

        topology.remove_station(1).expect("remove up terminus");
        assert_eq!(topology.ordered_stations(), vec![2, 3, 4]);

        topology.remove_station(4).expect("remove down terminus");
        assert_eq!(topology.ordered_stations(), vec![2, 3]);
        assert_eq!(distances(&topology), vec![5]);
    }

    #[test]
    fn test_remove_last_segment_rejected() {
        let mut topology = Topology::new();
        topology.add_segment(segment(1, 2, 7)).expect("seed");

        assert_eq!(
            topology.remove_station(1),
            Err(NetworkError::InvalidRemoval(RemovalRejection::LastSegment))
        );
        assert_eq!(topology.len(), 1);
    }

    #[test]
    fn test_remove_unknown_station_rejected() {
        let mut topology = create_test_topology();
        assert_eq!(
            topology.remove_station(42),
            Err(NetworkError::InvalidRemoval(RemovalRejection::StationNotOnLine(42)))
        );
        assert_eq!(
            Topology::new().remove_station(1),
            Err(NetworkError::InvalidRemoval(RemovalRejection::StationNotOnLine(1)))
        );
    }

    #[test]
    fn test_from_segments_reorders_chain() {
        let topology = Topology::from_segments(vec![segment(3, 4, 2), segment(1, 2, 7), segment(2, 3, 5)])
            .expect("single path");

        assert_eq!(topology.ordered_stations(), vec![1, 2, 3, 4]);
        assert_eq!(distances(&topology), vec![7, 5, 2]);
    }

    #[test]
    fn test_from_segments_rejects_invalid_shapes() {
        let shapes = [
            // two separate paths
            vec![segment(1, 2, 1), segment(3, 4, 1)],
            // cycle
            vec![segment(1, 2, 1), segment(2, 3, 1), segment(3, 1, 1)],
            // branch
            vec![segment(1, 2, 1), segment(1, 3, 1)],
            // merge
            vec![segment(1, 3, 1), segment(2, 3, 1)],
            // path plus a detached cycle
            vec![segment(1, 2, 1), segment(5, 6, 1), segment(6, 5, 1)],
        ];

        for shape in shapes {
            assert_eq!(
                Topology::from_segments(shape),
                Err(NetworkError::InvalidSegment(SegmentRejection::NotSinglePath))
            );
        }
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let topology = create_test_topology();
        let json = serde_json::to_string(&topology).expect("serialize");
        let restored: Topology = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, topology);

        let invalid = r#"[{"line_id":1,"up_station":1,"down_station":2,"distance":0}]"#;
        assert!(serde_json::from_str::<Topology>(invalid).is_err());
    }

    #[test]
    fn test_ordered_stations_never_repeat() {
        let mut topology = create_test_topology();
        let insertions = [segment(1, 10, 2), segment(11, 3, 1), segment(3, 12, 4), segment(13, 1, 9), segment(10, 14, 1)];
        for inserted in insertions {
            topology.add_segment(inserted).expect("valid insertion");

            let stations = topology.ordered_stations();
            let unique: HashSet<_> = stations.iter().collect();
            assert_eq!(stations.len(), topology.len() + 1);
            assert_eq!(unique.len(), stations.len());
        }
    }
}
