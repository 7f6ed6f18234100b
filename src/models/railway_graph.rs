use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::logging::debug_log;
use super::{Line, LineId, StationId};

pub mod stations;
pub mod tracks;

pub use stations::Stations;
pub use tracks::Tracks;

/// One line's segment as it appears in the combined graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEdge {
    pub line_id: LineId,
    pub surcharge: u32,
    pub distance: u32,
}

/// Every line's segments folded into one undirected multigraph.
///
/// Nodes carry station ids, edges carry the owning line and its distance.
/// When two lines run between the same pair of stations both edges are kept,
/// so the search can pick either. Built fresh for each query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RailwayGraph {
    pub graph: UnGraph<StationId, TrackEdge>,
    pub station_to_index: HashMap<StationId, NodeIndex>,
}

impl RailwayGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every line's segments into a fresh graph
    #[must_use]
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut railway = Self::new();
        for line in lines {
            for segment in line.segments() {
                let up = railway.add_or_get_station(segment.up_station());
                let down = railway.add_or_get_station(segment.down_station());
                railway.add_track(
                    up,
                    down,
                    TrackEdge {
                        line_id: line.id,
                        surcharge: line.surcharge,
                        distance: segment.distance(),
                    },
                );
            }
        }

        debug_log!(
            "built graph from {} lines: {} stations, {} tracks",
            lines.len(),
            railway.station_count(),
            railway.track_count()
        );
        railway
    }
}
