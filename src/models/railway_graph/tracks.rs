use petgraph::graph::{EdgeIndex, NodeIndex};
use super::{RailwayGraph, TrackEdge};

/// Extension trait for track-related operations on `RailwayGraph`
pub trait Tracks {
    /// Add a track between two stations, returns the `EdgeIndex`
    fn add_track(&mut self, from: NodeIndex, to: NodeIndex, track: TrackEdge) -> EdgeIndex;

    /// Every track joining two stations, in either direction
    fn tracks_between(&self, a: NodeIndex, b: NodeIndex) -> Vec<TrackEdge>;

    fn track_count(&self) -> usize;
}

impl Tracks for RailwayGraph {
    fn add_track(&mut self, from: NodeIndex, to: NodeIndex, track: TrackEdge) -> EdgeIndex {
        self.graph.add_edge(from, to, track)
    }

    fn tracks_between(&self, a: NodeIndex, b: NodeIndex) -> Vec<TrackEdge> {
        self.graph.edges_connecting(a, b).map(|edge| *edge.weight()).collect()
    }

    fn track_count(&self) -> usize {
        self.graph.edge_count()
    }
}
