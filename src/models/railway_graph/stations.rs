use petgraph::graph::NodeIndex;
use super::RailwayGraph;
use crate::models::StationId;

/// Extension trait for station-related operations on `RailwayGraph`
pub trait Stations {
    /// Add a station node if it doesn't exist, return its `NodeIndex`
    fn add_or_get_station(&mut self, station: StationId) -> NodeIndex;

    /// Get `NodeIndex` by station id
    fn get_station_index(&self, station: StationId) -> Option<NodeIndex>;

    /// Get station id by `NodeIndex`
    fn get_station_id(&self, index: NodeIndex) -> Option<StationId>;

    fn station_count(&self) -> usize;
}

impl Stations for RailwayGraph {
    fn add_or_get_station(&mut self, station: StationId) -> NodeIndex {
        if let Some(&index) = self.station_to_index.get(&station) {
            index
        } else {
            let index = self.graph.add_node(station);
            self.station_to_index.insert(station, index);
            index
        }
    }

    fn get_station_index(&self, station: StationId) -> Option<NodeIndex> {
        self.station_to_index.get(&station).copied()
    }

    fn get_station_id(&self, index: NodeIndex) -> Option<StationId> {
        self.graph.node_weight(index).copied()
    }

    fn station_count(&self) -> usize {
        self.graph.node_count()
    }
}
