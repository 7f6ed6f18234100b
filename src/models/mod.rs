mod line;
mod network;
mod railway_graph;
mod segment;
mod station;
mod topology;

pub use line::Line;
pub use network::Network;
pub use railway_graph::{RailwayGraph, Stations, Tracks, TrackEdge};
pub use segment::{LineId, Segment};
pub use station::{Station, StationId};
pub use topology::Topology;
