use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use crate::config::SurchargeAttribution;
use crate::constants::NO_SURCHARGE;
use crate::error::{NetworkError, Result};
use crate::logging::debug_log;
use crate::models::{LineId, RailwayGraph, StationId, Stations, Tracks};

/// A line offering one hop of a path, with the surcharge it would add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCharge {
    pub line_id: LineId,
    pub surcharge: u32,
}

/// One hop between adjacent stations on a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLeg {
    pub from: StationId,
    pub to: StationId,
    pub distance: u32,
    /// Every line running between `from` and `to` at exactly `distance`
    pub lines: Vec<LineCharge>,
}

impl PathLeg {
    /// The surcharge this hop is charged at under `attribution`
    #[must_use]
    pub fn attributed_surcharge(&self, attribution: SurchargeAttribution) -> u32 {
        let surcharges = self.lines.iter().map(|line| line.surcharge);
        let chosen = match attribution {
            SurchargeAttribution::Cheapest => surcharges.min(),
            SurchargeAttribution::Highest => surcharges.max(),
        };
        chosen.unwrap_or(NO_SURCHARGE)
    }
}

/// A minimum-distance route between two stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Stations from source to target, both included once
    pub stations: Vec<StationId>,
    pub distance: u64,
    pub legs: Vec<PathLeg>,
}

impl Path {
    /// The largest surcharge among the lines the path is charged to
    #[must_use]
    pub fn max_surcharge(&self, attribution: SurchargeAttribution) -> u32 {
        self.legs
            .iter()
            .map(|leg| leg.attributed_surcharge(attribution))
            .max()
            .unwrap_or(NO_SURCHARGE)
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    distance: u64,
    node: NodeIndex,
    station: StationId,
}

// Reversed on distance so `BinaryHeap` pops the closest station first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The best known way into a station, recorded while searching
#[derive(Copy, Clone)]
struct Hop {
    previous: NodeIndex,
    from: StationId,
    to: StationId,
    distance: u32,
}

/// Shortest-path search over a built `RailwayGraph`
pub struct PathEngine<'a> {
    railway: &'a RailwayGraph,
}

impl<'a> PathEngine<'a> {
    #[must_use]
    pub fn new(railway: &'a RailwayGraph) -> Self {
        Self { railway }
    }

    /// Find the minimum-distance path from `source` to `target`
    ///
    /// Runs Dijkstra from `source` and stops as soon as `target` is settled.
    /// When several paths share the minimum distance, any one of them may be
    /// returned.
    ///
    /// # Errors
    ///
    /// - `SameStation` if `source == target`
    /// - `StationNotFound` if either station is not on any line
    /// - `NoRoute` if the two stations are not connected
    pub fn shortest_path(&self, source: StationId, target: StationId) -> Result<Path> {
        if source == target {
            return Err(NetworkError::SameStation(source));
        }
        let start = self
            .railway
            .get_station_index(source)
            .ok_or(NetworkError::StationNotFound(source))?;
        let goal = self
            .railway
            .get_station_index(target)
            .ok_or(NetworkError::StationNotFound(target))?;

        let graph = &self.railway.graph;
        let mut distances = vec![u64::MAX; graph.node_count()];
        let mut came_from: Vec<Option<Hop>> = vec![None; graph.node_count()];
        let mut heap = BinaryHeap::new();

        distances[start.index()] = 0;
        heap.push(State {
            distance: 0,
            node: start,
            station: source,
        });

        while let Some(State { distance, node, station }) = heap.pop() {
            if node == goal {
                break;
            }
            // A shorter route to this station was already settled
            if distance > distances[node.index()] {
                continue;
            }

            for edge in graph.edges(node) {
                let next = if edge.source() == node { edge.target() } else { edge.source() };
                let Some(next_station) = self.railway.get_station_id(next) else {
                    continue;
                };
                let candidate = distance + u64::from(edge.weight().distance);
                if candidate < distances[next.index()] {
                    distances[next.index()] = candidate;
                    came_from[next.index()] = Some(Hop {
                        previous: node,
                        from: station,
                        to: next_station,
                        distance: edge.weight().distance,
                    });
                    heap.push(State {
                        distance: candidate,
                        node: next,
                        station: next_station,
                    });
                }
            }
        }

        if distances[goal.index()] == u64::MAX {
            debug_log!("no route between {source} and {target}");
            return Err(NetworkError::NoRoute { from: source, to: target });
        }

        let path = self.reconstruct(source, start, goal, distances[goal.index()], &came_from);
        debug_log!(
            "shortest path {source} -> {target}: {:?} ({} km)",
            path.stations,
            path.distance
        );
        Ok(path)
    }

    /// Walk the recorded hops back from `goal` to `start`
    fn reconstruct(&self, source: StationId, start: NodeIndex, goal: NodeIndex, distance: u64, came_from: &[Option<Hop>]) -> Path {
        let mut hops = Vec::new();
        let mut current = goal;
        while current != start {
            let Some(hop) = came_from[current.index()] else {
                break;
            };
            hops.push((current, hop));
            current = hop.previous;
        }
        hops.reverse();

        let mut stations = Vec::with_capacity(hops.len() + 1);
        stations.push(source);

        let legs = hops
            .into_iter()
            .map(|(node, hop)| {
                stations.push(hop.to);
                let lines = self
                    .railway
                    .tracks_between(hop.previous, node)
                    .into_iter()
                    .filter(|track| track.distance == hop.distance)
                    .map(|track| LineCharge {
                        line_id: track.line_id,
                        surcharge: track.surcharge,
                    })
                    .collect();
                PathLeg {
                    from: hop.from,
                    to: hop.to,
                    distance: hop.distance,
                    lines,
                }
            })
            .collect();

        Path { stations, distance, legs }
    }
}
