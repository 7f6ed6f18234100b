use crate::config::FarePolicy;
use crate::error::{NetworkError, Result};
use crate::logging::debug_log;
use crate::models::{RailwayGraph, StationId};
use crate::repository::{LineRepository, StationLookup};
use super::engine::PathEngine;
use super::fare::FareCalculator;
use super::response::PathResponse;

/// Answers shortest-path and fare queries over the current set of lines.
///
/// The graph is rebuilt from the repository on every query, so results
/// always reflect the latest topology and concurrent queries share nothing.
pub struct PathService<'a, L: ?Sized, S: ?Sized> {
    lines: &'a L,
    stations: &'a S,
    fares: FareCalculator,
}

impl<'a, L, S> PathService<'a, L, S>
where
    L: LineRepository + ?Sized,
    S: StationLookup + ?Sized,
{
    #[must_use]
    pub fn new(lines: &'a L, stations: &'a S, policy: FarePolicy) -> Self {
        Self {
            lines,
            stations,
            fares: FareCalculator::new(policy),
        }
    }

    /// Find the shortest route between two stations and price it
    ///
    /// # Errors
    ///
    /// - `SameStation` if `source == target`
    /// - `StationNotFound` if either id is unknown or not served by any line
    /// - `NoRoute` if no combination of lines connects the two stations
    pub fn find_shortest_path(&self, source: StationId, target: StationId) -> Result<PathResponse> {
        if source == target {
            return Err(NetworkError::SameStation(source));
        }
        self.stations.find_station(source)?;
        self.stations.find_station(target)?;

        let lines = self.lines.list_all_lines();
        let railway = RailwayGraph::from_lines(&lines);
        let path = PathEngine::new(&railway).shortest_path(source, target)?;

        let surcharge = path.max_surcharge(self.fares.policy().surcharge_attribution);
        let fare = self.fares.fare(path.distance, surcharge);
        debug_log!("fare {source} -> {target}: {} km, surcharge {surcharge}, fare {fare}", path.distance);

        let stations = path
            .stations
            .iter()
            .map(|&station| self.stations.find_station(station))
            .collect::<Result<Vec<_>>>()?;

        Ok(PathResponse {
            stations,
            distance: path.distance,
            fare,
        })
    }
}
