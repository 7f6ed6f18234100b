//! Collaborators the path service reads the network through

use crate::error::{NetworkError, Result};
use crate::models::{Line, Station, StationId};

/// Source of the lines a path query runs over
pub trait LineRepository {
    /// A consistent snapshot of every line; no topology may be observed
    /// half-way through a mutation.
    fn list_all_lines(&self) -> Vec<Line>;
}

/// Resolves station ids to stations
pub trait StationLookup {
    /// # Errors
    ///
    /// Returns `StationNotFound` if no station has the given id
    fn find_station(&self, id: StationId) -> Result<Station>;
}

impl LineRepository for [Line] {
    fn list_all_lines(&self) -> Vec<Line> {
        self.to_vec()
    }
}

impl LineRepository for Vec<Line> {
    fn list_all_lines(&self) -> Vec<Line> {
        self.clone()
    }
}

impl StationLookup for [Station] {
    fn find_station(&self, id: StationId) -> Result<Station> {
        self.iter()
            .find(|station| station.id == id)
            .cloned()
            .ok_or(NetworkError::StationNotFound(id))
    }
}

impl StationLookup for Vec<Station> {
    fn find_station(&self, id: StationId) -> Result<Station> {
        self.as_slice().find_station(id)
    }
}
