use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::error::{NetworkError, Result};
use crate::repository::{LineRepository, StationLookup};
use super::{Line, LineId, Station, StationId};

/// An in-process snapshot of every station and line.
///
/// Serves as both the line repository and the station lookup for the path
/// service. Mutating a line goes through `&mut self`, so a `Network` shared
/// between threads needs an outer lock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, with = "station_list")]
    pub stations: IndexMap<StationId, Station>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Network {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        Self {
            stations: stations.into_iter().map(|station| (station.id, station)).collect(),
            lines,
        }
    }

    /// Register a station, replacing any station with the same id
    pub fn add_station(&mut self, station: Station) {
        self.stations.insert(station.id, station);
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Lines that stop at `station`
    pub fn lines_serving(&self, station: StationId) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.serves(station))
    }

    /// Add a segment to one of this network's lines after checking that both
    /// stations are registered
    ///
    /// Returns `Ok(false)` if no line has the given id.
    ///
    /// # Errors
    ///
    /// Returns `StationNotFound` for an unregistered station, otherwise any
    /// `InvalidSegment` raised by the line
    pub fn add_segment(&mut self, line_id: LineId, up_station: StationId, down_station: StationId, distance: u32) -> Result<bool> {
        self.find_station(up_station)?;
        self.find_station(down_station)?;
        let Some(line) = self.line_mut(line_id) else {
            return Ok(false);
        };
        line.add_segment(up_station, down_station, distance)?;
        Ok(true)
    }

    /// Remove a station from one of this network's lines
    ///
    /// Returns `Ok(false)` if no line has the given id.
    ///
    /// # Errors
    ///
    /// Returns `StationNotFound` for an unregistered station, otherwise any
    /// `InvalidRemoval` raised by the line
    pub fn remove_station(&mut self, line_id: LineId, station: StationId) -> Result<bool> {
        self.find_station(station)?;
        let Some(line) = self.line_mut(line_id) else {
            return Ok(false);
        };
        line.remove_station(station)?;
        Ok(true)
    }
}

/// Stores the station registry as a plain list so every key is derived from
/// its station's own id on load.
mod station_list {
    use indexmap::IndexMap;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use super::{Station, StationId};

    pub fn serialize<S: Serializer>(stations: &IndexMap<StationId, Station>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(stations.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<IndexMap<StationId, Station>, D::Error> {
        let list = Vec::<Station>::deserialize(deserializer)?;
        let mut stations = IndexMap::with_capacity(list.len());
        for station in list {
            let id = station.id;
            if stations.insert(id, station).is_some() {
                return Err(D::Error::custom(format!("duplicate station id {id}")));
            }
        }
        Ok(stations)
    }
}

impl LineRepository for Network {
    fn list_all_lines(&self) -> Vec<Line> {
        self.lines.clone()
    }
}

impl StationLookup for Network {
    fn find_station(&self, id: StationId) -> Result<Station> {
        self.station(id).cloned().ok_or(NetworkError::StationNotFound(id))
    }
}
