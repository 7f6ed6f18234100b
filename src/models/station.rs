use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Unique identifier for a station.
pub type StationId = u64;

/// A named stop on the network.
///
/// Stations are owned by whatever registry created them; the core only
/// compares them by identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    #[must_use]
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
