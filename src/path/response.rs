use serde::{Deserialize, Serialize};
use crate::models::Station;
use super::discount::Discount;

/// What a path query returns to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<Station>,
    pub distance: u64,
    pub fare: u64,
}

impl PathResponse {
    /// A copy of this response with `discount` applied to the fare
    #[must_use]
    pub fn with_discount(&self, discount: &impl Discount) -> Self {
        Self {
            fare: discount.apply(self.fare),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::discount::AgeDiscount;

    #[test]
    fn test_with_discount_only_changes_fare() {
        let response = PathResponse {
            stations: vec![Station::new(1, "Gangnam"), Station::new(2, "Yangjae")],
            distance: 10,
            fare: 1250,
        };

        let discounted = response.with_discount(&AgeDiscount::for_age(7));
        assert_eq!(discounted.fare, 450);
        assert_eq!(discounted.distance, 10);
        assert_eq!(discounted.stations, response.stations);
    }

    #[test]
    fn test_serializes_station_names() {
        let response = PathResponse {
            stations: vec![Station::new(1, "Gangnam"), Station::new(2, "Yangjae")],
            distance: 10,
            fare: 1250,
        };

        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["stations"][1]["name"], "Yangjae");
        assert_eq!(json["fare"], 1250);
    }
}
