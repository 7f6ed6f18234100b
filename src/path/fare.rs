use crate::config::FarePolicy;

/// Prices a trip from its distance and the surcharge of the lines it used
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    policy: FarePolicy,
}

impl FareCalculator {
    #[must_use]
    pub fn new(policy: FarePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Distance fare plus the line surcharge
    #[must_use]
    pub fn fare(&self, distance: u64, surcharge: u32) -> u64 {
        self.distance_fare(distance) + u64::from(surcharge)
    }

    /// The base fare plus every tier the distance reaches into.
    ///
    /// Each tier charges one unit per started `unit_distance` kilometres of
    /// the part of the trip that falls inside it.
    #[must_use]
    pub fn distance_fare(&self, distance: u64) -> u64 {
        let mut fare = u64::from(self.policy.base_fare);
        let mut lower = u64::from(self.policy.base_distance);

        for tier in &self.policy.tiers {
            if distance <= lower {
                break;
            }
            let upper = tier.up_to.map_or(distance, |limit| distance.min(u64::from(limit)));
            let units = upper
                .saturating_sub(lower)
                .div_ceil(u64::from(tier.unit_distance.max(1)));
            fare += units * u64::from(tier.unit_fare);

            match tier.up_to {
                Some(limit) => lower = u64::from(limit),
                None => break,
            }
        }

        fare
    }
}
