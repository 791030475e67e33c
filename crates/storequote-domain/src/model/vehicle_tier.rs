//! Pickup vehicle tiers

use serde::{Deserialize, Serialize};

/// A pickup vehicle and the load volume range it is booked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTier {
    /// Vehicle name (e.g., "Tata Ace", "Eicher 14ft")
    pub name: String,
    /// Smallest load in cft, inclusive
    pub min_volume: u32,
    /// Largest load in cft, inclusive; `None` for the open-ended top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_volume: Option<u32>,
    /// Fare covering the included kilometres
    pub base_fare: f64,
    /// Charge per kilometre beyond the included distance
    pub rate_per_km: f64,
}

impl VehicleTier {
    pub fn new(
        name: impl Into<String>,
        min_volume: u32,
        max_volume: Option<u32>,
        base_fare: f64,
        rate_per_km: f64,
    ) -> Self {
        Self {
            name: name.into(),
            min_volume,
            max_volume,
            base_fare,
            rate_per_km,
        }
    }

    /// Closed-interval check: both bounds are part of the tier
    pub fn carries(&self, volume_cft: u32) -> bool {
        volume_cft >= self.min_volume && self.max_volume.map_or(true, |max| volume_cft <= max)
    }

    /// Trip cost before rounding
    pub fn trip_cost(&self, distance_km: f64, included_km: f64) -> f64 {
        self.base_fare + (distance_km - included_km).max(0.0) * self.rate_per_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carries_is_inclusive() {
        let tier = VehicleTier::new("Bolero Pickup", 251, Some(500), 1800.0, 40.0);
        assert!(!tier.carries(250));
        assert!(tier.carries(251));
        assert!(tier.carries(500));
        assert!(!tier.carries(501));
    }

    #[test]
    fn test_open_ended_tier() {
        let tier = VehicleTier::new("Eicher 17ft", 901, None, 3600.0, 65.0);
        assert!(tier.carries(901));
        assert!(tier.carries(u32::MAX));
    }

    #[test]
    fn test_trip_cost_includes_free_kilometres() {
        let tier = VehicleTier::new("Tata Ace", 0, Some(250), 1200.0, 30.0);
        assert_eq!(tier.trip_cost(0.0, 5.0), 1200.0);
        assert_eq!(tier.trip_cost(5.0, 5.0), 1200.0);
        assert_eq!(tier.trip_cost(12.0, 5.0), 1410.0);
    }
}
