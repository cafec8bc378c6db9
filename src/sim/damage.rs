//! Impact damage

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Speed bands on scalar momentum and the health each one costs.
/// The bands are contiguous: a hit at exactly `tier2_limit` costs `tier3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTiers {
    /// At or below this, impacts are free
    pub min_speed: f32,
    /// Upper bound (exclusive) of the light band
    pub tier1_limit: f32,
    /// Upper bound (exclusive) of the medium band
    pub tier2_limit: f32,
    pub tier1: i32,
    pub tier2: i32,
    pub tier3: i32,
}

impl Default for DamageTiers {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            min_speed: DAMAGE_MIN_SPEED,
            tier1_limit: DAMAGE_TIER1_LIMIT,
            tier2_limit: DAMAGE_TIER2_LIMIT,
            tier1: DAMAGE_TIER1,
            tier2: DAMAGE_TIER2,
            tier3: DAMAGE_TIER3,
        }
    }
}

impl DamageTiers {
    /// Health cost of an impact at `speed`
    pub fn deduction(&self, speed: f32) -> i32 {
        if speed <= self.min_speed {
            0
        } else if speed < self.tier1_limit {
            self.tier1
        } else if speed < self.tier2_limit {
            self.tier2
        } else {
            self.tier3
        }
    }
}

/// Health after an impact at `speed` with the default tiers
pub fn damage(speed: f32, health: i32) -> i32 {
    health - DamageTiers::default().deduction(speed)
}

/// Soft reset: empty health is refilled a little instead of ending the run.
/// Returns the boost timer to grant, if the reset fired.
pub fn soft_reset(health: &mut i32, tuning: &Tuning) -> Option<f32> {
    if *health > 0 {
        return None;
    }
    log::info!("Health depleted ({}), soft reset to {}", *health, tuning.soft_reset_health);
    *health = tuning.soft_reset_health;
    Some(tuning.soft_reset_boost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_tiers() {
        assert_eq!(damage(5.0, 100), 100);
        assert_eq!(damage(30.0, 100), 99);
        assert_eq!(damage(80.0, 100), 98);
        assert_eq!(damage(200.0, 100), 95);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(damage(10.0, 100), 100);
        assert_eq!(damage(50.0, 100), 98);
        assert_eq!(damage(120.0, 100), 95);
    }

    #[test]
    fn test_top_band_starts_at_limit() {
        let tiers = DamageTiers::default();
        assert_eq!(tiers.deduction(tiers.tier2_limit), tiers.tier3);
        assert_eq!(tiers.deduction(tiers.tier2_limit - 0.01), tiers.tier2);
    }

    #[test]
    fn test_soft_reset() {
        let tuning = Tuning::default();

        let mut health = 0;
        assert_eq!(soft_reset(&mut health, &tuning), Some(1.0));
        assert_eq!(health, 10);

        let mut health = -4;
        assert!(soft_reset(&mut health, &tuning).is_some());
        assert_eq!(health, 10);

        let mut health = 1;
        assert_eq!(soft_reset(&mut health, &tuning), None);
        assert_eq!(health, 1);
    }
}
