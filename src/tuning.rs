//! Game balance
//!
//! Every rate and threshold the simulation reads. Defaults reproduce the
//! stock race; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::damage::DamageTiers;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Car ===
    pub car_radius: f32,
    pub start_health: i32,
    /// Degrees per second
    pub steering_rate: f32,

    // === Forces ===
    pub default_thrust: f32,
    pub default_drag: f32,
    pub bounce_divisor: f32,
    pub speed_display_scale: f32,

    // === Boost / overheat ===
    pub default_boost: f32,
    pub default_overheat: f32,
    /// Per-frame multiplier on thrust while boosting
    pub boost_thrust_growth: f32,
    /// Per-frame multiplier on drag while overheated
    pub overheat_drag_growth: f32,

    // === Damage ===
    pub damage: DamageTiers,
    pub soft_reset_health: i32,
    pub soft_reset_boost: f32,

    // === Race ===
    pub countdown_seconds: f32,
    pub max_distance: f32,

    // === AI ===
    pub ai_speed: f32,
    pub waypoint_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            car_radius: CAR_RADIUS,
            start_health: START_HEALTH,
            steering_rate: STEERING_RATE,

            default_thrust: DEFAULT_THRUST,
            default_drag: DEFAULT_DRAG,
            bounce_divisor: BOUNCE_DIVISOR,
            speed_display_scale: SPEED_DISPLAY_SCALE,

            default_boost: DEFAULT_BOOST,
            default_overheat: DEFAULT_OVERHEAT,
            boost_thrust_growth: BOOST_THRUST_GROWTH,
            overheat_drag_growth: OVERHEAT_DRAG_GROWTH,

            damage: DamageTiers::default(),
            soft_reset_health: SOFT_RESET_HEALTH,
            soft_reset_boost: SOFT_RESET_BOOST,

            countdown_seconds: COUNTDOWN_SECONDS,
            max_distance: MAX_DISTANCE,

            ai_speed: AI_SPEED,
            waypoint_tolerance: WAYPOINT_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// True when a collision sends the car back the way it came
    pub fn bounce_reverses(&self) -> bool {
        self.bounce_divisor < 0.0
    }
}
