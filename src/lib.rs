//! Hover Racer - checkpoint racing around a fixed course
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (physics, collisions, race state, AI car)
//! - `hud`: Text overlays the host engine draws each frame
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::{Hud, HudLine};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference frame rate used by the headless runner
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Session ends once the car strays this far from the origin
    pub const MAX_DISTANCE: f32 = 1000.0;

    /// Car defaults
    pub const CAR_RADIUS: f32 = 4.0;
    pub const PLAYER_START: (f32, f32) = (0.0, -30.0);
    pub const AI_START: (f32, f32) = (10.0, -30.0);
    pub const START_HEALTH: i32 = 100;
    /// Degrees per second
    pub const STEERING_RATE: f32 = 100.0;

    /// Force model. Thrust and drag are per-frame, not dt scaled.
    pub const DEFAULT_THRUST: f32 = 0.1;
    pub const DEFAULT_DRAG: f32 = -0.0005;
    /// Momentum is divided by this on every collision
    pub const BOUNCE_DIVISOR: f32 = -1.5;
    /// Scales frame displacement into a readable speedometer value
    pub const SPEED_DISPLAY_SCALE: f32 = 1000.0;

    /// Boost / overheat
    pub const DEFAULT_BOOST: f32 = 5.0;
    pub const DEFAULT_OVERHEAT: f32 = 5.0;
    pub const BOOST_THRUST_GROWTH: f32 = 1.0001;
    pub const OVERHEAT_DRAG_GROWTH: f32 = 1.001;

    /// Damage tiers on scalar momentum
    pub const DAMAGE_MIN_SPEED: f32 = 10.0;
    pub const DAMAGE_TIER1_LIMIT: f32 = 50.0;
    pub const DAMAGE_TIER2_LIMIT: f32 = 120.0;
    pub const DAMAGE_TIER1: i32 = 1;
    pub const DAMAGE_TIER2: i32 = 2;
    pub const DAMAGE_TIER3: i32 = 5;
    /// Health granted back when it runs out, plus one second of boost
    pub const SOFT_RESET_HEALTH: i32 = 10;
    pub const SOFT_RESET_BOOST: f32 = 1.0;

    /// Start countdown (seconds)
    pub const COUNTDOWN_SECONDS: f32 = 3.0;

    /// Non-player car
    pub const AI_SPEED: f32 = 30.0;
    /// Waypoint counts as reached slightly before the car gets there
    pub const WAYPOINT_TOLERANCE: f32 = 0.5;

    /// Course geometry
    pub const CHECKPOINT_WIDTH: f32 = 20.0;
    pub const CHECKPOINT_DEPTH: f32 = 3.0;
    pub const WALL_WIDTH: f32 = 2.0;
    pub const WALL_DEPTH: f32 = 10.0;
    pub const STRUT_RADIUS: f32 = 0.1;
    pub const TANK_RADIUS: f32 = 0.5;
}

/// Normalized angle to [-180, 180) degrees
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Unit forward vector for a yaw in degrees (0 faces +Z, positive turns toward +X)
#[inline]
pub fn forward_from_yaw(yaw_degrees: f32) -> Vec2 {
    let yaw = yaw_degrees.to_radians();
    Vec2::new(yaw.sin(), yaw.cos())
}

/// Yaw in degrees that faces along `dir`
#[inline]
pub fn yaw_from_direction(dir: Vec2) -> f32 {
    dir.x.atan2(dir.y).to_degrees()
}
