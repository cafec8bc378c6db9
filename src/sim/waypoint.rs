//! Waypoint-following non-player car
//!
//! The AI car turns to face its active waypoint every frame until it has
//! reached it, then moves on to the next. The last waypoint never advances,
//! the car just keeps facing it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Number of waypoints on the AI route
pub const WAYPOINT_COUNT: usize = 7;

/// Active waypoint, in route order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Waypoint {
    #[default]
    Wp1,
    Wp2,
    Wp3,
    Wp4,
    Wp5,
    Wp6,
    Wp7,
}

impl Waypoint {
    const ORDER: [Waypoint; WAYPOINT_COUNT] = [
        Waypoint::Wp1,
        Waypoint::Wp2,
        Waypoint::Wp3,
        Waypoint::Wp4,
        Waypoint::Wp5,
        Waypoint::Wp6,
        Waypoint::Wp7,
    ];

    /// Position in the waypoint table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following waypoint, None for the last
    pub fn next(self) -> Option<Waypoint> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// True once `pos` is at or past `target - tolerance` on both axes
pub fn reached(pos: Vec2, target: Vec2, tolerance: f32) -> bool {
    pos.x >= target.x - tolerance && pos.y >= target.y - tolerance
}

/// The non-player car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiCar {
    pub pos: Vec2,
    /// Unit vector the car drives along
    pub facing: Vec2,
    pub waypoint: Waypoint,
}

impl AiCar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            facing: Vec2::Y,
            waypoint: Waypoint::Wp1,
        }
    }

    /// Turn toward `target`. Keeps the old heading when already on top of it.
    pub fn look_at(&mut self, target: Vec2) {
        let dir = (target - self.pos).normalize_or_zero();
        if dir != Vec2::ZERO {
            self.facing = dir;
        }
    }

    /// One steering decision against the route. Returns the new waypoint if
    /// the active one was reached this frame.
    pub fn follow(&mut self, route: &[Vec2; WAYPOINT_COUNT], tolerance: f32) -> Option<Waypoint> {
        let target = route[self.waypoint.index()];

        if self.waypoint.is_last() {
            self.look_at(target);
            return None;
        }

        if reached(self.pos, target, tolerance) {
            let next = self.waypoint.next()?;
            log::debug!("AI reached {:?} at {:?}, heading for {:?}", self.waypoint, self.pos, next);
            self.waypoint = next;
            Some(next)
        } else {
            self.look_at(target);
            None
        }
    }

    /// Move forward along the current facing
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.pos += self.facing * speed * dt;
    }
}
