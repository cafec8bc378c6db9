//! Planar force vectors
//!
//! Momentum, thrust and drag live in the ground plane only, so they carry
//! X and Z and nothing else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A force/momentum vector in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub z: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Magnitude
    pub fn length(self) -> f32 {
        self.to_vec2().length()
    }

    /// As a glam vector (`y` holds world Z)
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, z: v.y }
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        v.to_vec2()
    }
}

/// Scale a vector by `s`
#[inline]
pub fn scalar(s: f32, v: Vector2D) -> Vector2D {
    Vector2D::new(s * v.x, s * v.z)
}

/// Component-wise sum of three vectors
#[inline]
pub fn sum3(v1: Vector2D, v2: Vector2D, v3: Vector2D) -> Vector2D {
    Vector2D::new(v1.x + v2.x + v3.x, v1.z + v2.z + v3.z)
}
