//! Collision detection against the course
//!
//! Everything here is axis-aligned or circular and works in the XZ ground
//! plane (`Vec2::y` is world Z). Response (rollback and bounce) is left to
//! the caller so the detectors stay pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which face of an inflated box the car came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxSide {
    /// Entered across min X
    LeftSide,
    /// Entered across max X
    RightSide,
    /// Entered across min Z
    FrontSide,
    /// Entered across max Z
    BackSide,
    NoSide,
}

impl BoxSide {
    /// Rollback only the X axis
    pub fn blocks_x(self) -> bool {
        matches!(self, BoxSide::LeftSide | BoxSide::RightSide)
    }

    /// Rollback only the Z axis
    pub fn blocks_z(self) -> bool {
        matches!(self, BoxSide::FrontSide | BoxSide::BackSide)
    }

    pub fn is_hit(self) -> bool {
        self != BoxSide::NoSide
    }
}

/// Axis-aligned rectangle extents, strict on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min: Vec2,
    max: Vec2,
}

impl Bounds {
    fn centered(center: Vec2, width: f32, depth: f32, inflate: f32) -> Self {
        let half = Vec2::new(width / 2.0 + inflate, depth / 2.0 + inflate);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// True if `point` lies strictly inside the rectangle centered on `center`
pub fn point_in_rect(point: Vec2, center: Vec2, width: f32, depth: f32) -> bool {
    Bounds::centered(center, width, depth, 0.0).contains(point)
}

/// Sphere vs axis-aligned box with side resolution
///
/// The box is inflated by `car_radius`. If `car_pos` is inside, the side is
/// picked by testing `old_pos` against the inflated edges in the fixed order
/// left, right, front, back. A corner approach can therefore report the X
/// face when the Z face was the one actually crossed.
pub fn car_box_collision(
    car_pos: Vec2,
    old_pos: Vec2,
    car_radius: f32,
    box_center: Vec2,
    box_width: f32,
    box_depth: f32,
) -> BoxSide {
    let bounds = Bounds::centered(box_center, box_width, box_depth, car_radius);

    if !bounds.contains(car_pos) {
        return BoxSide::NoSide;
    }

    if old_pos.x < bounds.min.x {
        BoxSide::LeftSide
    } else if old_pos.x > bounds.max.x {
        BoxSide::RightSide
    } else if old_pos.y < bounds.min.y {
        BoxSide::FrontSide
    } else if old_pos.y > bounds.max.y {
        BoxSide::BackSide
    } else {
        BoxSide::NoSide
    }
}

/// Sphere vs sphere, touching is not a hit
#[inline]
pub fn sphere_sphere(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
