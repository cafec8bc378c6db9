//! Thrust / drag / momentum integration
//!
//! A first-order, frame-based model: force terms are added to momentum
//! unscaled and only the resulting displacement is multiplied by dt.

use serde::{Deserialize, Serialize};

use super::vector::{Vector2D, scalar, sum3};

/// Which thrust key is held this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Throttle {
    #[default]
    Idle,
    Forward,
    Reverse,
}

impl Throttle {
    /// Forward takes precedence when both keys are held
    pub fn from_keys(accelerate: bool, decelerate: bool) -> Self {
        if accelerate {
            Throttle::Forward
        } else if decelerate {
            Throttle::Reverse
        } else {
            Throttle::Idle
        }
    }
}

/// Per-car force state carried across frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarPhysics {
    pub momentum: Vector2D,
    /// Grows while boosting
    pub thrust_multiplier: f32,
    /// Negative; grows more negative while overheated
    pub drag_coeff: f32,
}

impl CarPhysics {
    pub fn new(thrust_multiplier: f32, drag_coeff: f32) -> Self {
        Self {
            momentum: Vector2D::ZERO,
            thrust_multiplier,
            drag_coeff,
        }
    }

    /// Fold thrust and drag into momentum and return this frame's displacement
    pub fn integrate(&mut self, throttle: Throttle, facing: Vector2D, started: bool, dt: f32) -> Vector2D {
        let thrust = thrust(throttle, facing, self.thrust_multiplier, started);
        let drag = scalar(self.drag_coeff, self.momentum);
        self.momentum = sum3(self.momentum, thrust, drag);
        scalar(dt, self.momentum)
    }

    /// Reverse and damp momentum after a hit
    pub fn bounce(&mut self, divisor: f32) {
        self.momentum.x /= divisor;
        self.momentum.z /= divisor;
    }

    /// Magnitude of momentum, used for impact severity
    pub fn scalar_momentum(&self) -> f32 {
        self.momentum.length()
    }
}

/// Thrust along `facing`, zero until the race has started
pub fn thrust(throttle: Throttle, facing: Vector2D, multiplier: f32, started: bool) -> Vector2D {
    if !started {
        return Vector2D::ZERO;
    }
    match throttle {
        Throttle::Forward => scalar(multiplier, facing),
        Throttle::Reverse => scalar(-multiplier, facing),
        Throttle::Idle => Vector2D::ZERO,
    }
}

/// Speedometer reading for the distance covered this frame
pub fn display_speed(momentum: Vector2D, dt: f32, scale: f32) -> f32 {
    (scalar(dt, momentum).length() * scale).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_no_thrust_before_start() {
        let facing = Vector2D::new(0.0, 1.0);
        assert_eq!(thrust(Throttle::Forward, facing, 0.1, false), Vector2D::ZERO);
        assert_eq!(thrust(Throttle::Forward, facing, 0.1, true), Vector2D::new(0.0, 0.1));
        assert_eq!(thrust(Throttle::Reverse, facing, 0.1, true), Vector2D::new(0.0, -0.1));
        assert_eq!(thrust(Throttle::Idle, facing, 0.1, true), Vector2D::ZERO);
    }

    #[test]
    fn test_throttle_forward_wins() {
        assert_eq!(Throttle::from_keys(true, true), Throttle::Forward);
        assert_eq!(Throttle::from_keys(false, true), Throttle::Reverse);
        assert_eq!(Throttle::from_keys(false, false), Throttle::Idle);
    }

    #[test]
    fn test_integrate_three_way_sum() {
        let mut car = CarPhysics::new(DEFAULT_THRUST, DEFAULT_DRAG);
        car.momentum = Vector2D::new(0.0, 100.0);

        let step = car.integrate(Throttle::Forward, Vector2D::new(0.0, 1.0), true, 0.5);

        // 100 + 0.1 thrust - 0.05 drag
        assert!((car.momentum.z - 100.05).abs() < 1e-4);
        assert!((step.z - 50.025).abs() < 1e-3);
        assert_eq!(car.momentum.x, 0.0);
    }

    #[test]
    fn test_drag_approaches_terminal_momentum() {
        let mut car = CarPhysics::new(DEFAULT_THRUST, DEFAULT_DRAG);
        for _ in 0..50_000 {
            car.integrate(Throttle::Forward, Vector2D::new(1.0, 0.0), true, FRAME_DT);
        }
        // thrust / -drag
        assert!((car.momentum.x - 200.0).abs() < 1.0);
    }

    #[test]
    fn test_bounce_reverses() {
        let mut car = CarPhysics::new(DEFAULT_THRUST, DEFAULT_DRAG);
        car.momentum = Vector2D::new(3.0, -6.0);
        car.bounce(BOUNCE_DIVISOR);
        assert_eq!(car.momentum, Vector2D::new(-2.0, 4.0));
    }

    #[test]
    fn test_display_speed() {
        let speed = display_speed(Vector2D::new(-30.0, 40.0), 0.01, 1000.0);
        assert!((speed - 500.0).abs() < 1e-3);
        assert!(display_speed(Vector2D::new(-1.0, 0.0), 1.0, 1.0) >= 0.0);
    }
}
