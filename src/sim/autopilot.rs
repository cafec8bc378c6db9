//! Demo driver for the player car
//!
//! Follows the course racing line one segment at a time. The wanted velocity
//! runs along the segment, tapering to a stop at the mark, plus a pull back
//! toward the line proportional to the cross-track error. The car is steered
//! so its thrust axis points along the velocity error (wanted velocity minus
//! momentum). Hover cars keep their momentum when they turn, so every mark is
//! taken at a near stop before the next segment starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::SimState;
use super::tick::FrameInput;
use crate::{normalize_degrees, yaw_from_direction};

/// Top speed the autopilot asks for, units/s
pub const CRUISE_SPEED: f32 = 25.0;
/// A racing line mark counts as reached inside this radius
pub const MARK_RADIUS: f32 = 1.0;
/// ...and below this speed
pub const ARRIVE_SPEED: f32 = 1.0;
/// Sideways speed asked for per unit of cross-track error, 1/s
const LINE_GAIN: f32 = 1.0;
/// No progress along the segment at this far off the line
const LANE_HALF_WIDTH: f32 = 4.0;
/// Steering deadband, degrees
const STEER_DEADBAND: f32 = 3.0;
/// Only thrust when the thrust axis is this close to the wanted direction, degrees
const THRUST_CONE: f32 = 20.0;
/// Velocity error small enough to coast
const COAST_ERROR: f32 = 0.5;

/// Progress along the racing line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Autopilot {
    pub next_mark: usize,
}

impl Autopilot {
    /// Current target, None once the line is done
    pub fn target(&self, line: &[Vec2]) -> Option<Vec2> {
        line.get(self.next_mark).copied()
    }

    /// Where the current segment begins: the previous mark, or `start`
    pub fn segment_start(&self, line: &[Vec2], start: Vec2) -> Vec2 {
        self.next_mark
            .checked_sub(1)
            .and_then(|i| line.get(i).copied())
            .unwrap_or(start)
    }

    /// Step past any marks the car has settled on
    pub fn update(&mut self, car_pos: Vec2, speed: f32, line: &[Vec2]) {
        while let Some(mark) = self.target(line) {
            if car_pos.distance(mark) > MARK_RADIUS || speed > ARRIVE_SPEED {
                break;
            }
            log::debug!("Autopilot reached mark {} at {:?}", self.next_mark, mark);
            self.next_mark += 1;
        }
    }
}

/// Velocity that brings a car at `pos` onto the segment `from -> mark` and
/// stops it at `mark`. `accel` is the speed change per second at full thrust.
pub fn wanted_velocity(from: Vec2, mark: Vec2, pos: Vec2, accel: f32) -> Vec2 {
    let taper = |distance: f32| CRUISE_SPEED.min((distance.abs() * accel).sqrt());

    let dir = (mark - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        let to_mark = mark - pos;
        return to_mark.normalize_or_zero() * taper(to_mark.length());
    }

    let offset = pos - from;
    let lateral = offset - dir * offset.dot(dir);
    // Negative once the car has overshot the mark
    let remaining = (mark - pos).dot(dir);
    let on_line = (1.0 - lateral.length() / LANE_HALF_WIDTH).max(0.0);

    let along = dir * remaining.signum() * taper(remaining) * on_line;
    (along - lateral * LINE_GAIN).clamp_length_max(CRUISE_SPEED)
}

/// Fill in driving input for this frame. Start is pressed if the countdown
/// has not begun; other fields of `input` (quit, facing) pass through.
pub fn drive(state: &SimState, input: &FrameInput, dt: f32) -> FrameInput {
    let mut out = FrameInput {
        accelerate: false,
        decelerate: false,
        steer_left: false,
        steer_right: false,
        boost: false,
        ..input.clone()
    };

    if !state.countdown.counting {
        out.start = true;
        return out;
    }

    let car = &state.player;
    let momentum = car.physics.momentum.to_vec2();
    let line = &state.course.racing_line;
    let accel = car.physics.thrust_multiplier / dt.max(f32::EPSILON);

    let wanted = match state.autopilot.target(line) {
        Some(mark) => {
            let from = state.autopilot.segment_start(line, state.course.player_start);
            wanted_velocity(from, mark, car.pos, accel)
        }
        None => Vec2::ZERO,
    };

    let error = wanted - momentum;
    if error.length() < COAST_ERROR {
        return out;
    }

    // Reverse thrust is as strong as forward, so line up whichever end is closer
    let diff = normalize_degrees(yaw_from_direction(error) - car.yaw);
    let (diff, reverse) = if diff.abs() > 90.0 {
        (normalize_degrees(diff - 180.0), true)
    } else {
        (diff, false)
    };

    out.steer_right = diff > STEER_DEADBAND;
    out.steer_left = diff < -STEER_DEADBAND;
    if diff.abs() < THRUST_CONE {
        out.accelerate = !reverse;
        out.decelerate = reverse;
    }
    out
}
