//! Per-frame simulation tick
//!
//! Runs one frame in a fixed order: bounds check, steering and physics,
//! countdown, checkpoints, collisions, boost, health, AI car, quit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::autopilot;
use super::boost::BoostTransition;
use super::collision::{car_box_collision, sphere_sphere};
use super::countdown::CountdownStep;
use super::course::ObstacleKind;
use super::damage::soft_reset;
use super::physics::{Throttle, display_speed};
use super::race::StatusMessage;
use super::state::{PlayerCar, SessionStatus, SimEvent, SimState};
use super::vector::Vector2D;
use crate::tuning::Tuning;

/// Input for a single frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Thrust forward (held)
    pub accelerate: bool,
    /// Thrust backward (held)
    pub decelerate: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    /// Boost (held); shares the start key
    pub boost: bool,
    /// Start the countdown (hit)
    pub start: bool,
    /// End the session (hit)
    pub quit: bool,
    /// Forward direction supplied by the host. Derived from the car's yaw
    /// when absent.
    pub facing: Option<Vector2D>,
    /// Demo mode - the autopilot drives
    pub autopilot: bool,
}

/// Advance the simulation by one frame of `dt` seconds
pub fn tick(state: &mut SimState, input: &FrameInput, dt: f32) {
    if !state.is_running() {
        return;
    }
    state.events.clear();
    state.frame += 1;

    let input = if input.autopilot {
        let speed = state.player.physics.scalar_momentum();
        state.autopilot.update(state.player.pos, speed, &state.course.racing_line);
        autopilot::drive(state, input, dt)
    } else {
        input.clone()
    };
    let input = &input;

    let old_pos = state.player.pos;
    if old_pos.length() > state.tuning.max_distance {
        log::warn!("Car left the course at {:?}", old_pos);
        state.end_session(SessionStatus::OutOfBounds);
        return;
    }

    let started = state.game_started();

    // Facing is sampled before this frame's steering
    let facing = input.facing.unwrap_or_else(|| state.player.facing());
    if started {
        let turn = state.tuning.steering_rate * dt;
        if input.steer_right {
            state.player.yaw += turn;
        }
        if input.steer_left {
            state.player.yaw -= turn;
        }
        state.player.yaw = crate::normalize_degrees(state.player.yaw);
    }

    let throttle = Throttle::from_keys(input.accelerate, input.decelerate);
    let step = state.player.physics.integrate(throttle, facing, started, dt);
    state.player.pos += step.to_vec2();
    state.display_speed = display_speed(
        state.player.physics.momentum,
        dt,
        state.tuning.speed_display_scale,
    );
    let impact_speed = state.player.physics.scalar_momentum();

    update_countdown(state, input, dt);

    for entered in state.race.update(state.player.pos, &state.course.checkpoints) {
        state.status = StatusMessage::for_state(entered);
        state.events.push(SimEvent::CheckpointPassed(entered));
    }

    resolve_collisions(state, old_pos, impact_speed);

    let unlocked = state.countdown.finished();
    let transition = state.boost.tick(
        input.boost,
        unlocked,
        &mut state.player.physics,
        &state.tuning,
        dt,
    );
    match transition {
        BoostTransition::None => {}
        BoostTransition::Released => state.events.push(SimEvent::BoostReleased),
        BoostTransition::Overheated => state.events.push(SimEvent::Overheated),
        BoostTransition::Recovered => state.events.push(SimEvent::Recovered),
    }

    if let Some(boost) = soft_reset(&mut state.player.health, &state.tuning) {
        state.boost.boost_remaining = boost;
        state.events.push(SimEvent::HealthReset);
    }

    if let Some(waypoint) = state.ai.follow(&state.course.waypoints, state.tuning.waypoint_tolerance) {
        state.events.push(SimEvent::WaypointAdvanced(waypoint));
    }
    if started {
        state.ai.advance(state.tuning.ai_speed, dt);
    }

    if input.quit {
        state.end_session(SessionStatus::Quit);
    }
}

fn update_countdown(state: &mut SimState, input: &FrameInput, dt: f32) {
    if !state.countdown.counting {
        if input.start {
            if let Some(label) = state.countdown.trigger() {
                state.status = label;
                state.events.push(SimEvent::CountdownStarted);
            }
        }
        return;
    }

    match state.countdown.tick(dt, state.race.state) {
        CountdownStep::Idle => {}
        CountdownStep::Show(label) => state.status = label,
        CountdownStep::Started => {
            state.status = StatusMessage::Go;
            state.events.push(SimEvent::RaceStarted);
        }
    }
}

/// Walls first, then struts, tanks and the AI car. Every hit bounces the car
/// and costs health, so simultaneous hits stack.
fn resolve_collisions(state: &mut SimState, old_pos: Vec2, impact_speed: f32) {
    let SimState {
        tuning,
        course,
        player,
        ai,
        events,
        ..
    } = state;
    let radius = tuning.car_radius;

    for wall in &course.walls {
        let side = car_box_collision(player.pos, old_pos, radius, wall.pos, wall.width, wall.depth);
        if side.blocks_z() {
            player.pos.y = old_pos.y;
        } else if side.blocks_x() {
            player.pos.x = old_pos.x;
        }
        if side.is_hit() {
            player.physics.bounce(tuning.bounce_divisor);
            apply_damage(player, tuning, impact_speed, ObstacleKind::Wall, events);
        }
    }

    let spheres = course
        .struts
        .iter()
        .map(|s| (ObstacleKind::Strut, s.pos, s.radius))
        .chain(course.tanks.iter().map(|t| (ObstacleKind::Tank, t.pos, t.radius)))
        .chain(std::iter::once((ObstacleKind::AiCar, ai.pos, radius)));

    for (kind, pos, obstacle_radius) in spheres {
        if sphere_sphere(player.pos, radius, pos, obstacle_radius) {
            player.pos = old_pos;
            player.physics.bounce(tuning.bounce_divisor);
            apply_damage(player, tuning, impact_speed, kind, events);
        }
    }
}

fn apply_damage(
    player: &mut PlayerCar,
    tuning: &Tuning,
    impact_speed: f32,
    kind: ObstacleKind,
    events: &mut Vec<SimEvent>,
) {
    let damage = tuning.damage.deduction(impact_speed);
    player.health -= damage;
    log::debug!("Hit {:?} at {:.1}, -{} health", kind, impact_speed, damage);
    events.push(SimEvent::Collision { kind, damage });
}
