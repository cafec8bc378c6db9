//! Simulation state and core types
//!
//! Everything that changes from frame to frame lives in `SimState`, owned
//! by the host loop and passed to `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::autopilot::Autopilot;
use super::boost::BoostState;
use super::countdown::Countdown;
use super::course::{Course, ObstacleKind};
use super::physics::CarPhysics;
use super::race::{RaceProgress, RaceState, StatusMessage};
use super::vector::Vector2D;
use super::waypoint::{AiCar, Waypoint};
use crate::forward_from_yaw;
use crate::tuning::Tuning;

/// Whether the session is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Running,
    /// Quit key pressed
    Quit,
    /// Car left the playable area
    OutOfBounds,
}

/// Notable things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    CountdownStarted,
    RaceStarted,
    CheckpointPassed(RaceState),
    Collision { kind: ObstacleKind, damage: i32 },
    HealthReset,
    BoostReleased,
    Overheated,
    Recovered,
    WaypointAdvanced(Waypoint),
    SessionEnded(SessionStatus),
}

/// The player's hover car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCar {
    pub pos: Vec2,
    /// Degrees, 0 faces +Z
    pub yaw: f32,
    pub physics: CarPhysics,
    pub health: i32,
}

impl PlayerCar {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            yaw: 0.0,
            physics: CarPhysics::new(tuning.default_thrust, tuning.default_drag),
            health: tuning.start_health,
        }
    }

    /// Unit vector the car is pointing along
    pub fn facing(&self) -> Vector2D {
        forward_from_yaw(self.yaw).into()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub tuning: Tuning,
    pub course: Course,
    pub player: PlayerCar,
    pub ai: AiCar,
    pub race: RaceProgress,
    pub countdown: Countdown,
    pub boost: BoostState,
    /// Shared status line (prompt, countdown, stage results)
    pub status: StatusMessage,
    pub session: SessionStatus,
    /// Demo driver progress; idle unless input asks for it
    pub autopilot: Autopilot,
    /// Speedometer value from the last tick
    pub display_speed: f32,
    /// Ticks simulated so far
    pub frame: u64,
    /// Events from the most recent tick only
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Fresh session on `course`
    pub fn new(tuning: Tuning, course: Course) -> Self {
        let player = PlayerCar::new(course.player_start, &tuning);
        let ai = AiCar::new(course.ai_start);
        Self {
            countdown: Countdown::new(tuning.countdown_seconds),
            boost: BoostState::new(&tuning),
            player,
            ai,
            race: RaceProgress::default(),
            status: StatusMessage::Prompt,
            session: SessionStatus::Running,
            autopilot: Autopilot::default(),
            display_speed: 0.0,
            frame: 0,
            events: Vec::new(),
            tuning,
            course,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session == SessionStatus::Running
    }

    pub fn game_started(&self) -> bool {
        self.countdown.game_started
    }

    /// End the session, once
    pub fn end_session(&mut self, reason: SessionStatus) {
        if self.is_running() {
            log::info!("Session ended: {:?}", reason);
            self.session = reason;
            self.events.push(SimEvent::SessionEnded(reason));
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Tuning::default(), Course::default())
    }
}
