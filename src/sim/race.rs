//! Checkpoint state machine
//!
//! The race is a strict sequence of gates. Each gate only counts while the
//! race is waiting for it; nothing ever moves the race backwards.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::point_in_rect;
use super::course::CheckpointGate;

/// Number of gates on a course
pub const CHECKPOINT_COUNT: usize = 4;

/// Race progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RaceState {
    #[default]
    Start,
    Check1,
    Check2,
    Check3,
    Finish,
}

impl RaceState {
    /// Index of the gate this state is waiting for (None once finished)
    pub fn pending_checkpoint(self) -> Option<usize> {
        match self {
            RaceState::Start => Some(0),
            RaceState::Check1 => Some(1),
            RaceState::Check2 => Some(2),
            RaceState::Check3 => Some(3),
            RaceState::Finish => None,
        }
    }

    /// State after passing the pending gate
    pub fn next(self) -> Option<RaceState> {
        match self {
            RaceState::Start => Some(RaceState::Check1),
            RaceState::Check1 => Some(RaceState::Check2),
            RaceState::Check2 => Some(RaceState::Check3),
            RaceState::Check3 => Some(RaceState::Finish),
            RaceState::Finish => None,
        }
    }

    pub fn is_finished(self) -> bool {
        self == RaceState::Finish
    }
}

/// The shared status line: start prompt, countdown, then stage results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusMessage {
    #[default]
    Prompt,
    /// Seconds left: 3, 2 or 1
    Countdown(u8),
    Go,
    StageComplete(u8),
    RaceFinished,
}

impl StatusMessage {
    /// Message shown on entering `state`
    pub fn for_state(state: RaceState) -> Self {
        match state {
            RaceState::Start => StatusMessage::Prompt,
            RaceState::Check1 => StatusMessage::StageComplete(1),
            RaceState::Check2 => StatusMessage::StageComplete(2),
            RaceState::Check3 => StatusMessage::StageComplete(3),
            RaceState::Finish => StatusMessage::RaceFinished,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Prompt => write!(f, "Hit Space to Start. . ."),
            StatusMessage::Countdown(n) => write!(f, "{n}"),
            StatusMessage::Go => write!(f, "Go!"),
            StatusMessage::StageComplete(n) => write!(f, "Stage {n} Complete"),
            StatusMessage::RaceFinished => write!(f, "Race Finished!"),
        }
    }
}

/// Race state plus the per-gate record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceProgress {
    pub state: RaceState,
    /// Set when a gate is passed in sequence. Informational only: gating
    /// uses `state` alone.
    pub passed: [bool; CHECKPOINT_COUNT],
}

impl RaceProgress {
    /// Test the car against every gate in order and advance on each match.
    /// Returns the states entered this frame.
    pub fn update(&mut self, car_pos: Vec2, gates: &[CheckpointGate; CHECKPOINT_COUNT]) -> Vec<RaceState> {
        let mut entered = Vec::new();
        for (i, gate) in gates.iter().enumerate() {
            if !point_in_rect(car_pos, gate.pos, gate.width, gate.depth) {
                continue;
            }
            if self.state.pending_checkpoint() != Some(i) {
                continue;
            }
            if let Some(next) = self.state.next() {
                log::info!("Checkpoint {} passed, now {:?}", i + 1, next);
                self.passed[i] = true;
                self.state = next;
                entered.push(next);
            }
        }
        entered
    }
}
