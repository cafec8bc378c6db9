//! Start countdown

use serde::{Deserialize, Serialize};

use super::race::{RaceState, StatusMessage};

/// What a countdown step produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Not counting yet, or nothing changed
    Idle,
    /// Label to show this frame
    Show(StatusMessage),
    /// Reached zero this frame; the race is on
    Started,
}

/// Three-second start countdown and the one-way `game_started` latch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left; goes negative once finished
    pub remaining: f32,
    pub counting: bool,
    pub game_started: bool,
}

impl Countdown {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            counting: false,
            game_started: false,
        }
    }

    /// Boost only unlocks once the clock has run out
    pub fn finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Begin counting. Returns the first label, or None if already counting.
    pub fn trigger(&mut self) -> Option<StatusMessage> {
        if self.counting {
            return None;
        }
        self.counting = true;
        log::debug!("Countdown started at {:.1}s", self.remaining);
        Some(label_for(self.remaining))
    }

    /// Advance by `dt`. Labels only change while the race is still at `Start`.
    pub fn tick(&mut self, dt: f32, race: RaceState) -> CountdownStep {
        if !self.counting {
            return CountdownStep::Idle;
        }
        self.remaining -= dt;

        if race != RaceState::Start {
            return CountdownStep::Idle;
        }

        match label_for(self.remaining) {
            StatusMessage::Go if !self.game_started => {
                self.game_started = true;
                log::info!("Go!");
                CountdownStep::Started
            }
            label => CountdownStep::Show(label),
        }
    }
}

/// Whole seconds left, rounded up; "Go!" once the clock reaches zero
fn label_for(remaining: f32) -> StatusMessage {
    if remaining <= 0.0 {
        StatusMessage::Go
    } else {
        StatusMessage::Countdown(remaining.ceil().min(f32::from(u8::MAX)) as u8)
    }
}
