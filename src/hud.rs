//! HUD text overlays
//!
//! The host draws these strings each frame; the layout is fixed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{BoostAlert, SimState};

/// Screen positions, in pixels from the top-left
pub mod layout {
    pub const STATUS: (i32, i32) = (0, 0);
    pub const SPEED: (i32, i32) = (0, 20);
    pub const HEALTH: (i32, i32) = (250, 0);
    pub const ALERT: (i32, i32) = (250, 20);
    pub const BOOST: (i32, i32) = (500, 0);
}

/// A line of text at a fixed position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

impl HudLine {
    fn at(pos: (i32, i32), text: String) -> Self {
        Self {
            text,
            x: pos.0,
            y: pos.1,
        }
    }
}

impl fmt::Display for HudLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for BoostAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostAlert::OverheatImminent => f.write_str("***ALERT!  OVERHEAT IMMINENT!***"),
            BoostAlert::Overheated => f.write_str("***ENGINE OVERHEATED!!***"),
        }
    }
}

/// Everything drawn over the scene for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub status: HudLine,
    pub speed: HudLine,
    pub boost: HudLine,
    pub alert: Option<HudLine>,
    pub health: HudLine,
}

impl Hud {
    /// Build the overlays from the current state
    pub fn from_state(state: &SimState) -> Self {
        let (boosting, seconds) = state.boost.readout();
        let boost = if boosting {
            format!("Boost time: {seconds:.0}")
        } else {
            format!("Recovery time: {seconds:.0}")
        };

        Self {
            status: HudLine::at(layout::STATUS, state.status.to_string()),
            speed: HudLine::at(layout::SPEED, format!("Speed: {:.0}", state.display_speed)),
            boost: HudLine::at(layout::BOOST, boost),
            alert: state
                .boost
                .alert(&state.tuning)
                .map(|alert| HudLine::at(layout::ALERT, alert.to_string())),
            health: HudLine::at(layout::HEALTH, format!("Car Health: {}", state.player.health)),
        }
    }

    /// Lines in draw order
    pub fn lines(&self) -> impl Iterator<Item = &HudLine> {
        [&self.speed, &self.status, &self.boost]
            .into_iter()
            .chain(self.alert.as_ref())
            .chain(std::iter::once(&self.health))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_hud() {
        let state = SimState::default();
        let hud = Hud::from_state(&state);
        assert_eq!(hud.status.text, "Hit Space to Start. . .");
        assert_eq!(hud.speed.text, "Speed: 0");
        assert_eq!(hud.boost.text, "Boost time: 5");
        assert_eq!(hud.health.text, "Car Health: 100");
        assert!(hud.alert.is_none());
        assert_eq!((hud.boost.x, hud.boost.y), layout::BOOST);
        assert_eq!(hud.lines().count(), 4);
    }

    #[test]
    fn test_recovery_readout_and_alert() {
        let mut state = SimState::default();
        state.boost.boost_remaining = -0.1;
        state.boost.overheat_remaining = 3.2;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.boost.text, "Recovery time: 3");
        let alert = hud.alert.unwrap();
        assert_eq!(alert.text, "***ENGINE OVERHEATED!!***");
        assert_eq!((alert.x, alert.y), layout::ALERT);
    }

    #[test]
    fn test_imminent_alert() {
        let mut state = SimState::default();
        state.boost.boost_remaining = 0.4;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.alert.as_ref().unwrap().text, "***ALERT!  OVERHEAT IMMINENT!***");
        assert_eq!(hud.lines().count(), 5);
    }

    #[test]
    fn test_speed_rounds_to_whole() {
        let mut state = SimState::default();
        state.display_speed = 41.7;
        assert_eq!(Hud::from_state(&state).speed.text, "Speed: 42");
    }
}
