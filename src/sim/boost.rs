//! Boost / overheat resource model
//!
//! Holding boost compounds the thrust multiplier until the boost timer runs
//! dry. The engine then overheats: drag compounds until the overheat timer
//! runs out and everything snaps back to defaults.

use serde::{Deserialize, Serialize};

use super::physics::CarPhysics;
use crate::tuning::Tuning;

/// Transition reported by a boost step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostTransition {
    None,
    /// Boost released early; multiplier restored
    Released,
    /// Boost just hit zero
    Overheated,
    /// Overheat finished; all coefficients restored
    Recovered,
}

/// HUD alert derived from the two timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostAlert {
    OverheatImminent,
    Overheated,
}

/// Both resource timers, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostState {
    pub boost_remaining: f32,
    pub overheat_remaining: f32,
    /// Boost was applied on the previous frame
    #[serde(default)]
    pub engaged: bool,
}

impl BoostState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            boost_remaining: tuning.default_boost,
            overheat_remaining: tuning.default_overheat,
            engaged: false,
        }
    }

    pub fn is_overheated(&self) -> bool {
        self.boost_remaining <= 0.0
    }

    /// Advance one frame, adjusting `car` coefficients in place.
    /// `unlocked` is true once the start countdown has finished.
    pub fn tick(
        &mut self,
        held: bool,
        unlocked: bool,
        car: &mut CarPhysics,
        tuning: &Tuning,
        dt: f32,
    ) -> BoostTransition {
        let mut transition = BoostTransition::None;
        let was_overheated = self.is_overheated();
        let was_engaged = self.engaged;
        self.engaged = held && unlocked;

        if self.engaged {
            self.boost_remaining -= dt;
            if self.boost_remaining > 0.0 {
                car.thrust_multiplier *= tuning.boost_thrust_growth;
            }
        } else if self.boost_remaining > 0.0 {
            if was_engaged {
                transition = BoostTransition::Released;
            }
            self.boost_remaining = tuning.default_boost;
            car.thrust_multiplier = tuning.default_thrust;
        }

        if self.is_overheated() {
            if !was_overheated {
                log::info!("Engine overheated");
                transition = BoostTransition::Overheated;
            }
            self.overheat_remaining -= dt;
            if self.overheat_remaining <= 0.0 {
                self.overheat_remaining = tuning.default_overheat;
                self.boost_remaining = tuning.default_boost;
                car.drag_coeff = tuning.default_drag;
                car.thrust_multiplier = tuning.default_thrust;
                log::info!("Engine recovered");
                transition = BoostTransition::Recovered;
            } else {
                car.drag_coeff *= tuning.overheat_drag_growth;
            }
        }

        transition
    }

    /// Timer shown on the HUD: boost while any is left, else recovery
    pub fn readout(&self) -> (bool, f32) {
        if self.boost_remaining > 0.0 {
            (true, self.boost_remaining)
        } else {
            (false, self.overheat_remaining)
        }
    }

    /// Overheated takes precedence when both windows are open
    pub fn alert(&self, tuning: &Tuning) -> Option<BoostAlert> {
        if self.overheat_remaining > 0.0 && self.overheat_remaining < tuning.default_overheat {
            Some(BoostAlert::Overheated)
        } else if self.boost_remaining > 0.0 && self.boost_remaining < 1.0 {
            Some(BoostAlert::OverheatImminent)
        } else {
            None
        }
    }
}
