//! Frame-synchronous race simulation
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - One `tick` per rendered frame, driven by the host's frame delta
//! - Input arrives as a plain `FrameInput` snapshot
//! - No rendering, windowing or engine types

pub mod autopilot;
pub mod boost;
pub mod collision;
pub mod countdown;
pub mod course;
pub mod damage;
pub mod physics;
pub mod race;
pub mod state;
pub mod tick;
pub mod vector;
pub mod waypoint;

pub use autopilot::Autopilot;
pub use boost::{BoostAlert, BoostState, BoostTransition};
pub use collision::{BoxSide, car_box_collision, point_in_rect, sphere_sphere};
pub use countdown::{Countdown, CountdownStep};
pub use course::{BoxObstacle, CheckpointGate, Course, ObstacleKind, SphereObstacle};
pub use damage::{DamageTiers, damage, soft_reset};
pub use physics::{CarPhysics, Throttle, display_speed, thrust};
pub use race::{CHECKPOINT_COUNT, RaceProgress, RaceState, StatusMessage};
pub use state::{PlayerCar, SessionStatus, SimEvent, SimState};
pub use tick::{FrameInput, tick};
pub use vector::{Vector2D, scalar, sum3};
pub use waypoint::{AiCar, WAYPOINT_COUNT, Waypoint, reached};
