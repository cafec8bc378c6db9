//! Static course layout
//!
//! Obstacles are plain records iterated generically; the default course is
//! the stock four-checkpoint track.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::race::CHECKPOINT_COUNT;
use super::waypoint::WAYPOINT_COUNT;
use crate::consts::*;

/// An axis-aligned box (walls)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxObstacle {
    pub pos: Vec2,
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub depth: f32,
}

/// A cylinder treated as a circle on the ground plane (struts, tanks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereObstacle {
    pub pos: Vec2,
    pub radius: f32,
}

/// A checkpoint gate; passing is a point-in-rectangle test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointGate {
    pub pos: Vec2,
    pub width: f32,
    pub depth: f32,
}

/// Kind of obstacle, for collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Strut,
    Tank,
    AiCar,
}

/// Everything about the track that does not move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// In race order: start line, two stages, finish line
    pub checkpoints: [CheckpointGate; CHECKPOINT_COUNT],
    pub walls: Vec<BoxObstacle>,
    pub struts: Vec<SphereObstacle>,
    pub tanks: Vec<SphereObstacle>,
    /// AI route, visited in order
    pub waypoints: [Vec2; WAYPOINT_COUNT],
    /// Marks the autopilot drives through. Each gate has a mark just past it.
    #[serde(default)]
    pub racing_line: Vec<Vec2>,
    pub player_start: Vec2,
    pub ai_start: Vec2,
}

fn gate(x: f32, z: f32) -> CheckpointGate {
    CheckpointGate {
        pos: Vec2::new(x, z),
        width: CHECKPOINT_WIDTH,
        depth: CHECKPOINT_DEPTH,
    }
}

fn wall(x: f32, z: f32) -> BoxObstacle {
    BoxObstacle {
        pos: Vec2::new(x, z),
        width: WALL_WIDTH,
        depth: WALL_DEPTH,
    }
}

fn circle(x: f32, z: f32, radius: f32) -> SphereObstacle {
    SphereObstacle {
        pos: Vec2::new(x, z),
        radius,
    }
}

impl Default for Course {
    fn default() -> Self {
        Self {
            checkpoints: [gate(0.0, 0.0), gate(0.0, 100.0), gate(30.0, 155.0), gate(60.0, 100.0)],
            walls: vec![
                wall(-10.5, 46.0),
                wall(9.5, 46.0),
                wall(-10.5, 136.0),
                wall(50.0, 120.0),
                wall(65.0, 120.0),
                wall(50.0, 80.0),
                wall(65.0, 80.0),
            ],
            // One either side of each gate
            struts: [
                (-8.0, 0.0),
                (9.0, 0.0),
                (-8.0, 100.0),
                (9.0, 100.0),
                (30.0, 146.0),
                (30.0, 164.0),
                (52.0, 100.0),
                (69.0, 100.0),
            ]
            .into_iter()
            .map(|(x, z)| circle(x, z, STRUT_RADIUS))
            .collect(),
            tanks: [
                (-5.0, 175.0),
                (10.0, 175.0),
                (9.5, 136.0),
                (25.0, 175.0),
                (0.0, 70.0),
                (45.0, 145.0),
            ]
            .into_iter()
            .map(|(x, z)| circle(x, z, TANK_RADIUS))
            .collect(),
            waypoints: [
                Vec2::new(0.0, 30.0),
                Vec2::new(-5.0, 70.0),
                Vec2::new(0.0, 100.0),
                Vec2::new(0.0, 145.0),
                Vec2::new(60.0, 155.0),
                Vec2::new(70.0, 110.0),
                Vec2::new(57.0, 10.0),
            ],
            // x = 58 threads both the wall gap (55..60) and the last gate's struts (56.1..)
            racing_line: vec![
                Vec2::new(0.0, 8.0),
                Vec2::new(-2.0, 45.0),
                Vec2::new(-7.0, 72.0),
                Vec2::new(0.0, 108.0),
                Vec2::new(4.0, 150.0),
                Vec2::new(20.0, 155.0),
                Vec2::new(38.0, 155.0),
                Vec2::new(58.0, 150.0),
                Vec2::new(58.0, 92.0),
            ],
            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            ai_start: Vec2::new(AI_START.0, AI_START.1),
        }
    }
}

impl Course {
    /// Parse a course from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Course with no obstacles, for isolated scenarios
    pub fn empty() -> Self {
        Self {
            walls: Vec::new(),
            struts: Vec::new(),
            tanks: Vec::new(),
            ..Self::default()
        }
    }
}
