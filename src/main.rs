//! Hover Racer headless runner
//!
//! Drives a demo session with the autopilot at a fixed 60 Hz, logging race
//! events, then prints the final HUD and a JSON summary.
//!
//! Usage: `hover-racer [tuning.json]`
//! Without an argument, `hover-racer.json` is used if present.

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::path::Path;

    use anyhow::{Context, Result};
    use serde::Serialize;

    use hover_racer::consts::FRAME_DT;
    use hover_racer::sim::{
        Course, FrameInput, RaceState, SessionStatus, SimEvent, SimState, tick,
    };
    use hover_racer::{Hud, Tuning};

    /// Picked up from the working directory when no path is given
    const DEFAULT_TUNING_FILE: &str = "hover-racer.json";

    /// Give up after five simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    #[derive(Debug, Serialize)]
    struct Summary {
        frames: u64,
        seconds: f32,
        race: RaceState,
        session: SessionStatus,
        health: i32,
        collisions: u32,
        health_resets: u32,
        ai_waypoint: usize,
    }

    fn load_tuning(arg: Option<String>) -> Result<Tuning> {
        let Some(path) = arg else {
            if Path::new(DEFAULT_TUNING_FILE).exists() {
                return Ok(Tuning::load_or_default(DEFAULT_TUNING_FILE));
            }
            log::info!("Using default tuning");
            return Ok(Tuning::default());
        };
        let path = Path::new(&path);
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&text)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Hover Racer (headless) starting...");

        let tuning = load_tuning(std::env::args().nth(1))?;
        if !tuning.bounce_reverses() {
            log::warn!(
                "bounce_divisor {} does not reverse momentum; cars may tunnel into obstacles",
                tuning.bounce_divisor
            );
        }

        let mut state = SimState::new(tuning, Course::default());
        let input = FrameInput {
            autopilot: true,
            ..Default::default()
        };

        let mut collisions = 0;
        let mut health_resets = 0;
        while state.is_running() && state.frame < MAX_FRAMES {
            tick(&mut state, &input, FRAME_DT);

            for event in &state.events {
                match event {
                    SimEvent::Collision { kind, damage } => {
                        collisions += 1;
                        log::info!("[{}] Hit {:?} (-{} health)", state.frame, kind, damage);
                    }
                    SimEvent::HealthReset => {
                        health_resets += 1;
                        log::info!("[{}] Health reset", state.frame);
                    }
                    SimEvent::CheckpointPassed(stage) => {
                        log::info!("[{}] {} ({:?})", state.frame, state.status, stage);
                    }
                    other => log::info!("[{}] {:?}", state.frame, other),
                }
            }

            if state.race.state.is_finished() {
                break;
            }
        }

        if state.is_running() && !state.race.state.is_finished() {
            log::warn!("Race not finished after {} frames", state.frame);
        }

        for line in Hud::from_state(&state).lines() {
            println!("({:>3}, {:>2}) {}", line.x, line.y, line);
        }

        let summary = Summary {
            frames: state.frame,
            seconds: state.frame as f32 * FRAME_DT,
            race: state.race.state,
            session: state.session,
            health: state.player.health,
            collisions,
            health_resets,
            ai_waypoint: state.ai.waypoint.index(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    runner::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; the host page drives `tick`
}
