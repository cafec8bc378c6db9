//! Scripted sessions through the public API

use glam::Vec2;

use hover_racer::consts::FRAME_DT;
use hover_racer::sim::{
    BoostAlert, Course, FrameInput, RaceState, SessionStatus, SimEvent, SimState, Waypoint, tick,
};
use hover_racer::{Hud, Tuning};

fn press(start: bool) -> FrameInput {
    FrameInput {
        start,
        ..Default::default()
    }
}

/// Run frames until the race is unlocked
fn start_race(state: &mut SimState) {
    tick(state, &press(true), FRAME_DT);
    for _ in 0..(4.0 / FRAME_DT) as usize {
        if state.game_started() {
            return;
        }
        tick(state, &FrameInput::default(), FRAME_DT);
    }
    panic!("countdown never finished");
}

#[test]
fn countdown_counts_down_at_sixty_hz() {
    let mut state = SimState::new(Tuning::default(), Course::empty());
    tick(&mut state, &press(true), FRAME_DT);

    let mut labels = vec![state.status.to_string()];
    let mut started_at = None;
    for _ in 0..240 {
        tick(&mut state, &FrameInput::default(), FRAME_DT);
        let label = state.status.to_string();
        if labels.last() != Some(&label) {
            labels.push(label);
        }
        if state.events.contains(&SimEvent::RaceStarted) {
            assert!(started_at.is_none(), "race started twice");
            started_at = Some(state.frame);
        }
    }

    assert_eq!(labels, vec!["3", "2", "1", "Go!"]);
    let frame = started_at.expect("race started");
    // Roughly three seconds after the start press
    assert!((178..=183).contains(&frame), "started at frame {frame}");
}

/// Drop the car at `pos` for one frame and read the status line
fn visit(state: &mut SimState, pos: Vec2) -> String {
    state.player.pos = pos;
    tick(state, &FrameInput::default(), FRAME_DT);
    state.status.to_string()
}

#[test]
fn checkpoints_must_be_taken_in_order() {
    let mut state = SimState::new(Tuning::default(), Course::empty());
    let gates: Vec<Vec2> = state.course.checkpoints.iter().map(|g| g.pos).collect();

    assert_eq!(visit(&mut state, gates[0]), "Stage 1 Complete");
    // Skipping ahead does nothing
    assert_eq!(visit(&mut state, gates[2]), "Stage 1 Complete");
    assert_eq!(state.race.state, RaceState::Check1);
    // Re-entering a passed gate does nothing
    assert_eq!(visit(&mut state, gates[0]), "Stage 1 Complete");

    assert_eq!(visit(&mut state, gates[1]), "Stage 2 Complete");
    assert_eq!(visit(&mut state, gates[2]), "Stage 3 Complete");
    assert_eq!(visit(&mut state, gates[3]), "Race Finished!");
    assert!(state.race.state.is_finished());
    assert_eq!(state.race.passed, [true; 4]);
}

#[test]
fn held_boost_overheats_then_recovers() {
    let mut state = SimState::new(Tuning::default(), Course::empty());
    start_race(&mut state);

    let boost = FrameInput {
        boost: true,
        ..Default::default()
    };

    let mut overheated_at = None;
    let mut recovered_at = None;
    for _ in 0..(12.0 / FRAME_DT) as usize {
        tick(&mut state, &boost, FRAME_DT);
        if state.events.contains(&SimEvent::Overheated) {
            overheated_at = Some(state.frame);
            assert_eq!(state.boost.alert(&state.tuning), Some(BoostAlert::Overheated));
            assert!(Hud::from_state(&state).boost.text.starts_with("Recovery time:"));
        }
        if state.events.contains(&SimEvent::Recovered) {
            recovered_at = Some(state.frame);
            break;
        }
    }

    let overheated_at = overheated_at.expect("engine overheated");
    let recovered_at = recovered_at.expect("engine recovered");
    assert!(recovered_at > overheated_at);
    assert_eq!(state.boost.boost_remaining, state.tuning.default_boost);
    assert_eq!(state.player.physics.drag_coeff, state.tuning.default_drag);
    assert_eq!(state.player.physics.thrust_multiplier, state.tuning.default_thrust);
}

#[test]
fn ai_car_drives_its_route() {
    let mut state = SimState::new(Tuning::default(), Course::empty());
    start_race(&mut state);

    let mut advanced = Vec::new();
    for _ in 0..20_000 {
        tick(&mut state, &FrameInput::default(), FRAME_DT);
        for event in &state.events {
            if let SimEvent::WaypointAdvanced(wp) = event {
                advanced.push(*wp);
            }
        }
        if state.ai.waypoint == Waypoint::Wp7 {
            break;
        }
    }

    assert_eq!(
        advanced,
        vec![
            Waypoint::Wp2,
            Waypoint::Wp3,
            Waypoint::Wp4,
            Waypoint::Wp5,
            Waypoint::Wp6,
            Waypoint::Wp7,
        ]
    );
    assert!(state.is_running());
}

#[test]
fn autopilot_finishes_the_stock_course_cleanly() {
    let mut state = SimState::default();
    let input = FrameInput {
        autopilot: true,
        ..Default::default()
    };

    let mut collisions = Vec::new();
    for _ in 0..(180.0 / FRAME_DT) as usize {
        tick(&mut state, &input, FRAME_DT);
        for event in &state.events {
            if let SimEvent::Collision { kind, .. } = event {
                collisions.push((state.frame, *kind, state.player.pos));
            }
        }
        if state.race.state.is_finished() {
            break;
        }
    }

    assert_eq!(state.race.state, RaceState::Finish, "stuck at {:?}", state.player.pos);
    assert!(collisions.len() <= 3, "collisions: {collisions:?}");
    assert!(state.is_running());
}

#[test]
fn partial_tuning_file_keeps_defaults() {
    let tuning = Tuning::from_json(r#"{ "start_health": 50, "ai_speed": 10.0 }"#).unwrap();
    assert_eq!(tuning.steering_rate, Tuning::default().steering_rate);

    let state = SimState::new(tuning, Course::default());
    assert_eq!(state.player.health, 50);
    assert_eq!(Hud::from_state(&state).health.text, "Car Health: 50");
}

#[test]
fn quit_stops_the_session() {
    let mut state = SimState::default();
    tick(
        &mut state,
        &FrameInput {
            quit: true,
            ..Default::default()
        },
        FRAME_DT,
    );
    assert_eq!(state.session, SessionStatus::Quit);
    assert!(state.events.contains(&SimEvent::SessionEnded(SessionStatus::Quit)));

    let frame = state.frame;
    tick(&mut state, &press(true), FRAME_DT);
    assert_eq!(state.frame, frame);
    assert!(!state.countdown.counting);
}
