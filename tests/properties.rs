//! Property tests for the pure simulation helpers

use glam::Vec2;
use proptest::prelude::*;

use hover_racer::sim::{
    Course, DamageTiers, RaceProgress, RaceState, Vector2D, scalar, sphere_sphere, sum3,
};

fn vector() -> impl Strategy<Value = Vector2D> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, z)| Vector2D::new(x, z))
}

fn race_state() -> impl Strategy<Value = RaceState> {
    prop_oneof![
        Just(RaceState::Start),
        Just(RaceState::Check1),
        Just(RaceState::Check2),
        Just(RaceState::Check3),
        Just(RaceState::Finish),
    ]
}

fn close(a: Vector2D, b: Vector2D) -> bool {
    let tol = 1e-3 * (1.0 + a.length().max(b.length()));
    (a.x - b.x).abs() <= tol && (a.z - b.z).abs() <= tol
}

proptest! {
    #[test]
    fn scalar_scales_both_components(s in -10.0f32..10.0, v in vector()) {
        let out = scalar(s, v);
        prop_assert_eq!(out.x, s * v.x);
        prop_assert_eq!(out.z, s * v.z);
    }

    #[test]
    fn sum3_is_order_independent(a in vector(), b in vector(), c in vector()) {
        let abc = sum3(a, b, c);
        prop_assert!(close(abc, sum3(c, a, b)));
        prop_assert!(close(abc, sum3(b, c, a)));
        prop_assert!(close(abc, sum3(sum3(a, b, Vector2D::ZERO), c, Vector2D::ZERO)));
    }

    #[test]
    fn spheres_touching_do_not_collide(
        x in -100.0f32..100.0,
        z in -100.0f32..100.0,
        ra in 0.1f32..10.0,
        rb in 0.1f32..10.0,
    ) {
        let a = Vec2::new(x, z);
        let gap = ra + rb;
        prop_assert!(!sphere_sphere(a, ra, a + Vec2::new(gap * 1.001, 0.0), rb));
        prop_assert!(sphere_sphere(a, ra, a + Vec2::new(0.0, gap * 0.999), rb));
    }

    #[test]
    fn out_of_order_gate_is_ignored(
        state in race_state(),
        gate in 0usize..4,
        dx in -9.9f32..9.9,
        dz in -1.4f32..1.4,
    ) {
        prop_assume!(state.pending_checkpoint() != Some(gate));
        let course = Course::default();
        let pos = course.checkpoints[gate].pos + Vec2::new(dx, dz);

        let mut progress = RaceProgress { state, ..Default::default() };
        let entered = progress.update(pos, &course.checkpoints);

        prop_assert!(entered.is_empty());
        prop_assert_eq!(progress.state, state);
    }

    #[test]
    fn damage_never_decreases_with_speed(a in 0.0f32..300.0, b in 0.0f32..300.0) {
        let tiers = DamageTiers::default();
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tiers.deduction(slow) <= tiers.deduction(fast));
        prop_assert!([0, 1, 2, 5].contains(&tiers.deduction(fast)));
    }
}
