#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use starstrike_core::components::Behavior;
    use starstrike_core::config::Tuning;
    use starstrike_core::constants::*;
    use starstrike_core::enums::BehaviorState;

    use crate::fsm::{evaluate, roll_ticks};
    use crate::gunnery::{roll_fire_interval, should_fire, FireContext};
    use crate::steering::steer;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn evade(timer: u32) -> Behavior {
        Behavior {
            state: BehaviorState::Evade,
            timer,
            strafe_direction: DVec3::ZERO,
            evade_offset: DVec3::new(0.5, -0.5, 0.25),
        }
    }

    fn strafe(timer: u32) -> Behavior {
        Behavior {
            state: BehaviorState::Strafe,
            timer,
            strafe_direction: DVec3::X,
            evade_offset: DVec3::ZERO,
        }
    }

    // ---- FSM ----

    #[test]
    fn test_timer_counts_down_without_transition() {
        let tuning = Tuning::default();
        let update = evaluate(&Behavior::pursue(10), 5.0, DVec3::Z, &tuning, &mut rng());
        assert!(!update.state_changed);
        assert_eq!(update.behavior.state, BehaviorState::Pursue);
        assert_eq!(update.behavior.timer, 9);
    }

    #[test]
    fn test_pursue_far_renews_pursuit() {
        let tuning = Tuning::default();
        let update = evaluate(
            &Behavior::pursue(1),
            tuning.engage_range + 1.0,
            DVec3::Z,
            &tuning,
            &mut rng(),
        );
        assert!(!update.state_changed);
        assert_eq!(update.behavior.state, BehaviorState::Pursue);
        assert!((PURSUE_TIMER.0..=PURSUE_TIMER.1).contains(&update.behavior.timer));
    }

    #[test]
    fn test_pursue_close_breaks_off() {
        let tuning = Tuning::default();
        let mut rng = rng();
        for _ in 0..50 {
            let update = evaluate(&Behavior::pursue(1), 10.0, DVec3::Z, &tuning, &mut rng);
            assert!(update.state_changed);
            let b = update.behavior;
            match b.state {
                BehaviorState::Strafe => {
                    assert!((STRAFE_TIMER.0..=STRAFE_TIMER.1).contains(&b.timer));
                    assert!((b.strafe_direction.length() - 1.0).abs() < 1e-9);
                }
                BehaviorState::Evade => {
                    assert!((EVADE_TIMER.0..=EVADE_TIMER.1).contains(&b.timer));
                    assert!(b.evade_offset.abs().max_element() <= 1.0);
                }
                BehaviorState::Pursue => panic!("pursuer within engage range must break off"),
            }
        }
    }

    #[test]
    fn test_break_off_mix_follows_strafe_chance() {
        let tuning = Tuning::default();
        let mut rng = rng();
        let mut strafes = 0;
        let trials = 2000;
        for _ in 0..trials {
            let update = evaluate(&Behavior::pursue(1), 10.0, DVec3::Z, &tuning, &mut rng);
            if update.behavior.state == BehaviorState::Strafe {
                strafes += 1;
            }
        }
        let ratio = strafes as f64 / trials as f64;
        assert!((0.25..0.35).contains(&ratio), "strafe ratio {ratio}");
    }

    #[test]
    fn test_strafe_chance_one_always_strafes() {
        let tuning = Tuning {
            strafe_chance: 1.0,
            ..Default::default()
        };
        let update = evaluate(&Behavior::pursue(1), 10.0, DVec3::Z, &tuning, &mut rng());
        assert_eq!(update.behavior.state, BehaviorState::Strafe);
    }

    #[test]
    fn test_evade_expiry_returns_to_pursue_never_strafe() {
        let tuning = Tuning {
            strafe_chance: 1.0,
            ..Default::default()
        };
        let mut rng = rng();
        let mut behavior = evade(EVADE_TIMER.1);
        for _ in 0..EVADE_TIMER.1 {
            let update = evaluate(&behavior, 5.0, DVec3::Z, &tuning, &mut rng);
            assert_ne!(update.behavior.state, BehaviorState::Strafe);
            behavior = update.behavior;
            if behavior.state != BehaviorState::Evade {
                break;
            }
        }
        assert_eq!(behavior.state, BehaviorState::Pursue);
    }

    #[test]
    fn test_strafe_expiry_returns_to_pursue() {
        let tuning = Tuning::default();
        let update = evaluate(&strafe(1), 5.0, DVec3::Z, &tuning, &mut rng());
        assert!(update.state_changed);
        assert_eq!(update.behavior.state, BehaviorState::Pursue);
        assert!((PURSUE_TIMER.0..=PURSUE_TIMER.1).contains(&update.behavior.timer));
    }

    #[test]
    fn test_zero_timer_evaluates_immediately() {
        let tuning = Tuning::default();
        let update = evaluate(&Behavior::pursue(0), 100.0, DVec3::Z, &tuning, &mut rng());
        assert!(update.behavior.timer >= PURSUE_TIMER.0);
    }

    #[test]
    fn test_roll_ticks_degenerate_range() {
        assert_eq!(roll_ticks(&mut rng(), (5, 5)), 5);
    }

    // ---- Steering ----

    #[test]
    fn test_pursue_far_flies_straight_in() {
        let s = steer(&Behavior::pursue(10), 50.0, DVec3::Z);
        assert_eq!(s.move_direction, DVec3::Z);
        assert!((s.look_direction - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_pursue_close_orbits_and_backs_off() {
        let s = steer(&Behavior::pursue(10), 10.0, DVec3::Z);
        // Tangent of +Z around +Y is -X; inside hold radius it pulls away.
        assert!(s.move_direction.x < 0.0);
        assert!(s.move_direction.z < 0.0);
        assert!((s.move_direction.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pursue_tangent_fallback_when_vertical() {
        let s = steer(&Behavior::pursue(10), 10.0, DVec3::Y);
        assert!(s.move_direction.is_finite());
        assert!((s.move_direction.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_strafe_ignores_player() {
        let s = steer(&strafe(10), 5.0, DVec3::Z);
        assert_eq!(s.move_direction, DVec3::X);
        // Facing still tracks the player partially.
        assert!(s.look_direction.z > 0.0);
    }

    #[test]
    fn test_evade_blends_offset_and_tracking() {
        let b = evade(10);
        let s = steer(&b, 5.0, DVec3::Z);
        let expected = (DVec3::Z * EVADE_TRACK_WEIGHT + b.evade_offset * EVADE_OFFSET_WEIGHT)
            .normalize();
        assert!((s.move_direction - expected).length() < 1e-12);
    }

    #[test]
    fn test_steer_degenerate_is_zero() {
        let s = steer(&strafe(10), 0.0, DVec3::ZERO);
        assert_eq!(s.move_direction, DVec3::X);
        let s = steer(&Behavior::pursue(1), 50.0, DVec3::ZERO);
        assert_eq!(s.move_direction, DVec3::ZERO);
        assert_eq!(s.look_direction, DVec3::ZERO);
    }

    // ---- Gunnery ----

    fn fire_ctx(state: BehaviorState, distance: f64, last: Option<f64>) -> FireContext {
        FireContext {
            state,
            distance,
            now_ms: 10_000.0,
            last_fire_ms: last,
            fire_interval_ms: 1000.0,
        }
    }

    #[test]
    fn test_fires_when_in_range_and_reloaded() {
        let tuning = Tuning::default();
        assert!(should_fire(
            &fire_ctx(BehaviorState::Pursue, 30.0, None),
            &tuning,
            &mut rng()
        ));
        assert!(should_fire(
            &fire_ctx(BehaviorState::Strafe, 30.0, Some(9_100.0)),
            &tuning,
            &mut rng()
        ));
    }

    #[test]
    fn test_holds_fire_out_of_range() {
        let tuning = Tuning::default();
        assert!(!should_fire(
            &fire_ctx(BehaviorState::Pursue, tuning.fire_range, None),
            &tuning,
            &mut rng()
        ));
    }

    #[test]
    fn test_holds_fire_while_reloading() {
        let tuning = Tuning::default();
        // 800 ms is exactly the 0.8 * 1000 threshold; must strictly exceed it.
        assert!(!should_fire(
            &fire_ctx(BehaviorState::Pursue, 30.0, Some(9_200.0)),
            &tuning,
            &mut rng()
        ));
    }

    #[test]
    fn test_evade_override_is_configurable() {
        let never = Tuning {
            evade_fire_chance: 0.0,
            ..Default::default()
        };
        let always = Tuning {
            evade_fire_chance: 1.0,
            ..Default::default()
        };
        let ctx = fire_ctx(BehaviorState::Evade, 30.0, None);
        let mut rng = rng();
        for _ in 0..100 {
            assert!(!should_fire(&ctx, &never, &mut rng));
            assert!(should_fire(&ctx, &always, &mut rng));
        }
    }

    #[test]
    fn test_fire_interval_roll_in_range() {
        let tuning = Tuning::default();
        let mut rng = rng();
        for _ in 0..100 {
            let interval = roll_fire_interval(&mut rng, &tuning);
            assert!((1000.0..=1500.0).contains(&interval));
        }
    }
}
