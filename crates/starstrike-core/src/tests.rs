#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::{ActionSet, FrameInput, PlayerCommand};
    use crate::config::Tuning;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::AudioEvent;
    use crate::profiles::explosion_profile;
    use crate::state::GameStateSnapshot;
    use crate::types::{SimTime, Transform};

    #[test]
    fn test_player_command_serde_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::RestartGame).unwrap();
        assert_eq!(json, r#"{"type":"RestartGame"}"#);
        let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartGame"}"#).unwrap();
        assert_eq!(back, PlayerCommand::StartGame);
    }

    #[test]
    fn test_audio_event_serde() {
        let event = AudioEvent::play(SoundCue::StructureHit);
        let json = serde_json::to_string(&event).unwrap();
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
    }

    #[test]
    fn test_default_frame_is_nominal_length() {
        let frame = FrameInput::with_actions(ActionSet {
            fire: true,
            ..Default::default()
        });
        assert!(frame.actions.fire);
        assert!((frame.dt_ms - FRAME_MS).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_ignores_negative_delta() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(-50.0);
        time.advance(f64::NAN);
        assert_eq!(time.tick, 3);
        assert!((time.now_ms - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_transform_faces_plus_z() {
        let t = Transform::default();
        assert!((t.forward() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_looking_along_points_forward() {
        let dir = DVec3::new(1.0, 2.0, -3.0).normalize();
        let t = Transform::looking_along(DVec3::ZERO, dir);
        assert!((t.forward() - dir).length() < 1e-9);

        let backwards = Transform::looking_along(DVec3::ZERO, -DVec3::Z);
        assert!((backwards.forward() + DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_looking_along_zero_is_identity() {
        let t = Transform::looking_along(DVec3::ONE, DVec3::ZERO);
        assert_eq!(t.orientation, glam::DQuat::IDENTITY);
        assert_eq!(t.direction_to(DVec3::ONE), DVec3::ZERO);
    }

    #[test]
    fn test_hit_target_dispatch() {
        assert_eq!(
            Owner::Player.hit_targets(),
            &[HitTarget::Structure, HitTarget::Enemies]
        );
        assert_eq!(Owner::Enemy.hit_targets(), &[HitTarget::Player]);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Start.is_terminal());
        assert!(!GamePhase::Play.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
    }

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = Tuning::default();
        tuning.validate().unwrap();
        assert_eq!(tuning.enemy_cap, 10);
        assert_eq!(tuning.encounter_distances.len(), 5);
    }

    #[test]
    fn test_tuning_from_partial_ron() {
        let tuning = Tuning::from_ron_str("(enemy_cap: 4, evade_fire_chance: 0.0)").unwrap();
        assert_eq!(tuning.enemy_cap, 4);
        assert_eq!(tuning.evade_fire_chance, 0.0);
        assert_eq!(tuning.fire_range, Tuning::default().fire_range);
    }

    #[test]
    fn test_tuning_rejects_bad_probability() {
        let err = Tuning::from_ron_str("(strafe_chance: 1.5)").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "strafe_chance",
                ..
            }
        ));
    }

    #[test]
    fn test_tuning_rejects_inverted_span() {
        let err = Tuning::from_ron_str("(ambient_speed: (0.5, 0.1))").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "ambient_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_tuning_rejects_unsorted_encounters() {
        let tuning = Tuning {
            encounter_distances: vec![300.0, 700.0],
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfRange {
                field: "encounter_distances",
                value,
            }) if value == 700.0
        ));

        let repeated = Tuning::from_ron_str("(encounter_distances: [500.0, 500.0])");
        assert!(repeated.is_err());

        let descending = Tuning::from_ron_str("(encounter_distances: [450.0, 200.0])").unwrap();
        assert_eq!(descending.encounter_distances, vec![450.0, 200.0]);
        assert!(Tuning::from_ron_str("(encounter_distances: [])").is_ok());
    }

    #[test]
    fn test_tuning_rejects_zero_cap() {
        assert!(Tuning::from_ron_str("(enemy_cap: 0)").is_err());
    }

    #[test]
    fn test_tuning_parse_error() {
        let err = Tuning::from_ron_str("(enemy_cap: \"ten\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_explosion_profiles_fade_within_lifetime() {
        for kind in [
            EffectKind::StructureExplosion,
            EffectKind::SecondaryExplosion,
            EffectKind::EnemyExplosion,
            EffectKind::HitFlash,
        ] {
            let profile = explosion_profile(kind);
            assert!(profile.fade_ticks <= profile.lifetime_ticks, "{kind:?}");
            assert!(profile.speed_min <= profile.speed_max, "{kind:?}");
            assert!(profile.light_fade_step > 0.0, "{kind:?}");
        }
    }

    #[test]
    fn test_hardpoints_are_distinct() {
        let points = WINGTIP_HARDPOINTS.all();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert_ne!(points[i], points[j]);
            }
        }
    }
}
