#[cfg(test)]
mod tests {
    use glam::{DQuat, DVec2, DVec3};

    use crate::config::GameConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::input::{InputSource, InputState};
    use crate::state::GameStateSnapshot;
    use crate::types::{look_rotation, EntityId, Pose, SimTime};

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_outcome_rewards() {
        assert_eq!(CombatOutcome::SpawnPrimary.reward(), Some(RewardKind::Primary));
        assert_eq!(
            CombatOutcome::SpawnSecondary.reward(),
            Some(RewardKind::Secondary)
        );
        assert_eq!(CombatOutcome::NoReward.reward(), None);
    }

    #[test]
    fn test_contact_entity_payload() {
        let id = EntityId(7);
        for contact in [
            Contact::Projectile(id),
            Contact::PlayerBody(id),
            Contact::Reward(id),
            Contact::Other(id),
        ] {
            assert_eq!(contact.entity(), id);
        }
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        for dir in [
            DVec3::X,
            DVec3::NEG_Z,
            DVec3::new(3.0, 0.0, -4.0),
            DVec3::new(1.0, 2.0, 1.0),
        ] {
            let q = look_rotation(dir, WORLD_UP).expect("non-degenerate direction");
            assert_vec_close(q * DVec3::Z, dir.normalize());
            assert!((q.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_look_rotation_keeps_up_on_horizontal_directions() {
        let q = look_rotation(DVec3::new(-2.0, 0.0, 5.0), WORLD_UP).unwrap();
        assert_vec_close(q * DVec3::Y, DVec3::Y);
    }

    #[test]
    fn test_look_rotation_degenerate() {
        assert!(look_rotation(DVec3::ZERO, WORLD_UP).is_none());
    }

    #[test]
    fn test_look_rotation_straight_up_and_down() {
        for dir in [DVec3::Y * 3.0, DVec3::NEG_Y] {
            let q = look_rotation(dir, WORLD_UP).expect("vertical direction");
            assert_vec_close(q * DVec3::Z, dir.normalize());
            assert!((q.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pose_face_keeps_orientation_when_coincident() {
        let orientation = DQuat::from_rotation_y(1.0);
        let mut pose = Pose::new(DVec3::new(1.0, 0.0, 1.0), orientation);
        pose.face(pose.position);
        assert_eq!(pose.orientation, orientation);

        pose.face(DVec3::new(1.0, 0.0, 5.0));
        assert_vec_close(pose.forward(), DVec3::Z);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_input_state_level_triggered() {
        let mut input = InputState::new()
            .with(InputAction::MoveForward)
            .with_cursor(DVec2::new(10.0, 20.0));
        assert!(input.is_active(InputAction::MoveForward));
        assert!(!input.is_active(InputAction::Fire));
        assert_eq!(input.cursor_screen_position(), DVec2::new(10.0, 20.0));

        input.set(InputAction::MoveForward, false);
        input.set(InputAction::Fire, true);
        assert!(!input.is_active(InputAction::MoveForward));
        assert!(input.is_active(InputAction::Fire));
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.spawner.burst_size, SPAWN_BURST_SIZE);
        assert_eq!(config.spawn_points.len(), 4);
        assert_eq!(config.combat.primary_threshold, 0.3);
        assert_eq!(config.combat.secondary_threshold, 0.6);
    }

    #[test]
    fn test_default_spawn_points_face_origin() {
        for point in GameConfig::default().spawn_points {
            let to_origin = (-point.position).normalize();
            assert_vec_close(point.pose().forward(), to_origin);
        }
    }

    #[test]
    fn test_partial_toml_overrides_only_given_keys() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 7

            [spawner]
            burst_size = 5

            [player]
            speed = 4.5

            [[spawn_points]]
            position = [12.0, 0.0, -4.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.spawner.burst_size, 5);
        assert_eq!(config.spawner.cooldown_period, SPAWN_COOLDOWN_PERIOD);
        assert_eq!(config.player.speed, 4.5);
        assert_eq!(config.player.fire_cooldown_period, PLAYER_FIRE_COOLDOWN);
        assert_eq!(config.spawn_points.len(), 1);
        assert_eq!(config.spawn_points[0].position, DVec3::new(12.0, 0.0, -4.0));
        assert_eq!(config.spawn_points[0].yaw_degrees, 0.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_zero_burst_size_rejected() {
        let err = GameConfig::from_toml_str("[spawner]\nburst_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spawner.burst_size",
                ..
            }
        ));
    }

    #[test]
    fn test_threshold_order_rejected() {
        let err = GameConfig::from_toml_str(
            "[combat]\nprimary_threshold = 0.7\nsecondary_threshold = 0.5\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "combat.secondary_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_period_rejected() {
        let mut config = GameConfig::default();
        config.spawner.buffer_period = -1.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.aim_depth_factor = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("seed = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/undertaker.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    // ---- Serde ----

    #[test]
    fn test_event_serde_tagged() {
        let event = GameEvent::AgentShot {
            agent: EntityId(3),
            projectile: EntityId(9),
            outcome: CombatOutcome::SpawnSecondary,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"AgentShot\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, SessionPhase::Active);
        assert!(back.player.is_none());
    }
}
