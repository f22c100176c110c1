#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{ground, lift, ArenaBounds, Camera, SimTime};

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.25);
        time.advance(0.25);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_arena_clamp_respects_margin() {
        let bounds = ArenaBounds::new(10.0, 2.0);
        assert_eq!(bounds.limit(), 8.0);
        let clamped = bounds.clamp(Vec2::new(50.0, -50.0));
        assert_eq!(clamped, Vec2::new(8.0, -8.0));
        assert!(bounds.contains(clamped));
        assert!(!bounds.contains(Vec2::new(8.5, 0.0)));
        // Points already inside are untouched
        assert_eq!(bounds.clamp(Vec2::new(1.0, -3.0)), Vec2::new(1.0, -3.0));
    }

    #[test]
    fn test_arena_limit_never_negative() {
        let bounds = ArenaBounds::new(1.0, 5.0);
        assert_eq!(bounds.limit(), 0.0);
        assert_eq!(bounds.clamp(Vec2::new(3.0, 3.0)), Vec2::ZERO);
    }

    #[test]
    fn test_ground_lift_mapping() {
        let p = lift(Vec2::new(3.0, -4.0), 1.5);
        assert_eq!(p, Vec3::new(3.0, 1.5, -4.0));
        assert_eq!(ground(p), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_camera_forward_default_looks_down_z() {
        let cam = Camera::default();
        let f = cam.forward();
        assert!((f - Vec3::Z).length() < 1e-6);
        assert!((cam.ground_forward() - Vec2::Y).length() < 1e-6);
        assert!((cam.ground_right() - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_camera_forward_is_unit_length() {
        let cam = Camera {
            position: Vec3::ZERO,
            yaw: 1.1,
            pitch: -0.4,
        };
        assert!((cam.forward().length() - 1.0).abs() < 1e-5);
        assert!(cam.forward().y < 0.0, "negative pitch looks down");
    }

    #[test]
    fn test_enemy_kind_from_index_clamps() {
        assert_eq!(EnemyKind::from_index(0), EnemyKind::Grunt);
        assert_eq!(EnemyKind::from_index(3), EnemyKind::Stalker);
        assert_eq!(EnemyKind::from_index(99), EnemyKind::Stalker);
    }

    #[test]
    fn test_weapon_kind_index_matches_registry_order() {
        for (i, weapon) in WeaponKind::ALL.iter().enumerate() {
            assert_eq!(weapon.index(), i);
            assert_eq!(WeaponKind::from_index(i), *weapon);
        }
        assert_eq!(WeaponKind::from_index(42), WeaponKind::Shotgun);
    }

    #[test]
    fn test_terminal_modes() {
        assert!(!GameMode::Playing.is_terminal());
        assert!(GameMode::GameOver.is_terminal());
        assert!(GameMode::Victory.is_terminal());
    }

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = PlayerCommand::SelectWeapon {
            weapon: WeaponKind::Shotgun,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SelectWeapon\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            PlayerCommand::SelectWeapon {
                weapon: WeaponKind::Shotgun
            }
        ));
    }

    #[test]
    fn test_audio_event_sound_accessor() {
        let ev = AudioEvent::PlayAt {
            sound: Sound::Explosion,
            position: Vec3::ONE,
        };
        assert_eq!(ev.sound(), Sound::Explosion);
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"type\":\"PlayAt\""));
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = FrameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mode, GameMode::Playing);
        assert!(back.enemies.is_empty());
    }
}
