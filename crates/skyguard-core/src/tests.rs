#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{EntityId, SimTime, Vec2};

    // ---- Configuration ----

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate().unwrap();
        GameConfig::classic().validate().unwrap();
    }

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.cities.len(), 6);
        assert!(config.cities.iter().all(|c| c.y == 560.0));
        // The middle grid slot is left free for the center emplacement.
        assert!(config.cities.iter().all(|c| (c.x - 400.0).abs() > 40.0));

        assert_eq!(config.emplacements.len(), 3);
        let left = config.emplacement(EmplacementSlot::Left).unwrap();
        let center = config.emplacement(EmplacementSlot::Center).unwrap();
        let right = config.emplacement(EmplacementSlot::Right).unwrap();
        assert_eq!(left.position, Vec2::new(40.0, 540.0));
        assert_eq!(center.position, Vec2::new(400.0, 540.0));
        assert_eq!(right.position, Vec2::new(760.0, 540.0));
        assert!(center.max_ammo > left.max_ammo);
        assert_eq!(left.max_ammo, right.max_ammo);
    }

    #[test]
    fn test_wave_scaling() {
        let wave = WaveConfig::default();
        assert_eq!(wave.quota(1), 15);
        assert_eq!(wave.quota(4), 30);
        assert_eq!(wave.spawn_interval_ms(1), 1850.0);
        assert_eq!(wave.spawn_interval_ms(5), 1250.0);
        // Floored at the minimum interval.
        assert_eq!(wave.spawn_interval_ms(40), 400.0);
    }

    #[test]
    fn test_speed_increases_with_level() {
        let speed = SpeedConfig::default();
        assert!(speed.sample(2, 0.5) > speed.sample(1, 0.5));
        assert!((speed.sample(1, 0.0) - 0.0006).abs() < 1e-7);
    }

    #[test]
    fn test_blast_radius_asymmetry() {
        let blasts = BlastConfig::default();
        assert!(blasts.max_radius(BlastKind::Intercept) > blasts.max_radius(BlastKind::Impact));
        assert!(blasts.max_radius(BlastKind::Chain) < blasts.max_radius(BlastKind::Intercept));
        // 100 / 2.5 growth ticks + 1 / 0.025 fade ticks, plus slack.
        let bound = blasts.max_lifetime_ticks();
        assert!((80..=82).contains(&bound), "unexpected bound {bound}");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "win_score": 300, "wave": { "quota_base": 4 } }"#).unwrap();
        assert_eq!(config.win_score, 300);
        assert_eq!(config.wave.quota_base, 4);
        assert_eq!(config.wave.quota_per_level, 5);
        assert_eq!(config.trajectories.len(), 4);
    }

    #[test]
    fn test_rewards_can_be_disabled_from_json() {
        let config = GameConfig::from_json_str(r#"{ "rewards": { "type": "None" } }"#).unwrap();
        assert_eq!(config.rewards, RewardConfig::None);
    }

    #[test]
    fn test_config_rejects_empty_trajectories() {
        let err = GameConfig::from_json_str(r#"{ "trajectories": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "trajectories", .. }));
    }

    #[test]
    fn test_config_rejects_inverted_amplitude() {
        let mut config = GameConfig::default();
        config.trajectories[1].amplitude_min = 10.0;
        config.trajectories[1].amplitude_max = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "trajectories", .. })
        ));
    }

    #[test]
    fn test_config_rejects_duplicate_slots() {
        let mut config = GameConfig::default();
        config.emplacements[2].slot = EmplacementSlot::Left;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "emplacements", .. })
        ));
    }

    #[test]
    fn test_config_rejects_zero_salvo_and_zero_fade() {
        let mut config = GameConfig::default();
        config.interceptor.salvo_size = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.blasts.fade_per_tick = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_file() {
        let err = GameConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    // ---- Wire shapes ----

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::Launch { x: 10.0, y: 20.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Launch","x":10.0,"y":20.0}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"UseAbility"}"#).unwrap();
        assert_eq!(back, PlayerCommand::UseAbility);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = GameStateSnapshot {
            phase: GamePhase::Playing,
            level: 2,
            events: vec![GameEvent::PhaseChanged {
                from: GamePhase::Menu,
                to: GamePhase::Playing,
                level: 2,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(-5.0);
        assert_eq!(time.tick, 2);
        assert_eq!(time.elapsed_ms, 16.0);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Win.is_terminal());
        assert!(GamePhase::Lose.is_terminal());
        assert!(!GamePhase::Transition.is_terminal());
        assert!(!GamePhase::Menu.is_terminal());
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "#7");
    }
}
