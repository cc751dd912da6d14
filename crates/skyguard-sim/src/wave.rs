//! Level, score and ability bookkeeping.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use skyguard_core::config::{AbilityConfig, WaveConfig};

/// Per-level spawn progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    pub level: u32,
    pub spawned: u32,
    pub quota: u32,
    /// Milliseconds since the last spawn attempt.
    pub since_last_spawn_ms: f64,
    pub interval_ms: f64,
}

impl WaveState {
    pub fn for_level(level: u32, config: &WaveConfig) -> Self {
        Self {
            level,
            spawned: 0,
            quota: config.quota(level),
            since_last_spawn_ms: 0.0,
            interval_ms: config.spawn_interval_ms(level),
        }
    }

    /// The quota, not the live entity count, gates the wave-clear condition.
    pub fn quota_reached(&self) -> bool {
        self.spawned >= self.quota
    }
}

/// Running totals for one session. Every field only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub kills: u32,
    pub currency: u64,
    pub interceptors_fired: u32,
    pub impacts: u32,
}

impl ScoreState {
    pub fn add_score(&mut self, amount: u64) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn add_currency(&mut self, amount: u64) {
        self.currency = self.currency.saturating_add(amount);
    }

    /// Count a kill; returns the new total.
    pub fn record_kill(&mut self) -> u32 {
        self.kills = self.kills.saturating_add(1);
        self.kills
    }
}

/// Cooldown tracking for the special ability, on the session clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityState {
    /// Session time of the last use; `None` until first used.
    pub last_used_ms: Option<f64>,
}

impl AbilityState {
    pub fn remaining_ms(&self, now_ms: f64, config: &AbilityConfig) -> f64 {
        match self.last_used_ms {
            Some(last) => (config.cooldown_ms - (now_ms - last)).max(0.0),
            None => 0.0,
        }
    }

    pub fn is_ready(&self, now_ms: f64, config: &AbilityConfig) -> bool {
        config.enabled && self.remaining_ms(now_ms, config) <= 0.0
    }

    /// Whole seconds left, rounded up, for the HUD.
    pub fn remaining_secs(&self, now_ms: f64, config: &AbilityConfig) -> u32 {
        (self.remaining_ms(now_ms, config) / 1000.0).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_for_level_uses_scaling() {
        let wave = WaveState::for_level(2, &WaveConfig::default());
        assert_eq!(wave.quota, 20);
        assert_eq!(wave.interval_ms, 1700.0);
        assert!(!wave.quota_reached());
    }

    #[test]
    fn ability_cooldown_counts_down() {
        let config = AbilityConfig::default();
        let mut ability = AbilityState::default();
        assert!(ability.is_ready(0.0, &config));

        ability.last_used_ms = Some(1_000.0);
        assert!(!ability.is_ready(1_000.0, &config));
        assert_eq!(ability.remaining_ms(11_000.0, &config), 20_000.0);
        assert_eq!(ability.remaining_secs(11_500.5, &config), 20);
        assert!(ability.is_ready(31_000.0, &config));
    }

    #[test]
    fn disabled_ability_is_never_ready() {
        let config = AbilityConfig {
            enabled: false,
            ..AbilityConfig::default()
        };
        assert!(!AbilityState::default().is_ready(0.0, &config));
    }
}
