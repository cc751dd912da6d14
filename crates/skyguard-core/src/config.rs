//! Tunable game configuration.
//!
//! Every balance number lives here so that different variants of the game
//! can be expressed without touching simulation logic. Partial JSON
//! documents are accepted: missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BlastKind, EmplacementSlot, TrajectoryKind};
use crate::error::ConfigError;
use crate::types::Vec2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub win_score: u64,
    pub score_per_kill: u64,
    /// Emit a milestone event every N kills. 0 disables.
    pub kill_milestone_interval: u32,
    pub impact_proximity: f32,
    /// Also lose once every ground target is gone.
    pub lose_when_cities_destroyed: bool,
    pub cities: Vec<Vec2>,
    pub emplacements: Vec<EmplacementConfig>,
    pub wave: WaveConfig,
    pub hostile_speed: SpeedConfig,
    pub trajectories: Vec<TrajectoryProfile>,
    pub interceptor: InterceptorConfig,
    pub blasts: BlastConfig,
    pub ability: AbilityConfig,
    pub rewards: RewardConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmplacementConfig {
    pub slot: EmplacementSlot,
    pub position: Vec2,
    pub max_ammo: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub quota_base: u32,
    pub quota_per_level: u32,
    pub base_interval_ms: f64,
    pub interval_decrement_ms: f64,
    pub min_interval_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub min: f32,
    /// Width of the uniform random band above `min`.
    pub band: f32,
    pub per_level: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryProfile {
    pub kind: TrajectoryKind,
    pub amplitude_min: f32,
    pub amplitude_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorConfig {
    pub speed: f32,
    /// Upper bound on shots consumed by one launch command.
    pub salvo_size: u32,
    /// Lateral spacing between aim points within a salvo.
    pub salvo_spread: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastConfig {
    pub impact_radius: f32,
    pub intercept_radius: f32,
    pub chain_radius: f32,
    pub ability_radius: f32,
    pub growth_per_tick: f32,
    pub shrink_per_tick: f32,
    pub fade_per_tick: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityConfig {
    pub enabled: bool,
    pub cooldown_ms: f64,
}

/// What, if anything, a kill drops besides score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RewardConfig {
    None,
    Coins {
        value: u64,
        fall_speed: f32,
        collect_offset: f32,
    },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            win_score: WIN_SCORE,
            score_per_kill: SCORE_PER_KILL,
            kill_milestone_interval: KILL_MILESTONE_INTERVAL,
            impact_proximity: IMPACT_PROXIMITY,
            lose_when_cities_destroyed: false,
            cities: default_cities(GAME_WIDTH, GAME_HEIGHT),
            emplacements: default_emplacements(GAME_WIDTH, GAME_HEIGHT, FLANK_MAX_AMMO, CENTER_MAX_AMMO),
            wave: WaveConfig::default(),
            hostile_speed: SpeedConfig::default(),
            trajectories: vec![
                TrajectoryProfile::fixed(TrajectoryKind::Straight),
                TrajectoryProfile {
                    kind: TrajectoryKind::Arched,
                    amplitude_min: -100.0,
                    amplitude_max: 100.0,
                },
                TrajectoryProfile {
                    kind: TrajectoryKind::Oscillating,
                    amplitude_min: 30.0,
                    amplitude_max: 80.0,
                },
                TrajectoryProfile {
                    kind: TrajectoryKind::Zigzag,
                    amplitude_min: 20.0,
                    amplitude_max: 50.0,
                },
            ],
            interceptor: InterceptorConfig::default(),
            blasts: BlastConfig::default(),
            ability: AbilityConfig::default(),
            rewards: RewardConfig::default(),
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            quota_base: WAVE_QUOTA_BASE,
            quota_per_level: WAVE_QUOTA_PER_LEVEL,
            base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            interval_decrement_ms: SPAWN_INTERVAL_DECREMENT_MS,
            min_interval_ms: SPAWN_MIN_INTERVAL_MS,
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min: HOSTILE_SPEED_MIN,
            band: HOSTILE_SPEED_BAND,
            per_level: HOSTILE_SPEED_PER_LEVEL,
        }
    }
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            speed: INTERCEPTOR_SPEED,
            salvo_size: SALVO_SIZE,
            salvo_spread: SALVO_SPREAD,
        }
    }
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            impact_radius: IMPACT_BLAST_RADIUS,
            intercept_radius: INTERCEPT_BLAST_RADIUS,
            chain_radius: CHAIN_BLAST_RADIUS,
            ability_radius: ABILITY_BLAST_RADIUS,
            growth_per_tick: BLAST_GROWTH_PER_TICK,
            shrink_per_tick: BLAST_SHRINK_PER_TICK,
            fade_per_tick: BLAST_FADE_PER_TICK,
        }
    }
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown_ms: ABILITY_COOLDOWN_MS,
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig::Coins {
            value: COIN_VALUE,
            fall_speed: COIN_FALL_SPEED,
            collect_offset: COIN_COLLECT_OFFSET,
        }
    }
}

impl TrajectoryProfile {
    /// A profile with no lateral deviation.
    pub fn fixed(kind: TrajectoryKind) -> Self {
        Self {
            kind,
            amplitude_min: 0.0,
            amplitude_max: 0.0,
        }
    }
}

impl WaveConfig {
    /// Hostiles emitted during `level`.
    pub fn quota(&self, level: u32) -> u32 {
        self.quota_base
            .saturating_add(level.saturating_mul(self.quota_per_level))
    }

    /// Milliseconds between spawns during `level`, floored at `min_interval_ms`.
    pub fn spawn_interval_ms(&self, level: u32) -> f64 {
        (self.base_interval_ms - level as f64 * self.interval_decrement_ms).max(self.min_interval_ms)
    }
}

impl SpeedConfig {
    /// Speed for a hostile at `level`, given a uniform sample in [0, 1).
    pub fn sample(&self, level: u32, unit: f32) -> f32 {
        self.min + unit * self.band + level as f32 * self.per_level
    }
}

impl BlastConfig {
    pub fn max_radius(&self, kind: BlastKind) -> f32 {
        match kind {
            BlastKind::Impact => self.impact_radius,
            BlastKind::Intercept => self.intercept_radius,
            BlastKind::Chain => self.chain_radius,
            BlastKind::Ability => self.ability_radius,
        }
    }

    /// Upper bound on the number of ticks any blast can stay alive.
    pub fn max_lifetime_ticks(&self) -> u32 {
        let largest = self
            .impact_radius
            .max(self.intercept_radius)
            .max(self.chain_radius)
            .max(self.ability_radius);
        let grow = (largest / self.growth_per_tick).ceil() as u32;
        let fade = (1.0 / self.fade_per_tick).ceil() as u32;
        grow + fade + 1
    }
}

impl GameConfig {
    /// Leaner balance: no collectibles, tighter ammo, smaller intercept
    /// blasts and only straight or arched descents.
    pub fn classic() -> Self {
        Self {
            win_score: 1000,
            score_per_kill: 25,
            kill_milestone_interval: 0,
            emplacements: default_emplacements(GAME_WIDTH, GAME_HEIGHT, 10, 20),
            trajectories: vec![
                TrajectoryProfile::fixed(TrajectoryKind::Straight),
                TrajectoryProfile {
                    kind: TrajectoryKind::Arched,
                    amplitude_min: -100.0,
                    amplitude_max: 100.0,
                },
            ],
            blasts: BlastConfig {
                intercept_radius: 50.0,
                ..BlastConfig::default()
            },
            rewards: RewardConfig::None,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn emplacement(&self, slot: EmplacementSlot) -> Option<&EmplacementConfig> {
        self.emplacements.iter().find(|e| e.slot == slot)
    }

    /// Check every value the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("impact_proximity", self.impact_proximity)?;

        for city in &self.cities {
            finite_point("cities", *city)?;
        }

        if self.emplacements.is_empty() {
            return Err(ConfigError::invalid("emplacements", "at least one emplacement is required"));
        }
        for (i, e) in self.emplacements.iter().enumerate() {
            finite_point("emplacements", e.position)?;
            if self.emplacements[..i].iter().any(|other| other.slot == e.slot) {
                return Err(ConfigError::invalid(
                    "emplacements",
                    format!("slot {:?} appears more than once", e.slot),
                ));
            }
        }

        let wave = &self.wave;
        positive("wave.min_interval_ms", wave.min_interval_ms as f32)?;
        non_negative("wave.base_interval_ms", wave.base_interval_ms as f32)?;
        non_negative("wave.interval_decrement_ms", wave.interval_decrement_ms as f32)?;

        non_negative("hostile_speed.min", self.hostile_speed.min)?;
        non_negative("hostile_speed.band", self.hostile_speed.band)?;
        non_negative("hostile_speed.per_level", self.hostile_speed.per_level)?;
        if self.hostile_speed.min + self.hostile_speed.band <= 0.0 && self.hostile_speed.per_level <= 0.0 {
            return Err(ConfigError::invalid("hostile_speed", "hostiles would never move"));
        }

        if self.trajectories.is_empty() {
            return Err(ConfigError::invalid("trajectories", "at least one trajectory kind is required"));
        }
        for profile in &self.trajectories {
            if !profile.amplitude_min.is_finite() || !profile.amplitude_max.is_finite() {
                return Err(ConfigError::invalid("trajectories", "amplitude must be finite"));
            }
            if profile.amplitude_min > profile.amplitude_max {
                return Err(ConfigError::invalid(
                    "trajectories",
                    format!("{:?} amplitude range is inverted", profile.kind),
                ));
            }
        }

        positive("interceptor.speed", self.interceptor.speed)?;
        non_negative("interceptor.salvo_spread", self.interceptor.salvo_spread)?;
        if self.interceptor.salvo_size == 0 {
            return Err(ConfigError::invalid("interceptor.salvo_size", "must be at least 1"));
        }

        let blasts = &self.blasts;
        positive("blasts.impact_radius", blasts.impact_radius)?;
        positive("blasts.intercept_radius", blasts.intercept_radius)?;
        positive("blasts.chain_radius", blasts.chain_radius)?;
        positive("blasts.ability_radius", blasts.ability_radius)?;
        positive("blasts.growth_per_tick", blasts.growth_per_tick)?;
        non_negative("blasts.shrink_per_tick", blasts.shrink_per_tick)?;
        positive("blasts.fade_per_tick", blasts.fade_per_tick)?;

        non_negative("ability.cooldown_ms", self.ability.cooldown_ms as f32)?;

        if let RewardConfig::Coins {
            fall_speed,
            collect_offset,
            ..
        } = self.rewards
        {
            positive("rewards.fall_speed", fall_speed)?;
            non_negative("rewards.collect_offset", collect_offset)?;
        }

        Ok(())
    }
}

/// Six ground targets on a ninths grid, clear of the center emplacement.
pub fn default_cities(width: f32, height: f32) -> Vec<Vec2> {
    let spacing = width / CITY_GRID_DIVISIONS;
    CITY_GRID_SLOTS
        .iter()
        .map(|&slot| Vec2::new(slot as f32 * spacing, height - CITY_BASELINE_OFFSET))
        .collect()
}

/// Left, center and right emplacements; the center one holds `center_ammo`.
pub fn default_emplacements(width: f32, height: f32, flank_ammo: u32, center_ammo: u32) -> Vec<EmplacementConfig> {
    let y = height - EMPLACEMENT_BASELINE_OFFSET;
    vec![
        EmplacementConfig {
            slot: EmplacementSlot::Left,
            position: Vec2::new(EMPLACEMENT_FLANK_INSET, y),
            max_ammo: flank_ammo,
        },
        EmplacementConfig {
            slot: EmplacementSlot::Center,
            position: Vec2::new(width / 2.0, y),
            max_ammo: center_ammo,
        },
        EmplacementConfig {
            slot: EmplacementSlot::Right,
            position: Vec2::new(width - EMPLACEMENT_FLANK_INSET, y),
            max_ammo: flank_ammo,
        },
    ]
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be zero or positive, got {value}")))
    }
}

fn finite_point(field: &'static str, point: Vec2) -> Result<(), ConfigError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "coordinates must be finite"))
    }
}
