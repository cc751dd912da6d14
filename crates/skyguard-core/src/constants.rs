//! Default tuning values. `GameConfig::default()` is built from these.

/// Nominal frame rate of the host scheduler (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal milliseconds per frame.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- Play field ---

pub const GAME_WIDTH: f32 = 800.0;
pub const GAME_HEIGHT: f32 = 600.0;

/// Ground targets sit this far above the bottom edge.
pub const CITY_BASELINE_OFFSET: f32 = 40.0;
/// Emplacements sit this far above the bottom edge.
pub const EMPLACEMENT_BASELINE_OFFSET: f32 = 60.0;
/// Flank emplacements are inset this far from the side edges.
pub const EMPLACEMENT_FLANK_INSET: f32 = 40.0;

/// Ground target slots on a ninths grid (the middle slot is left for the center emplacement).
pub const CITY_GRID_SLOTS: [u32; 6] = [1, 2, 3, 5, 6, 7];
pub const CITY_GRID_DIVISIONS: f32 = 9.0;

pub const FLANK_MAX_AMMO: u32 = 60;
pub const CENTER_MAX_AMMO: u32 = 120;

// --- Scoring ---

pub const WIN_SCORE: u64 = 5000;
pub const SCORE_PER_KILL: u64 = 20;
pub const KILL_MILESTONE_INTERVAL: u32 = 5;

/// A hostile impact destroys anything whose x lies within this distance.
pub const IMPACT_PROXIMITY: f32 = 20.0;

// --- Waves ---

pub const WAVE_QUOTA_BASE: u32 = 10;
pub const WAVE_QUOTA_PER_LEVEL: u32 = 5;
pub const SPAWN_BASE_INTERVAL_MS: f64 = 2000.0;
pub const SPAWN_INTERVAL_DECREMENT_MS: f64 = 150.0;
pub const SPAWN_MIN_INTERVAL_MS: f64 = 400.0;

// --- Hostile speed (progress per tick) ---

pub const HOSTILE_SPEED_MIN: f32 = 0.0004;
pub const HOSTILE_SPEED_BAND: f32 = 0.0006;
pub const HOSTILE_SPEED_PER_LEVEL: f32 = 0.0002;

// --- Interceptors ---

pub const INTERCEPTOR_SPEED: f32 = 0.02;
pub const SALVO_SIZE: u32 = 3;
pub const SALVO_SPREAD: f32 = 20.0;

// --- Blasts ---

pub const IMPACT_BLAST_RADIUS: f32 = 40.0;
pub const INTERCEPT_BLAST_RADIUS: f32 = 100.0;
pub const CHAIN_BLAST_RADIUS: f32 = 35.0;
pub const ABILITY_BLAST_RADIUS: f32 = 60.0;
pub const BLAST_GROWTH_PER_TICK: f32 = 2.5;
pub const BLAST_SHRINK_PER_TICK: f32 = 1.2;
pub const BLAST_FADE_PER_TICK: f32 = 0.025;

// --- Special ability ---

pub const ABILITY_COOLDOWN_MS: f64 = 30_000.0;

// --- Rewards ---

pub const COIN_VALUE: u64 = 100;
pub const COIN_FALL_SPEED: f32 = 2.0;
/// Coins are collected this far above the bottom edge.
pub const COIN_COLLECT_OFFSET: f32 = 30.0;
