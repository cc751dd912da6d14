//! Trajectory model: pure functions from (start, target, progress) to a point.
//!
//! The baseline is linear interpolation. Non-straight kinds add a lateral
//! (x) deviation scaled by the per-hostile amplitude. Identical inputs
//! always give identical outputs.

use std::f32::consts::PI;

use glam::Vec2;

use skyguard_core::enums::TrajectoryKind;

/// Whole sine periods an oscillating hostile completes over its flight.
const OSCILLATION_PERIODS: f32 = 3.0;

/// Progress covered by one full zigzag up-down cycle.
const ZIGZAG_PERIOD: f32 = 0.2;

/// Point at `progress` along a flight from `start` to `target`.
pub fn position(start: Vec2, target: Vec2, progress: f32, kind: TrajectoryKind, amplitude: f32) -> Vec2 {
    let base = start.lerp(target, progress);
    Vec2::new(base.x + lateral_offset(kind, progress, amplitude), base.y)
}

/// Lateral deviation from the straight line at `progress`.
pub fn lateral_offset(kind: TrajectoryKind, progress: f32, amplitude: f32) -> f32 {
    match kind {
        TrajectoryKind::Straight => 0.0,
        TrajectoryKind::Arched => (progress * PI).sin() * amplitude,
        TrajectoryKind::Oscillating => (progress * PI * 2.0 * OSCILLATION_PERIODS).sin() * amplitude,
        TrajectoryKind::Zigzag => triangle_wave(progress / ZIGZAG_PERIOD) * amplitude,
    }
}

/// Unit triangle wave in [-1, 1] with period 1; starts at +1, hits -1 at 0.5.
fn triangle_wave(phase: f32) -> f32 {
    (phase.rem_euclid(1.0) * 2.0 - 1.0).abs() * 2.0 - 1.0
}
