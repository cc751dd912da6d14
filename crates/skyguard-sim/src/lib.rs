//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs entity store, runs systems once per `tick(dt_ms)`,
//! and produces `GameStateSnapshot`s for the presentation layer.
//! Completely headless; it never reads a clock of its own.

pub mod engine;
pub mod error;
pub mod store;
pub mod systems;
pub mod trajectory;
pub mod wave;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyguard_core as core;
