//! SKYGUARD frame driver.
//!
//! Runs the simulation on a fixed-rate loop thread and exposes a small
//! control surface for whatever front end sits on top. The bundled binary
//! plays a headless session with the autopilot.

pub mod autopilot;
pub mod control;
pub mod cooldown;
pub mod game_loop;
pub mod state;
pub mod summary;
