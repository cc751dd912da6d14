//! Core types and definitions for the SKYGUARD simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, events, and configuration.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
