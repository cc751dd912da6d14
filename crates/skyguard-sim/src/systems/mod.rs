//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions over `&mut EntityStore` (or `&EntityStore`
//! for read-only work). They do not own state; all state lives in
//! components and in the engine's bookkeeping structs.

pub mod ability;
pub mod blast;
pub mod input;
pub mod kinematics;
pub mod outcome;
pub mod rewards;
pub mod snapshot;
pub mod spawner;
