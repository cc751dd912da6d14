use thiserror::Error;

use skyguard_core::types::EntityId;

/// Failure inside a tick's update phase.
///
/// The engine catches these at the tick boundary, logs them and keeps going.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("entity {id} reached a non-finite position")]
    NonFinitePosition { entity: hecs::Entity, id: EntityId },
    #[error("entity vanished mid-tick: {0}")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    #[error("component access failed: {0}")]
    Component(#[from] hecs::ComponentError),
}

impl SimError {
    /// The entity that caused the failure, if the error names one.
    pub fn culprit(&self) -> Option<hecs::Entity> {
        match self {
            SimError::NonFinitePosition { entity, .. } => Some(*entity),
            _ => None,
        }
    }
}
