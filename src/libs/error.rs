//! Typed failures of the lifecycle engine.
//!
//! The command layer converts these into `anyhow` errors; tests match on the
//! variants directly.

use super::messages::Message;
use std::fmt;
use thiserror::Error;

/// The kind of record an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Task,
    SucceededTask,
    Card,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Task => write!(f, "Task"),
            Entity::SucceededTask => write!(f, "History record"),
            Entity::Card => write!(f, "Card"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RecallError {
    /// Input was rejected before touching storage.
    #[error("{0}")]
    Validation(Message),

    /// The targeted id does not exist. Nothing was written.
    #[error("{entity} #{id} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl RecallError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        RecallError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecallError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RecallError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, RecallError>;
