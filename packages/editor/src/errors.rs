//! Error types for the editor

use thiserror::Error;

/// A block type tag outside the closed set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Persistence error: {0}")]
    Persist(#[from] crate::persistence::PersistError),

    #[error("Invalid intent: {0}")]
    InvalidIntent(#[from] serde_json::Error),

    #[error("No drag in progress")]
    NoActiveDrag,
}
