//! # Document Mutations
//!
//! User intents as data, applied as pure transforms.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` takes a document and returns a new one; the input is
//!    never touched, so a failed mutation leaves no partial state
//! 2. **Validated**: structural constraints are checked before applying
//! 3. **Serializable**: intents cross the CLI and browser boundaries as JSON
//!
//! ## Mutation Semantics
//!
//! ### Add
//! - Appends a default block at the tail and mints a fresh id
//!
//! ### Edit
//! - Submitted form values replace the block's attributes; absent fields are
//!   kept. The block's kind and id never change
//!
//! ### Move / Reorder
//! - `Move` clamps its index; `Reorder` requires an exact permutation
//!
//! ### ResetAll
//! - Clears blocks and background but keeps the id counter

use crate::attributes::{apply_form, FormValues};
use crate::document::Document;
use crate::errors::UnknownBlockType;
use crate::registry::BlockKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations (one per user intent)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a default block of the given kind
    #[serde(rename_all = "camelCase")]
    Add { block_type: BlockKind },

    /// Apply submitted property-form values to a block
    #[serde(rename_all = "camelCase")]
    Edit { block_id: String, values: FormValues },

    #[serde(rename_all = "camelCase")]
    Delete { block_id: String },

    /// Relocate a block; out-of-range indices are clamped
    #[serde(rename_all = "camelCase")]
    Move { block_id: String, index: usize },

    /// Replace the block order with a full permutation of the current ids
    Reorder { ordering: Vec<String> },

    SetCanvasBackground { value: String },

    ResetAll,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error(transparent)]
    UnknownType(#[from] UnknownBlockType),

    #[error("Block {block_id} cannot change kind from {from} to {to}")]
    KindChanged {
        block_id: String,
        from: BlockKind,
        to: BlockKind,
    },

    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("Background color cannot be empty")]
    EmptyBackground,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Document after the mutation
    pub document: Document,

    /// Block created or touched by the mutation, if any
    pub block_id: Option<String>,
}

impl Mutation {
    /// Build an add intent from a block type tag
    pub fn add(tag: &str) -> Result<Self, MutationError> {
        Ok(Mutation::Add {
            block_type: tag.parse()?,
        })
    }

    /// Short intent name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "add",
            Mutation::Edit { .. } => "edit",
            Mutation::Delete { .. } => "delete",
            Mutation::Move { .. } => "move",
            Mutation::Reorder { .. } => "reorder",
            Mutation::SetCanvasBackground { .. } => "setCanvasBackground",
            Mutation::ResetAll => "resetAll",
        }
    }

    /// Block the mutation targets, if it targets one
    pub fn target(&self) -> Option<&str> {
        match self {
            Mutation::Edit { block_id, .. }
            | Mutation::Delete { block_id }
            | Mutation::Move { block_id, .. } => Some(block_id),
            _ => None,
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        if let Some(block_id) = self.target() {
            doc.find(block_id)
                .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))?;
        }

        match self {
            Mutation::SetCanvasBackground { value } if value.trim().is_empty() => {
                Err(MutationError::EmptyBackground)
            }
            _ => Ok(()),
        }
    }

    /// Apply to a copy of `doc`
    pub fn apply(&self, doc: &Document) -> Result<MutationResult, MutationError> {
        self.validate(doc)?;

        let mut next = doc.clone();
        let block_id = match self {
            Mutation::Add { block_type } => Some(next.append(*block_type)),

            Mutation::Edit { block_id, values } => {
                let block = next
                    .find(block_id)
                    .ok_or_else(|| MutationError::BlockNotFound(block_id.clone()))?;
                let updated = apply_form(block, values);
                next.replace(updated)?;
                Some(block_id.clone())
            }

            Mutation::Delete { block_id } => {
                next.remove(block_id)?;
                Some(block_id.clone())
            }

            Mutation::Move { block_id, index } => {
                next.move_to(block_id, *index)?;
                Some(block_id.clone())
            }

            Mutation::Reorder { ordering } => {
                next.reorder(ordering)?;
                None
            }

            Mutation::SetCanvasBackground { value } => {
                next.set_background_color(value)?;
                None
            }

            Mutation::ResetAll => {
                next.reset();
                None
            }
        };

        Ok(MutationResult {
            document: next,
            block_id,
        })
    }
}
