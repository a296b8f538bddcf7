//! # Reorder Engine
//!
//! Drag-to-reorder split into two phases:
//!
//! - **Preview**: `preview_order` computes a transient ordering from the
//!   pointer position. It never touches the document.
//! - **Commit**: `commit` turns a finished ordering into a new document.
//!
//! Block geometry comes from whoever renders the surface; the engine only
//! sees vertical bounds.

use crate::document::Document;
use crate::mutations::{Mutation, MutationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertical extent of a rendered block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockBounds {
    pub block_id: String,
    pub top: f64,
    pub height: f64,
}

impl BlockBounds {
    pub fn new(block_id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            block_id: block_id.into(),
            top,
            height,
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Block the dragged one should be inserted before.
///
/// Picks, among the other blocks, the one whose midpoint lies below the
/// pointer and is nearest to it. `None` means append at the tail, and is
/// also returned for a non-finite pointer.
pub fn drop_target<'a>(pointer_y: f64, dragged_id: &str, bounds: &'a [BlockBounds]) -> Option<&'a str> {
    if !pointer_y.is_finite() {
        return None;
    }

    let mut closest: Option<(&'a str, f64)> = None;

    for candidate in bounds.iter().filter(|b| b.block_id != dragged_id) {
        let offset = pointer_y - candidate.midpoint();
        if !offset.is_finite() || offset >= 0.0 {
            continue;
        }
        if closest.map_or(true, |(_, best)| offset > best) {
            closest = Some((candidate.block_id.as_str(), offset));
        }
    }

    closest.map(|(id, _)| id)
}

/// Ordering that would result from dropping `dragged_id` at `pointer_y`
pub fn preview_order(
    order: &[String],
    dragged_id: &str,
    bounds: &[BlockBounds],
    pointer_y: f64,
) -> Vec<String> {
    if !pointer_y.is_finite() || !order.iter().any(|id| id == dragged_id) {
        return order.to_vec();
    }

    let mut next: Vec<String> = order.iter().filter(|id| *id != dragged_id).cloned().collect();
    let index = drop_target(pointer_y, dragged_id, bounds)
        .and_then(|target| next.iter().position(|id| id == target))
        .unwrap_or(next.len());
    next.insert(index, dragged_id.to_string());
    next
}

/// Durable document with blocks in `ordering`
pub fn commit(document: &Document, ordering: &[String]) -> Result<Document, MutationError> {
    let mutation = Mutation::Reorder {
        ordering: ordering.to_vec(),
    };
    Ok(mutation.apply(document)?.document)
}

/// Working order for one drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    dragged: String,
    original: Vec<String>,
    working: Vec<String>,
}

impl DragSession {
    /// Start dragging `block_id`
    pub fn new(document: &Document, block_id: &str) -> Result<Self, MutationError> {
        document
            .find(block_id)
            .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))?;

        debug!(block_id, "Drag started");
        let original = document.ids();
        Ok(Self {
            dragged: block_id.to_string(),
            working: original.clone(),
            original,
        })
    }

    pub fn dragged(&self) -> &str {
        &self.dragged
    }

    /// Recompute the preview for a new pointer position
    pub fn update(&mut self, pointer_y: f64, bounds: &[BlockBounds]) -> &[String] {
        self.working = preview_order(&self.working, &self.dragged, bounds, pointer_y);
        &self.working
    }

    pub fn working_order(&self) -> &[String] {
        &self.working
    }

    pub fn is_changed(&self) -> bool {
        self.working != self.original
    }

    /// Reorder intent for the finished drag, or `None` when nothing moved
    pub fn into_mutation(self) -> Option<Mutation> {
        self.is_changed().then_some(Mutation::Reorder {
            ordering: self.working,
        })
    }

    /// Finish the drag against `document`
    pub fn commit(self, document: &Document) -> Result<Document, MutationError> {
        debug!(block_id = %self.dragged, changed = self.is_changed(), "Drag committed");
        commit(document, &self.working)
    }

    /// Abandon the drag, returning the order it started from
    pub fn cancel(self) -> Vec<String> {
        debug!(block_id = %self.dragged, "Drag cancelled");
        self.original
    }
}
