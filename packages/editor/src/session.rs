//! # Edit Session
//!
//! The single owner of the live document.
//!
//! Intents run one at a time to completion. Every successful mutation is
//! snapshotted into the store; storage failures are logged, never surfaced,
//! so editing keeps working when persistence is unavailable.

use crate::attributes::{canvas_background, read_canvas_form, read_for_form, FormValues};
use crate::clipboard::{copy_with_fallback, ClipboardSink};
use crate::document::Document;
use crate::mutations::{Mutation, MutationError};
use crate::notification::Notification;
use crate::persistence::{self, StateStore};
use crate::reorder::{BlockBounds, DragSession};
use crate::EditorError;
use serde::Serialize;
use tracing::{debug, info, warn};

/// What happened to a dispatched intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DispatchOutcome {
    /// Document changed and was persisted
    #[serde(rename_all = "camelCase")]
    Applied { block_id: Option<String> },

    /// Intent referred to something that no longer exists
    Ignored { reason: String },

    /// Nothing to do
    Unchanged,
}

pub struct EditSession<S: StateStore> {
    document: Document,
    store: S,
    /// Bumped on every applied mutation
    version: u64,
    drag: Option<DragSession>,
}

impl<S: StateStore> EditSession<S> {
    pub fn new(document: Document, store: S) -> Self {
        Self {
            document,
            store,
            version: 0,
            drag: None,
        }
    }

    /// Start from whatever `store` holds
    pub fn restore(store: S) -> Self {
        let document = persistence::restore(&store);
        info!(blocks = document.len(), "Restored document");
        Self::new(document, store)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one intent
    pub fn dispatch(&mut self, mutation: Mutation) -> Result<DispatchOutcome, EditorError> {
        debug!(intent = mutation.name(), "Dispatching");

        match mutation.apply(&self.document) {
            Ok(result) => {
                self.document = result.document;
                self.version += 1;
                self.persist();
                Ok(DispatchOutcome::Applied {
                    block_id: result.block_id,
                })
            }
            Err(MutationError::BlockNotFound(block_id)) => {
                debug!(intent = mutation.name(), block_id = %block_id, "Ignoring intent for missing block");
                Ok(DispatchOutcome::Ignored {
                    reason: format!("Block not found: {}", block_id),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Parse a JSON intent and dispatch it
    pub fn dispatch_json(&mut self, json: &str) -> Result<DispatchOutcome, EditorError> {
        let mutation: Mutation = serde_json::from_str(json)?;
        self.dispatch(mutation)
    }

    /// Current property-form values for a block
    pub fn form_values(&self, block_id: &str) -> Option<FormValues> {
        self.document.find(block_id).map(read_for_form)
    }

    pub fn canvas_form(&self) -> FormValues {
        read_canvas_form(&self.document)
    }

    /// Apply a submitted canvas settings form
    pub fn submit_canvas_form(&mut self, values: &FormValues) -> Result<DispatchOutcome, EditorError> {
        match canvas_background(values) {
            Some(value) => self.dispatch(Mutation::SetCanvasBackground {
                value: value.to_string(),
            }),
            None => Ok(DispatchOutcome::Unchanged),
        }
    }

    pub fn begin_drag(&mut self, block_id: &str) -> Result<(), EditorError> {
        self.drag = Some(DragSession::new(&self.document, block_id)?);
        Ok(())
    }

    /// Preview order for the current pointer position
    pub fn drag_over(&mut self, pointer_y: f64, bounds: &[BlockBounds]) -> Result<Vec<String>, EditorError> {
        let drag = self.drag.as_mut().ok_or(EditorError::NoActiveDrag)?;
        Ok(drag.update(pointer_y, bounds).to_vec())
    }

    /// Commit the previewed order
    pub fn drop_drag(&mut self) -> Result<DispatchOutcome, EditorError> {
        let drag = self.drag.take().ok_or(EditorError::NoActiveDrag)?;
        match drag.into_mutation() {
            Some(mutation) => self.dispatch(mutation),
            None => Ok(DispatchOutcome::Unchanged),
        }
    }

    /// Drop the preview; the document is untouched
    pub fn cancel_drag(&mut self) -> Option<Vec<String>> {
        self.drag.take().map(DragSession::cancel)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Compile the document and copy it through the clipboard sinks
    pub fn copy_export<F>(
        &self,
        compile: F,
        primary: &mut dyn ClipboardSink,
        fallback: &mut dyn ClipboardSink,
    ) -> Notification
    where
        F: FnOnce(&Document) -> String,
    {
        let html = compile(&self.document);
        copy_with_fallback(&html, primary, fallback)
    }

    fn persist(&mut self) {
        if let Err(err) = persistence::save(&mut self.store, &self.document) {
            warn!(error = %err, version = self.version, "Failed to persist document");
        }
    }
}
