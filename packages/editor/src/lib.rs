//! # Letterpress Editor
//!
//! Core document model and editing rules for block-based email templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry + palette: block kinds, defaults,  │
//! │ preset option tables                        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Pure (Document, Mutation) → Document     │
//! │  - Property forms ↔ typed attributes        │
//! │  - Drag preview vs commit                   │
//! │  - Persisted snapshot after every change    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: markup → email HTML / canvas │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Model is source of truth**: rendered markup is always derived
//! 2. **Typed attributes**: a color is a palette token or a custom literal,
//!    never inferred from class strings
//! 3. **Preview is not state**: drag ordering only lands on `commit`
//!
//! ## Usage
//!
//! ```rust
//! use letterpress_editor::{BlockKind, EditSession, MemoryStore, Mutation};
//!
//! let mut session = EditSession::restore(MemoryStore::new());
//! session.dispatch(Mutation::Add { block_type: BlockKind::Heading }).unwrap();
//!
//! assert_eq!(session.document().ids(), vec!["heading_0"]);
//! ```

mod attributes;
mod block;
mod clipboard;
mod document;
mod errors;
pub mod markup;
mod mutations;
mod notification;
pub mod palette;
mod persistence;
mod registry;
mod reorder;
mod session;

pub use attributes::{
    apply_canvas_form, apply_form, canvas_background, read_canvas_form, read_for_form, split_items,
    FormValues,
};
pub use block::{
    Attributes, Block, ButtonAttributes, ColorChoice, DividerAttributes, HeadingAttributes,
    ImageAttributes, ListAttributes, ListOrdering, SpacerAttributes, TableAttributes,
    TextAttributes,
};
pub use clipboard::{copy_with_fallback, notification_for, ClipboardError, ClipboardSink};
pub use document::Document;
pub use errors::{EditorError, UnknownBlockType};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use notification::{Notification, NotificationKind};
pub use persistence::{
    decode, encode, from_json, restore, save, to_json, try_decode, MemoryStore, PersistError,
    PersistedState, StateStore, STORAGE_KEY,
};
pub use registry::{default_block, fields, normalize, AttributeDescriptor, BlockKind, Control};
pub use reorder::{commit, drop_target, preview_order, BlockBounds, DragSession};
pub use session::{DispatchOutcome, EditSession};
