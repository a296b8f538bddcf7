//! # Persistence Codec
//!
//! The document is stored as one JSON record under a fixed key:
//!
//! ```json
//! { "content": "[...blocks]", "backgroundColor": "#ffffff", "elementCounter": 3 }
//! ```
//!
//! `content` holds the block list serialized to a string. A bare array is
//! also accepted on read.
//!
//! Decoding is lenient: missing fields take defaults and unknown palette
//! tokens are repaired. Malformed input never fails hard through `decode`.

use crate::block::Block;
use crate::document::Document;
use crate::palette::CANVAS_BACKGROUND;
use crate::registry::normalize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Key the record is stored under
pub const STORAGE_KEY: &str = "emailTemplate";

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Malformed persisted state: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Malformed persisted state: id sequence out of range")]
    SequenceOverflow,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Stored form of a document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default, with = "serialized_blocks", skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Block>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, alias = "nextSequence", skip_serializing_if = "Option::is_none")]
    pub element_counter: Option<u64>,
}

mod serialized_blocks {
    use super::*;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde_json::Value;

    pub fn serialize<S: Serializer>(blocks: &Option<Vec<Block>>, serializer: S) -> Result<S::Ok, S::Error> {
        match blocks {
            Some(blocks) => {
                let text = serde_json::to_string(blocks).map_err(S::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<Block>>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => serde_json::from_str(&text).map(Some).map_err(D::Error::custom),
            Some(other) => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
        }
    }
}

/// Snapshot a document
pub fn encode(document: &Document) -> PersistedState {
    PersistedState {
        content: Some(document.blocks().to_vec()),
        background_color: Some(document.background_color().to_string()),
        element_counter: Some(document.next_sequence()),
    }
}

/// Rebuild a document, filling in defaults for anything missing.
///
/// A record whose ids or counter cannot advance is logged and yields an
/// empty document.
pub fn decode(state: PersistedState) -> Document {
    rebuild(state).unwrap_or_else(|err| {
        warn!(error = %err, "Discarding persisted state");
        Document::new()
    })
}

fn rebuild(state: PersistedState) -> Result<Document, PersistError> {
    let blocks = state
        .content
        .unwrap_or_default()
        .into_iter()
        .map(|block| Block::new(block.id, normalize(block.attributes)))
        .collect();

    let background_color = state
        .background_color
        .unwrap_or_else(|| CANVAS_BACKGROUND.default_token().to_string());

    Document::from_parts(blocks, background_color, state.element_counter.unwrap_or(0))
}

/// Serialize a document to its stored JSON text
pub fn to_json(document: &Document) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&encode(document))?)
}

/// Parse stored JSON text, surfacing malformed input
pub fn try_decode(json: &str) -> Result<Document, PersistError> {
    let state: PersistedState = serde_json::from_str(json)?;
    rebuild(state)
}

/// Parse stored JSON text; malformed input is logged and yields an empty
/// document
pub fn from_json(json: &str) -> Document {
    try_decode(json).unwrap_or_else(|err| {
        warn!(error = %err, "Discarding persisted state");
        Document::new()
    })
}

/// Key-value store the session persists into
pub trait StateStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-process store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the document held by `store`, falling back to an empty one
pub fn restore<S: StateStore>(store: &S) -> Document {
    match store.read(STORAGE_KEY) {
        Ok(Some(json)) => from_json(&json),
        Ok(None) => Document::new(),
        Err(err) => {
            warn!(error = %err, "Failed to read persisted state");
            Document::new()
        }
    }
}

/// Write `document` into `store`
pub fn save<S: StateStore>(store: &mut S, document: &Document) -> Result<(), PersistError> {
    store.write(STORAGE_KEY, &to_json(document)?)
}
