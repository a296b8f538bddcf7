//! # Blocks
//!
//! A block is one content unit of the email. Its kind is fixed by the
//! attribute variant it carries, so it can never change after creation.

use crate::registry::BlockKind;
use serde::{Deserialize, Serialize};

/// Palette token or user-supplied literal color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "camelCase")]
pub enum ColorChoice {
    Palette(String),
    Custom(String),
}

impl ColorChoice {
    pub fn palette(token: impl Into<String>) -> Self {
        ColorChoice::Palette(token.into())
    }

    pub fn custom(literal: impl Into<String>) -> Self {
        ColorChoice::Custom(literal.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ColorChoice::Custom(_))
    }

    /// Palette token, if one is selected
    pub fn token(&self) -> Option<&str> {
        match self {
            ColorChoice::Palette(token) => Some(token),
            ColorChoice::Custom(_) => None,
        }
    }

    /// Custom literal, if one is selected
    pub fn literal(&self) -> Option<&str> {
        match self {
            ColorChoice::Palette(_) => None,
            ColorChoice::Custom(literal) => Some(literal),
        }
    }
}

/// Bulleted (`ul`) or numbered (`ol`) list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrdering {
    #[default]
    Bulleted,
    Numbered,
}

impl ListOrdering {
    pub fn tag(&self) -> &'static str {
        match self {
            ListOrdering::Bulleted => "ul",
            ListOrdering::Numbered => "ol",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "ul" | "bulleted" => Some(ListOrdering::Bulleted),
            "ol" | "numbered" => Some(ListOrdering::Numbered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingAttributes {
    pub text: String,
    pub size: String,
    pub color: ColorChoice,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttributes {
    pub text: String,
    pub size: String,
    pub color: ColorChoice,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAttributes {
    pub url: String,
    pub alt: String,
    pub width: String,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonAttributes {
    pub text: String,
    pub url: String,
    /// Background color of the button
    pub color: ColorChoice,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableAttributes {
    /// Inner table markup, emitted verbatim
    pub content: String,
    pub border: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerAttributes {
    pub style: String,
    pub spacing: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerAttributes {
    pub height: String,
    /// Editor-surface guide label; never exported
    pub show_guide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAttributes {
    pub items: Vec<String>,
    pub ordering: ListOrdering,
    pub style: String,
    pub color: ColorChoice,
}

/// Typed attribute record, one variant per block kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Attributes {
    Heading(HeadingAttributes),
    Text(TextAttributes),
    Image(ImageAttributes),
    Button(ButtonAttributes),
    Table(TableAttributes),
    Divider(DividerAttributes),
    Spacer(SpacerAttributes),
    List(ListAttributes),
}

impl Attributes {
    pub fn kind(&self) -> BlockKind {
        match self {
            Attributes::Heading(_) => BlockKind::Heading,
            Attributes::Text(_) => BlockKind::Text,
            Attributes::Image(_) => BlockKind::Image,
            Attributes::Button(_) => BlockKind::Button,
            Attributes::Table(_) => BlockKind::Table,
            Attributes::Divider(_) => BlockKind::Divider,
            Attributes::Spacer(_) => BlockKind::Spacer,
            Attributes::List(_) => BlockKind::List,
        }
    }
}

/// Single content unit in the email body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// `<type>_<sequence>`, stable for the block's lifetime
    pub id: String,

    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Block {
    pub fn new(id: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.attributes.kind()
    }

    /// Numeric suffix of the id, if it has one
    pub fn sequence(&self) -> Option<u64> {
        self.id
            .rsplit_once('_')
            .and_then(|(_, suffix)| suffix.parse().ok())
    }
}
