//! # Block Registry
//!
//! Static table for the closed set of block kinds: tag names, default
//! content, and the attributes the property form exposes for each kind.

use crate::block::*;
use crate::errors::UnknownBlockType;
use crate::palette::{self, Palette};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HEADING_TEXT: &str = "Your Heading Here";
pub const DEFAULT_TEXT: &str =
    "Your text content goes here. You can edit this to add your own message.";
pub const DEFAULT_IMAGE_URL: &str =
    "https://via.placeholder.com/400x200/4f46e5/ffffff?text=Your+Image";
pub const DEFAULT_IMAGE_ALT: &str = "Placeholder";
pub const DEFAULT_BUTTON_TEXT: &str = "Click Here";
pub const DEFAULT_BUTTON_URL: &str = "#";
pub const DEFAULT_LIST_ITEMS: [&str; 3] = ["First list item", "Second list item", "Third list item"];

pub const DEFAULT_TABLE_CONTENT: &str = r#"<thead>
<tr class="bg-gray-100">
<th class="border border-gray-300 px-4 py-2 text-left">Header 1</th>
<th class="border border-gray-300 px-4 py-2 text-left">Header 2</th>
<th class="border border-gray-300 px-4 py-2 text-left">Header 3</th>
</tr>
</thead>
<tbody>
<tr>
<td class="border border-gray-300 px-4 py-2">Row 1, Col 1</td>
<td class="border border-gray-300 px-4 py-2">Row 1, Col 2</td>
<td class="border border-gray-300 px-4 py-2">Row 1, Col 3</td>
</tr>
<tr>
<td class="border border-gray-300 px-4 py-2">Row 2, Col 1</td>
<td class="border border-gray-300 px-4 py-2">Row 2, Col 2</td>
<td class="border border-gray-300 px-4 py-2">Row 2, Col 3</td>
</tr>
</tbody>"#;

/// Form field names
pub mod fields {
    pub const TEXT: &str = "text";
    pub const SIZE: &str = "size";
    pub const COLOR: &str = "color";
    pub const CUSTOM_COLOR: &str = "customColor";
    pub const ALIGN: &str = "align";
    pub const URL: &str = "url";
    pub const ALT: &str = "alt";
    pub const WIDTH: &str = "width";
    pub const CONTENT: &str = "content";
    pub const BORDER: &str = "border";
    pub const STYLE: &str = "style";
    pub const SPACING: &str = "spacing";
    pub const HEIGHT: &str = "height";
    pub const SHOW_GUIDE: &str = "showGuide";
    pub const ITEMS: &str = "items";
    pub const LIST_TYPE: &str = "listType";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
}

/// Closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Button,
    Table,
    Divider,
    Spacer,
    List,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Table,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::List,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Table => "table",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::List => "list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Heading => "Heading",
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Button => "Button",
            BlockKind::Table => "Table",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::List => "List",
        }
    }

    pub fn default_attributes(&self) -> Attributes {
        match self {
            BlockKind::Heading => Attributes::Heading(HeadingAttributes::default()),
            BlockKind::Text => Attributes::Text(TextAttributes::default()),
            BlockKind::Image => Attributes::Image(ImageAttributes::default()),
            BlockKind::Button => Attributes::Button(ButtonAttributes::default()),
            BlockKind::Table => Attributes::Table(TableAttributes::default()),
            BlockKind::Divider => Attributes::Divider(DividerAttributes::default()),
            BlockKind::Spacer => Attributes::Spacer(SpacerAttributes::default()),
            BlockKind::List => Attributes::List(ListAttributes::default()),
        }
    }

    /// Ordered attribute descriptors driving the property form
    pub fn describe_attributes(&self) -> Vec<AttributeDescriptor> {
        use fields::*;

        match self {
            BlockKind::Heading => vec![
                AttributeDescriptor::new(TEXT, "Heading Text", Control::TextLine),
                AttributeDescriptor::select(SIZE, "Font Size", palette::HEADING_SIZE),
                AttributeDescriptor::color(COLOR, "Text Color", palette::HEADING_COLOR, "#1f2937"),
                AttributeDescriptor::select(ALIGN, "Text Alignment", palette::TEXT_ALIGN),
            ],
            BlockKind::Text => vec![
                AttributeDescriptor::new(TEXT, "Text Content", Control::TextArea),
                AttributeDescriptor::select(SIZE, "Font Size", palette::TEXT_SIZE),
                AttributeDescriptor::color(COLOR, "Text Color", palette::TEXT_COLOR, "#374151"),
                AttributeDescriptor::select(ALIGN, "Text Alignment", palette::TEXT_ALIGN),
            ],
            BlockKind::Image => vec![
                AttributeDescriptor::new(URL, "Image URL", Control::Url),
                AttributeDescriptor::new(ALT, "Alt Text", Control::TextLine),
                AttributeDescriptor::select(WIDTH, "Image Width", palette::IMAGE_WIDTH),
                AttributeDescriptor::select(ALIGN, "Alignment", palette::IMAGE_ALIGN),
            ],
            BlockKind::Button => vec![
                AttributeDescriptor::new(TEXT, "Button Text", Control::TextLine),
                AttributeDescriptor::new(URL, "Button URL", Control::Url),
                AttributeDescriptor::color(COLOR, "Button Color", palette::BUTTON_COLOR, "#4f46e5"),
                AttributeDescriptor::select(SIZE, "Button Size", palette::BUTTON_SIZE),
            ],
            BlockKind::Table => vec![
                AttributeDescriptor::new(CONTENT, "Table Content (HTML)", Control::TextArea),
                AttributeDescriptor::select(BORDER, "Border Style", palette::TABLE_BORDER),
                AttributeDescriptor::select(WIDTH, "Table Width", palette::TABLE_WIDTH),
            ],
            BlockKind::Divider => vec![
                AttributeDescriptor::select(STYLE, "Divider Style", palette::DIVIDER_STYLE),
                AttributeDescriptor::select(SPACING, "Spacing", palette::DIVIDER_SPACING),
            ],
            BlockKind::Spacer => vec![
                AttributeDescriptor::select(HEIGHT, "Spacer Height", palette::SPACER_HEIGHT),
                AttributeDescriptor::new(SHOW_GUIDE, "Show Visual Guide", Control::Toggle(palette::SPACER_GUIDE)),
            ],
            BlockKind::List => vec![
                AttributeDescriptor::new(ITEMS, "List Items (one per line)", Control::TextArea),
                AttributeDescriptor::select(LIST_TYPE, "List Type", palette::LIST_TYPE),
                AttributeDescriptor::select(STYLE, "List Style", palette::LIST_STYLE),
                AttributeDescriptor::color(COLOR, "Text Color", palette::TEXT_COLOR, "#374151"),
            ],
        }
    }

    /// Descriptor for the color selector of this kind, if it has one
    pub fn color_descriptor(&self) -> Option<AttributeDescriptor> {
        self.describe_attributes()
            .into_iter()
            .find(|descriptor| matches!(descriptor.control, Control::ColorSelect { .. }))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BlockKind {
    type Err = UnknownBlockType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| UnknownBlockType(tag.to_string()))
    }
}

impl TryFrom<String> for BlockKind {
    type Error = UnknownBlockType;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// How a form field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TextLine,
    TextArea,
    Url,
    Select(Palette),
    /// Palette select plus a custom color input named `customColor`
    ColorSelect {
        palette: Palette,
        custom_default: &'static str,
    },
    /// Boolean rendered as a two-option select
    Toggle(Palette),
}

/// One editable attribute of a block kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

impl AttributeDescriptor {
    fn new(name: &'static str, label: &'static str, control: Control) -> Self {
        Self { name, label, control }
    }

    fn select(name: &'static str, label: &'static str, palette: Palette) -> Self {
        Self::new(name, label, Control::Select(palette))
    }

    fn color(name: &'static str, label: &'static str, palette: Palette, custom_default: &'static str) -> Self {
        Self::new(name, label, Control::ColorSelect { palette, custom_default })
    }

    pub fn palette(&self) -> Option<Palette> {
        match self.control {
            Control::Select(palette) | Control::Toggle(palette) => Some(palette),
            Control::ColorSelect { palette, .. } => Some(palette),
            Control::TextLine | Control::TextArea | Control::Url => None,
        }
    }
}

/// Build a block of `kind` with default content and the id `<type>_<sequence>`
pub fn default_block(kind: BlockKind, sequence: u64) -> Block {
    Block::new(format!("{}_{}", kind.tag(), sequence), kind.default_attributes())
}

/// Replace any token that is not in its palette with the palette default.
///
/// Keeps restored or hand-edited blocks renderable.
pub fn normalize(attributes: Attributes) -> Attributes {
    fn color(choice: ColorChoice, palette: Palette) -> ColorChoice {
        match choice {
            ColorChoice::Palette(token) => ColorChoice::palette(palette.resolve(&token)),
            ColorChoice::Custom(literal) if literal.trim().is_empty() => {
                ColorChoice::palette(palette.default_token())
            }
            custom => custom,
        }
    }

    match attributes {
        Attributes::Heading(a) => Attributes::Heading(HeadingAttributes {
            size: palette::HEADING_SIZE.resolve(&a.size).to_string(),
            color: color(a.color, palette::HEADING_COLOR),
            align: palette::TEXT_ALIGN.resolve(&a.align).to_string(),
            text: a.text,
        }),
        Attributes::Text(a) => Attributes::Text(TextAttributes {
            size: palette::TEXT_SIZE.resolve(&a.size).to_string(),
            color: color(a.color, palette::TEXT_COLOR),
            align: palette::TEXT_ALIGN.resolve(&a.align).to_string(),
            text: a.text,
        }),
        Attributes::Image(a) => Attributes::Image(ImageAttributes {
            width: palette::IMAGE_WIDTH.resolve(&a.width).to_string(),
            align: palette::IMAGE_ALIGN.resolve(&a.align).to_string(),
            ..a
        }),
        Attributes::Button(a) => Attributes::Button(ButtonAttributes {
            color: color(a.color, palette::BUTTON_COLOR),
            size: palette::BUTTON_SIZE.resolve(&a.size).to_string(),
            ..a
        }),
        Attributes::Table(a) => Attributes::Table(TableAttributes {
            border: palette::TABLE_BORDER.resolve(&a.border).to_string(),
            width: palette::TABLE_WIDTH.resolve(&a.width).to_string(),
            ..a
        }),
        Attributes::Divider(a) => Attributes::Divider(DividerAttributes {
            style: palette::DIVIDER_STYLE.resolve(&a.style).to_string(),
            spacing: palette::DIVIDER_SPACING.resolve(&a.spacing).to_string(),
        }),
        Attributes::Spacer(a) => Attributes::Spacer(SpacerAttributes {
            height: palette::SPACER_HEIGHT.resolve(&a.height).to_string(),
            ..a
        }),
        Attributes::List(a) => Attributes::List(ListAttributes {
            style: palette::LIST_STYLE.resolve(&a.style).to_string(),
            color: color(a.color, palette::TEXT_COLOR),
            ..a
        }),
    }
}

impl Default for HeadingAttributes {
    fn default() -> Self {
        Self {
            text: DEFAULT_HEADING_TEXT.to_string(),
            size: palette::HEADING_SIZE.default_token().to_string(),
            color: ColorChoice::palette(palette::HEADING_COLOR.default_token()),
            align: palette::TEXT_ALIGN.default_token().to_string(),
        }
    }
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            size: palette::TEXT_SIZE.default_token().to_string(),
            color: ColorChoice::palette(palette::TEXT_COLOR.default_token()),
            align: palette::TEXT_ALIGN.default_token().to_string(),
        }
    }
}

impl Default for ImageAttributes {
    fn default() -> Self {
        Self {
            url: DEFAULT_IMAGE_URL.to_string(),
            alt: DEFAULT_IMAGE_ALT.to_string(),
            width: palette::IMAGE_WIDTH.default_token().to_string(),
            align: palette::IMAGE_ALIGN.default_token().to_string(),
        }
    }
}

impl Default for ButtonAttributes {
    fn default() -> Self {
        Self {
            text: DEFAULT_BUTTON_TEXT.to_string(),
            url: DEFAULT_BUTTON_URL.to_string(),
            color: ColorChoice::palette(palette::BUTTON_COLOR.default_token()),
            size: palette::BUTTON_SIZE.default_token().to_string(),
        }
    }
}

impl Default for TableAttributes {
    fn default() -> Self {
        Self {
            content: DEFAULT_TABLE_CONTENT.to_string(),
            border: palette::TABLE_BORDER.default_token().to_string(),
            width: palette::TABLE_WIDTH.default_token().to_string(),
        }
    }
}

impl Default for DividerAttributes {
    fn default() -> Self {
        Self {
            style: palette::DIVIDER_STYLE.default_token().to_string(),
            spacing: palette::DIVIDER_SPACING.default_token().to_string(),
        }
    }
}

impl Default for SpacerAttributes {
    fn default() -> Self {
        Self {
            height: palette::SPACER_HEIGHT.default_token().to_string(),
            show_guide: true,
        }
    }
}

impl Default for ListAttributes {
    fn default() -> Self {
        Self {
            items: DEFAULT_LIST_ITEMS.iter().map(|item| item.to_string()).collect(),
            ordering: ListOrdering::Bulleted,
            style: palette::LIST_STYLE.default_token().to_string(),
            color: ColorChoice::palette(palette::TEXT_COLOR.default_token()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.tag().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "carousel".parse::<BlockKind>().unwrap_err();
        assert_eq!(err, UnknownBlockType("carousel".to_string()));

        let json = serde_json::from_str::<BlockKind>("\"video\"");
        assert!(json.is_err());
    }

    #[test]
    fn test_default_block_id_and_content() {
        let block = default_block(BlockKind::Heading, 4);
        assert_eq!(block.id, "heading_4");
        assert_eq!(block.kind(), BlockKind::Heading);

        match block.attributes {
            Attributes::Heading(h) => assert_eq!(h.text, DEFAULT_HEADING_TEXT),
            _ => panic!("Expected heading attributes"),
        }
    }

    #[test]
    fn test_default_list_has_three_items() {
        match BlockKind::List.default_attributes() {
            Attributes::List(list) => {
                assert_eq!(list.items.len(), 3);
                assert_eq!(list.ordering, ListOrdering::Bulleted);
            }
            _ => panic!("Expected list attributes"),
        }
    }

    #[test]
    fn test_default_table_skeleton() {
        assert_eq!(DEFAULT_TABLE_CONTENT.matches("<th ").count(), 3);
        assert_eq!(DEFAULT_TABLE_CONTENT.matches("<td ").count(), 6);
    }

    #[test]
    fn test_every_kind_describes_attributes() {
        for kind in BlockKind::ALL {
            assert!(!kind.describe_attributes().is_empty(), "{} has no attributes", kind);
        }

        let colored: Vec<_> = BlockKind::ALL
            .into_iter()
            .filter(|kind| kind.color_descriptor().is_some())
            .collect();
        assert_eq!(
            colored,
            vec![BlockKind::Heading, BlockKind::Text, BlockKind::Button, BlockKind::List]
        );
    }

    #[test]
    fn test_normalize_repairs_unknown_tokens() {
        let attributes = Attributes::Divider(DividerAttributes {
            style: "border-t-9 border-pink".to_string(),
            spacing: "my-6".to_string(),
        });

        match normalize(attributes) {
            Attributes::Divider(d) => {
                assert_eq!(d.style, "border-t-2 border-gray-300");
                assert_eq!(d.spacing, "my-6");
            }
            _ => panic!("Expected divider"),
        }
    }

    #[test]
    fn test_normalize_keeps_custom_colors() {
        let attributes = Attributes::Heading(HeadingAttributes {
            color: ColorChoice::custom("#abcdef"),
            ..HeadingAttributes::default()
        });

        match normalize(attributes) {
            Attributes::Heading(h) => assert_eq!(h.color, ColorChoice::custom("#abcdef")),
            _ => panic!("Expected heading"),
        }
    }
}
