//! # Attribute Editor
//!
//! Bridges typed block attributes and the flat string values of the
//! property form.
//!
//! - `read_for_form` extracts current values, reporting palette vs custom
//!   color selection explicitly
//! - `apply_form` is a pure transform producing an updated block; fields the
//!   form did not submit keep their current values

use crate::block::*;
use crate::document::Document;
use crate::mutations::MutationError;
use crate::palette::{self, Palette, CUSTOM};
use crate::registry::{fields, Control};
use std::collections::BTreeMap;

/// Form field name → submitted value
pub type FormValues = BTreeMap<String, String>;

/// Current values of `block` for populating its property form
pub fn read_for_form(block: &Block) -> FormValues {
    let mut values = FormValues::new();
    let mut put = |name: &str, value: &str| {
        values.insert(name.to_string(), value.to_string());
    };

    match &block.attributes {
        Attributes::Heading(HeadingAttributes { text, size, align, .. })
        | Attributes::Text(TextAttributes { text, size, align, .. }) => {
            put(fields::TEXT, text);
            put(fields::SIZE, size);
            put(fields::ALIGN, align);
        }
        Attributes::Image(a) => {
            put(fields::URL, &a.url);
            put(fields::ALT, &a.alt);
            put(fields::WIDTH, &a.width);
            put(fields::ALIGN, &a.align);
        }
        Attributes::Button(a) => {
            put(fields::TEXT, &a.text);
            put(fields::URL, &a.url);
            put(fields::SIZE, &a.size);
        }
        Attributes::Table(a) => {
            put(fields::CONTENT, &a.content);
            put(fields::BORDER, &a.border);
            put(fields::WIDTH, &a.width);
        }
        Attributes::Divider(a) => {
            put(fields::STYLE, &a.style);
            put(fields::SPACING, &a.spacing);
        }
        Attributes::Spacer(a) => {
            put(fields::HEIGHT, &a.height);
            put(fields::SHOW_GUIDE, if a.show_guide { "true" } else { "false" });
        }
        Attributes::List(a) => {
            put(fields::ITEMS, &a.items.join("\n"));
            put(fields::LIST_TYPE, a.ordering.tag());
            put(fields::STYLE, &a.style);
        }
    }

    if let (Some(color), Some(custom_default)) = (color_of(&block.attributes), custom_default(block)) {
        let (selector, literal) = match color {
            ColorChoice::Palette(token) => (token.as_str(), custom_default),
            ColorChoice::Custom(literal) => (CUSTOM, literal.as_str()),
        };
        values.insert(fields::COLOR.to_string(), selector.to_string());
        values.insert(fields::CUSTOM_COLOR.to_string(), literal.to_string());
    }

    values
}

/// Produce an updated copy of `block` from submitted form values
pub fn apply_form(block: &Block, values: &FormValues) -> Block {
    let form = Form { values };
    let color_palette = block
        .kind()
        .color_descriptor()
        .and_then(|descriptor| match descriptor.control {
            Control::ColorSelect { palette, custom_default } => Some((palette, custom_default)),
            _ => None,
        });

    let attributes = match &block.attributes {
        Attributes::Heading(a) => Attributes::Heading(HeadingAttributes {
            text: form.text(fields::TEXT, &a.text),
            size: form.token(fields::SIZE, palette::HEADING_SIZE, &a.size),
            color: form.color(&a.color, color_palette),
            align: form.token(fields::ALIGN, palette::TEXT_ALIGN, &a.align),
        }),
        Attributes::Text(a) => Attributes::Text(TextAttributes {
            text: form.text(fields::TEXT, &a.text),
            size: form.token(fields::SIZE, palette::TEXT_SIZE, &a.size),
            color: form.color(&a.color, color_palette),
            align: form.token(fields::ALIGN, palette::TEXT_ALIGN, &a.align),
        }),
        Attributes::Image(a) => Attributes::Image(ImageAttributes {
            url: form.text(fields::URL, &a.url),
            alt: form.text(fields::ALT, &a.alt),
            width: form.token(fields::WIDTH, palette::IMAGE_WIDTH, &a.width),
            align: form.token(fields::ALIGN, palette::IMAGE_ALIGN, &a.align),
        }),
        Attributes::Button(a) => Attributes::Button(ButtonAttributes {
            text: form.text(fields::TEXT, &a.text),
            url: form.text(fields::URL, &a.url),
            color: form.color(&a.color, color_palette),
            size: form.token(fields::SIZE, palette::BUTTON_SIZE, &a.size),
        }),
        Attributes::Table(a) => Attributes::Table(TableAttributes {
            content: form.text(fields::CONTENT, &a.content),
            border: form.token(fields::BORDER, palette::TABLE_BORDER, &a.border),
            width: form.token(fields::WIDTH, palette::TABLE_WIDTH, &a.width),
        }),
        Attributes::Divider(a) => Attributes::Divider(DividerAttributes {
            style: form.token(fields::STYLE, palette::DIVIDER_STYLE, &a.style),
            spacing: form.token(fields::SPACING, palette::DIVIDER_SPACING, &a.spacing),
        }),
        Attributes::Spacer(a) => Attributes::Spacer(SpacerAttributes {
            height: form.token(fields::HEIGHT, palette::SPACER_HEIGHT, &a.height),
            show_guide: form
                .get(fields::SHOW_GUIDE)
                .map(|value| value.trim() == "true")
                .unwrap_or(a.show_guide),
        }),
        Attributes::List(a) => Attributes::List(ListAttributes {
            items: form.get(fields::ITEMS).map(split_items).unwrap_or_else(|| a.items.clone()),
            ordering: form
                .get(fields::LIST_TYPE)
                .and_then(ListOrdering::from_tag)
                .unwrap_or(a.ordering),
            style: form.token(fields::STYLE, palette::LIST_STYLE, &a.style),
            color: form.color(&a.color, color_palette),
        }),
    };

    Block::new(block.id.clone(), attributes)
}

/// Canvas settings form: palette selector plus custom literal
pub fn read_canvas_form(document: &Document) -> FormValues {
    let current = document.background_color();
    let selector = if palette::CANVAS_BACKGROUND.contains(current) {
        current
    } else {
        CUSTOM
    };

    FormValues::from([
        (fields::BACKGROUND_COLOR.to_string(), selector.to_string()),
        (fields::CUSTOM_COLOR.to_string(), current.to_string()),
    ])
}

/// Background color selected in the canvas form, if the form carries one
pub fn canvas_background(values: &FormValues) -> Option<&str> {
    let selector = values.get(fields::BACKGROUND_COLOR)?.trim();
    if selector == CUSTOM {
        values.get(fields::CUSTOM_COLOR).map(|literal| literal.trim())
    } else {
        Some(selector)
    }
}

/// Apply the canvas settings form to a copy of `document`
pub fn apply_canvas_form(document: &Document, values: &FormValues) -> Result<Document, MutationError> {
    let mut next = document.clone();
    if let Some(color) = canvas_background(values) {
        next.set_background_color(color)?;
    }
    Ok(next)
}

/// Split a multi-line field into trimmed, non-blank items
pub fn split_items(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn color_of(attributes: &Attributes) -> Option<&ColorChoice> {
    match attributes {
        Attributes::Heading(a) => Some(&a.color),
        Attributes::Text(a) => Some(&a.color),
        Attributes::Button(a) => Some(&a.color),
        Attributes::List(a) => Some(&a.color),
        _ => None,
    }
}

fn custom_default(block: &Block) -> Option<&'static str> {
    match block.kind().color_descriptor()?.control {
        Control::ColorSelect { custom_default, .. } => Some(custom_default),
        _ => None,
    }
}

struct Form<'a> {
    values: &'a FormValues,
}

impl<'a> Form<'a> {
    fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).map(String::as_str)
    }

    fn text(&self, name: &str, current: &str) -> String {
        self.get(name).unwrap_or(current).to_string()
    }

    fn token(&self, name: &str, palette: Palette, current: &str) -> String {
        match self.get(name) {
            Some(submitted) => palette.resolve(submitted).to_string(),
            None => current.to_string(),
        }
    }

    /// Custom selector ⇒ the literal wins and the palette token is cleared;
    /// any other selector ⇒ the palette token wins and the literal is cleared.
    fn color(&self, current: &ColorChoice, palette: Option<(Palette, &'static str)>) -> ColorChoice {
        let Some((palette, custom_default)) = palette else {
            return current.clone();
        };
        let Some(selector) = self.get(fields::COLOR) else {
            return current.clone();
        };

        if selector.trim() == CUSTOM {
            let literal = self
                .get(fields::CUSTOM_COLOR)
                .map(str::trim)
                .filter(|literal| !literal.is_empty())
                .or(current.literal())
                .unwrap_or(custom_default);
            ColorChoice::custom(literal)
        } else {
            ColorChoice::palette(palette.resolve(selector))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{default_block, BlockKind};

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_heading_defaults() {
        let values = read_for_form(&default_block(BlockKind::Heading, 0));
        assert_eq!(values["text"], "Your Heading Here");
        assert_eq!(values["size"], "text-2xl");
        assert_eq!(values["color"], "text-gray-800");
        assert_eq!(values["customColor"], "#1f2937");
        assert_eq!(values["align"], "text-left");
    }

    #[test]
    fn test_custom_color_round_trip() {
        let block = default_block(BlockKind::Heading, 0);
        let updated = apply_form(&block, &form(&[("color", "custom"), ("customColor", "#ab12cd")]));

        let values = read_for_form(&updated);
        assert_eq!(values["color"], "custom");
        assert_eq!(values["customColor"], "#ab12cd");
    }

    #[test]
    fn test_palette_selection_clears_custom() {
        let block = default_block(BlockKind::Text, 0);
        let custom = apply_form(&block, &form(&[("color", "custom"), ("customColor", "#010203")]));
        let back = apply_form(&custom, &form(&[("color", "text-blue-600"), ("customColor", "#010203")]));

        match back.attributes {
            Attributes::Text(a) => assert_eq!(a.color, ColorChoice::palette("text-blue-600")),
            _ => panic!("Expected text"),
        }
    }

    #[test]
    fn test_custom_without_literal_uses_default() {
        let block = default_block(BlockKind::Button, 0);
        let updated = apply_form(&block, &form(&[("color", "custom"), ("customColor", " ")]));

        match updated.attributes {
            Attributes::Button(a) => assert_eq!(a.color, ColorChoice::custom("#4f46e5")),
            _ => panic!("Expected button"),
        }
    }

    #[test]
    fn test_list_type_change_preserves_style_color_and_items() {
        let block = default_block(BlockKind::List, 0);
        let styled = apply_form(
            &block,
            &form(&[("style", "list-square list-inside"), ("color", "custom"), ("customColor", "#333333")]),
        );
        let numbered = apply_form(&styled, &form(&[("listType", "ol")]));

        match numbered.attributes {
            Attributes::List(a) => {
                assert_eq!(a.ordering, ListOrdering::Numbered);
                assert_eq!(a.style, "list-square list-inside");
                assert_eq!(a.color, ColorChoice::custom("#333333"));
                assert_eq!(a.items.len(), 3);
            }
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_list_items_drop_blank_lines() {
        assert_eq!(split_items("A\n\n  B  \r\n \nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_table_content_passes_through_verbatim() {
        let block = default_block(BlockKind::Table, 0);
        let raw = "<tr><td>unclosed";
        let updated = apply_form(&block, &form(&[("content", raw), ("width", "w-1/2")]));

        match updated.attributes {
            Attributes::Table(a) => {
                assert_eq!(a.content, raw);
                assert_eq!(a.width, "w-1/2");
                assert_eq!(a.border, "border border-gray-300");
            }
            _ => panic!("Expected table"),
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_default() {
        let block = default_block(BlockKind::Divider, 0);
        let updated = apply_form(&block, &form(&[("spacing", "my-99")]));

        match updated.attributes {
            Attributes::Divider(a) => assert_eq!(a.spacing, "my-4"),
            _ => panic!("Expected divider"),
        }
    }

    #[test]
    fn test_spacer_guide_toggle() {
        let block = default_block(BlockKind::Spacer, 0);
        let hidden = apply_form(&block, &form(&[("showGuide", "false"), ("height", "py-12")]));

        let values = read_for_form(&hidden);
        assert_eq!(values["showGuide"], "false");
        assert_eq!(values["height"], "py-12");
    }

    #[test]
    fn test_apply_form_keeps_id_and_kind() {
        let block = default_block(BlockKind::Image, 5);
        let updated = apply_form(&block, &form(&[("url", "https://example.com/a.png")]));
        assert_eq!(updated.id, "image_5");
        assert_eq!(updated.kind(), BlockKind::Image);
    }

    #[test]
    fn test_canvas_form_infers_custom() {
        let mut doc = Document::new();
        assert_eq!(read_canvas_form(&doc)["backgroundColor"], "#ffffff");

        doc.set_background_color("#123456").unwrap();
        let values = read_canvas_form(&doc);
        assert_eq!(values["backgroundColor"], "custom");
        assert_eq!(values["customColor"], "#123456");
    }

    #[test]
    fn test_apply_canvas_form() {
        let doc = Document::new();

        let next = apply_canvas_form(&doc, &form(&[("backgroundColor", "#f0f9ff")])).unwrap();
        assert_eq!(next.background_color(), "#f0f9ff");

        let next = apply_canvas_form(
            &doc,
            &form(&[("backgroundColor", "custom"), ("customColor", "#0a0b0c")]),
        )
        .unwrap();
        assert_eq!(next.background_color(), "#0a0b0c");
        assert_eq!(doc.background_color(), "#ffffff");
    }

    #[test]
    fn test_apply_canvas_form_rejects_empty_custom() {
        let doc = Document::new();
        let err = apply_canvas_form(&doc, &form(&[("backgroundColor", "custom"), ("customColor", "")]));
        assert_eq!(err, Err(MutationError::EmptyBackground));
        assert_eq!(canvas_background(&form(&[("customColor", "#fff")])), None);
    }
}
