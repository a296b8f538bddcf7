//! # Markup Projection
//!
//! Attribute → markup mapping for every block kind. `project` yields the
//! clean content element of a block; editor-surface decorations are layered
//! on top by the renderer, never stored here.

use crate::block::*;

/// Markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),

    /// Text content, escaped on output
    Text { content: String },

    /// Pre-formed markup, emitted verbatim
    Raw { markup: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    /// Attributes in output order
    pub attributes: Vec<(String, String)>,
    /// Inline style declarations in output order
    pub styles: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw {
            markup: markup.into(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl Element {
    /// Add one or more whitespace-separated class tokens
    pub fn with_class(mut self, tokens: &str) -> Self {
        self.add_class(tokens);
        self
    }

    pub fn add_class(&mut self, tokens: &str) {
        for token in tokens.split_whitespace() {
            if !self.has_class(token) {
                self.classes.push(token.to_string());
            }
        }
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Clean content markup for a block
pub fn project(block: &Block) -> Node {
    match &block.attributes {
        Attributes::Heading(a) => colored_text("h2", "font-bold", &a.size, &a.color, &a.align, &a.text),
        Attributes::Text(a) => colored_text("p", "leading-relaxed", &a.size, &a.color, &a.align, &a.text),
        Attributes::Image(a) => Node::element("img")
            .with_attr("src", &a.url)
            .with_attr("alt", &a.alt)
            .with_class(&a.width)
            .with_class(&a.align)
            .with_class("rounded")
            .into(),
        Attributes::Button(a) => {
            let mut link = Node::element("a")
                .with_attr("href", &a.url)
                .with_class("inline-block");
            match &a.color {
                ColorChoice::Palette(token) => link.add_class(token),
                ColorChoice::Custom(literal) => {
                    link = link
                        .with_style("background-color", literal)
                        .with_style("border-color", literal);
                }
            }
            let link = link
                .with_class("text-white")
                .with_class(&a.size)
                .with_class("rounded-lg")
                .with_child(Node::text(&a.text));

            Node::element("div")
                .with_class("text-center")
                .with_child(link)
                .into()
        }
        Attributes::Table(a) => Node::element("table")
            .with_class(&a.width)
            .with_class("border-collapse")
            .with_class(&a.border)
            .with_child(Node::raw(&a.content))
            .into(),
        Attributes::Divider(a) => Node::element("hr")
            .with_class(&a.style)
            .with_class(&a.spacing)
            .into(),
        Attributes::Spacer(a) => Node::element("div").with_class(&a.height).into(),
        Attributes::List(a) => {
            let list = Node::element(a.ordering.tag())
                .with_class(&a.style)
                .with_children(a.items.iter().map(|item| {
                    Node::element("li").with_child(Node::text(item)).into()
                }));
            apply_color(list, &a.color).into()
        }
    }
}

fn colored_text(
    tag: &str,
    base_class: &str,
    size: &str,
    color: &ColorChoice,
    align: &str,
    text: &str,
) -> Node {
    let element = Node::element(tag).with_class(base_class).with_class(size);
    apply_color(element, color)
        .with_class(align)
        .with_child(Node::text(text))
        .into()
}

fn apply_color(element: Element, color: &ColorChoice) -> Element {
    match color {
        ColorChoice::Palette(token) => element.with_class(token),
        ColorChoice::Custom(literal) => element.with_style("color", literal),
    }
}
