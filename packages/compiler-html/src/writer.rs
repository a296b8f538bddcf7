//! Indentation-aware HTML writer.

use html_escape::{encode_double_quoted_attribute, encode_text};
use letterpress_editor::markup::{Element, Node};

/// Buffer plus indentation state shared by every emitter
pub(crate) struct Context {
    pretty: bool,
    indent: String,
    depth: usize,
    buffer: String,
}

impl Context {
    pub fn new(pretty: bool, indent: &str) -> Self {
        Self {
            pretty,
            indent: indent.to_string(),
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }

    pub fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text { content } => self.add_line(&encode_text(content)),
            // Written byte for byte; only a trailing newline is added when pretty
            Node::Raw { markup } => {
                if markup.is_empty() {
                    return;
                }
                self.add(markup);
                if self.pretty && !markup.ends_with('\n') {
                    self.add("\n");
                }
            }
        }
    }

    fn write_element(&mut self, element: &Element) {
        let open = open_tag(element);

        if is_void(&element.tag) {
            self.add_line(&format!("{} />", open));
            return;
        }

        if element.children.iter().all(|child| matches!(child, Node::Text { .. })) {
            let text: String = element
                .children
                .iter()
                .filter_map(|child| match child {
                    Node::Text { content } => Some(encode_text(content)),
                    _ => None,
                })
                .collect();
            self.add_line(&format!("{}>{}</{}>", open, text, element.tag));
            return;
        }

        self.add_line(&format!("{}>", open));
        self.indent();
        for child in &element.children {
            self.write_node(child);
        }
        self.dedent();
        self.add_line(&format!("</{}>", element.tag));
    }
}

/// `<tag` plus attributes, without the closing bracket
fn open_tag(element: &Element) -> String {
    let mut out = format!("<{}", element.tag);

    if !element.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", encode_double_quoted_attribute(&element.classes.join(" "))));
    }

    for (name, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, encode_double_quoted_attribute(value)));
    }

    if !element.styles.is_empty() {
        let declarations: Vec<String> = element
            .styles
            .iter()
            .map(|(property, value)| format!("{}: {};", property, sanitize_css_value(value)))
            .collect();
        out.push_str(&format!(" style=\"{}\"", encode_double_quoted_attribute(&declarations.join(" "))));
    }

    out
}

/// Strip characters that could escape a declaration or the style attribute
pub(crate) fn sanitize_css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "hr" | "br" | "meta" | "input" | "link")
}
