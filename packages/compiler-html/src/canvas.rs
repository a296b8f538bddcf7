//! # Canvas Renderer
//!
//! Markup for the editing surface. Each block gets the editor wrapper:
//!
//! - `element` class, id, `data-type` and `draggable`
//! - move / edit / delete controls
//! - a `data-content` marker on the content element
//!
//! None of this reaches the export; `compile_to_html` builds from the model
//! directly.

use crate::writer::Context;
use crate::CompileOptions;
use letterpress_editor::markup::{project, Element, Node};
use letterpress_editor::palette::spacer_guide_height;
use letterpress_editor::{Attributes, Block, Document};

pub const EMPTY_STATE_ID: &str = "emptyState";
pub const EMPTY_STATE_MESSAGE: &str = "Drag elements here to build your email";

/// Inner markup of the editing surface
pub fn render_canvas(document: &Document, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options.pretty, &options.indent);

    if document.is_empty() {
        ctx.write_node(&empty_state());
    } else {
        for block in document.blocks() {
            ctx.write_node(&render_canvas_block(block));
        }
    }

    ctx.get_output()
}

/// One block wrapped with its editor affordances
pub fn render_canvas_block(block: &Block) -> Node {
    let mut content = project(block);
    if let Some(root) = content.as_element_mut() {
        mark_content(root, block);
    }

    Node::element("div")
        .with_class("element")
        .with_attr("id", &block.id)
        .with_attr("data-type", block.kind().tag())
        .with_attr("draggable", "true")
        .with_child(settings_controls())
        .with_child(content)
        .into()
}

fn mark_content(root: &mut Element, block: &Block) {
    match &block.attributes {
        Attributes::Button(button) => {
            if let Some(link) = root.children.first_mut().and_then(Node::as_element_mut) {
                link.set_attr("data-content", "");
                link.set_attr("data-href", &button.url);
            }
        }
        Attributes::Spacer(spacer) => {
            root.set_attr("data-content", "");
            if spacer.show_guide {
                let guide = Node::element("div")
                    .with_class("text-center text-gray-400 text-sm")
                    .with_child(Node::text(format!("Spacer ({})", spacer_guide_height(&spacer.height))));
                root.children.push(guide.into());
            }
        }
        _ => root.set_attr("data-content", ""),
    }
}

fn settings_controls() -> Element {
    Node::element("div")
        .with_class("element-settings")
        .with_child(control_button("move-btn bg-gray-500", "fas fa-arrows-alt").with_attr("title", "Drag to reorder"))
        .with_child(control_button("edit-btn bg-blue-500", "fas fa-edit"))
        .with_child(control_button("delete-btn bg-red-500", "fas fa-trash"))
}

fn control_button(kind: &str, icon: &str) -> Element {
    Node::element("button")
        .with_class(kind)
        .with_class("text-white px-2 py-1 rounded text-xs")
        .with_child(Node::element("i").with_class(icon))
}

fn empty_state() -> Node {
    Node::element("div")
        .with_class("text-center text-gray-500 py-16")
        .with_attr("id", EMPTY_STATE_ID)
        .with_child(Node::element("i").with_class("fas fa-mouse-pointer text-4xl mb-4"))
        .with_child(Node::element("p").with_child(Node::text(EMPTY_STATE_MESSAGE)))
        .into()
}
