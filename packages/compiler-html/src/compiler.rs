use crate::stylesheet::write_style;
use crate::writer::{sanitize_css_value, Context};
use html_escape::encode_text;
use letterpress_editor::markup::{project, Node};
use letterpress_editor::Document;
use tracing::debug;

/// Options for HTML compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document `<title>`
    pub title: String,
    /// Max width of the email container in pixels
    pub container_width: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Email Template".to_string(),
            container_width: 600,
        }
    }
}

/// Compile a document to a standalone email HTML file.
///
/// Built from the block model alone, so nothing from the editing surface
/// can leak into the output.
pub fn compile_to_html(document: &Document, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options.pretty, &options.indent);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(document, options, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line(&format!(
        "<div class=\"email-container\" style=\"background-color: {};\">",
        html_escape::encode_double_quoted_attribute(&sanitize_css_value(document.background_color()))
    ));
    ctx.indent();

    for block in document.blocks() {
        let wrapper: Node = Node::element("div").with_child(project(block)).into();
        ctx.write_node(&wrapper);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    let html = ctx.get_output();
    debug!(blocks = document.len(), bytes = html.len(), "Compiled email");
    html
}

fn compile_head(document: &Document, options: &CompileOptions, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", encode_text(&options.title)));
    write_style(ctx, document.background_color(), options.container_width);

    ctx.dedent();
    ctx.add_line("</head>");
}
