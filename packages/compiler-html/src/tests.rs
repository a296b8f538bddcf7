use crate::stylesheet::covers_class;
use crate::{compile_to_html, render_canvas, CompileOptions};
use letterpress_editor::markup::{project, Node};
use letterpress_editor::palette::STYLED_PALETTES;
use letterpress_editor::{
    from_json, BlockKind, Document, FormValues, Mutation, MutationResult,
};

const EDITOR_ARTIFACTS: &[&str] = &[
    "element-settings",
    "class=\"element",
    "data-type",
    "draggable",
    "data-content",
    "data-href",
    "id=\"",
    "emptyState",
    "move-btn",
    "edit-btn",
    "delete-btn",
    "Spacer (",
];

fn apply(doc: &Document, mutation: Mutation) -> Document {
    let MutationResult { document, .. } = mutation.apply(doc).unwrap();
    document
}

fn form(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn body_of(html: &str) -> &str {
    let start = html.find("<body>").expect("body");
    &html[start..]
}

fn collect_classes(node: &Node, out: &mut Vec<String>) {
    if let Node::Element(element) = node {
        out.extend(element.classes.iter().cloned());
        for child in &element.children {
            collect_classes(child, out);
        }
    }
}

#[test]
fn test_compile_default_heading() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Heading });
    let html = compile_to_html(&doc, &CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<h2 class=\"font-bold text-2xl text-gray-800 text-left\">Your Heading Here</h2>"));
    assert!(!html.contains("data-"));
}

#[test]
fn test_compile_numbered_list() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::List });
    let doc = apply(
        &doc,
        Mutation::Edit {
            block_id: "list_0".to_string(),
            values: form(&[("items", "A\nB"), ("listType", "ol")]),
        },
    );

    let html = compile_to_html(&doc, &CompileOptions::default());
    let body = body_of(&html);

    assert!(body.contains("<ol class=\"list-disc list-inside text-gray-700\">"));
    assert!(!body.contains("<ul"));
    assert_eq!(body.matches("<li>").count(), 2);

    let a = body.find("<li>A</li>").unwrap();
    let b = body.find("<li>B</li>").unwrap();
    assert!(a < b);
}

#[test]
fn test_compile_background_color() {
    let doc = apply(
        &Document::new(),
        Mutation::SetCanvasBackground { value: "#123456".to_string() },
    );
    let html = compile_to_html(&doc, &CompileOptions::default());

    assert!(html.contains("background-color: #123456; padding: 20px;"));
    assert!(html.contains("<div class=\"email-container\" style=\"background-color: #123456;\">"));
}

#[test]
fn test_compile_record_without_background() {
    let doc = from_json(r#"{ "content": [{ "id": "text_0", "type": "text" }] }"#);
    let html = compile_to_html(&doc, &CompileOptions::default());

    assert!(html.contains("<div class=\"email-container\" style=\"background-color: #ffffff;\">"));
    assert!(html.contains("Your text content goes here."));
}

#[test]
fn test_compile_after_removing_only_block() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Image });
    let doc = apply(&doc, Mutation::Delete { block_id: "image_0".to_string() });

    let options = CompileOptions { pretty: false, ..CompileOptions::default() };
    let html = compile_to_html(&doc, &options);

    assert!(html.contains("<div class=\"email-container\" style=\"background-color: #ffffff;\"></div>"));
    assert!(!html.contains("emptyState"));
    assert!(!html.contains("Drag elements here"));
}

#[test]
fn test_compile_is_idempotent() {
    let mut doc = Document::new();
    for kind in BlockKind::ALL {
        doc.append(kind);
    }

    let options = CompileOptions::default();
    assert_eq!(compile_to_html(&doc, &options), compile_to_html(&doc, &options));
}

#[test]
fn test_no_editor_artifacts_for_any_kind() {
    for kind in BlockKind::ALL {
        let doc = apply(&Document::new(), Mutation::Add { block_type: kind });
        let html = compile_to_html(&doc, &CompileOptions::default());
        let body = body_of(&html);

        for artifact in EDITOR_ARTIFACTS {
            assert!(!body.contains(artifact), "{} export contains {:?}", kind, artifact);
        }
    }
}

#[test]
fn test_custom_colors_survive_export() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Button });
    let doc = apply(
        &doc,
        Mutation::Edit {
            block_id: "button_0".to_string(),
            values: form(&[("color", "custom"), ("customColor", "#00aa55")]),
        },
    );

    let html = compile_to_html(&doc, &CompileOptions::default());
    assert!(html.contains("style=\"background-color: #00aa55; border-color: #00aa55;\""));
    assert!(!body_of(&html).contains("bg-indigo-600"));
}

#[test]
fn test_text_is_escaped() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Text });
    let doc = apply(
        &doc,
        Mutation::Edit {
            block_id: "text_0".to_string(),
            values: form(&[("text", "<script>alert(1)</script> & more")]),
        },
    );

    let html = compile_to_html(&doc, &CompileOptions::default());
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_compact_output() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Divider });
    let options = CompileOptions { pretty: false, ..CompileOptions::default() };
    let html = compile_to_html(&doc, &options);

    assert!(!html.contains('\n'));
    assert!(html.contains("<div><hr class=\"border-t-2 border-gray-300 my-4\" /></div>"));
}

#[test]
fn test_table_content_exported_verbatim() {
    let raw = "<tr><td>Hello\nWorld</td></tr>\n\n<tr><td><pre>a\n  b</pre></td></tr>";
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Table });
    let doc = apply(
        &doc,
        Mutation::Edit { block_id: "table_0".to_string(), values: form(&[("content", raw)]) },
    );

    for pretty in [true, false] {
        let options = CompileOptions { pretty, ..CompileOptions::default() };
        let html = compile_to_html(&doc, &options);
        assert!(html.contains(raw), "pretty={} lost table content:\n{}", pretty, html);
    }
}

#[test]
fn test_custom_title() {
    let options = CompileOptions { title: "Spring & Summer".to_string(), ..CompileOptions::default() };
    let html = compile_to_html(&Document::new(), &options);
    assert!(html.contains("<title>Spring &amp; Summer</title>"));
}

#[test]
fn test_stylesheet_covers_every_palette_token() {
    for palette in STYLED_PALETTES {
        for class in palette.class_tokens() {
            assert!(covers_class(class), "{} token {} has no rule", palette.name, class);
        }
    }
}

#[test]
fn test_stylesheet_covers_projected_classes() {
    for kind in BlockKind::ALL {
        let mut classes = Vec::new();
        collect_classes(&project(&letterpress_editor::default_block(kind, 0)), &mut classes);

        for class in classes {
            assert!(covers_class(&class), "{} uses {} without a rule", kind, class);
        }
    }

    for class in ["bg-gray-100", "px-4", "py-2", "border", "border-gray-300", "text-left"] {
        assert!(covers_class(class), "table content uses {} without a rule", class);
    }
}

#[test]
fn test_canvas_shows_empty_state() {
    let html = render_canvas(&Document::new(), &CompileOptions::default());
    assert!(html.contains("id=\"emptyState\""));
    assert!(html.contains("Drag elements here to build your email"));
}

#[test]
fn test_canvas_decorates_blocks() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Button });
    let doc = apply(&doc, Mutation::Add { block_type: BlockKind::Spacer });
    let html = render_canvas(&doc, &CompileOptions::default());

    assert!(html.contains(
        "<div class=\"element\" id=\"button_0\" data-type=\"button\" draggable=\"true\">"
    ));
    assert!(html.contains("title=\"Drag to reorder\""));
    assert!(html.contains("data-content=\"\" data-href=\"#\""));
    assert!(html.contains("Spacer (32px)"));
    assert!(!html.contains("emptyState"));
}

#[test]
fn test_canvas_hides_spacer_guide_when_disabled() {
    let doc = apply(&Document::new(), Mutation::Add { block_type: BlockKind::Spacer });
    let doc = apply(
        &doc,
        Mutation::Edit {
            block_id: "spacer_0".to_string(),
            values: form(&[("showGuide", "false")]),
        },
    );

    let html = render_canvas(&doc, &CompileOptions::default());
    assert!(html.contains("data-type=\"spacer\""));
    assert!(!html.contains("Spacer ("));
}
