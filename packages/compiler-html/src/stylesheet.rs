//! # Export Stylesheet
//!
//! Static CSS embedded in every exported email. Mail clients do not load
//! external utility frameworks, so each class token the registry can put on
//! exported markup has a literal rule here.

use crate::writer::{sanitize_css_value, Context};

/// Class token → declarations
const CLASS_RULES: &[(&str, &str)] = &[
    // Font size
    ("text-xl", "font-size: 1.25rem;"),
    ("text-2xl", "font-size: 1.5rem;"),
    ("text-3xl", "font-size: 1.875rem;"),
    ("text-4xl", "font-size: 2.25rem;"),
    ("text-sm", "font-size: 0.875rem;"),
    ("text-base", "font-size: 1rem;"),
    ("text-lg", "font-size: 1.125rem;"),
    ("font-bold", "font-weight: bold;"),
    ("leading-relaxed", "line-height: 1.625;"),
    // Alignment
    ("text-center", "text-align: center;"),
    ("text-left", "text-align: left;"),
    ("text-right", "text-align: right;"),
    // Text color
    ("text-gray-700", "color: #374151;"),
    ("text-gray-800", "color: #1f2937;"),
    ("text-black", "color: #000000;"),
    ("text-indigo-600", "color: #4f46e5;"),
    ("text-blue-600", "color: #2563eb;"),
    ("text-green-600", "color: #059669;"),
    ("text-red-600", "color: #dc2626;"),
    ("text-white", "color: #ffffff;"),
    // Sizing and placement
    ("w-full", "width: 100%;"),
    ("w-3/4", "width: 75%;"),
    ("w-1/2", "width: 50%;"),
    ("w-1/3", "width: 33.333333%;"),
    ("max-w-xs", "max-width: 20rem;"),
    ("max-w-sm", "max-width: 24rem;"),
    ("max-w-md", "max-width: 28rem;"),
    ("max-w-lg", "max-width: 32rem;"),
    ("max-w-xl", "max-width: 36rem;"),
    ("mx-auto", "margin-left: auto; margin-right: auto;"),
    ("mr-auto", "margin-right: auto;"),
    ("ml-auto", "margin-left: auto;"),
    ("rounded", "border-radius: 0.25rem;"),
    ("rounded-lg", "border-radius: 0.5rem;"),
    ("inline-block", "display: inline-block;"),
    // Spacing
    ("px-4", "padding-left: 1rem; padding-right: 1rem;"),
    ("px-6", "padding-left: 1.5rem; padding-right: 1.5rem;"),
    ("px-8", "padding-left: 2rem; padding-right: 2rem;"),
    ("py-2", "padding-top: 0.5rem; padding-bottom: 0.5rem;"),
    ("py-3", "padding-top: 0.75rem; padding-bottom: 0.75rem;"),
    ("py-4", "padding-top: 1rem; padding-bottom: 1rem;"),
    ("py-6", "padding-top: 1.5rem; padding-bottom: 1.5rem;"),
    ("py-8", "padding-top: 2rem; padding-bottom: 2rem;"),
    ("py-12", "padding-top: 3rem; padding-bottom: 3rem;"),
    ("my-2", "margin-top: 0.5rem; margin-bottom: 0.5rem;"),
    ("my-4", "margin-top: 1rem; margin-bottom: 1rem;"),
    ("my-6", "margin-top: 1.5rem; margin-bottom: 1.5rem;"),
    ("my-8", "margin-top: 2rem; margin-bottom: 2rem;"),
    // Button background
    ("bg-indigo-600", "background-color: #4f46e5;"),
    ("bg-blue-600", "background-color: #2563eb;"),
    ("bg-green-600", "background-color: #059669;"),
    ("bg-red-600", "background-color: #dc2626;"),
    ("bg-purple-600", "background-color: #9333ea;"),
    ("bg-gray-600", "background-color: #4b5563;"),
    ("bg-gray-100", "background-color: #f3f4f6;"),
    ("hover:bg-indigo-700", "background-color: #4338ca;"),
    ("hover:bg-blue-700", "background-color: #1d4ed8;"),
    ("hover:bg-green-700", "background-color: #047857;"),
    ("hover:bg-red-700", "background-color: #b91c1c;"),
    ("hover:bg-purple-700", "background-color: #7e22ce;"),
    ("hover:bg-gray-700", "background-color: #374151;"),
    // Borders
    ("border-collapse", "border-collapse: collapse;"),
    ("border", "border: 1px solid;"),
    ("border-0", "border: none;"),
    ("border-t", "border-top-width: 1px;"),
    ("border-t-2", "border-top-width: 2px;"),
    ("border-t-4", "border-top-width: 4px;"),
    ("border-dashed", "border-style: dashed;"),
    ("border-gray-300", "border-color: #d1d5db;"),
    ("border-gray-400", "border-color: #9ca3af;"),
    ("border-black", "border-color: #000000;"),
    ("border-blue-300", "border-color: #93c5fd;"),
    ("border-green-300", "border-color: #86efac;"),
    ("border-indigo-500", "border-color: #6366f1;"),
    ("border-red-400", "border-color: #f87171;"),
    ("border-green-400", "border-color: #4ade80;"),
    ("border-blue-400", "border-color: #60a5fa;"),
    // Lists
    ("list-disc", "list-style-type: disc;"),
    ("list-decimal", "list-style-type: decimal;"),
    ("list-square", "list-style-type: square;"),
    ("list-none", "list-style-type: none;"),
    ("list-inside", "list-style-position: inside;"),
];

/// Element selector → declarations
const ELEMENT_RULES: &[(&str, &str)] = &[
    ("a", "color: inherit; text-decoration: none;"),
    ("img", "max-width: 100%; height: auto; display: block;"),
    ("div", "margin: 8px 0;"),
    ("table", "border-collapse: collapse; width: 100%;"),
    ("th, td", "padding: 0.5rem 1rem;"),
    ("hr", "margin: 0; padding: 0;"),
    ("ul, ol", "margin: 0; padding-left: 1.25rem;"),
];

/// Whether the stylesheet has a rule for `class`
pub fn covers_class(class: &str) -> bool {
    CLASS_RULES.iter().any(|(token, _)| *token == class)
}

/// Every class token with a rule, in stylesheet order
pub fn classes() -> impl Iterator<Item = &'static str> {
    CLASS_RULES.iter().map(|(token, _)| *token)
}

/// CSS selector for a class token.
///
/// `/` and `:` are escaped; a `hover:` variant becomes a `:hover` rule.
pub fn class_selector(class: &str) -> String {
    let escaped = class.replace('/', "\\/").replace(':', "\\:");
    if class.starts_with("hover:") {
        format!(".{}:hover", escaped)
    } else {
        format!(".{}", escaped)
    }
}

/// Write the full `<style>` block
pub(crate) fn write_style(ctx: &mut Context, background_color: &str, container_width: u32) {
    ctx.add_line("<style>");
    ctx.indent();

    ctx.add_line(
        "body { margin: 0; padding: 0; font-family: Arial, sans-serif; line-height: 1.6; background-color: #f4f4f4; }",
    );
    ctx.add_line(&format!(
        ".email-container {{ max-width: {}px; margin: 0 auto; background-color: {}; padding: 20px; }}",
        container_width,
        sanitize_css_value(background_color)
    ));

    for (class, declarations) in CLASS_RULES {
        ctx.add_line(&format!("{} {{ {} }}", class_selector(class), declarations));
    }

    for (selector, declarations) in ELEMENT_RULES {
        ctx.add_line(&format!("{} {{ {} }}", selector, declarations));
    }

    ctx.dedent();
    ctx.add_line("</style>");
}
