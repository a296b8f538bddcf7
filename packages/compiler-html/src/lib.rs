//! # Letterpress HTML Compiler
//!
//! Two renderings of one document:
//!
//! - `compile_to_html`: the standalone email artifact. Deterministic, no
//!   editor artifacts, embedded stylesheet.
//! - `render_canvas`: the editing surface markup with per-block controls.

mod canvas;
mod compiler;
pub mod stylesheet;
mod writer;

pub use canvas::{render_canvas, render_canvas_block, EMPTY_STATE_ID, EMPTY_STATE_MESSAGE};
pub use compiler::{compile_to_html, CompileOptions};

#[cfg(test)]
mod tests;
