#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use letterpress_wasm::EmailBuilder;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_builder_in_browser() {
    let mut builder = EmailBuilder::new();
    builder.dispatch(r#"{"intent":"resetAll"}"#).unwrap();
    builder
        .dispatch(r#"{"intent":"add","blockType":"divider"}"#)
        .unwrap();

    assert!(builder.export_html().contains("<hr"));
    assert!(builder.canvas_html().contains("draggable=\"true\""));
}

#[wasm_bindgen_test]
fn test_state_survives_reload() {
    let mut builder = EmailBuilder::new();
    builder.dispatch(r#"{"intent":"resetAll"}"#).unwrap();
    builder
        .dispatch(r#"{"intent":"add","blockType":"spacer"}"#)
        .unwrap();

    let reloaded = EmailBuilder::new();
    assert!(reloaded.canvas_html().contains("Spacer (32px)"));
}

fn rejecting_clipboard() -> Function {
    Function::new_with_args("text", "return Promise.reject(new Error('denied'))")
}

fn recording_clipboard() -> Function {
    Function::new_with_args("text", "globalThis.__copiedExport = text; return true")
}

async fn copy(builder: &EmailBuilder, primary: Function, fallback: Function) -> String {
    let settled = JsFuture::from(builder.copy_export(primary, fallback))
        .await
        .unwrap();
    settled.as_string().unwrap()
}

#[wasm_bindgen_test]
async fn test_rejected_primary_falls_back() {
    let mut builder = EmailBuilder::new();
    builder.dispatch(r#"{"intent":"resetAll"}"#).unwrap();
    builder
        .dispatch(r#"{"intent":"add","blockType":"button"}"#)
        .unwrap();

    let notification = copy(&builder, rejecting_clipboard(), recording_clipboard()).await;
    assert!(notification.contains(r#""kind":"success""#));

    let copied = Reflect::get(&js_sys::global(), &JsValue::from_str("__copiedExport")).unwrap();
    assert_eq!(copied.as_string(), Some(builder.export_html()));
}

#[wasm_bindgen_test]
async fn test_both_clipboards_rejected() {
    let builder = EmailBuilder::new();

    let notification = copy(&builder, rejecting_clipboard(), rejecting_clipboard()).await;
    assert!(notification.contains(r#""kind":"error""#));
    assert!(notification.contains("Failed to copy template"));
}
