use letterpress_compiler_html::{compile_to_html, render_canvas, CompileOptions};
use letterpress_editor::{
    notification_for, BlockBounds, ClipboardError, EditSession, FormValues, Notification,
    PersistError, StateStore,
};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// `window.localStorage`, when the page has one
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable, edits will not be saved");
        }
        Self { storage }
    }
}

impl StateStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(storage_error),
            None => Ok(None),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PersistError::Storage("localStorage unavailable".to_string()))?;
        storage.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> PersistError {
    PersistError::Storage(format!("{:?}", err))
}

/// Hand `text` to a JS clipboard callback.
///
/// The callback fails by throwing, returning `false`, or returning a promise
/// that rejects or resolves to `false`.
async fn write_via(callback: &js_sys::Function, text: &str) -> Result<(), ClipboardError> {
    let returned = callback
        .call1(&JsValue::NULL, &JsValue::from_str(text))
        .map_err(clipboard_error)?;

    let settled = match returned.dyn_into::<js_sys::Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map_err(clipboard_error)?,
        Err(value) => value,
    };

    if settled.as_bool() == Some(false) {
        return Err(ClipboardError("rejected".to_string()));
    }
    Ok(())
}

fn clipboard_error(err: JsValue) -> ClipboardError {
    ClipboardError(format!("{:?}", err))
}

/// Try `primary`, then `fallback`
async fn copy_with_js_fallback(
    text: &str,
    primary: &js_sys::Function,
    fallback: &js_sys::Function,
) -> Notification {
    let outcome = match write_via(primary, text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!(error = %err, "Primary clipboard failed, trying fallback");
            write_via(fallback, text).await
        }
    };
    notification_for(&outcome)
}

/// Store-agnostic half of the bindings; everything crosses as JSON strings.
pub struct Builder<S: StateStore> {
    session: EditSession<S>,
    options: CompileOptions,
}

impl<S: StateStore> Builder<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: EditSession::restore(store),
            options: CompileOptions::default(),
        }
    }

    pub fn session(&self) -> &EditSession<S> {
        &self.session
    }

    pub fn dispatch(&mut self, intent: &str) -> Result<String, String> {
        let outcome = self.session.dispatch_json(intent).map_err(|e| e.to_string())?;
        to_json(&outcome)
    }

    pub fn canvas_html(&self) -> String {
        render_canvas(self.session.document(), &self.options)
    }

    pub fn export_html(&self) -> String {
        compile_to_html(self.session.document(), &self.options)
    }

    pub fn form_values(&self, block_id: &str) -> Result<String, String> {
        let values = self
            .session
            .form_values(block_id)
            .ok_or_else(|| format!("Block not found: {}", block_id))?;
        to_json(&values)
    }

    pub fn canvas_form(&self) -> Result<String, String> {
        to_json(&self.session.canvas_form())
    }

    pub fn submit_canvas_form(&mut self, values: &str) -> Result<String, String> {
        let values: FormValues = serde_json::from_str(values).map_err(|e| e.to_string())?;
        let outcome = self
            .session
            .submit_canvas_form(&values)
            .map_err(|e| e.to_string())?;
        to_json(&outcome)
    }

    pub fn begin_drag(&mut self, block_id: &str) -> Result<(), String> {
        self.session.begin_drag(block_id).map_err(|e| e.to_string())
    }

    /// `bounds` is a JSON array of `{blockId, top, height}`
    pub fn drag_over(&mut self, pointer_y: f64, bounds: &str) -> Result<String, String> {
        let bounds: Vec<BlockBounds> = serde_json::from_str(bounds).map_err(|e| e.to_string())?;
        let order = self
            .session
            .drag_over(pointer_y, &bounds)
            .map_err(|e| e.to_string())?;
        to_json(&order)
    }

    pub fn drop_drag(&mut self) -> Result<String, String> {
        let outcome = self.session.drop_drag().map_err(|e| e.to_string())?;
        to_json(&outcome)
    }

    pub fn cancel_drag(&mut self) -> Result<String, String> {
        to_json(&self.session.cancel_drag())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Editor session persisted to `localStorage`
#[wasm_bindgen]
pub struct EmailBuilder {
    inner: Builder<LocalStorageStore>,
}

#[wasm_bindgen]
impl EmailBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Builder::new(LocalStorageStore::open()),
        }
    }

    /// Apply a JSON intent, returning the dispatch outcome as JSON
    pub fn dispatch(&mut self, intent: &str) -> Result<String, JsValue> {
        self.inner.dispatch(intent).map_err(js_error)
    }

    #[wasm_bindgen(js_name = canvasHtml)]
    pub fn canvas_html(&self) -> String {
        self.inner.canvas_html()
    }

    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self) -> String {
        self.inner.export_html()
    }

    #[wasm_bindgen(js_name = formValues)]
    pub fn form_values(&self, block_id: &str) -> Result<String, JsValue> {
        self.inner.form_values(block_id).map_err(js_error)
    }

    #[wasm_bindgen(js_name = canvasForm)]
    pub fn canvas_form(&self) -> Result<String, JsValue> {
        self.inner.canvas_form().map_err(js_error)
    }

    #[wasm_bindgen(js_name = submitCanvasForm)]
    pub fn submit_canvas_form(&mut self, values: &str) -> Result<String, JsValue> {
        self.inner.submit_canvas_form(values).map_err(js_error)
    }

    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, block_id: &str) -> Result<(), JsValue> {
        self.inner.begin_drag(block_id).map_err(js_error)
    }

    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self, pointer_y: f64, bounds: &str) -> Result<String, JsValue> {
        self.inner.drag_over(pointer_y, bounds).map_err(js_error)
    }

    #[wasm_bindgen(js_name = dropDrag)]
    pub fn drop_drag(&mut self) -> Result<String, JsValue> {
        self.inner.drop_drag().map_err(js_error)
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) -> Result<String, JsValue> {
        self.inner.cancel_drag().map_err(js_error)
    }

    /// Copy the export via `primary`, falling back to `fallback`.
    ///
    /// Resolves to the notification JSON once the copy has settled.
    #[wasm_bindgen(js_name = copyExport)]
    pub fn copy_export(&self, primary: js_sys::Function, fallback: js_sys::Function) -> js_sys::Promise {
        let html = self.inner.export_html();
        future_to_promise(async move {
            let notification = copy_with_js_fallback(&html, &primary, &fallback).await;
            to_json(&notification).map(JsValue::from).map_err(js_error)
        })
    }
}

impl Default for EmailBuilder {
    fn default() -> Self {
        Self::new()
    }
}
