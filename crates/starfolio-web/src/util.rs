//! Shared utilities for the web crate
//!
//! Console logging and the DOM lookups every listener needs. Lookups return
//! `Result<_, JsValue>` so callers can log the failure and disable only the
//! affected feature.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// The global `window`
pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The page's `document`
pub fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// The page's `<body>`
pub fn body() -> Result<web_sys::HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// First element matching `selector`, as an `HtmlElement`
pub fn query(selector: &str) -> Result<web_sys::HtmlElement, JsValue> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches '{}'", selector)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not an HTML element", selector)))
}

/// Element with id `id`, cast to `T`
pub fn by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has an unexpected element type", id)))
}

/// All HTML elements matching `selector`
pub fn query_all(selector: &str) -> Result<Vec<web_sys::HtmlElement>, JsValue> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect())
}

/// Current viewport size in CSS pixels
pub fn viewport_size() -> Result<(f32, f32), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

/// Milliseconds since the page started, for frame timing
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Register `handler` for `event` on `target` for the page's lifetime
pub fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`
pub fn set_timeout<F: FnOnce() + 'static>(delay_ms: i32, f: F) -> Result<(), JsValue> {
    let closure = Closure::once(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    closure.forget();
    Ok(())
}

/// Log a setup failure for one feature; the rest of the page keeps working
pub fn report(subsystem: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log(&format!("[{}] disabled: {:?}", subsystem, e));
    }
}
