//! requestAnimationFrame loops

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::util;

/// Schedule `f` for the next animation frame
pub fn request_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    util::window()?.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Run `body` once per animation frame until it returns `false`
///
/// The closure owns a handle to itself so it can reschedule; once `body`
/// declines, the handle is dropped and the closure is freed.
pub fn run_loop<F>(mut body: F) -> Result<(), JsValue>
where
    F: FnMut() -> bool + 'static,
{
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !body() {
            let _ = f.borrow_mut().take();
            return;
        }
        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = request_frame(callback) {
                util::log(&format!("[frames] failed to schedule frame: {:?}", e));
            }
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    match first.as_ref() {
        Some(callback) => request_frame(callback).map(|_| ()),
        None => Ok(()),
    }
}

/// Run `f` once on the next animation frame
pub fn next_frame<F: FnOnce() + 'static>(f: F) -> Result<(), JsValue> {
    let closure = Closure::once(f);
    request_frame(&closure)?;
    closure.forget();
    Ok(())
}
