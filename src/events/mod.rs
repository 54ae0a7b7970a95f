pub mod pointer;

pub use pointer::*;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Call `on_resize` now and on every window resize. Not debounced: each
/// event re-derives all size-dependent state immediately.
pub fn wire_resize(mut on_resize: impl FnMut() + 'static) {
    on_resize();
    let resize_closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
