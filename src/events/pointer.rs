use crate::core::{Lens, ParticleField};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The field follows the pointer anywhere on the page, in coordinates
/// relative to its canvas. Leaving the window deactivates it.
pub fn wire_field_pointer(canvas: web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let Some(window) = web::window() else {
        return;
    };

    let field_move = field.clone();
    listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let local = input::client_pos(&ev) - input::rect_origin(&canvas);
        field_move.borrow_mut().pointer_mut().move_to(local);
    });

    listen(&window, "mouseout", move |ev: web::MouseEvent| {
        // Only leaving the document counts; moving between elements also fires mouseout.
        if ev.related_target().is_none() {
            field.borrow_mut().pointer_mut().leave();
        }
    });
}

/// Lens pointer, touch and leave handlers, all scoped to its canvas.
pub fn wire_lens_pointer(canvas: web::HtmlCanvasElement, lens: Rc<RefCell<Lens>>) {
    let canvas_move = canvas.clone();
    let lens_move = lens.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        lens_move
            .borrow_mut()
            .update_pointer(input::client_pos(&ev), input::rect_origin(&canvas_move));
    });

    let lens_leave = lens.clone();
    listen(&canvas, "pointerleave", move |_ev: web::PointerEvent| {
        lens_leave.borrow_mut().on_pointer_leave();
    });

    let lens_end = lens.clone();
    listen(&canvas, "touchend", move |_ev: web::TouchEvent| {
        lens_end.borrow_mut().on_pointer_leave();
    });

    // A tap engages the lens as well as a drag.
    wire_lens_touch(&canvas, "touchstart", lens.clone(), false);
    // touchmove must be non-passive so dragging the lens does not scroll the page.
    wire_lens_touch(&canvas, "touchmove", lens, true);
}

fn wire_lens_touch(
    canvas: &web::HtmlCanvasElement,
    kind: &str,
    lens: Rc<RefCell<Lens>>,
    block_scroll: bool,
) {
    let canvas_touch = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(client) = input::touch_client_pos(&ev) else {
            return;
        };
        let mut lens = lens.borrow_mut();
        lens.update_pointer(client, input::rect_origin(&canvas_touch));
        if block_scroll && lens.is_active() {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(!block_scroll);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
