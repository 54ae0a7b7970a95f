use crate::core::{FrameHandler, FrameLoop, InstantClock, Lens, ParticleField};
use crate::overlay::Overlay;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Particle field bound to its canvas.
pub struct FieldFrame {
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
}

impl FrameHandler for FieldFrame {
    fn frame(&mut self, _dt: f32) {
        let mut surface = self.surface.borrow_mut();
        self.field.borrow_mut().render_frame(&mut *surface);
    }
}

/// Lens bound to its canvas; also pushes the affordance state to the DOM.
pub struct LensFrame {
    pub lens: Rc<RefCell<Lens>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
    pub overlay: Overlay,
}

impl FrameHandler for LensFrame {
    fn frame(&mut self, dt: f32) {
        let affordance = {
            let mut lens = self.lens.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            lens.render_frame(dt, &mut *surface);
            lens.affordance()
        };
        self.overlay.apply(&affordance);
    }
}

/// Drive `handler` from requestAnimationFrame until the loop is stopped.
///
/// The returned handle controls the loop; dropping it does not stop it.
pub fn start_loop<H: FrameHandler + 'static>(handler: H) -> Rc<RefCell<FrameLoop<InstantClock>>> {
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(InstantClock::default())));
    frame_loop.borrow_mut().start();

    let handler = RefCell::new(handler);
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let again = loop_tick.borrow_mut().tick(&mut *handler.borrow_mut());
        if !again {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
    frame_loop
}
