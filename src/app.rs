use crate::constants::{FIELD_CANVAS_ID, LENS_CANVAS_ID};
use crate::core::{FieldConfig, Lens, LensConfig, ParticleField};
use crate::dom;
use crate::error::FxError;
use crate::events;
use crate::frame::{self, FieldFrame, LensFrame};
use crate::overlay::Overlay;
use crate::page;
use crate::render::CanvasSurface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flux-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each component is optional on a given page.
    if let Err(e) = mount_field(&document) {
        log::warn!("[field] skipped: {e}");
    }
    if let Err(e) = mount_lens(&document) {
        log::warn!("[lens] skipped: {e}");
    }
    page::wire_all(&document);
    Ok(())
}

fn mount_field(document: &web::Document) -> Result<(), FxError> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, FIELD_CANVAS_ID)?;
    let config = FieldConfig::default().with_overrides(|k| dom::data_attr(&canvas, k));
    let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas.clone())?));
    let field = Rc::new(RefCell::new(ParticleField::from_config(config)));

    {
        let canvas = canvas.clone();
        let field = field.clone();
        let surface = surface.clone();
        events::wire_resize(move || {
            let w = canvas.offset_width() as f32;
            let h = canvas.offset_height() as f32;
            field.borrow_mut().resize(w, h, &mut *surface.borrow_mut());
        });
    }
    events::wire_field_pointer(canvas, field.clone());

    log::info!(
        "[field] mounted: {} particles, radius {}",
        field.borrow().particles().len(),
        field.borrow().pointer().radius
    );
    frame::start_loop(FieldFrame { field, surface });
    Ok(())
}

fn mount_lens(document: &web::Document) -> Result<(), FxError> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, LENS_CANVAS_ID)?;
    let config = LensConfig::default().with_overrides(|k| dom::data_attr(&canvas, k));
    let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas.clone())?));
    let (w, h) = dom::container_size(&canvas);
    let lens = Rc::new(RefCell::new(Lens::from_config(config, Vec2::new(w, h))));

    {
        let canvas = canvas.clone();
        let lens = lens.clone();
        let surface = surface.clone();
        events::wire_resize(move || {
            let (w, h) = dom::container_size(&canvas);
            let dpr = web::window().map_or(1.0, |win| win.device_pixel_ratio()) as f32;
            dom::set_style(&canvas, "width", &format!("{w}px"));
            dom::set_style(&canvas, "height", &format!("{h}px"));
            lens.borrow_mut().resize(w, h, dpr, &mut *surface.borrow_mut());
        });
    }
    events::wire_lens_pointer(canvas, lens.clone());

    log::info!(
        "[lens] mounted: {} bars, {} trend points",
        lens.borrow().bars().len(),
        lens.borrow().trend().len()
    );
    frame::start_loop(LensFrame {
        lens,
        surface,
        overlay: Overlay::lookup(document),
    });
    Ok(())
}
