use crate::constants::{LENS_INSTRUCTIONS_ID, SCANNER_RING_ID};
use crate::core::Affordance;
use wasm_bindgen::JsCast;
use web_sys as web;

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Scanner ring and instruction text around the lens canvas, resolved once
/// at mount. Either element may be absent.
pub struct Overlay {
    ring: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    last: Option<Affordance>,
}

impl Overlay {
    pub fn lookup(document: &web::Document) -> Self {
        Self {
            ring: html_element(document, SCANNER_RING_ID),
            hint: html_element(document, LENS_INSTRUCTIONS_ID),
            last: None,
        }
    }

    /// Sync both elements with the lens state; unchanged state writes nothing.
    pub fn apply(&mut self, affordance: &Affordance) {
        if self.last.as_ref() == Some(affordance) {
            return;
        }
        self.last = Some(*affordance);

        if let Some(ring) = &self.ring {
            let style = ring.style();
            if affordance.ring_visible {
                _ = style.set_property("opacity", "1");
                _ = style.set_property("left", &format!("{:.1}px", affordance.ring_center.x));
                _ = style.set_property("top", &format!("{:.1}px", affordance.ring_center.y));
            } else {
                _ = style.set_property("opacity", "0");
            }
        }
        if let Some(hint) = &self.hint {
            let opacity = if affordance.instructions_visible { "1" } else { "0" };
            _ = hint.style().set_property("opacity", opacity);
        }
    }
}
