use crate::core::surface::{Color, Stroke, Surface};
use crate::error::FxError;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a 2D canvas context. JS errors from individual draw
/// calls are discarded so a bad frame never stops the loop.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, FxError> {
        let id = canvas.id();
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| FxError::NoContext(id.clone()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext(id))?;
        Ok(Self { canvas, ctx })
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        let dash = js_sys::Array::new();
        if let Some([on, off]) = stroke.dash {
            dash.push(&JsValue::from_f64(on as f64));
            dash.push(&JsValue::from_f64(off as f64));
        }
        _ = self.ctx.set_line_dash(&dash);
        self.set_glow(stroke.shadow_blur, stroke.color);
    }

    fn set_glow(&self, blur: f32, color: Color) {
        self.ctx.set_shadow_blur(blur as f64);
        if blur > 0.0 {
            self.ctx.set_shadow_color(&color.to_css());
        } else {
            self.ctx.set_shadow_color("transparent");
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.canvas.set_width(width_px.max(1));
        self.canvas.set_height(height_px.max(1));
    }

    fn set_scale(&mut self, scale: f32) {
        let s = scale as f64;
        _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.set_glow(0.0, color);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32) {
        self.set_glow(glow, color);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color) {
        self.set_glow(0.0, color);
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.clip();
    }
}
