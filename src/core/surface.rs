//! Drawing-surface abstraction used by both animation components.
//!
//! Components render through the [`Surface`] trait so the per-frame code is
//! identical on the web (`render::CanvasSurface`) and in host tests
//! ([`RecordingSurface`]).

use glam::Vec2;
use std::fmt;

/// Straight RGBA color. `a` is an opacity in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue with a different opacity.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string accepted by the 2D canvas API.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Site palette.
pub mod palette {
    use super::Color;

    pub const ACCENT: Color = Color::rgb(0xFF, 0xB8, 0x00);
    pub const MUTED: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const BULL: Color = Color::rgb(0x2E, 0xCC, 0x71);
    pub const BEAR: Color = Color::rgb(0xE7, 0x4C, 0x3C);
    pub const LENS_BG: Color = Color::rgb(0x0B, 0x0E, 0x14);
    pub const GRID: Color = Color::rgba(255, 255, 255, 0.04);
    pub const LENS_GRID: Color = Color::rgba(255, 184, 0, 0.08);
    pub const TEXT: Color = Color::rgba(255, 255, 255, 0.85);
}

/// Line styling for stroked primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
    pub shadow_blur: f32,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
            shadow_blur: 0.0,
        }
    }

    pub fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn glow(mut self, blur: f32) -> Self {
        self.shadow_blur = blur;
        self
    }
}

/// Minimal 2D immediate-mode drawing API.
///
/// Coordinates are logical pixels; `set_scale` maps them onto the backing
/// store. Implementations must never fail loudly: a failed draw call is
/// dropped so the frame loop keeps running.
pub trait Surface {
    /// Resize the backing store in device pixels.
    fn resize(&mut self, width_px: u32, height_px: u32);
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f32);
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke);
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color);
    fn save(&mut self);
    fn restore(&mut self);
    /// Intersect the clip region with a circle; undone by `restore`.
    fn clip_circle(&mut self, center: Vec2, radius: f32);
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Resize(u32, u32),
    Scale(f32),
    Clear(f32, f32),
    FillRect { origin: Vec2, size: Vec2, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color, glow: f32 },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    Text { text: String, pos: Vec2 },
    Save,
    Restore,
    ClipCircle { center: Vec2, radius: f32 },
}

/// Surface that records every call instead of drawing. Used by host tests
/// and handy for inspecting a frame.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far (typically between frames).
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn clips(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::ClipCircle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, &Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Line { from, to, stroke } => Some((*from, *to, stroke)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::FillCircle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.commands.push(DrawCmd::Resize(width_px, height_px));
    }

    fn set_scale(&mut self, scale: f32) {
        self.commands.push(DrawCmd::Scale(scale));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCmd::Clear(width, height));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCmd::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn polyline(&mut self, points: &[Vec2], stroke: &Stroke) {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, _font: &str, _color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCmd::ClipCircle { center, radius });
    }
}
