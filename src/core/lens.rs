//! "Chaos to clarity" lens.
//!
//! A field of drifting candle-like bars fills the canvas. While the pointer
//! is engaged, a circular clip centred on the (smoothed) pointer reveals a
//! clean scrolling trend line with annotated markers.

use crate::core::config::LensConfig;
use crate::core::constants::*;
use crate::core::pointer::{client_to_local, LensPointer};
use crate::core::surface::{palette, Color, Stroke, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f64::consts::TAU;

const STATUS_FONT: &str = "600 11px 'JetBrains Mono', monospace";
const LABEL_FONT: &str = "700 10px 'JetBrains Mono', monospace";

/// `time * rate` reduced to one turn in `f64` before narrowing to `f32`.
#[inline]
fn phase(time: f64, rate: f32) -> f32 {
    (time * rate as f64).rem_euclid(TAU) as f32
}

/// Decorative candle drifting leftward across the background.
#[derive(Clone, Debug, PartialEq)]
pub struct ChaosBar {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub wick: f32,
    pub speed: f32,
    pub color: Color,
}

impl ChaosBar {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let x = rng.gen::<f32>() * bounds.x.max(0.0);
        let y = bounds.y.max(0.0) * (0.1 + rng.gen::<f32>() * 0.8);
        let height = rng.gen_range(6.0..40.0);
        let base = if rng.gen_bool(0.5) {
            palette::BULL
        } else {
            palette::BEAR
        };
        Self {
            pos: Vec2::new(x, y),
            width: rng.gen_range(3.0..7.0),
            height,
            wick: height + rng.gen_range(4.0..16.0),
            speed: rng.gen_range(0.2..1.2),
            color: base.with_alpha(rng.gen_range(0.15..0.45)),
        }
    }

    /// Drift left by `speed`; once past the left margin, re-enter at the
    /// right edge. Only `pos.x` changes.
    pub fn advance(&mut self, canvas_width: f32) {
        self.pos.x -= self.speed;
        if self.pos.x < -BAR_WRAP_MARGIN {
            self.pos.x = canvas_width + BAR_WRAP_MARGIN;
        }
    }

    /// Vertical position after the time/position wobble.
    pub fn rendered_y(&self, time: f64) -> f32 {
        self.pos.y
            + (phase(time, BAR_WOBBLE_TIME_RATE) + self.pos.x * BAR_WOBBLE_X_RATE).sin()
                * BAR_WOBBLE_AMPLITUDE
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, time: f64) {
        let y = self.rendered_y(time);
        let cx = self.pos.x + self.width * 0.5;
        let wick = Stroke::solid(self.color, 1.0);
        surface.line(
            Vec2::new(cx, y - self.wick * 0.5),
            Vec2::new(cx, y + self.wick * 0.5),
            &wick,
        );
        surface.fill_rect(
            Vec2::new(self.pos.x, y - self.height * 0.5),
            Vec2::new(self.width, self.height),
            self.color,
        );
    }
}

/// Vertex of the precomputed trend path. `y` is an offset from the vertical
/// centre of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    pub x: f32,
    pub y: f32,
}

/// Clamped random walk with a sinusoid layered on top.
pub fn generate_trend<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<TrendPoint> {
    let mut walk = 0.0f32;
    (0..count)
        .map(|i| {
            walk = (walk + rng.gen_range(-1.0..1.0) * TREND_WALK_STEP)
                .clamp(-TREND_MAX_OFFSET, TREND_MAX_OFFSET);
            let wave = (i as f32 * TREND_WAVE_RATE).sin() * TREND_WAVE_AMPLITUDE;
            TrendPoint {
                x: i as f32 * TREND_SPACING,
                y: walk + wave,
            }
        })
        .collect()
}

/// Horizontal sub-spacing shift of the trend line at `time`. Periodic with
/// period `TREND_SPACING / scroll_speed`.
#[inline]
pub fn trend_shift(time: f64, scroll_speed: f32) -> f32 {
    (time * scroll_speed as f64).rem_euclid(TREND_SPACING as f64) as f32
}

/// Index of the trend point drawn at the left edge at `time`.
#[inline]
pub fn trend_start_index(time: f64, scroll_speed: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let steps = (time * scroll_speed as f64 / TREND_SPACING as f64).floor().max(0.0);
    (steps as u64 % count as u64) as usize
}

/// Visibility of the DOM affordances around the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affordance {
    pub ring_visible: bool,
    pub ring_center: Vec2,
    pub instructions_visible: bool,
}

pub struct Lens {
    config: LensConfig,
    size: Vec2,
    dpr: f32,
    time: f64,
    bars: Vec<ChaosBar>,
    trend: Vec<TrendPoint>,
    pointer: LensPointer,
    rng: StdRng,
}

impl Lens {
    /// Build the lens and its decorative data for a canvas of `size`.
    pub fn new<R: Rng + ?Sized>(config: LensConfig, rng: &mut R, size: Vec2) -> Self {
        let bars = (0..config.bar_count)
            .map(|_| ChaosBar::random(rng, size))
            .collect();
        let trend = generate_trend(rng, TREND_POINT_COUNT);
        Self {
            config,
            size,
            dpr: 1.0,
            time: 0.0,
            bars,
            trend,
            pointer: LensPointer::at(size * 0.5),
            rng: StdRng::seed_from_u64(rng.gen()),
        }
    }

    pub fn from_config(config: LensConfig, size: Vec2) -> Self {
        let mut rng = config.rng();
        Self::new(config, &mut rng, size)
    }

    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn bars(&self) -> &[ChaosBar] {
        &self.bars
    }

    pub fn trend(&self) -> &[TrendPoint] {
        &self.trend
    }

    pub fn pointer(&self) -> &LensPointer {
        &self.pointer
    }

    pub fn is_active(&self) -> bool {
        self.pointer.active
    }

    /// Set logical size and device pixel ratio, resizing the backing store.
    ///
    /// Bars laid out while the canvas had no area (a hidden container at
    /// mount) are regenerated once it gets one.
    pub fn resize<S: Surface + ?Sized>(&mut self, width: f32, height: f32, dpr: f32, surface: &mut S) {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let was_empty = self.size.x <= 0.0 || self.size.y <= 0.0;
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self.dpr = dpr;
        if was_empty && self.size.x > 0.0 && self.size.y > 0.0 {
            let size = self.size;
            let rng = &mut self.rng;
            self.bars = (0..self.config.bar_count)
                .map(|_| ChaosBar::random(rng, size))
                .collect();
            log::debug!("[lens] laid out {} bars after empty mount", self.bars.len());
        }
        self.pointer.recenter(self.size * 0.5);
        surface.resize(
            (self.size.x * dpr).floor() as u32,
            (self.size.y * dpr).floor() as u32,
        );
        surface.set_scale(dpr);
        log::debug!("[lens] resized to {}x{} @{}x", self.size.x, self.size.y, dpr);
    }

    /// Pointer moved; coordinates are viewport-relative.
    pub fn update_pointer(&mut self, client: Vec2, rect_origin: Vec2) {
        self.pointer.set_target(client_to_local(client, rect_origin));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.release();
    }

    pub fn affordance(&self) -> Affordance {
        Affordance {
            ring_visible: self.pointer.active,
            ring_center: self.pointer.smoothed,
            instructions_visible: !self.pointer.active,
        }
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt as f64;
        }
        self.pointer.step();

        surface.clear(self.size.x, self.size.y);
        draw_grid(surface, self.size, GRID_SPACING, palette::GRID);
        let width = self.size.x;
        for bar in &mut self.bars {
            bar.advance(width);
            bar.draw(surface, self.time);
        }

        if self.pointer.active {
            self.draw_lens(surface);
        }
    }

    fn draw_lens<S: Surface + ?Sized>(&self, surface: &mut S) {
        let center = self.pointer.smoothed;
        let radius = self.config.lens_radius;

        surface.save();
        surface.clip_circle(center, radius);
        surface.fill_rect(Vec2::ZERO, self.size, palette::LENS_BG);
        draw_grid(surface, self.size, LENS_GRID_SPACING, palette::LENS_GRID);

        let points = self.trend_screen_points();
        surface.polyline(
            &points.iter().map(|(p, _)| *p).collect::<SmallVec<[Vec2; 64]>>(),
            &Stroke::solid(palette::ACCENT, 2.0).glow(6.0),
        );
        self.draw_markers(surface, &points);

        let guide = Stroke::solid(palette::ACCENT.with_alpha(0.35), 1.0).dashed(4.0, 4.0);
        surface.line(
            Vec2::new(center.x - radius, center.y),
            Vec2::new(center.x + radius, center.y),
            &guide,
        );
        surface.line(
            Vec2::new(center.x, center.y - radius),
            Vec2::new(center.x, center.y + radius),
            &guide,
        );
        surface.fill_text(
            "CLARITY // SIGNAL LOCKED",
            Vec2::new(center.x - radius * 0.6, center.y - radius * 0.7),
            STATUS_FONT,
            palette::TEXT,
        );
        surface.restore();
    }

    /// Screen-space trend vertices with their source index.
    fn trend_screen_points(&self) -> SmallVec<[(Vec2, usize); 64]> {
        let n = self.trend.len();
        let mut out = SmallVec::new();
        if n == 0 {
            return out;
        }
        let speed = self.config.scroll_speed;
        let shift = trend_shift(self.time, speed);
        let start = trend_start_index(self.time, speed, n);
        let mid = self.size.y * 0.5;
        let visible = ((self.size.x / TREND_SPACING).ceil() as usize + 2).min(n);
        for k in 0..visible {
            let idx = (start + k) % n;
            let breath = (phase(self.time, TREND_BREATH_TIME_RATE)
                + idx as f32 * TREND_BREATH_INDEX_RATE)
                .sin()
                * TREND_BREATH_AMPLITUDE;
            let x = k as f32 * TREND_SPACING - shift;
            out.push((Vec2::new(x, mid + self.trend[idx].y + breath), idx));
        }
        out
    }

    fn draw_markers<S: Surface + ?Sized>(&self, surface: &mut S, points: &[(Vec2, usize)]) {
        for (k, (p, idx)) in points.iter().enumerate() {
            if idx % MARKER_EVERY != 0 {
                continue;
            }
            // Screen y grows downward, so a smaller next y means rising.
            let rising = points.get(k + 1).map_or(true, |(next, _)| next.y <= p.y);
            let (color, label) = if rising {
                (palette::BULL, "BUY")
            } else {
                (palette::BEAR, "SELL")
            };
            surface.fill_circle(*p, MARKER_RADIUS, color, MARKER_GLOW_BLUR);
            surface.fill_text(label, Vec2::new(p.x + 6.0, p.y - 8.0), LABEL_FONT, color);
        }
    }
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, size: Vec2, spacing: f32, color: Color) {
    if spacing <= 0.0 {
        return;
    }
    let stroke = Stroke::solid(color, 1.0);
    let mut x = 0.0;
    while x <= size.x {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, size.y), &stroke);
        x += spacing;
    }
    let mut y = 0.0;
    while y <= size.y {
        surface.line(Vec2::new(0.0, y), Vec2::new(size.x, y), &stroke);
        y += spacing;
    }
}
