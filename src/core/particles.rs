//! Pointer-reactive particle field.
//!
//! Particles flee an active pointer within its radius and otherwise ease back
//! to their rest position. Nearby particles are joined by lines whose opacity
//! fades linearly with distance.
//!
//! The link pass compares every unordered pair, O(n²) in particle count. That
//! is fine for the few dozen particles the field is configured with; it is
//! the first thing to revisit if the count ever grows into the hundreds.

use crate::core::config::FieldConfig;
use crate::core::constants::*;
use crate::core::pointer::PointerState;
use crate::core::surface::{palette, Color, Stroke, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub base: Vec2,
    pub size: f32,
    pub density: f32,
    pub color: Color,
}

impl Particle {
    /// A particle at rest at `pos`.
    pub fn new(pos: Vec2, size: f32, density: f32, color: Color) -> Self {
        Self {
            pos,
            base: pos,
            size,
            density,
            color,
        }
    }

    /// Random particle inside `[0, bounds.x) × [0, bounds.y)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let pos = Vec2::new(sample_below(rng, bounds.x), sample_below(rng, bounds.y));
        let size = rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN;
        let density = rng.gen::<f32>() * PARTICLE_DENSITY_SPAN + PARTICLE_DENSITY_MIN;
        let color = if rng.gen::<f32>() > 0.5 {
            palette::ACCENT
        } else {
            palette::MUTED
        };
        Self::new(pos, size, density, color)
    }

    /// Advance one frame under the given pointer.
    pub fn update(&mut self, pointer: &PointerState) {
        if let Some(ptr) = pointer.position {
            let distance = self.pos.distance(ptr);
            if distance < pointer.radius {
                if let Some(push) = repulsion(self.pos, ptr, pointer.radius, self.density) {
                    self.pos += push;
                }
                return;
            }
        }
        self.pos = relax(self.pos, self.base);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.size, self.color, 0.0);
    }

    pub fn offset(&self) -> f32 {
        self.pos.distance(self.base)
    }
}

#[inline]
fn sample_below<R: Rng + ?Sized>(rng: &mut R, upper: f32) -> f32 {
    if upper > 0.0 && upper.is_finite() {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}

/// Displacement applied to a particle at `pos` by a pointer at `pointer`.
///
/// Points away from the pointer with magnitude `(radius - d) / radius *
/// density`. Returns `None` outside the radius, and when the two points
/// coincide since the direction is then undefined.
pub fn repulsion(pos: Vec2, pointer: Vec2, radius: f32, density: f32) -> Option<Vec2> {
    let delta = pointer - pos;
    let distance = delta.length();
    if !(distance < radius) || distance < REPULSION_EPSILON || radius <= 0.0 {
        return None;
    }
    let force = (radius - distance) / radius;
    let dir = delta / distance;
    Some(-dir * force * density)
}

/// Move `pos` a fixed fraction of the way back to `base`.
#[inline]
pub fn relax(pos: Vec2, base: Vec2) -> Vec2 {
    pos - (pos - base) / RELAX_DIVISOR
}

/// Opacity of the link between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold && distance >= 0.0).then(|| 1.0 - distance / threshold)
}

pub struct ParticleField<R: Rng = StdRng> {
    config: FieldConfig,
    size: Vec2,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn from_config(config: FieldConfig) -> Self {
        let rng = config.rng();
        Self::new(config, rng)
    }
}

impl<R: Rng> ParticleField<R> {
    /// Empty field; particles appear on the first `resize`.
    pub fn new(config: FieldConfig, rng: R) -> Self {
        let pointer = PointerState::with_radius(config.pointer_radius);
        Self {
            config,
            size: Vec2::ZERO,
            particles: Vec::new(),
            pointer,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Adopt new canvas dimensions and regenerate every particle.
    pub fn resize<S: Surface + ?Sized>(&mut self, width: f32, height: f32, surface: &mut S) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.size = Vec2::new(width, height);
        surface.resize(width as u32, height as u32);
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::random(&mut self.rng, self.size))
            .collect();
        log::debug!(
            "[field] resized to {}x{} with {} particles",
            width,
            height,
            self.particles.len()
        );
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        for p in &mut self.particles {
            p.draw(surface);
            p.update(&self.pointer);
        }
        self.draw_links(surface);
    }

    fn draw_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        let threshold = self.config.link_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.pos.distance(b.pos);
                if let Some(alpha) = link_opacity(distance, threshold) {
                    let stroke = Stroke::solid(palette::ACCENT.with_alpha(alpha), LINK_WIDTH);
                    surface.line(a.pos, b.pos, &stroke);
                }
            }
        }
    }
}
