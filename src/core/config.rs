//! Per-instance configuration.
//!
//! Defaults come from `core::constants`; a canvas element may override them
//! through `data-*` attributes, read by the web layer and passed in here as a
//! lookup function so the parsing stays host-testable.

use crate::core::constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub pointer_radius: f32,
    pub link_distance: f32,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            pointer_radius: POINTER_RADIUS,
            link_distance: LINK_DISTANCE,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Apply `data-*` overrides. Unparsable or non-positive values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(n) = parse_positive::<usize>(lookup("particle-count")) {
            self.particle_count = n;
        }
        if let Some(r) = parse_positive_f32(lookup("radius")) {
            self.pointer_radius = r;
        }
        if let Some(d) = parse_positive_f32(lookup("link-distance")) {
            self.link_distance = d;
        }
        if let Some(seed) = lookup("seed").and_then(|s| s.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        self
    }

    pub fn rng(&self) -> StdRng {
        seeded_or_entropy(self.seed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LensConfig {
    pub lens_radius: f32,
    pub bar_count: usize,
    pub scroll_speed: f32,
    pub seed: Option<u64>,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            lens_radius: LENS_RADIUS,
            bar_count: BAR_COUNT,
            scroll_speed: TREND_SCROLL_SPEED,
            seed: None,
        }
    }
}

impl LensConfig {
    /// Apply `data-*` overrides. Unparsable or non-positive values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(r) = parse_positive_f32(lookup("lens-radius")) {
            self.lens_radius = r;
        }
        if let Some(n) = parse_positive::<usize>(lookup("bar-count")) {
            self.bar_count = n;
        }
        if let Some(s) = parse_positive_f32(lookup("scroll-speed")) {
            self.scroll_speed = s;
        }
        if let Some(seed) = lookup("seed").and_then(|s| s.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        self
    }

    pub fn rng(&self) -> StdRng {
        seeded_or_entropy(self.seed)
    }
}

fn seeded_or_entropy(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn parse_positive<T: std::str::FromStr + PartialOrd + Default>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

fn parse_positive_f32(raw: Option<String>) -> Option<f32> {
    parse_positive::<f32>(raw).filter(|v| v.is_finite())
}
