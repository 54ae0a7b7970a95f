//! Pure helpers behind the page micro-interactions (ticker rotation, change
//! jitter, video progress, nav state, course switching).

use rand::Rng;

pub const TICKER_SYMBOLS: &[&str] = &[
    "AAPL", "XAU", "EUR/USD", "OIL", "TSLA", "GBP/USD", "AMZN", "BRENT",
];

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const JITTER_UP_PROBABILITY: f64 = 0.65;
pub const JITTER_MAX_PERCENT: f64 = 3.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Rotating index into a list of `len` items.
#[inline]
pub fn next_symbol_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Randomised percentage change shown on a ticker item.
#[derive(Clone, Debug, PartialEq)]
pub struct Jitter {
    pub up: bool,
    pub tenths: u32,
}

impl Jitter {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let up = rng.gen_bool(JITTER_UP_PROBABILITY);
        let value = rng.gen::<f64>() * JITTER_MAX_PERCENT;
        Self {
            up,
            tenths: (value * 10.0).round() as u32,
        }
    }

    pub fn label(&self) -> String {
        let whole = self.tenths / 10;
        let frac = self.tenths % 10;
        if self.up {
            format!("▲ +{whole}.{frac}%")
        } else {
            format!("▼ -{whole}.{frac}%")
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.up {
            "up"
        } else {
            "down"
        }
    }
}

/// Playback progress in percent, or `None` while the duration is unknown.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0)
        .then(|| (current / duration * 100.0).clamp(0.0, 100.0))
}

#[inline]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Element id of the course track for a sector node's `data-course`.
#[inline]
pub fn course_track_id(course: &str) -> String {
    format!("course-{course}")
}

#[inline]
pub fn is_mobile_width(inner_width: f64) -> bool {
    inner_width < MOBILE_BREAKPOINT_PX
}
