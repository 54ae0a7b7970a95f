//! Frame scheduling decoupled from the display-refresh signal.
//!
//! The web layer calls [`FrameLoop::tick`] from requestAnimationFrame and
//! re-schedules while it returns `true`. Tests call it directly with a
//! [`ManualClock`].

use crate::core::constants::MAX_FRAME_DT;
use instant::Instant;

/// Monotonic time source in seconds.
pub trait Clock {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `instant` (performance.now() on the web).
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    pub t: f64,
}

impl ManualClock {
    pub fn advance(&mut self, dt: f64) {
        self.t += dt;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> f64 {
        self.t
    }
}

/// Per-frame work driven by a [`FrameLoop`].
pub trait FrameHandler {
    /// `dt` is the clamped time since the previous frame in seconds.
    fn frame(&mut self, dt: f32);
}

pub struct FrameLoop<C: Clock> {
    clock: C,
    last: Option<f64>,
    running: bool,
    frames: u64,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: None,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last = None;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Run one frame if running. Returns whether another frame should be
    /// scheduled.
    pub fn tick<H: FrameHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        if !self.running {
            return false;
        }
        let now = self.clock.now();
        let dt = match self.last {
            Some(prev) => ((now - prev).max(0.0) as f32).min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last = Some(now);
        handler.frame(dt);
        self.frames += 1;
        self.running
    }
}
