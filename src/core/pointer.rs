use crate::core::constants::{POINTER_RADIUS, POINTER_SMOOTHING};
use glam::Vec2;

/// Pointer as seen by the particle field.
///
/// `position` is `None` while the pointer is outside the page; the field then
/// treats every particle as out of range and lets it glide back to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            radius: POINTER_RADIUS,
        }
    }
}

impl PointerState {
    pub fn with_radius(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.position = pos.is_finite().then_some(pos);
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}

/// Pointer tracking for the lens: event handlers write the target, the frame
/// loop eases the rendered position toward it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LensPointer {
    pub target: Vec2,
    pub smoothed: Vec2,
    pub active: bool,
}

impl LensPointer {
    /// Idle pointer resting at `center`.
    pub fn at(center: Vec2) -> Self {
        Self {
            target: center,
            smoothed: center,
            active: false,
        }
    }

    /// Move the resting position while idle; ignored once the pointer is engaged.
    pub fn recenter(&mut self, center: Vec2) {
        if !self.active && center.is_finite() {
            self.target = center;
            self.smoothed = center;
        }
    }

    /// Record a new target. The rendered position only follows in [`step`](Self::step).
    pub fn set_target(&mut self, local: Vec2) {
        if !local.is_finite() {
            return;
        }
        self.target = local;
        self.active = true;
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// One step of exponential smoothing.
    pub fn step(&mut self) {
        self.smoothed += (self.target - self.smoothed) * POINTER_SMOOTHING;
    }
}

/// Convert viewport (client) coordinates into canvas-local logical pixels.
#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}
