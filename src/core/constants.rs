/// Animation tuning constants shared by the particle field and the lens.
///
/// These express intended behavior (radii, rates, counts) and keep magic
/// numbers out of the frame code. Both components build their `Default`
/// configs from here.

// ---------------- Particle field ----------------
pub const PARTICLE_COUNT: usize = 60;
pub const POINTER_RADIUS: f32 = 150.0;
// Fraction of the rest offset removed per frame is 1 / RELAX_DIVISOR.
pub const RELAX_DIVISOR: f32 = 15.0;
pub const LINK_DISTANCE: f32 = 100.0;
pub const LINK_WIDTH: f32 = 0.5;

pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_DENSITY_MIN: f32 = 1.0;
pub const PARTICLE_DENSITY_SPAN: f32 = 30.0;

// Below this distance the repulsion direction is undefined.
pub const REPULSION_EPSILON: f32 = 1e-6;

// ---------------- Lens ----------------
pub const LENS_RADIUS: f32 = 120.0;
pub const POINTER_SMOOTHING: f32 = 0.15;

pub const BAR_COUNT: usize = 70;
pub const BAR_WRAP_MARGIN: f32 = 50.0;
pub const BAR_WOBBLE_AMPLITUDE: f32 = 4.0;
pub const BAR_WOBBLE_TIME_RATE: f32 = 2.0;
pub const BAR_WOBBLE_X_RATE: f32 = 0.01;

pub const TREND_POINT_COUNT: usize = 240;
pub const TREND_SPACING: f32 = 20.0;
pub const TREND_SCROLL_SPEED: f32 = 30.0; // px per second
pub const TREND_WALK_STEP: f32 = 6.0;
pub const TREND_WAVE_AMPLITUDE: f32 = 12.0;
pub const TREND_WAVE_RATE: f32 = 0.3;
pub const TREND_MAX_OFFSET: f32 = 90.0;
pub const TREND_BREATH_AMPLITUDE: f32 = 3.0;
pub const TREND_BREATH_TIME_RATE: f32 = 1.5;
pub const TREND_BREATH_INDEX_RATE: f32 = 0.4;
pub const MARKER_EVERY: usize = 8;
pub const MARKER_RADIUS: f32 = 4.0;
pub const MARKER_GLOW_BLUR: f32 = 12.0;

pub const GRID_SPACING: f32 = 40.0;
pub const LENS_GRID_SPACING: f32 = 20.0;

// Frame delta clamp (seconds); a backgrounded tab must not teleport the scene.
pub const MAX_FRAME_DT: f32 = 0.1;
