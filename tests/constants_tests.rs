// Host-side tests for tuning constants and their relationships.

use flux_fx::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Rates and factors
    assert!(RELAX_DIVISOR > 1.0);
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert!(MAX_FRAME_DT > 0.0 && MAX_FRAME_DT <= 0.25);

    // Counts
    assert!(PARTICLE_COUNT > 0);
    assert!(BAR_COUNT > 0);
    assert!(TREND_POINT_COUNT > MARKER_EVERY);
    assert!(MARKER_EVERY > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_positive() {
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    assert!(PARTICLE_DENSITY_MIN > 0.0);
    assert!(REPULSION_EPSILON > 0.0 && REPULSION_EPSILON < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Links are shorter than the pointer's reach.
    assert!(LINK_DISTANCE < POINTER_RADIUS);

    // The trend walk stays inside the lens vertically.
    assert!(TREND_MAX_OFFSET + TREND_WAVE_AMPLITUDE < LENS_RADIUS);

    // The lens grid is finer than the background grid.
    assert!(LENS_GRID_SPACING < GRID_SPACING);

    // Enough trend points to cover a wide desktop canvas.
    assert!(TREND_POINT_COUNT as f32 * TREND_SPACING >= 3840.0);

    // Wobble stays small relative to bar wrap margin.
    assert!(BAR_WOBBLE_AMPLITUDE < BAR_WRAP_MARGIN);
}
