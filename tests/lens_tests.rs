// Host-side tests for the chaos/clarity lens.

use flux_fx::core::constants::{
    BAR_WRAP_MARGIN, LENS_RADIUS, POINTER_SMOOTHING, TREND_MAX_OFFSET, TREND_POINT_COUNT,
    TREND_SCROLL_SPEED, TREND_SPACING, TREND_WAVE_AMPLITUDE,
};
use flux_fx::core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME_DT: f32 = 1.0 / 60.0;

fn make_lens(w: f32, h: f32) -> (Lens, RecordingSurface) {
    let mut rng = StdRng::seed_from_u64(11);
    let size = Vec2::new(w, h);
    let mut lens = Lens::new(LensConfig::default(), &mut rng, size);
    let mut surface = RecordingSurface::new();
    lens.resize(w, h, 1.0, &mut surface);
    surface.take();
    (lens, surface)
}

fn sample_bar(x: f32, speed: f32) -> ChaosBar {
    ChaosBar {
        pos: Vec2::new(x, 120.0),
        width: 5.0,
        height: 20.0,
        wick: 28.0,
        speed,
        color: palette::BULL.with_alpha(0.3),
    }
}

#[test]
fn bar_wraps_to_right_edge_preserving_attributes() {
    let mut bar = sample_bar(-49.0, 2.0);
    let before = bar.clone();
    bar.advance(800.0);
    assert_eq!(bar.pos.x, 800.0 + BAR_WRAP_MARGIN);
    assert_eq!(bar.pos.y, before.pos.y);
    assert_eq!(bar.width, before.width);
    assert_eq!(bar.height, before.height);
    assert_eq!(bar.wick, before.wick);
    assert_eq!(bar.speed, before.speed);
    assert_eq!(bar.color, before.color);
}

#[test]
fn bar_drifts_left_by_its_speed() {
    let mut bar = sample_bar(10.0, 0.75);
    bar.advance(800.0);
    assert!((bar.pos.x - 9.25).abs() < 1e-6);

    // Exactly at the margin is still on the visible side of the wrap.
    let mut edge = sample_bar(-49.0, 1.0);
    edge.advance(800.0);
    assert_eq!(edge.pos.x, -50.0);
}

#[test]
fn bar_wobble_is_bounded_and_leaves_stored_y_alone() {
    let bar = sample_bar(300.0, 1.0);
    for i in 0..100 {
        let y = bar.rendered_y(i as f64 * 0.1);
        assert!((y - 120.0).abs() <= 4.0 + 1e-4);
    }
    assert_eq!(bar.pos.y, 120.0);
}

#[test]
fn generated_bars_start_inside_the_canvas() {
    let (lens, _) = make_lens(800.0, 600.0);
    assert_eq!(lens.bars().len(), LensConfig::default().bar_count);
    for bar in lens.bars() {
        assert!((0.0..=800.0).contains(&bar.pos.x));
        assert!((60.0..=540.0).contains(&bar.pos.y));
        assert!(bar.wick > bar.height);
        assert!(bar.speed > 0.0);
    }
}

#[test]
fn trend_is_bounded_and_reproducible() {
    let a = generate_trend(&mut StdRng::seed_from_u64(5), TREND_POINT_COUNT);
    let b = generate_trend(&mut StdRng::seed_from_u64(5), TREND_POINT_COUNT);
    assert_eq!(a, b);
    assert_eq!(a.len(), TREND_POINT_COUNT);
    for (i, p) in a.iter().enumerate() {
        assert_eq!(p.x, i as f32 * TREND_SPACING);
        assert!(p.y.abs() <= TREND_MAX_OFFSET + TREND_WAVE_AMPLITUDE + 1e-3);
    }
}

#[test]
fn trend_shift_is_periodic_in_spacing() {
    let period = (TREND_SPACING / TREND_SCROLL_SPEED) as f64;
    for t in [0.0f64, 0.1, 0.37, 1.234, 5.5, 12.0] {
        let a = trend_shift(t, TREND_SCROLL_SPEED);
        let b = trend_shift(t + period, TREND_SCROLL_SPEED);
        let diff = (a - b).abs();
        // Values near the wrap can land on either side of 0/spacing.
        let wrapped = diff.min(TREND_SPACING - diff);
        assert!(wrapped < 1e-3, "t={t}: {a} vs {b}");
        assert!((0.0..TREND_SPACING).contains(&a));
    }
}

#[test]
fn trend_start_index_advances_once_per_period_and_wraps() {
    let period = (TREND_SPACING / TREND_SCROLL_SPEED) as f64;
    assert_eq!(trend_start_index(0.0, TREND_SCROLL_SPEED, 10), 0);
    assert_eq!(trend_start_index(period * 1.5, TREND_SCROLL_SPEED, 10), 1);
    assert_eq!(trend_start_index(period * 12.5, TREND_SCROLL_SPEED, 10), 2);
    assert_eq!(trend_start_index(3.0, TREND_SCROLL_SPEED, 0), 0);
}

#[test]
fn inactive_lens_draws_only_background() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    for _ in 0..3 {
        surface.take();
        lens.render_frame(FRAME_DT, &mut surface);
    }
    assert_eq!(surface.clips().count(), 0);
    assert_eq!(surface.polylines().count(), 0);
    assert_eq!(surface.texts().count(), 0);
    let bodies = surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCmd::FillRect { .. }))
        .count();
    assert_eq!(bodies, lens.bars().len());
    assert!(!lens.affordance().ring_visible);
    assert!(lens.affordance().instructions_visible);
}

#[test]
fn pointer_at_centre_reveals_lens_there() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    let origin = Vec2::new(12.0, 340.0);
    let target = Vec2::new(400.0, 300.0);
    // The idle lens rests at the canvas centre.
    assert_eq!(lens.pointer().smoothed, target);
    lens.update_pointer(target + origin, origin);
    assert_eq!(lens.pointer().target, target);

    for _ in 0..10 {
        surface.take();
        lens.render_frame(FRAME_DT, &mut surface);
    }
    let smoothed = lens.pointer().smoothed;
    assert!(smoothed.distance(target) <= 0.01 * target.length());

    let clips: Vec<_> = surface.clips().collect();
    assert_eq!(clips.len(), 1);
    assert!(clips[0].0.distance(target) < 1.0);
    assert_eq!(clips[0].1, LENS_RADIUS);
    assert_eq!(surface.polylines().count(), 1);
    assert!(surface.texts().any(|t| t.contains("SIGNAL")));

    // Lens drawing is bracketed by save/restore.
    let save = surface.commands.iter().position(|c| *c == DrawCmd::Save);
    let clip = surface
        .commands
        .iter()
        .position(|c| matches!(c, DrawCmd::ClipCircle { .. }));
    let restore = surface.commands.iter().rposition(|c| *c == DrawCmd::Restore);
    assert!(save < clip && clip < restore);
    assert_eq!(restore, Some(surface.commands.len() - 1));

    let aff = lens.affordance();
    assert!(aff.ring_visible);
    assert!(!aff.instructions_visible);
    assert_eq!(aff.ring_center, smoothed);
}

#[test]
fn update_pointer_sets_only_the_target() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    let centre = Vec2::new(400.0, 300.0);
    lens.update_pointer(Vec2::new(700.0, 500.0), Vec2::ZERO);
    assert!(lens.is_active());
    assert_eq!(lens.pointer().target, Vec2::new(700.0, 500.0));
    assert_eq!(lens.pointer().smoothed, centre);

    lens.render_frame(FRAME_DT, &mut surface);
    let expected = centre + (Vec2::new(700.0, 500.0) - centre) * POINTER_SMOOTHING;
    assert!(lens.pointer().smoothed.distance(expected) < 1e-3);
}

#[test]
fn single_touch_engages_lens_on_next_frame() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    let origin = Vec2::new(0.0, 120.0);
    lens.update_pointer(Vec2::new(420.0, 410.0), origin);
    surface.take();
    lens.render_frame(FRAME_DT, &mut surface);
    assert_eq!(surface.clips().count(), 1);
    assert!(lens.affordance().ring_visible);

    lens.on_pointer_leave();
    surface.take();
    lens.render_frame(FRAME_DT, &mut surface);
    assert_eq!(surface.clips().count(), 0);
}

#[test]
fn moving_pointer_is_smoothed_exponentially() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    lens.update_pointer(Vec2::new(100.0, 100.0), Vec2::ZERO);
    lens.render_frame(FRAME_DT, &mut surface);

    let target = Vec2::new(500.0, 400.0);
    lens.update_pointer(target, Vec2::ZERO);
    let start_gap = lens.pointer().smoothed.distance(target);
    lens.render_frame(FRAME_DT, &mut surface);
    let gap = lens.pointer().smoothed.distance(target);
    assert!((gap - start_gap * (1.0 - POINTER_SMOOTHING)).abs() < 1e-2);

    let mut frames = 1;
    while lens.pointer().smoothed.distance(target) > 0.01 * start_gap {
        lens.render_frame(FRAME_DT, &mut surface);
        frames += 1;
        assert!(frames < 100);
    }
    // ln(0.01) / ln(0.85) ~ 28.3
    assert_eq!(frames, 29);
}

#[test]
fn leaving_hides_the_lens_and_restores_instructions() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    lens.update_pointer(Vec2::new(200.0, 200.0), Vec2::ZERO);
    lens.render_frame(FRAME_DT, &mut surface);
    assert!(lens.is_active());

    lens.on_pointer_leave();
    surface.take();
    lens.render_frame(FRAME_DT, &mut surface);
    assert_eq!(surface.clips().count(), 0);
    let aff = lens.affordance();
    assert!(!aff.ring_visible);
    assert!(aff.instructions_visible);
}

#[test]
fn resize_scales_backing_store_by_pixel_ratio() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    lens.resize(400.5, 300.0, 2.0, &mut surface);
    assert_eq!(
        surface.take(),
        vec![DrawCmd::Resize(801, 600), DrawCmd::Scale(2.0)]
    );
    assert_eq!(lens.size(), Vec2::new(400.5, 300.0));

    lens.resize(400.0, 300.0, 0.0, &mut surface);
    assert_eq!(lens.dpr(), 1.0);
    assert_eq!(
        surface.take(),
        vec![DrawCmd::Resize(400, 300), DrawCmd::Scale(1.0)]
    );
}

#[test]
fn time_accumulates_frame_deltas() {
    let (mut lens, mut surface) = make_lens(320.0, 240.0);
    for _ in 0..30 {
        lens.render_frame(0.02, &mut surface);
    }
    lens.render_frame(f32::NAN, &mut surface);
    assert!((lens.time() - 0.6).abs() < 1e-4);
}

#[test]
fn bars_wrap_during_long_runs_and_stay_finite() {
    let (mut lens, mut surface) = make_lens(300.0, 200.0);
    for _ in 0..2000 {
        surface.take();
        lens.render_frame(FRAME_DT, &mut surface);
    }
    for bar in lens.bars() {
        assert!(bar.pos.x >= -BAR_WRAP_MARGIN - 1.2);
        assert!(bar.pos.x <= 300.0 + BAR_WRAP_MARGIN);
        assert!(bar.pos.is_finite());
    }
}

#[test]
fn bars_are_laid_out_when_an_empty_mount_gets_a_size() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut lens = Lens::new(LensConfig::default(), &mut rng, Vec2::ZERO);
    let mut surface = RecordingSurface::new();
    lens.resize(800.0, 600.0, 1.0, &mut surface);

    assert_eq!(lens.bars().len(), LensConfig::default().bar_count);
    for bar in lens.bars() {
        assert!((0.0..=800.0).contains(&bar.pos.x));
        assert!((60.0..=540.0).contains(&bar.pos.y));
    }
    assert_eq!(lens.pointer().smoothed, Vec2::new(400.0, 300.0));

    for _ in 0..600 {
        surface.take();
        lens.render_frame(FRAME_DT, &mut surface);
    }
    let max_y = lens.bars().iter().map(|b| b.pos.y).fold(0.0f32, f32::max);
    assert!(max_y > 300.0, "max y = {max_y}");
}

#[test]
fn resize_with_area_keeps_existing_bars() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    let before = lens.bars().to_vec();
    lens.resize(1024.0, 700.0, 1.0, &mut surface);
    assert_eq!(lens.bars(), &before[..]);
}

#[test]
fn animation_keeps_moving_after_days_open() {
    let (mut lens, mut surface) = make_lens(800.0, 600.0);
    // About six and a half days in one step.
    lens.render_frame(561_600.0, &mut surface);
    let start = lens.time();
    let shift_before = trend_shift(start, TREND_SCROLL_SPEED);

    lens.render_frame(FRAME_DT, &mut surface);
    let shift_after = trend_shift(lens.time(), TREND_SCROLL_SPEED);
    let step = (shift_after - shift_before).rem_euclid(TREND_SPACING);
    assert!((step - TREND_SCROLL_SPEED * FRAME_DT).abs() < 1e-2, "step = {step}");

    for _ in 0..599 {
        lens.render_frame(FRAME_DT, &mut surface);
    }
    assert!((lens.time() - start - 10.0).abs() < 1e-3);
}
