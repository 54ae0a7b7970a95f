// Host-side tests for data-attribute configuration overrides.

use flux_fx::core::constants::{BAR_COUNT, LENS_RADIUS, PARTICLE_COUNT, POINTER_RADIUS};
use flux_fx::core::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn defaults_come_from_constants() {
    let field = FieldConfig::default();
    assert_eq!(field.particle_count, PARTICLE_COUNT);
    assert_eq!(field.pointer_radius, POINTER_RADIUS);
    assert_eq!(field.seed, None);

    let lens = LensConfig::default();
    assert_eq!(lens.lens_radius, LENS_RADIUS);
    assert_eq!(lens.bar_count, BAR_COUNT);
}

#[test]
fn field_overrides_apply() {
    let cfg = FieldConfig::default().with_overrides(attrs(&[
        ("particle-count", "25"),
        ("radius", " 90.5 "),
        ("link-distance", "60"),
        ("seed", "1234"),
    ]));
    assert_eq!(cfg.particle_count, 25);
    assert_eq!(cfg.pointer_radius, 90.5);
    assert_eq!(cfg.link_distance, 60.0);
    assert_eq!(cfg.seed, Some(1234));
}

#[test]
fn bad_overrides_are_ignored() {
    let cfg = FieldConfig::default().with_overrides(attrs(&[
        ("particle-count", "lots"),
        ("radius", "-5"),
        ("link-distance", "NaN"),
        ("seed", "-1"),
    ]));
    assert_eq!(cfg, FieldConfig::default());

    let lens = LensConfig::default().with_overrides(attrs(&[
        ("lens-radius", "0"),
        ("bar-count", ""),
        ("scroll-speed", "inf"),
    ]));
    assert_eq!(lens, LensConfig::default());
}

#[test]
fn lens_overrides_apply() {
    let cfg = LensConfig::default().with_overrides(attrs(&[
        ("lens-radius", "80"),
        ("bar-count", "12"),
        ("scroll-speed", "45"),
        ("seed", "9"),
    ]));
    assert_eq!(cfg.lens_radius, 80.0);
    assert_eq!(cfg.bar_count, 12);
    assert_eq!(cfg.scroll_speed, 45.0);
    assert_eq!(cfg.seed, Some(9));

    let lens = Lens::from_config(cfg, glam::Vec2::new(640.0, 480.0));
    assert_eq!(lens.bars().len(), 12);
}

#[test]
fn seeded_configs_reproduce_layouts() {
    let cfg = LensConfig {
        seed: Some(77),
        ..LensConfig::default()
    };
    let a = Lens::from_config(cfg.clone(), glam::Vec2::new(800.0, 600.0));
    let b = Lens::from_config(cfg, glam::Vec2::new(800.0, 600.0));
    assert_eq!(a.bars(), b.bars());
    assert_eq!(a.trend(), b.trend());
}
