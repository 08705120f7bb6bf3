// Host-side tests for the surface binding's pure helpers.
// The crate itself is wasm-only, so the module is included directly.

#![allow(dead_code)]
#[path = "../src/host.rs"]
mod host;

use glam::Vec2;
use host::*;
use ripple_core::RippleConfig;

#[test]
fn missing_or_blank_config_uses_defaults() {
    assert_eq!(parse_config(None).unwrap(), RippleConfig::default());
    assert_eq!(parse_config(Some("  ")).unwrap(), RippleConfig::default());
    assert_eq!(parse_config(Some("{}")).unwrap(), RippleConfig::default());
}

#[test]
fn partial_config_overrides_named_fields() {
    let cfg = parse_config(Some(r#"{ "max_ripples": 3, "reduced_motion": true }"#)).unwrap();
    assert_eq!(cfg.max_ripples, 3);
    assert!(cfg.reduced_motion);
    assert_eq!(cfg.min_interval, RippleConfig::default().min_interval);
}

#[test]
fn malformed_json_is_reported() {
    let err = parse_config(Some(r#"{ "max_ripples": "five" }"#)).unwrap_err();
    assert!(format!("{err:#}").contains("parsing ripple config"), "{err:#}");

    let err = parse_config(Some("{ not json")).unwrap_err();
    assert!(format!("{err:#}").contains("parsing ripple config"));
}

#[test]
fn invalid_values_fail_validation() {
    let err = parse_config(Some(r#"{ "max_ripples": 0 }"#)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("validating ripple config"), "{message}");
    assert!(message.contains("max_ripples"), "{message}");

    assert!(parse_config(Some(r#"{ "wavelength": -0.2 }"#)).is_err());
}

#[test]
fn pointer_origin_respects_surface_bounds() {
    assert_eq!(pointer_origin(150.0, 50.0, 300.0, 100.0), Some(Vec2::new(0.5, 0.5)));
    assert_eq!(pointer_origin(300.0, 100.0, 300.0, 100.0), Some(Vec2::ONE));
    assert_eq!(pointer_origin(301.0, 50.0, 300.0, 100.0), None);
    assert_eq!(pointer_origin(10.0, -0.5, 300.0, 100.0), None);
    assert_eq!(pointer_origin(10.0, 10.0, 0.0, 100.0), None);
}

#[test]
fn seeds_cover_the_unit_range() {
    assert_eq!(seed_from_unit(0.0), 0);
    assert_eq!(seed_from_unit(1.0), u32::MAX as u64);
    assert_eq!(seed_from_unit(-3.0), 0);
    assert!(seed_from_unit(0.5) > 0);
}
