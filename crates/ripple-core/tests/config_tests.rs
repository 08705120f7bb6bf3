// Configuration defaults, validation and host overrides.

use glam::Vec2;
use ripple_core::constants::*;
use ripple_core::input::pointer_to_uv;
use ripple_core::{ConfigError, RippleConfig};

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_constants_are_sane() {
    assert!(MAX_RIPPLES >= 1);
    assert!(WAVELENGTH > MIN_WAVELENGTH);
    assert!(PROPAGATION_SPEED > 0.0);
    assert!(ATTACK_TIME > 0.0 && RELEASE_TAIL > 0.0);

    // Debounce is a floor under the breathing interval.
    assert!(MIN_INTERVAL < BASE_INTERVAL);
    assert!(BASE_INTERVAL * (1.0 - BREATH_DEPTH) >= MIN_INTERVAL);
    assert!((0.0..=1.0).contains(&BREATH_DEPTH));

    // Spawn square must be non-empty.
    assert!(SPAWN_MARGIN < 0.5);
    assert!(NEVER_SPAWNED < -1e6);
}

#[test]
fn default_config_validates() {
    assert_eq!(RippleConfig::default().validate(), Ok(()));
}

#[test]
fn validation_names_the_offending_field() {
    let cases = [
        (
            RippleConfig {
                propagation_speed: -1.0,
                ..RippleConfig::default()
            },
            "propagation_speed",
        ),
        (
            RippleConfig {
                attack_time: 0.0,
                ..RippleConfig::default()
            },
            "attack_time",
        ),
        (
            RippleConfig {
                release_tail: f32::NAN,
                ..RippleConfig::default()
            },
            "release_tail",
        ),
        (
            RippleConfig {
                min_interval: 0.0,
                ..RippleConfig::default()
            },
            "min_interval",
        ),
    ];
    for (cfg, expected) in cases {
        match cfg.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected NonPositive for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn validation_checks_ranges() {
    let negative_linger = RippleConfig {
        linger: -0.1,
        ..RippleConfig::default()
    };
    assert!(matches!(
        negative_linger.validate(),
        Err(ConfigError::Negative { field: "linger", .. })
    ));

    let wide_margin = RippleConfig {
        spawn_margin: 0.5,
        ..RippleConfig::default()
    };
    assert_eq!(wide_margin.validate(), Err(ConfigError::SpawnMargin(0.5)));

    let message = ConfigError::ZeroCapacity.to_string();
    assert!(message.contains("max_ripples"));
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg: RippleConfig =
        serde_json::from_str(r#"{ "max_ripples": 8, "autoplay": false }"#).unwrap();
    assert_eq!(cfg.max_ripples, 8);
    assert!(!cfg.autoplay);
    assert_eq!(cfg.wavelength, WAVELENGTH);
    assert_eq!(cfg.base_interval, BASE_INTERVAL);
    assert_eq!(cfg.validate(), Ok(()));

    let round: RippleConfig = serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(round, cfg);
}

#[test]
fn pointer_positions_normalize_against_current_size() {
    let size = Vec2::new(800.0, 400.0);
    assert_eq!(pointer_to_uv(Vec2::new(400.0, 100.0), size), Some(Vec2::new(0.5, 0.25)));
    assert_eq!(pointer_to_uv(Vec2::ZERO, size), Some(Vec2::ZERO));
    assert_eq!(pointer_to_uv(Vec2::new(801.0, 10.0), size), None);
    assert_eq!(pointer_to_uv(Vec2::new(-1.0, 10.0), size), None);
    assert_eq!(pointer_to_uv(Vec2::new(10.0, 10.0), Vec2::new(0.0, 400.0)), None);

    // Same pointer, resized surface.
    assert_eq!(
        pointer_to_uv(Vec2::new(400.0, 100.0), Vec2::new(1600.0, 400.0)),
        Some(Vec2::new(0.25, 0.25))
    );
}
