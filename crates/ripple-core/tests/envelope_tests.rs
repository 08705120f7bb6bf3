// Lifetime and envelope shaping.

use glam::Vec2;
use ripple_core::constants::*;
use ripple_core::envelope::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn centre_ripple_lifetime_matches_worked_example() {
    let origin = Vec2::new(0.5, 0.5);
    let far = far_corner_distance(origin);
    assert!(approx(far, 0.707_106_8, 1e-5), "far corner distance {far}");

    let crest = crest_travel_time(far, 3.0, 0.24);
    assert!(approx(crest, 6.17, 0.01), "crest-to-edge {crest}");

    let life = compute_lifetime(origin, 3.0, 0.24, LINGER);
    assert!(approx(life, crest + LINGER, 1e-4));
}

#[test]
fn lifetime_only_depends_on_far_corner_distance() {
    // Mirror images of one point have different farthest corners but the
    // same distance to them.
    let mirrored = [
        Vec2::new(0.2, 0.3),
        Vec2::new(0.8, 0.3),
        Vec2::new(0.2, 0.7),
        Vec2::new(0.8, 0.7),
    ];
    let reference = compute_lifetime(mirrored[0], PROPAGATION_SPEED, WAVELENGTH, LINGER);
    for origin in mirrored {
        let life = compute_lifetime(origin, PROPAGATION_SPEED, WAVELENGTH, LINGER);
        assert!(approx(life, reference, 1e-5), "{origin:?}: {life} vs {reference}");
    }
}

#[test]
fn lifetime_grows_with_far_corner_distance() {
    // Walking from the centre toward (0,0) moves away from (1,1).
    let mut prev_far = 0.0;
    let mut prev_life = 0.0;
    for step in 0..=50 {
        let t = 0.5 - step as f32 * 0.01;
        let origin = Vec2::splat(t);
        let far = far_corner_distance(origin);
        let life = compute_lifetime(origin, PROPAGATION_SPEED, WAVELENGTH, LINGER);
        if step > 0 {
            assert!(far > prev_far);
            assert!(life > prev_life, "lifetime not increasing at t={t}");
        }
        prev_far = far;
        prev_life = life;
    }
}

#[test]
fn crest_travel_time_is_monotonic_in_distance() {
    let mut prev = crest_travel_time(0.0, 3.0, 0.24);
    assert_eq!(prev, 0.0);
    for i in 1..=100 {
        let d = i as f32 * 0.015;
        let t = crest_travel_time(d, 3.0, 0.24);
        assert!(t > prev);
        prev = t;
    }
}

#[test]
fn wavenumber_guards_degenerate_wavelength() {
    assert!(wavenumber(0.0).is_finite());
    assert!(approx(wavenumber(0.24), std::f32::consts::TAU / 0.24, 1e-4));
}

#[test]
fn ramps_hit_exact_bounds() {
    assert_eq!(attack_ramp(0.0, ATTACK_TIME), 0.0);
    assert_eq!(attack_ramp(ATTACK_TIME, ATTACK_TIME), 1.0);
    assert_eq!(attack_ramp(5.0, ATTACK_TIME), 1.0);
    assert_eq!(attack_ramp(-1.0, ATTACK_TIME), 0.0);

    let life = 4.0;
    assert_eq!(release_ramp(life, life, RELEASE_TAIL), 0.0);
    assert_eq!(release_ramp(life + 1.0, life, RELEASE_TAIL), 0.0);
    assert_eq!(release_ramp(life - RELEASE_TAIL - 0.1, life, RELEASE_TAIL), 1.0);
    assert_eq!(release_ramp(0.5, life, RELEASE_TAIL), 1.0);
}

#[test]
fn ramps_are_monotonic() {
    let mut prev = 0.0;
    for i in 0..=200 {
        let age = i as f32 * 0.001;
        let a = attack_ramp(age, ATTACK_TIME);
        assert!(a >= prev && (0.0..=1.0).contains(&a));
        prev = a;
    }
    let life = 3.0;
    let mut prev = 1.0;
    for i in 0..=400 {
        let age = i as f32 * 0.01;
        let r = release_ramp(age, life, RELEASE_TAIL);
        assert!(r <= prev && (0.0..=1.0).contains(&r));
        prev = r;
    }
}

#[test]
fn envelope_is_zero_at_birth_and_after_lifetime() {
    let life = 5.0;
    assert_eq!(instantaneous_envelope(0.0, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL), 0.0);
    assert_eq!(instantaneous_envelope(life, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL), 0.0);
    assert_eq!(instantaneous_envelope(life + 2.0, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL), 0.0);
    assert!(instantaneous_envelope(1.0, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL) > 0.0);
}

#[test]
fn envelope_is_bounded_and_continuous() {
    let life = compute_lifetime(Vec2::new(0.3, 0.6), PROPAGATION_SPEED, WAVELENGTH, LINGER);
    let mut prev = instantaneous_envelope(0.0, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL);
    let steps = ((life + RELEASE_TAIL) / 0.001) as usize;
    for i in 1..=steps {
        let age = i as f32 * 0.001;
        let e = instantaneous_envelope(age, life, DECAY_RATE, ATTACK_TIME, RELEASE_TAIL);
        assert!((0.0..=1.0).contains(&e), "envelope {e} out of range at age {age}");
        assert!((e - prev).abs() < 0.02, "jump of {} at age {age}", (e - prev).abs());
        prev = e;
    }
}

#[test]
fn smoothstep_matches_shader_builtin() {
    assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.5), 1.0);
    assert!(approx(smoothstep(0.0, 1.0, 0.5), 0.5, 1e-6));
    assert!(approx(smoothstep(0.0, 2.0, 0.5), 0.156_25, 1e-6));
}
