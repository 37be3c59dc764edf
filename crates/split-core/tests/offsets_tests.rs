// Host-side tests for target offset generation and smoothing.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use split_core::*;
use std::f64::consts::FRAC_PI_2;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn none_targets_origin() {
    let mut pointer = PointerState {
        current: Vec2::new(0.5, 0.5),
        target: Vec2::ONE,
    };
    let t = generate(EffectKind::None, 3.0, &mut pointer, 40.0, 1.0, &mut rng());
    assert_eq!(t, ChannelOffsets::ZERO);
    assert_eq!(pointer.current, Vec2::new(0.5, 0.5), "pointer must not advance");
}

#[test]
fn breathe_at_time_zero() {
    let mut pointer = PointerState::default();
    let t = generate(EffectKind::Breathe, 0.0, &mut pointer, 40.0, 1.0, &mut rng());
    assert!(approx(t.r.x, 0.0) && approx(t.r.y, 20.0), "r={:?}", t.r);
    assert!(approx(t.g.x, 20.0) && approx(t.g.y, 0.0), "g={:?}", t.g);
}

#[test]
fn breathe_at_quarter_period() {
    let mut pointer = PointerState::default();
    let t = generate(EffectKind::Breathe, FRAC_PI_2, &mut pointer, 40.0, 1.0, &mut rng());
    let expected_y = (0.8 * std::f32::consts::FRAC_PI_2).cos() * 20.0;
    assert!(approx(t.r.x, 20.0), "r.x={}", t.r.x);
    assert!(approx(t.r.y, expected_y), "r.y={} expected {}", t.r.y, expected_y);
}

#[test]
fn breathe_speed_scales_time() {
    let mut pointer = PointerState::default();
    let slow = generate(EffectKind::Breathe, 2.0, &mut pointer, 30.0, 1.0, &mut rng());
    let fast = generate(EffectKind::Breathe, 1.0, &mut pointer, 30.0, 2.0, &mut rng());
    assert!(approx(slow.r.x, fast.r.x) && approx(slow.g.y, fast.g.y));
}

#[test]
fn glitch_stays_within_half_distance() {
    let mut r = rng();
    let mut pointer = PointerState::default();
    let d = 25.0;
    for _ in 0..500 {
        let t = generate(EffectKind::Glitch, 0.0, &mut pointer, d, 1.0, &mut r);
        for v in [t.r.x, t.r.y, t.g.x, t.g.y] {
            assert!((-d / 2.0..=d / 2.0).contains(&v), "{v} outside ±{}", d / 2.0);
        }
    }
}

#[test]
fn glitch_resamples_every_frame() {
    let mut r = rng();
    let mut pointer = PointerState::default();
    let a = generate(EffectKind::Glitch, 0.0, &mut pointer, 40.0, 1.0, &mut r);
    let b = generate(EffectKind::Glitch, 0.0, &mut pointer, 40.0, 1.0, &mut r);
    assert_ne!(a, b);
}

#[test]
fn follow_mouse_lags_and_mirrors() {
    let mut pointer = PointerState {
        current: Vec2::ZERO,
        target: Vec2::new(1.0, 0.0),
    };
    let t = generate(EffectKind::FollowMouse, 0.0, &mut pointer, 10.0, 1.0, &mut rng());
    assert!(approx(pointer.current.x, 0.1));
    assert!(approx(t.r.x, 1.0) && approx(t.r.y, 0.0));
    assert_eq!(t.g, -t.r);
}

#[test]
fn intensity_applies_only_to_temporary_source() {
    let cfg = EngineConfig {
        split_distance: 20.0,
        effect_intensity: 2.0,
        ..EngineConfig::default()
    };
    let temp = Resolution {
        effect: EffectKind::Glitch,
        source: EffectSource::Temporary,
    };
    let hover = Resolution {
        effect: EffectKind::Glitch,
        source: EffectSource::Hover,
    };
    assert_eq!(applied_distance(&cfg, &temp), 40.0);
    assert_eq!(applied_distance(&cfg, &hover), 20.0);
}

#[test]
fn disabled_forces_zero_targets() {
    let cfg = EngineConfig {
        disabled: true,
        ..EngineConfig::default()
    };
    let mut pointer = PointerState {
        current: Vec2::ZERO,
        target: Vec2::ONE,
    };
    for effect in EffectKind::ALL {
        let res = Resolution {
            effect,
            source: EffectSource::Idle,
        };
        let t = target_offsets(&cfg, &res, 1.0, &mut pointer, &mut rng());
        assert_eq!(t, ChannelOffsets::ZERO, "{effect}");
    }
    assert_eq!(pointer.current, Vec2::ZERO);
}

#[test]
fn glitch_snaps_others_ease() {
    let target = ChannelOffsets {
        r: Vec2::new(10.0, -4.0),
        g: Vec2::new(-3.0, 8.0),
    };
    let mut snapped = ChannelOffsets::ZERO;
    snapped.approach(&target, smoothing_factor(EffectKind::Glitch));
    assert_eq!(snapped, target);

    for effect in [EffectKind::None, EffectKind::Breathe, EffectKind::FollowMouse] {
        let mut eased = ChannelOffsets::ZERO;
        eased.approach(&target, smoothing_factor(effect));
        assert!(approx(eased.r.x, 1.5) && approx(eased.g.y, 1.2), "{effect}");
        assert_ne!(eased, target);
    }
}

#[test]
fn breathe_keeps_precision_after_long_uptime() {
    let mut pointer = PointerState::default();
    // One day of animation time, in seconds.
    let secs = 86_400.123_f64;
    let t = generate(EffectKind::Breathe, secs, &mut pointer, 40.0, 1.0, &mut rng());
    let expected_rx = (secs.sin() * 20.0) as f32;
    let expected_gy = ((secs * 0.9).sin() * 20.0) as f32;
    assert!((t.r.x - expected_rx).abs() < 1e-3, "{} vs {}", t.r.x, expected_rx);
    assert!((t.g.y - expected_gy).abs() < 1e-3, "{} vs {}", t.g.y, expected_gy);
}

#[test]
fn overflowing_distance_targets_origin() {
    let cfg = EngineConfig {
        split_distance: f32::MAX,
        effect_intensity: 4.0,
        ..EngineConfig::default()
    };
    let mut pointer = PointerState {
        current: Vec2::ONE,
        target: Vec2::ONE,
    };
    for effect in EffectKind::ALL {
        let res = Resolution {
            effect,
            source: EffectSource::Temporary,
        };
        let t = target_offsets(&cfg, &res, 0.3, &mut pointer, &mut rng());
        assert!(t.r.is_finite() && t.g.is_finite(), "{effect}: {t:?}");
    }
}

#[test]
fn approach_recovers_from_overflowing_step() {
    let mut current = ChannelOffsets {
        r: Vec2::new(-f32::MAX, 0.0),
        g: Vec2::ZERO,
    };
    let target = ChannelOffsets {
        r: Vec2::new(f32::MAX, 1.0),
        g: Vec2::new(2.0, 3.0),
    };
    current.approach(&target, 0.15);
    assert!(current.r.is_finite() && current.g.is_finite(), "{current:?}");
}
