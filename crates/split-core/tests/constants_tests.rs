// Host-side tests for tuning constants, defaults and disable gating.

use split_core::constants::*;
use split_core::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(OFFSET_SMOOTHING > 0.0 && OFFSET_SMOOTHING < 1.0);
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert_eq!(GLITCH_SMOOTHING, 1.0);
    // Pointer lag is the slower of the two cascaded stages.
    assert!(POINTER_SMOOTHING < OFFSET_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breathe_ratios_are_distinct() {
    let ratios = [BREATHE_R_X, BREATHE_R_Y, BREATHE_G_X, BREATHE_G_Y];
    for (i, a) in ratios.iter().enumerate() {
        for b in &ratios[i + 1..] {
            assert!((a - b).abs() > 1e-3);
        }
    }
}

#[test]
fn defaults_match_the_component_props() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.idle_effect, EffectKind::None);
    assert_eq!(cfg.on_hover_effect, EffectKind::None);
    assert_eq!(cfg.on_click_effect, EffectKind::None);
    assert_eq!(cfg.on_mount_effect, None);
    assert_eq!(cfg.effect_duration_ms, 1000.0);
    assert_eq!(cfg.effect_intensity, 1.5);
    assert_eq!(cfg.breathe_speed, 1.0);
    assert_eq!(cfg.split_distance, 40.0);
    assert!(!cfg.track_global_pointer && !cfg.disabled);
    assert_eq!(cfg.sanitized(), cfg);
}

#[test]
fn config_uses_reports_any_slot() {
    let cfg = EngineConfig {
        on_mount_effect: Some(EffectKind::Breathe),
        on_click_effect: EffectKind::Glitch,
        ..EngineConfig::default()
    };
    assert!(cfg.uses(EffectKind::Breathe));
    assert!(cfg.uses(EffectKind::Glitch));
    assert!(!cfg.uses(EffectKind::FollowMouse));
}

#[test]
fn disable_gate_combinations() {
    let gate = DisableGate::default();
    assert!(!gate.is_disabled());

    let reduced = DisableGate {
        reduced_motion: true,
        ..gate
    };
    assert!(reduced.is_disabled());

    let small_ignored = DisableGate {
        viewport_width: 400.0,
        ..gate
    };
    assert!(!small_ignored.is_disabled());

    let small = DisableGate {
        disable_on_small_viewport: true,
        viewport_width: SMALL_VIEWPORT_MAX_PX,
        ..gate
    };
    assert!(small.is_disabled(), "cutoff is inclusive");

    let wide = DisableGate {
        viewport_width: SMALL_VIEWPORT_MAX_PX + 1.0,
        ..small
    };
    assert!(!wide.is_disabled());

    let hidden = DisableGate {
        visible: false,
        ..gate
    };
    assert!(hidden.is_disabled());
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now_ms();
    std::thread::sleep(Duration::from_millis(2));
    let b = clock.now_ms();
    assert!(a >= 0.0);
    assert!(b > a);
}
