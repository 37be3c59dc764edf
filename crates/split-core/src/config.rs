//! Engine configuration and the host-side gating that feeds `disabled`.
//!
//! The host owns the configuration and may replace it at any time. The engine
//! holds a [`SharedConfig`] and copies the current value out at the start of
//! every frame and every event handler, so it never acts on a stale snapshot.

use crate::constants::*;
use crate::effect::EffectKind;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub idle_effect: EffectKind,
    pub on_hover_effect: EffectKind,
    pub on_click_effect: EffectKind,
    pub on_mount_effect: Option<EffectKind>,
    /// Length of a temporary (click / mount) effect window in milliseconds.
    pub effect_duration_ms: f64,
    /// Distance multiplier applied while a temporary effect is live.
    pub effect_intensity: f32,
    pub breathe_speed: f32,
    /// Maximum channel separation in CSS pixels.
    pub split_distance: f32,
    pub track_global_pointer: bool,
    pub disabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            idle_effect: EffectKind::None,
            on_hover_effect: EffectKind::None,
            on_click_effect: EffectKind::None,
            on_mount_effect: None,
            effect_duration_ms: DEFAULT_EFFECT_DURATION_MS,
            effect_intensity: DEFAULT_EFFECT_INTENSITY,
            breathe_speed: DEFAULT_BREATHE_SPEED,
            split_distance: DEFAULT_SPLIT_DISTANCE_PX,
            track_global_pointer: false,
            disabled: false,
        }
    }
}

impl EngineConfig {
    /// Copy with every numeric field forced into a usable range.
    ///
    /// Negative or non-finite values become 0, which collapses the affected
    /// effect to no visible motion instead of producing NaN offsets.
    pub fn sanitized(&self) -> Self {
        Self {
            effect_duration_ms: non_negative_f64(self.effect_duration_ms),
            effect_intensity: non_negative(self.effect_intensity),
            breathe_speed: non_negative(self.breathe_speed),
            split_distance: non_negative(self.split_distance),
            ..*self
        }
    }

    /// The effect a mount should trigger, if any.
    #[inline]
    pub fn mount_effect(&self) -> Option<EffectKind> {
        self.on_mount_effect.filter(|e| e.is_active())
    }

    /// True when any configured trigger or idle state uses `effect`.
    pub fn uses(&self, effect: EffectKind) -> bool {
        self.idle_effect == effect
            || self.on_hover_effect == effect
            || self.on_click_effect == effect
            || self.on_mount_effect == Some(effect)
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[inline]
fn non_negative_f64(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Externally updatable configuration cell shared between host and engine.
pub type SharedConfig = Rc<RefCell<EngineConfig>>;

pub fn shared(config: EngineConfig) -> SharedConfig {
    Rc::new(RefCell::new(config))
}

/// Inputs the host watches to decide whether the effect should run at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisableGate {
    pub reduced_motion: bool,
    pub disable_on_small_viewport: bool,
    pub viewport_width: f64,
    pub visible: bool,
}

impl Default for DisableGate {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            disable_on_small_viewport: false,
            viewport_width: f64::INFINITY,
            visible: true,
        }
    }
}

impl DisableGate {
    #[inline]
    pub fn is_small_viewport(&self) -> bool {
        self.viewport_width <= SMALL_VIEWPORT_MAX_PX
    }

    pub fn is_disabled(&self) -> bool {
        self.reduced_motion
            || (self.disable_on_small_viewport && self.is_small_viewport())
            || !self.visible
    }
}
