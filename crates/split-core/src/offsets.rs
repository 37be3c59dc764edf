//! Target offset generation and the final smoothing stage.
//!
//! Offsets are in CSS pixels. The red channel is written as-is, the green
//! channel independently; for follow-mouse they mirror each other.

use crate::config::EngineConfig;
use crate::constants::*;
use crate::effect::EffectKind;
use crate::math::{finite_or_zero, lerp, lerp_vec};
use crate::resolver::Resolution;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelOffsets {
    pub r: Vec2,
    pub g: Vec2,
}

impl ChannelOffsets {
    pub const ZERO: Self = Self {
        r: Vec2::ZERO,
        g: Vec2::ZERO,
    };

    /// Move every component `factor` of the way toward `target`.
    pub fn approach(&mut self, target: &ChannelOffsets, factor: f32) {
        if factor >= 1.0 {
            *self = *target;
            return;
        }
        self.r.x = lerp(self.r.x, target.r.x, factor);
        self.r.y = lerp(self.r.y, target.r.y, factor);
        self.g.x = lerp(self.g.x, target.g.x, factor);
        self.g.y = lerp(self.g.y, target.g.y, factor);
        // An overflowing step must not leave NaN behind to be lerped forever.
        if !(self.r.is_finite() && self.g.is_finite()) {
            *self = target.finite();
        }
    }

    /// Copy with every non-finite component replaced by 0.
    pub fn finite(&self) -> ChannelOffsets {
        ChannelOffsets {
            r: finite_or_zero(self.r),
            g: finite_or_zero(self.g),
        }
    }
}

/// Normalised pointer position: `target` is the latest observation,
/// `current` lags behind it and only moves while follow-mouse renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
}

impl PointerState {
    #[inline]
    pub fn advance(&mut self) {
        self.current = finite_or_zero(lerp_vec(self.current, self.target, POINTER_SMOOTHING));
    }
}

/// Split distance for this frame; scaled by intensity only while the
/// temporary tier is the one being rendered.
pub fn applied_distance(config: &EngineConfig, resolution: &Resolution) -> f32 {
    if resolution.is_temporary() {
        config.split_distance * config.effect_intensity
    } else {
        config.split_distance
    }
}

pub fn generate<R: Rng>(
    effect: EffectKind,
    frame_time_secs: f64,
    pointer: &mut PointerState,
    applied_distance: f32,
    breathe_speed: f32,
    rng: &mut R,
) -> ChannelOffsets {
    match effect {
        EffectKind::None => ChannelOffsets::ZERO,
        EffectKind::Glitch => {
            let mut jitter = || (rng.gen::<f32>() - 0.5) * applied_distance;
            let r = Vec2::new(jitter(), jitter());
            let g = Vec2::new(jitter(), jitter());
            ChannelOffsets { r, g }
        }
        EffectKind::Breathe => {
            // Phase stays in f64; long-running timestamps lose too much in f32.
            let t = frame_time_secs * breathe_speed as f64;
            let wave = |ratio: f64, f: fn(f64) -> f64| f(t * ratio) as f32;
            let half = applied_distance * 0.5;
            ChannelOffsets {
                r: Vec2::new(wave(BREATHE_R_X, f64::sin), wave(BREATHE_R_Y, f64::cos)) * half,
                g: Vec2::new(wave(BREATHE_G_X, f64::cos), wave(BREATHE_G_Y, f64::sin)) * half,
            }
        }
        EffectKind::FollowMouse => {
            pointer.advance();
            let r = pointer.current * applied_distance;
            ChannelOffsets { r, g: -r }
        }
    }
}

/// Targets for one frame including the `disabled` gate. A disabled engine
/// targets the origin and leaves the pointer lag untouched.
pub fn target_offsets<R: Rng>(
    config: &EngineConfig,
    resolution: &Resolution,
    frame_time_secs: f64,
    pointer: &mut PointerState,
    rng: &mut R,
) -> ChannelOffsets {
    if config.disabled {
        return ChannelOffsets::ZERO;
    }
    generate(
        resolution.effect,
        frame_time_secs,
        pointer,
        applied_distance(config, resolution),
        config.breathe_speed,
        rng,
    )
    .finite()
}

#[inline]
pub fn smoothing_factor(effect: EffectKind) -> f32 {
    if effect == EffectKind::Glitch {
        GLITCH_SMOOTHING
    } else {
        OFFSET_SMOOTHING
    }
}
