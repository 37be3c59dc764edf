use crate::config::EngineConfig;
use crate::effect::EffectKind;
use crate::timer::TemporaryEffect;

/// Which priority tier produced the active effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectSource {
    Temporary,
    Hover,
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub effect: EffectKind,
    pub source: EffectSource,
}

impl Resolution {
    #[inline]
    pub fn is_temporary(&self) -> bool {
        self.source == EffectSource::Temporary
    }
}

/// Pick the active effect: live temporary, then hover, then idle.
pub fn resolve_source(
    now_ms: f64,
    temporary: &TemporaryEffect,
    hovered: bool,
    config: &EngineConfig,
) -> Resolution {
    if temporary.is_live(now_ms) {
        return Resolution {
            effect: temporary.active,
            source: EffectSource::Temporary,
        };
    }
    if hovered && config.on_hover_effect.is_active() {
        return Resolution {
            effect: config.on_hover_effect,
            source: EffectSource::Hover,
        };
    }
    Resolution {
        effect: config.idle_effect,
        source: EffectSource::Idle,
    }
}

#[inline]
pub fn resolve(
    now_ms: f64,
    temporary: &TemporaryEffect,
    hovered: bool,
    config: &EngineConfig,
) -> EffectKind {
    resolve_source(now_ms, temporary, hovered, config).effect
}
