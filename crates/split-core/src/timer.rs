use crate::effect::EffectKind;

/// The single slot shared by click- and mount-triggered effects.
///
/// A new trigger overwrites whatever is running, restarting the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TemporaryEffect {
    pub active: EffectKind,
    pub end_ms: f64,
}

impl TemporaryEffect {
    /// Start `effect` for `duration_ms` from `now_ms`. Returns false (and leaves
    /// the slot untouched) when `effect` is `None`.
    pub fn trigger(&mut self, effect: EffectKind, now_ms: f64, duration_ms: f64) -> bool {
        if !effect.is_active() {
            return false;
        }
        self.active = effect;
        self.end_ms = now_ms + duration_ms;
        log::debug!(
            "[timer] {} live until {:.1} ({:.0}ms)",
            effect,
            self.end_ms,
            duration_ms
        );
        true
    }

    #[inline]
    pub fn is_live(&self, now_ms: f64) -> bool {
        self.active.is_active() && now_ms < self.end_ms
    }
}
