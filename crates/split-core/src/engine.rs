//! The per-instance engine: owns all mutable effect state and runs one
//! resolve → generate → smooth → write pass per animation frame.
//!
//! Everything here is single-threaded. Host event handlers and the frame
//! callback run to completion on the same thread, so state is plain owned
//! fields rather than anything synchronised.

use crate::config::{EngineConfig, SharedConfig};
use crate::constants::MS_TO_SECONDS;
use crate::effect::EffectKind;
use crate::offsets::{self, ChannelOffsets, PointerState};
use crate::pointer::{normalize_pointer, Rect};
use crate::resolver::{resolve_source, EffectSource};
use crate::sink::{Channel, ChannelSink};
use crate::timer::TemporaryEffect;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Disposed,
}

/// What one frame resolved and wrote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub effect: EffectKind,
    pub source: EffectSource,
    pub applied_distance: f32,
    pub target: ChannelOffsets,
    pub current: ChannelOffsets,
}

pub struct SplitEngine {
    config: SharedConfig,
    lifecycle: Lifecycle,
    hovered: bool,
    temporary: TemporaryEffect,
    pointer: PointerState,
    offsets: ChannelOffsets,
    sinks: [Option<Box<dyn ChannelSink>>; 2],
    rng: StdRng,
}

impl SplitEngine {
    pub fn new(config: SharedConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a fixed glitch RNG seed, for reproducible output.
    pub fn with_seed(config: SharedConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SharedConfig, rng: StdRng) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Created,
            hovered: false,
            temporary: TemporaryEffect::default(),
            pointer: PointerState::default(),
            offsets: ChannelOffsets::ZERO,
            sinks: [None, None],
            rng,
        }
    }

    /// Latest host configuration, sanitised.
    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config.borrow().sanitized()
    }

    pub fn shared_config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn offsets(&self) -> ChannelOffsets {
        self.offsets
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn temporary(&self) -> TemporaryEffect {
        self.temporary
    }

    pub fn attach_sink(&mut self, channel: Channel, sink: Box<dyn ChannelSink>) {
        if self.lifecycle == Lifecycle::Disposed {
            log::warn!("[engine] ignoring {:?} sink attached after unmount", channel);
            return;
        }
        self.sinks[channel.index()] = Some(sink);
    }

    pub fn detach_sink(&mut self, channel: Channel) -> Option<Box<dyn ChannelSink>> {
        self.sinks[channel.index()].take()
    }

    /// Start running. Triggers the mount effect once; repeated calls are ignored.
    pub fn mount(&mut self, now_ms: f64) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        let cfg = self.config();
        log::info!(
            "[engine] mounted idle={} hover={} click={} mount={:?}",
            cfg.idle_effect,
            cfg.on_hover_effect,
            cfg.on_click_effect,
            cfg.mount_effect()
        );
        if cfg.track_global_pointer && !cfg.uses(EffectKind::FollowMouse) {
            log::warn!("[engine] global pointer tracking has no effect without followMouse");
        }
        if let Some(effect) = cfg.mount_effect() {
            self.trigger(effect, now_ms);
        }
    }

    /// Stop for good. Sinks are released so no later frame can write to them.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        self.sinks = [None, None];
        log::info!("[engine] unmounted");
    }

    /// Open a temporary effect window. `None` is ignored.
    pub fn trigger(&mut self, effect: EffectKind, now_ms: f64) -> bool {
        if self.lifecycle == Lifecycle::Disposed {
            return false;
        }
        let duration = self.config().effect_duration_ms;
        self.temporary.trigger(effect, now_ms, duration)
    }

    pub fn pointer_enter(&mut self, now_ms: f64) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.hovered = true;
        // Entering with glitch-on-hover also opens a temporary window so the
        // first frames use the intensified distance.
        if self.config().on_hover_effect == EffectKind::Glitch {
            self.trigger(EffectKind::Glitch, now_ms);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.hovered = false;
        if !self.config().track_global_pointer {
            self.pointer.target = Vec2::ZERO;
        }
    }

    /// Record a pointer position against the element's bounding box.
    /// Returns the new normalised target when it was updated.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, rect: &Rect) -> Option<Vec2> {
        if self.lifecycle == Lifecycle::Disposed {
            return None;
        }
        if !self.config().track_global_pointer && !self.hovered {
            return None;
        }
        let n = normalize_pointer(client_x, client_y, rect)?;
        self.pointer.target = n;
        Some(n)
    }

    pub fn click(&mut self, now_ms: f64) -> bool {
        let effect = self.config().on_click_effect;
        self.trigger(effect, now_ms)
    }

    /// Run one animation frame.
    ///
    /// `now_ms` is the clock used for temporary windows; `anim_time_ms` is the
    /// animation timestamp driving the breathe oscillators. Returns `None`
    /// (writing nothing) unless the engine is running.
    pub fn frame(&mut self, now_ms: f64, anim_time_ms: f64) -> Option<FrameOutput> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        let cfg = self.config();
        let resolution = resolve_source(now_ms, &self.temporary, self.hovered, &cfg);
        let target = offsets::target_offsets(
            &cfg,
            &resolution,
            anim_time_ms * MS_TO_SECONDS,
            &mut self.pointer,
            &mut self.rng,
        );
        self.offsets
            .approach(&target, offsets::smoothing_factor(resolution.effect));

        let current = self.offsets;
        if let Some(sink) = self.sinks[Channel::Red.index()].as_mut() {
            sink.translate(current.r);
        }
        if let Some(sink) = self.sinks[Channel::Green.index()].as_mut() {
            sink.translate(current.g);
        }

        Some(FrameOutput {
            effect: resolution.effect,
            source: resolution.source,
            applied_distance: if cfg.disabled {
                0.0
            } else {
                offsets::applied_distance(&cfg, &resolution)
            },
            target,
            current,
        })
    }
}
