#![cfg(target_arch = "wasm32")]
//! Browser host for the RGB split effect.
//!
//! `RgbSplitImage` turns a container element into a split image: one base
//! layer plus red and green channel copies whose positions the engine in
//! `split-core` animates every frame.

use split_core::{
    shared, Channel, ColorSpace, EffectKind, EngineConfig, Lifecycle, SharedConfig, SplitEngine,
    SystemClock,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod gating;
mod input;
mod sink;
mod style;

use events::{EngineRef, Listener};
use gating::{GateRef, Gating, OnGateChange};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("split-web starting");
    Ok(())
}

fn parse_effect(name: &str) -> EffectKind {
    name.parse().unwrap_or_else(|e| {
        log::warn!("[config] {}; using none", e);
        EffectKind::None
    })
}

// Everything that only exists between mount() and destroy().
struct Mounted {
    _pointer: Vec<Listener>,
    global_move: Option<Listener>,
    _gating: Gating,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
pub struct RgbSplitImage {
    config: SharedConfig,
    engine: EngineRef,
    layers: Rc<dom::Layers>,
    gate: GateRef,
    clock: SystemClock,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl RgbSplitImage {
    /// Build the layers inside `container`. Call `mount()` to start the effect.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: web::HtmlElement,
        src: &str,
        alt: Option<String>,
    ) -> Result<RgbSplitImage, JsValue> {
        let layers = dom::Layers::build(
            container,
            src,
            alt.as_deref().unwrap_or(""),
            ColorSpace::default(),
            false,
        )
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        let config = shared(EngineConfig::default());
        let engine = Rc::new(RefCell::new(SplitEngine::new(config.clone())));
        Ok(Self {
            config,
            engine,
            layers: Rc::new(layers),
            gate: Rc::default(),
            clock: SystemClock::new(),
            mounted: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn element(&self) -> web::HtmlElement {
        self.layers.container.clone()
    }

    #[wasm_bindgen(js_name = setIdleEffect)]
    pub fn set_idle_effect(&self, name: &str) {
        self.config.borrow_mut().idle_effect = parse_effect(name);
    }

    #[wasm_bindgen(js_name = setOnHover)]
    pub fn set_on_hover(&self, name: &str) {
        self.config.borrow_mut().on_hover_effect = parse_effect(name);
    }

    #[wasm_bindgen(js_name = setOnClick)]
    pub fn set_on_click(&self, name: &str) {
        self.config.borrow_mut().on_click_effect = parse_effect(name);
    }

    /// Only read at mount; later changes have no effect on a running image.
    #[wasm_bindgen(js_name = setOnMount)]
    pub fn set_on_mount(&self, name: Option<String>) {
        self.config.borrow_mut().on_mount_effect = name.as_deref().map(parse_effect);
    }

    #[wasm_bindgen(js_name = setEffectDuration)]
    pub fn set_effect_duration(&self, ms: f64) {
        self.config.borrow_mut().effect_duration_ms = ms;
    }

    #[wasm_bindgen(js_name = setEffectIntensity)]
    pub fn set_effect_intensity(&self, intensity: f32) {
        self.config.borrow_mut().effect_intensity = intensity;
    }

    #[wasm_bindgen(js_name = setBreatheSpeed)]
    pub fn set_breathe_speed(&self, speed: f32) {
        self.config.borrow_mut().breathe_speed = speed;
    }

    #[wasm_bindgen(js_name = setSplitDistance)]
    pub fn set_split_distance(&self, px: f32) {
        self.config.borrow_mut().split_distance = px;
    }

    /// Track the pointer across the whole window instead of only while hovered.
    #[wasm_bindgen(js_name = setTrackWindowMouse)]
    pub fn set_track_window_mouse(&mut self, track: bool) {
        self.config.borrow_mut().track_global_pointer = track;
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        match (track, mounted.global_move.is_some()) {
            (true, false) => {
                mounted.global_move = events::wire_global_move(&self.layers.container, &self.engine);
            }
            (false, true) => {
                mounted.global_move = None;
                log::debug!("[events] global pointer tracking off");
            }
            _ => {}
        }
    }

    #[wasm_bindgen(js_name = setColorSpace)]
    pub fn set_color_space(&self, name: &str) {
        match name.parse::<ColorSpace>() {
            Ok(space) => self.layers.set_color_space(space),
            Err(e) => log::warn!("[config] {}", e),
        }
    }

    #[wasm_bindgen(js_name = setGrayscale)]
    pub fn set_grayscale(&self, grayscale: bool) {
        self.layers.set_grayscale(grayscale);
    }

    /// Disable the effect on viewports at most 768px wide.
    #[wasm_bindgen(js_name = setDisableOnMobile)]
    pub fn set_disable_on_mobile(&self, disable: bool) {
        let disabled = {
            let mut g = self.gate.borrow_mut();
            g.disable_on_small_viewport = disable;
            g.is_disabled()
        };
        (self.gate_callback())(disabled);
    }

    /// Attach listeners, start gating and the animation loop. Idempotent.
    pub fn mount(&mut self) {
        if self.mounted.is_some() || self.engine.borrow().lifecycle() == Lifecycle::Disposed {
            return;
        }
        let (red, green) = self.layers.channel_elements();
        {
            let mut eng = self.engine.borrow_mut();
            eng.attach_sink(Channel::Red, Box::new(sink::StyleSink::new(red)));
            eng.attach_sink(Channel::Green, Box::new(sink::StyleSink::new(green)));
        }

        let pointer =
            events::wire_pointer_handlers(&self.layers.container, &self.engine, self.clock);
        let global_move = if self.config.borrow().track_global_pointer {
            events::wire_global_move(&self.layers.container, &self.engine)
        } else {
            None
        };
        let gating = gating::wire(&self.layers.container, &self.gate, self.gate_callback());

        self.engine.borrow_mut().mount(self.clock.now_ms());
        let frame_loop = frame::start_loop(self.engine.clone(), self.clock);

        self.mounted = Some(Mounted {
            _pointer: pointer,
            global_move,
            _gating: gating,
            frame_loop,
        });
    }

    /// Cancel the pending frame, detach every listener and remove the
    /// generated layers. Safe to call more than once.
    pub fn destroy(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            if let Some(frame_loop) = &mounted.frame_loop {
                frame_loop.cancel();
            }
        }
        self.engine.borrow_mut().unmount();
        self.layers.remove();
    }
}

impl RgbSplitImage {
    fn gate_callback(&self) -> OnGateChange {
        let config = self.config.clone();
        let layers = self.layers.clone();
        Rc::new(move |disabled: bool| {
            config.borrow_mut().disabled = disabled;
            layers.set_will_change(disabled);
        })
    }
}

impl Drop for RgbSplitImage {
    fn drop(&mut self) {
        self.destroy();
    }
}
