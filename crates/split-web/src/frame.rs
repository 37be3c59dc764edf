use crate::events::EngineRef;
use split_core::{Clock, SystemClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A requestAnimationFrame loop that re-arms itself after every callback
/// until [`FrameLoop::cancel`] is called. At most one frame is pending.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web::window()?;
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let cancelled_tick = cancelled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_tick.set(None);
            if cancelled_tick.get() {
                return;
            }
            on_frame(timestamp);
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    pending_tick.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = tick
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        if first.is_none() {
            log::error!("[frame] requestAnimationFrame unavailable");
            return None;
        }
        pending.set(first);
        Some(Self {
            tick,
            pending,
            cancelled,
        })
    }

    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to its own cell.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop cancelled");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive `engine` once per display refresh.
pub fn start_loop(engine: EngineRef, clock: SystemClock) -> Option<FrameLoop> {
    FrameLoop::start(move |timestamp| {
        engine.borrow_mut().frame(clock.now_ms(), timestamp);
    })
}
