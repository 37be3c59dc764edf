//! Host-side inputs that switch the effect off: reduced-motion preference,
//! a small-viewport policy, and whether the element is near the viewport.

use crate::constants::REDUCED_MOTION_QUERY;
use crate::events::Listener;
use crate::input;
use split_core::constants::VISIBILITY_ROOT_MARGIN;
use split_core::DisableGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type GateRef = Rc<RefCell<DisableGate>>;

/// Called after every gate change with the new `is_disabled()` value.
pub type OnGateChange = Rc<dyn Fn(bool)>;

struct Visibility {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Visibility {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Live subscriptions feeding a [`DisableGate`]. Dropping detaches them all.
pub struct Gating {
    _listeners: Vec<Listener>,
    _visibility: Option<Visibility>,
}

pub fn wire(element: &web::Element, gate: &GateRef, on_change: OnGateChange) -> Gating {
    let mut listeners = Vec::new();
    let Some(window) = web::window() else {
        return Gating {
            _listeners: listeners,
            _visibility: None,
        };
    };

    {
        let mut g = gate.borrow_mut();
        g.viewport_width = input::viewport_width(&window);
    }

    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => {
            gate.borrow_mut().reduced_motion = mql.matches();
            let gate_mq = gate.clone();
            let on_change_mq = on_change.clone();
            let mql_read = mql.clone();
            listeners.extend(Listener::new(&mql, "change", move |_| {
                let disabled = {
                    let mut g = gate_mq.borrow_mut();
                    g.reduced_motion = mql_read.matches();
                    g.is_disabled()
                };
                log::info!("[gate] reduced motion = {}", mql_read.matches());
                on_change_mq(disabled);
            }));
        }
        Ok(None) => {}
        Err(e) => log::warn!("[gate] matchMedia failed: {:?}", e),
    }

    let gate_resize = gate.clone();
    let on_change_resize = on_change.clone();
    let window_resize = window.clone();
    listeners.extend(Listener::new(&window, "resize", move |_| {
        let disabled = {
            let mut g = gate_resize.borrow_mut();
            g.viewport_width = input::viewport_width(&window_resize);
            g.is_disabled()
        };
        on_change_resize(disabled);
    }));

    let visibility = observe_visibility(element, gate, on_change.clone());

    on_change(gate.borrow().is_disabled());
    Gating {
        _listeners: listeners,
        _visibility: visibility,
    }
}

fn observe_visibility(
    element: &web::Element,
    gate: &GateRef,
    on_change: OnGateChange,
) -> Option<Visibility> {
    let gate = gate.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let Some(entry) = entries
            .get(0)
            .dyn_into::<web::IntersectionObserverEntry>()
            .ok()
        else {
            return;
        };
        let disabled = {
            let mut g = gate.borrow_mut();
            g.visible = entry.is_intersecting();
            g.is_disabled()
        };
        on_change(disabled);
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(VISIBILITY_ROOT_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some(Visibility {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            log::warn!("[gate] IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}
