use crate::input;
use split_core::{Clock, SplitEngine, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type EngineRef = Rc<RefCell<SplitEngine>>;

/// A registered DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] could not listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Hover, move and click handlers on the container element.
pub fn wire_pointer_handlers(
    container: &web::HtmlElement,
    engine: &EngineRef,
    clock: SystemClock,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(4);

    let eng = engine.clone();
    listeners.extend(Listener::new(container, "mouseenter", move |_| {
        eng.borrow_mut().pointer_enter(clock.now_ms());
    }));

    let eng = engine.clone();
    listeners.extend(Listener::new(container, "mouseleave", move |_| {
        eng.borrow_mut().pointer_leave();
    }));

    listeners.extend(wire_move(container, container, engine));

    let eng = engine.clone();
    listeners.extend(Listener::new(container, "click", move |_| {
        if eng.borrow_mut().click(clock.now_ms()) {
            log::debug!("[events] click triggered temporary effect");
        }
    }));

    listeners
}

/// Window-wide pointer tracking, measured against the container's box.
pub fn wire_global_move(container: &web::HtmlElement, engine: &EngineRef) -> Option<Listener> {
    let window = web::window()?;
    let listener = wire_move(&window, container, engine);
    if listener.is_some() {
        log::debug!("[events] global pointer tracking on");
    }
    listener
}

fn wire_move(
    target: &web::EventTarget,
    container: &web::HtmlElement,
    engine: &EngineRef,
) -> Option<Listener> {
    let eng = engine.clone();
    let container = container.clone();
    Listener::new(target, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = input::client_point(ev);
        let rect = input::bounding_rect(&container);
        eng.borrow_mut().pointer_move(x, y, &rect);
    })
}
