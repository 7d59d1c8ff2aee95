//! Reveal-on-enter tracker.
//!
//! Content blocks get a one-way `reveal` class as they approach the viewport.
//! The preferred strategy is an IntersectionObserver tuned per device class;
//! the fallback recomputes offsets on scroll ticks. Both are monotonic:
//! class-list adds are idempotent and nothing here ever removes the marker.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config::RevealConfig;
use crate::dom;

/// Fallback trigger line: an element reveals once its top edge rises above
/// this fraction of the viewport height.
pub fn reveal_trigger(viewport_height: f64, fraction: f64) -> f64 {
    viewport_height * fraction
}

pub fn should_reveal(element_top: f64, trigger_bottom: f64) -> bool {
    element_top < trigger_bottom
}

/// The stagger delays only make sense for the initial page paint; cleared so
/// scroll-revealed blocks animate together.
pub fn clear_animation_delays(document: &Document) {
    for el in dom::select_all(document, ".dest-block, .package-card") {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("animation-delay", "0s");
        }
    }
}

pub fn install(
    window: &Window,
    elements: Vec<Element>,
    reveal_cfg: &RevealConfig,
    trigger_fraction: f64,
    observer_available: bool,
) {
    if elements.is_empty() {
        return;
    }
    if observer_available && install_observer(&elements, reveal_cfg) {
        return;
    }
    install_fallback(window.clone(), elements, trigger_fraction);
}

fn install_observer(elements: &[Element], cfg: &RevealConfig) -> bool {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("reveal");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(cfg.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => return false,
        };
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    // Observer lives for the page lifetime.
    std::mem::forget(observer);
    true
}

/// One fallback pass: marks every element whose top edge sits above the
/// trigger line. Re-running it on already-revealed elements is a no-op.
pub fn apply_fallback_pass(elements: &[Element], viewport_height: f64, trigger_fraction: f64) {
    let trigger_bottom = reveal_trigger(viewport_height, trigger_fraction);
    for el in elements {
        if should_reveal(el.get_bounding_client_rect().top(), trigger_bottom) {
            let _ = el.class_list().add_1("reveal");
        }
    }
}

struct FallbackTracker {
    window: Window,
    elements: Vec<Element>,
    trigger_fraction: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

impl FallbackTracker {
    fn check(&self) {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        apply_fallback_pass(&self.elements, viewport_height, self.trigger_fraction);
    }

    fn schedule(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let this = Rc::clone(self);
        *self.frame.borrow_mut() = Some(request_animation_frame(move |_| {
            this.frame.borrow_mut().take();
            this.check();
        }));
    }
}

fn install_fallback(window: Window, elements: Vec<Element>, trigger_fraction: f64) {
    let tracker = Rc::new(FallbackTracker {
        window: window.clone(),
        elements,
        trigger_fraction,
        frame: RefCell::new(None),
    });
    tracker.check();
    for event in ["scroll", "resize"] {
        let this = Rc::clone(&tracker);
        EventListener::new(&window, event, move |_| this.schedule()).forget();
    }
}
