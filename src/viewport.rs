//! Viewport bookkeeping: the `--vh` custom property, the debounced resize
//! refresh, lazy image hydration and the deferred body `loaded` class.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, Window};

use crate::dom;
use crate::scroll::ScrollCoordinator;

/// One hundredth of the viewport height, as a CSS length. Mobile browser
/// chrome makes `100vh` lie; stylesheets use `calc(var(--vh) * 100)` instead.
pub fn vh_token(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

pub fn set_vh_property(window: &Window, document: &Document) {
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let _ = root.style().set_property("--vh", &vh_token(height));
}

/// Recompute `--vh` immediately on resize and orientation change.
pub fn install_vh_fix(window: &Window, document: &Document) {
    set_vh_property(window, document);
    for event in ["resize", "orientationchange"] {
        let window_for_cb = window.clone();
        let document = document.clone();
        EventListener::new(window, event, move |_| {
            set_vh_property(&window_for_cb, &document)
        })
        .forget();
    }
}

/// Refresh the scroll-driven state once the viewport stops changing. Each
/// resize event replaces the pending timer, which cancels it.
pub fn install_resize_debounce(
    window: &Window,
    coordinator: Rc<ScrollCoordinator>,
    debounce_ms: u32,
) {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    EventListener::new(window, "resize", move |_| {
        let coordinator = Rc::clone(&coordinator);
        *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || coordinator.refresh()));
    })
    .forget();
}

/// Promote deferred `data-src` sources once native lazy loading is confirmed.
pub fn hydrate_lazy_images(document: &Document) {
    for el in dom::select_all(document, "img[loading=\"lazy\"]") {
        let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if let Some(src) = img.dataset().get("src") {
            img.set_src(&src);
        }
    }
}

/// The stylesheet holds entry animations behind `body.loaded`; flip it after
/// a short settle so the first paint is stable.
pub fn install_body_loaded(document: &Document, delay_ms: u32) {
    let Some(body) = document.body() else {
        return;
    };
    Timeout::new(delay_ms, move || {
        let _ = body.class_list().add_1("loaded");
    })
    .forget();
}
