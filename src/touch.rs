//! Hover and touch feedback on the destination cards, plus the iOS
//! double-tap-zoom suppression. Which of these get installed is decided once
//! by the device branching in `page`.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

/// Two touch ends within the window count as a double tap.
pub fn is_double_tap(previous_ms: f64, now_ms: f64, window_ms: f64) -> bool {
    now_ms - previous_ms <= window_ms
}

fn card_image(block: &Element) -> Option<HtmlElement> {
    block
        .query_selector(".dest-img img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Desktop only: scale destination imagery on hover.
pub fn install_hover_scale(document: &Document) {
    for block in dom::select_all(document, ".dest-block") {
        let Some(img) = card_image(&block) else {
            continue;
        };
        let enter_img = img.clone();
        EventListener::new(&block, "mouseenter", move |_| {
            let _ = enter_img.style().set_property("transform", "scale(1.05)");
        })
        .forget();
        EventListener::new(&block, "mouseleave", move |_| {
            let _ = img.style().set_property("transform", "scale(1)");
        })
        .forget();
    }
}

/// Mobile only: press feedback, with a short settle before scaling back.
pub fn install_touch_feedback(document: &Document, settle_ms: u32) {
    for block in dom::select_all(document, ".dest-block") {
        let Some(img) = card_image(&block) else {
            continue;
        };
        let press_img = img.clone();
        EventListener::new(&block, "touchstart", move |_| {
            let style = press_img.style();
            let _ = style.set_property("transition", "transform 0.3s ease, opacity 0.3s ease");
            let _ = style.set_property("transform", "scale(0.98)");
            let _ = style.set_property("opacity", "0.9");
        })
        .forget();
        EventListener::new(&block, "touchend", move |_| {
            let img = img.clone();
            Timeout::new(settle_ms, move || {
                let _ = img.style().set_property("transform", "scale(1)");
                let _ = img.style().set_property("opacity", "1");
            })
            .forget();
        })
        .forget();
    }
}

/// iOS only: reject the second tap of a double tap so Safari never zooms.
/// Needs a non-passive listener to be allowed to prevent the default.
pub fn install_double_tap_suppression(document: &Document, window_ms: f64) {
    let last_touch_end = Rc::new(Cell::new(0.0_f64));
    let opts = EventListenerOptions::enable_prevent_default();
    EventListener::new_with_options(document, "touchend", opts, move |event| {
        let now = js_sys::Date::now();
        if is_double_tap(last_touch_end.get(), now, window_ms) {
            event.prevent_default();
        }
        last_touch_end.set(now);
    })
    .forget();
}
