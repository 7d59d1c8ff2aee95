//! Hero image paint guarantee.
//!
//! The hero background must never sit blank indefinitely. The image element
//! is created if the markup lacks one, decoded off-screen, and marked visible
//! through a chain of fallbacks: decode, then the element's own load/error
//! events, then a fixed safety timer.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlElement, HtmlImageElement, Window};

pub fn install(
    window: &Window,
    document: &Document,
    hero: &HtmlElement,
    image_src: &str,
    safety_ms: u32,
) {
    let Some(img) = ensure_hero_image(document, hero, image_src) else {
        return;
    };

    cleanup_background(window, hero);
    preload_and_decode(&img);

    let safety_target = img.clone();
    Timeout::new(safety_ms, move || mark_visible(&safety_target)).forget();
}

/// Finds `.hero-bg` inside the hero, or injects one as its first child with
/// eager/async hints.
fn ensure_hero_image(
    document: &Document,
    hero: &HtmlElement,
    image_src: &str,
) -> Option<HtmlImageElement> {
    if let Some(existing) = hero.query_selector(".hero-bg").ok().flatten() {
        return existing.dyn_into::<HtmlImageElement>().ok();
    }
    let img = document
        .create_element("img")
        .ok()?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    img.set_class_name("hero-bg");
    img.set_src(image_src);
    let _ = img.set_attribute("loading", "eager");
    img.set_decoding("async");
    let _ = img.set_attribute("alt", "");
    hero.insert_before(&img, hero.first_child().as_ref()).ok()?;
    Some(img)
}

/// Decodes a detached clone so the visible element never paints a half-decoded
/// frame. Decode rejection falls back to the element's own events.
fn preload_and_decode(img: &HtmlImageElement) {
    let src = img.src();
    let target = img.clone();
    spawn_local(async move {
        let preloader = match HtmlImageElement::new() {
            Ok(preloader) => preloader,
            Err(_) => {
                mark_visible(&target);
                return;
            }
        };
        preloader.set_src(&src);
        match JsFuture::from(preloader.decode()).await {
            Ok(_) => mark_visible(&target),
            Err(_) => {
                for event in ["load", "error"] {
                    let t = target.clone();
                    EventListener::new(&target, event, move |_| mark_visible(&t)).forget();
                }
                if target.complete() {
                    mark_visible(&target);
                }
            }
        }
    });
}

/// Idempotent: the class add and transform write are both no-ops the second
/// time around, so the decode path and the safety timer can race freely.
fn mark_visible(img: &HtmlImageElement) {
    let _ = img.class_list().add_1("loaded");
    let _ = img.style().set_property("transform", "translateZ(0)");
}

/// A CSS-declared fixed-attachment background fights the injected element;
/// rewrite it to the scrolling variant. Best effort, failures ignored.
fn cleanup_background(window: &Window, hero: &HtmlElement) {
    if let Ok(Some(computed)) = window.get_computed_style(hero) {
        let attachment = computed
            .get_property_value("background-attachment")
            .unwrap_or_default();
        if attachment == "fixed" {
            let _ = hero.style().set_property("background-attachment", "scroll");
            let _ = hero.style().set_property("background-image", "none");
        }
    }
}
