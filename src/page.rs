//! One-shot page wiring.
//!
//! `attach` queries the element set once, resolves the device class and
//! capability strategies once, and installs every behavior. A missing
//! optional element degrades its feature to a no-op; nothing here is fatal.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::{PageConfig, RevealConfig};
use crate::device::{Capabilities, Device};
use crate::{dom, hero, nav, reveal, scroll, touch, viewport};

pub fn attach(window: &Window, document: &Document, cfg: PageConfig) {
    let device = Device::detect(window);
    let caps = Capabilities::probe(window, document);

    let navbar = document.query_selector(".navbar").ok().flatten();
    let navbar_html = navbar
        .clone()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let indicator = document
        .query_selector(".scroll-indicator")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let hero_section = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    nav::install_menu(document);

    let scroller = nav::Scroller::new(
        window.clone(),
        navbar_html,
        nav::ScrollStrategy::resolve(&caps),
        cfg.scroll_duration_ms,
    );
    nav::install_anchor_links(document, &scroller);

    reveal::clear_animation_delays(document);
    let reveal_elements = dom::select_all(document, cfg.reveal_selector);
    if device.reduced_motion {
        apply_reduced_motion(hero_section.as_ref(), &reveal_elements);
    }
    reveal::install(
        window,
        reveal_elements,
        &RevealConfig::for_device(device.mobile),
        cfg.reveal_trigger_fraction,
        caps.intersection_observer,
    );

    if let Some(hero_section) = &hero_section {
        hero::install(
            window,
            document,
            hero_section,
            cfg.hero_image_src,
            cfg.hero_safety_ms,
        );
    }

    if device.mobile {
        touch::install_touch_feedback(document, cfg.touch_settle_ms);
    } else {
        touch::install_hover_scale(document);
    }
    if device.ios {
        touch::install_double_tap_suppression(document, cfg.double_tap_ms);
    }

    let scroll_top_btn = if device.mobile {
        scroll::create_scroll_top_button(document)
    } else {
        None
    };
    if let Some(btn) = &scroll_top_btn {
        let scroller = Rc::clone(&scroller);
        let document = document.clone();
        EventListener::new(btn, "click", move |_| {
            match document.query_selector("#home").ok().flatten() {
                Some(home) => scroller.scroll_to_element(&home),
                None => scroller.scroll_to_offset(0.0),
            }
        })
        .forget();
    }

    let parallax_hero = if device.mobile || device.reduced_motion {
        None
    } else {
        hero_section
    };
    let coordinator = scroll::ScrollCoordinator::new(
        window.clone(),
        navbar,
        indicator,
        parallax_hero,
        scroll_top_btn,
        cfg.navbar_threshold,
        cfg.scroll_top_threshold,
        cfg.parallax_speed,
    );
    coordinator.install();

    viewport::install_vh_fix(window, document);
    viewport::install_resize_debounce(window, coordinator, cfg.resize_debounce_ms);
    if caps.native_lazy_loading {
        viewport::hydrate_lazy_images(document);
    }
    viewport::install_body_loaded(document, cfg.body_loaded_delay_ms);
}

/// Reduced-motion overrides: the hero stops translating entirely and the
/// tracked blocks fall back to a plain opacity transition.
pub fn apply_reduced_motion(hero: Option<&HtmlElement>, elements: &[Element]) {
    if let Some(hero) = hero {
        let _ = hero.style().set_property("transform", "none");
    }
    for el in elements {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("transition", "opacity 0.3s ease");
        }
    }
}
