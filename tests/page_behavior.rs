//! DOM-level behavior tests. Browser only; compiled out on the host.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};

use evora_frontend::{nav, page, reveal, scroll, viewport};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make(tag: &str, class: &str) -> Element {
    let el = document().create_element(tag).unwrap();
    el.set_class_name(class);
    document().body().unwrap().append_child(&el).unwrap();
    el
}

fn click(el: &Element) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    el.dispatch_event(&event).unwrap();
    event
}

#[wasm_bindgen_test]
fn navbar_and_indicator_follow_the_scroll_snapshot() {
    let navbar = make("nav", "navbar");
    let indicator: HtmlElement = make("div", "scroll-indicator").dyn_into().unwrap();
    let coordinator = scroll::ScrollCoordinator::new(
        web_sys::window().unwrap(),
        Some(navbar.clone()),
        Some(indicator.clone()),
        None,
        None,
        100.0,
        500.0,
        0.5,
    );

    coordinator.apply(150.0, 900.0);
    assert!(navbar.class_list().contains("scrolled"));
    assert_eq!(indicator.style().get_property_value("opacity").unwrap(), "0");

    coordinator.apply(50.0, 900.0);
    assert!(!navbar.class_list().contains("scrolled"));
    assert_eq!(indicator.style().get_property_value("opacity").unwrap(), "1");

    navbar.remove();
    indicator.remove();
}

#[wasm_bindgen_test]
fn parallax_freezes_past_one_viewport_height() {
    let hero: HtmlElement = make("header", "hero").dyn_into().unwrap();
    let coordinator = scroll::ScrollCoordinator::new(
        web_sys::window().unwrap(),
        None,
        None,
        Some(hero.clone()),
        None,
        100.0,
        500.0,
        0.5,
    );

    coordinator.apply(300.0, 900.0);
    assert_eq!(
        hero.style().get_property_value("transform").unwrap(),
        "translateY(150px)"
    );

    // Past one viewport height the last transform sticks.
    coordinator.apply(2000.0, 900.0);
    assert_eq!(
        hero.style().get_property_value("transform").unwrap(),
        "translateY(150px)"
    );

    // Scrolling back under the threshold resumes updates.
    coordinator.apply(400.0, 900.0);
    assert_eq!(
        hero.style().get_property_value("transform").unwrap(),
        "translateY(200px)"
    );

    hero.remove();
}

#[wasm_bindgen_test]
fn scroll_top_button_shows_past_its_threshold() {
    let btn = scroll::create_scroll_top_button(&document()).unwrap();
    assert_eq!(btn.get_attribute("aria-label").as_deref(), Some("Scroll to top"));

    let coordinator = scroll::ScrollCoordinator::new(
        web_sys::window().unwrap(),
        None,
        None,
        None,
        Some(btn.clone()),
        100.0,
        500.0,
        0.5,
    );

    coordinator.apply(600.0, 900.0);
    assert!(btn.class_list().contains("visible"));
    coordinator.apply(100.0, 900.0);
    assert!(!btn.class_list().contains("visible"));

    btn.remove();
}

#[wasm_bindgen_test]
fn reveal_pass_is_monotonic_and_idempotent() {
    let block = make("article", "dest-block");
    let elements = vec![block.clone()];

    // A huge viewport puts the trigger line far below the element.
    reveal::apply_fallback_pass(&elements, 10_000.0, 0.85);
    assert!(block.class_list().contains("reveal"));

    reveal::apply_fallback_pass(&elements, 10_000.0, 0.85);
    assert_eq!(block.class_name(), "dest-block reveal");

    block.remove();
}

#[wasm_bindgen_test]
fn bare_hash_click_is_suppressed_without_scrolling() {
    let link = make("a", "");
    link.set_attribute("href", "#").unwrap();

    let scroller = nav::Scroller::new(
        web_sys::window().unwrap(),
        None,
        nav::ScrollStrategy::Animated,
        800.0,
    );
    nav::install_anchor_links(&document(), &scroller);

    let event = click(&link);
    assert!(event.default_prevented());
    assert_eq!(web_sys::window().unwrap().scroll_y().unwrap(), 0.0);

    link.remove();
}

#[wasm_bindgen_test]
fn hamburger_toggles_and_link_click_closes() {
    let hamburger = make("button", "hamburger");
    let nav_links = make("div", "nav-links");
    let item = document().create_element("a").unwrap();
    item.set_attribute("href", "#destinations").unwrap();
    nav_links.append_child(&item).unwrap();

    nav::install_menu(&document());

    click(&hamburger);
    assert!(hamburger.class_list().contains("active"));
    assert!(nav_links.class_list().contains("active"));

    click(&item);
    assert!(!hamburger.class_list().contains("active"));
    assert!(!nav_links.class_list().contains("active"));

    hamburger.remove();
    nav_links.remove();
}

#[wasm_bindgen_test]
fn reduced_motion_pins_hero_and_flattens_transitions() {
    let hero: HtmlElement = make("header", "hero").dyn_into().unwrap();
    let block = make("article", "dest-block");

    page::apply_reduced_motion(Some(&hero), &[block.clone()]);

    assert_eq!(hero.style().get_property_value("transform").unwrap(), "none");
    let block_html: HtmlElement = block.clone().dyn_into().unwrap();
    assert_eq!(
        block_html.style().get_property_value("transition").unwrap(),
        "opacity 0.3s ease"
    );

    // Also holds on a page without a hero.
    page::apply_reduced_motion(None, &[block.clone()]);
    assert_eq!(
        block_html.style().get_property_value("transition").unwrap(),
        "opacity 0.3s ease"
    );

    hero.remove();
    block.remove();
}

#[wasm_bindgen_test]
fn vh_token_written_to_root() {
    let window = web_sys::window().unwrap();
    let document = document();
    viewport::set_vh_property(&window, &document);

    let root: HtmlElement = document.document_element().unwrap().dyn_into().unwrap();
    let value = root.style().get_property_value("--vh").unwrap();
    let expected = window.inner_height().unwrap().as_f64().unwrap() * 0.01;
    assert_eq!(value, format!("{expected}px"));
}
