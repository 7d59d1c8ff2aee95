//! Navigation behavior: the hamburger menu and smooth same-page anchor
//! scrolling. The scroll strategy (native `behavior: smooth` vs a manual
//! eased animation) is resolved once at init and shared by the anchor links
//! and the scroll-to-top button.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::device::Capabilities;
use crate::dom;
use crate::easing;

/// Maps an intercepted `href` to a query selector, or `None` for the empty
/// and bare-`#` fragments that must be suppressed without scrolling.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        other => Some(other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStrategy {
    /// The platform animates via `ScrollToOptions { behavior: smooth }`.
    Native,
    /// Manual rAF loop with the cubic ease-in-out curve.
    Animated,
}

impl ScrollStrategy {
    pub fn resolve(caps: &Capabilities) -> Self {
        if caps.native_smooth_scroll {
            Self::Native
        } else {
            Self::Animated
        }
    }
}

/// Shared smooth-scroll engine.
pub struct Scroller {
    window: Window,
    navbar: Option<HtmlElement>,
    strategy: ScrollStrategy,
    duration_ms: f64,
}

impl Scroller {
    pub fn new(
        window: Window,
        navbar: Option<HtmlElement>,
        strategy: ScrollStrategy,
        duration_ms: f64,
    ) -> Rc<Self> {
        Rc::new(Self {
            window,
            navbar,
            strategy,
            duration_ms,
        })
    }

    /// Scrolls so the target sits just below the fixed navbar.
    pub fn scroll_to_element(&self, target: &Element) {
        let navbar_height = self
            .navbar
            .as_ref()
            .map(|n| n.offset_height() as f64)
            .unwrap_or(0.0);
        let destination = easing::anchor_destination(
            target.get_bounding_client_rect().top(),
            self.window.page_y_offset().unwrap_or(0.0),
            navbar_height,
        );
        self.scroll_to_offset(destination);
    }

    pub fn scroll_to_offset(&self, destination: f64) {
        match self.strategy {
            ScrollStrategy::Native => {
                let opts = ScrollToOptions::new();
                opts.set_top(destination);
                opts.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&opts);
            }
            ScrollStrategy::Animated => {
                ScrollAnimation::start(self.window.clone(), destination, self.duration_ms);
            }
        }
    }
}

/// One in-flight manual scroll animation. Kept alive by the frame callbacks
/// cloning the `Rc`; dropped after the final frame.
struct ScrollAnimation {
    window: Window,
    start_pos: f64,
    destination: f64,
    duration: f64,
    start_time: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl ScrollAnimation {
    fn start(window: Window, destination: f64, duration: f64) {
        let start_pos = window.page_y_offset().unwrap_or(0.0);
        let anim = Rc::new(Self {
            window,
            start_pos,
            destination,
            duration,
            start_time: Cell::new(None),
            frame: RefCell::new(None),
        });
        anim.request_next();
    }

    fn request_next(self: &Rc<Self>) {
        let this = Rc::clone(self);
        *self.frame.borrow_mut() = Some(request_animation_frame(move |now| this.step(now)));
    }

    fn step(self: &Rc<Self>, now: f64) {
        self.frame.borrow_mut().take();
        let start_time = match self.start_time.get() {
            Some(t) => t,
            None => {
                self.start_time.set(Some(now));
                now
            }
        };
        let elapsed = now - start_time;
        let pos = easing::sample(self.start_pos, self.destination, elapsed, self.duration);
        self.window.scroll_to_with_x_and_y(0.0, pos);
        if elapsed < self.duration {
            self.request_next();
        }
    }
}

/// Intercepts every same-page anchor link.
pub fn install_anchor_links(document: &Document, scroller: &Rc<Scroller>) {
    for link in dom::select_all(document, "a[href^=\"#\"]") {
        let scroller = Rc::clone(scroller);
        let document = document.clone();
        let link_el = link.clone();
        let opts = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&link, "click", opts, move |event| {
            let href = link_el.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_selector(&href) else {
                // No destination, but still suppress the visual snap.
                event.prevent_default();
                return;
            };
            if let Some(target) = document.query_selector(selector).ok().flatten() {
                event.prevent_default();
                scroller.scroll_to_element(&target);
            }
        })
        .forget();
    }
}

/// Hamburger toggle, close-on-link-click and close-on-outside-click. A page
/// without the hamburger markup simply skips all of it.
pub fn install_menu(document: &Document) {
    let hamburger = document.query_selector(".hamburger").ok().flatten();
    let nav_links = document.query_selector(".nav-links").ok().flatten();
    let (Some(hamburger), Some(nav_links)) = (hamburger, nav_links) else {
        return;
    };

    {
        let toggle_hamburger = hamburger.clone();
        let toggle_links = nav_links.clone();
        EventListener::new(&hamburger, "click", move |_| {
            let _ = toggle_hamburger.class_list().toggle("active");
            let _ = toggle_links.class_list().toggle("active");
        })
        .forget();
    }

    for item in dom::select_all_in(&nav_links, "a") {
        let hamburger = hamburger.clone();
        let nav_links = nav_links.clone();
        EventListener::new(&item, "click", move |_| {
            let _ = hamburger.class_list().remove_1("active");
            let _ = nav_links.class_list().remove_1("active");
        })
        .forget();
    }

    {
        let hamburger = hamburger.clone();
        let nav_links = nav_links.clone();
        EventListener::new(document, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let inside_nav = nav_links.contains(Some(&target));
            let on_hamburger = hamburger.contains(Some(&target));
            if !inside_nav && !on_hamburger && nav_links.class_list().contains("active") {
                let _ = hamburger.class_list().remove_1("active");
                let _ = nav_links.class_list().remove_1("active");
            }
        })
        .forget();
    }
}
