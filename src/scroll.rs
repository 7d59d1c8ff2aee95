//! Scroll-state coordinator.
//!
//! Scroll events arrive at an unbounded rate; the coordinator coalesces them
//! to at most one recomputation per animation frame by parking a single
//! `AnimationFrame` handle. Every scroll-driven affordance (navbar class,
//! scroll indicator, hero parallax, scroll-to-top visibility) is applied from
//! the same scroll snapshot taken at frame-callback entry.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::easing;

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn indicator_opacity(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        "0"
    } else {
        "1"
    }
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub struct ScrollCoordinator {
    window: Window,
    navbar: Option<Element>,
    indicator: Option<HtmlElement>,
    /// Parallax target. `None` disables parallax (mobile, reduced motion, or
    /// no hero in the markup).
    hero: Option<HtmlElement>,
    scroll_top_btn: Option<Element>,
    navbar_threshold: f64,
    scroll_top_threshold: f64,
    parallax_speed: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

impl ScrollCoordinator {
    pub fn new(
        window: Window,
        navbar: Option<Element>,
        indicator: Option<HtmlElement>,
        hero: Option<HtmlElement>,
        scroll_top_btn: Option<Element>,
        navbar_threshold: f64,
        scroll_top_threshold: f64,
        parallax_speed: f64,
    ) -> Rc<Self> {
        Rc::new(Self {
            window,
            navbar,
            indicator,
            hero,
            scroll_top_btn,
            navbar_threshold,
            scroll_top_threshold,
            parallax_speed,
            frame: RefCell::new(None),
        })
    }

    /// Registers the scroll listener and applies the current state once so a
    /// page restored mid-scroll starts out consistent.
    pub fn install(self: &Rc<Self>) {
        let this = Rc::clone(self);
        EventListener::new(&self.window, "scroll", move |_| this.schedule()).forget();
        self.refresh();
    }

    /// At most one pending frame at a time; extra scroll events are dropped.
    fn schedule(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let this = Rc::clone(self);
        *self.frame.borrow_mut() = Some(request_animation_frame(move |_| {
            this.frame.borrow_mut().take();
            this.refresh();
        }));
    }

    /// Reads the live scroll offset and applies every scroll-driven update
    /// from that one snapshot. Also driven by the debounced resize handler.
    pub fn refresh(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.apply(scroll_y, viewport_height);
    }

    pub fn apply(&self, scroll_y: f64, viewport_height: f64) {
        if let Some(navbar) = &self.navbar {
            let list = navbar.class_list();
            if navbar_scrolled(scroll_y, self.navbar_threshold) {
                let _ = list.add_1("scrolled");
            } else {
                let _ = list.remove_1("scrolled");
            }
        }

        if let Some(indicator) = &self.indicator {
            let _ = indicator
                .style()
                .set_property("opacity", indicator_opacity(scroll_y, self.navbar_threshold));
        }

        if let Some(hero) = &self.hero {
            if let Some(offset) =
                easing::parallax_offset(scroll_y, viewport_height, self.parallax_speed)
            {
                let _ = hero
                    .style()
                    .set_property("transform", &format!("translateY({offset}px)"));
            }
        }

        if let Some(btn) = &self.scroll_top_btn {
            let list = btn.class_list();
            if scroll_top_visible(scroll_y, self.scroll_top_threshold) {
                let _ = list.add_1("visible");
            } else {
                let _ = list.remove_1("visible");
            }
        }
    }
}

/// Builds the floating scroll-to-top button and appends it to the body.
/// Mobile only; the caller wires its click to the smooth-scroll engine.
pub fn create_scroll_top_button(document: &Document) -> Option<Element> {
    let btn = document.create_element("button").ok()?;
    btn.set_class_name("scroll-to-top");
    btn.set_inner_html("&uarr;");
    let _ = btn.set_attribute("aria-label", "Scroll to top");
    document.body()?.append_child(&btn).ok()?;
    Some(btn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_marker_flips_past_threshold() {
        assert!(!navbar_scrolled(0.0, 100.0));
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
    }

    #[test]
    fn indicator_opacity_mirrors_navbar_state() {
        assert_eq!(indicator_opacity(0.0, 100.0), "1");
        assert_eq!(indicator_opacity(100.0, 100.0), "1");
        assert_eq!(indicator_opacity(101.0, 100.0), "0");
    }

    #[test]
    fn scroll_top_shows_past_its_own_threshold() {
        assert!(!scroll_top_visible(500.0, 500.0));
        assert!(scroll_top_visible(501.0, 500.0));
    }
}
