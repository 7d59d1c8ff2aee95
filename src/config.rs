//! Tunables for the page controller.
//!
//! The script went through several iterations that only differed in timing
//! constants and observer margins, so every such value lives here instead of
//! being scattered through the wiring code.

/// Thresholds, durations and debounce windows for the whole page controller.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Scroll offset (px) past which the navbar gets the `scrolled` class
    /// and the scroll indicator fades out.
    pub navbar_threshold: f64,
    /// Scroll offset (px) past which the mobile scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Fraction of the scroll offset applied as hero translation.
    pub parallax_speed: f64,
    /// Duration of the manual smooth-scroll animation (ms).
    pub scroll_duration_ms: f64,
    /// Debounce window for resize-driven navbar refresh (ms).
    pub resize_debounce_ms: u32,
    /// Settle delay before touch feedback scales back to 1 (ms).
    pub touch_settle_ms: u32,
    /// Delay before the body gets its `loaded` class (ms).
    pub body_loaded_delay_ms: u32,
    /// Safety timer that forces the hero visible no matter what (ms).
    pub hero_safety_ms: u32,
    /// Maximum gap between two touch ends counted as a double tap (ms).
    pub double_tap_ms: f64,
    /// Fallback reveal trigger as a fraction of viewport height.
    pub reveal_trigger_fraction: f64,
    /// Image the injected `.hero-bg` element points at when the markup does
    /// not declare one.
    pub hero_image_src: &'static str,
    /// Selector for the reveal-tracked content blocks.
    pub reveal_selector: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            scroll_top_threshold: 500.0,
            parallax_speed: 0.5,
            scroll_duration_ms: 800.0,
            resize_debounce_ms: 250,
            touch_settle_ms: 100,
            body_loaded_delay_ms: 100,
            hero_safety_ms: 1000,
            double_tap_ms: 300.0,
            reveal_trigger_fraction: 0.85,
            hero_image_src: "assets/hero.svg",
            reveal_selector: ".about-content, .dest-block, .package-card, .ev-footer",
        }
    }
}

/// Intersection-observer tuning, picked per device class. Mobile reveals
/// earlier to compensate for shorter scroll distances.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealConfig {
    pub fn for_device(mobile: bool) -> Self {
        if mobile {
            Self {
                threshold: 0.05,
                root_margin: "0px 0px -30px 0px",
            }
        } else {
            Self {
                threshold: 0.15,
                root_margin: "0px 0px -80px 0px",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_reveals_earlier_than_desktop() {
        let mobile = RevealConfig::for_device(true);
        let desktop = RevealConfig::for_device(false);
        assert!(mobile.threshold < desktop.threshold);
        assert_eq!(mobile.root_margin, "0px 0px -30px 0px");
        assert_eq!(desktop.root_margin, "0px 0px -80px 0px");
    }

    #[test]
    fn default_config_matches_page_constants() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.navbar_threshold, 100.0);
        assert_eq!(cfg.scroll_top_threshold, 500.0);
        assert_eq!(cfg.scroll_duration_ms, 800.0);
        assert_eq!(cfg.hero_safety_ms, 1000);
        assert!(cfg.reveal_selector.contains(".package-card"));
    }
}
