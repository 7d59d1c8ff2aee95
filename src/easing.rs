//! Pure scroll math: the easing curve, animation sampling, parallax capping
//! and anchor destination arithmetic. Kept free of `web_sys` so the host test
//! run covers it.

/// Cubic ease-in-out over normalized progress in `[0, 1]`.
pub fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Scroll position for a manual animation at `elapsed` ms into `duration` ms.
pub fn sample(start: f64, end: f64, elapsed: f64, duration: f64) -> f64 {
    let progress = (elapsed / duration).min(1.0);
    start + (end - start) * ease_in_out_cubic(progress)
}

/// Hero translation for a scroll offset, or `None` once the offset passes one
/// viewport height. `None` means "leave the transform alone", which is what
/// freezes the parallax at the last computed value.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    if scroll_y < viewport_height {
        Some(scroll_y * speed)
    } else {
        None
    }
}

/// Document-relative destination for an anchor target, leaving room for the
/// fixed navbar.
pub fn anchor_destination(target_viewport_top: f64, page_y_offset: f64, navbar_height: f64) -> f64 {
    target_viewport_top + page_y_offset - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_curve_boundaries() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let eased = ease_in_out_cubic(i as f64 / 1000.0);
            assert!(eased >= prev, "curve dipped at step {i}");
            prev = eased;
        }
    }

    #[test]
    fn sample_clamps_past_duration() {
        assert_eq!(sample(0.0, 1120.0, 0.0, 800.0), 0.0);
        assert_eq!(sample(0.0, 1120.0, 800.0, 800.0), 1120.0);
        assert_eq!(sample(0.0, 1120.0, 1200.0, 800.0), 1120.0);
        assert_eq!(sample(200.0, 1120.0, 400.0, 800.0), 200.0 + 920.0 * 0.5);
    }

    #[test]
    fn parallax_freezes_past_one_viewport() {
        assert_eq!(parallax_offset(300.0, 900.0, 0.5), Some(150.0));
        assert_eq!(parallax_offset(0.0, 900.0, 0.5), Some(0.0));
        assert_eq!(parallax_offset(900.0, 900.0, 0.5), None);
        assert_eq!(parallax_offset(2500.0, 900.0, 0.5), None);
    }

    #[test]
    fn anchor_destination_subtracts_navbar() {
        // #contact at viewport top 1200 while unscrolled, behind an 80px navbar
        assert_eq!(anchor_destination(1200.0, 0.0, 80.0), 1120.0);
        // same element seen after scrolling 1000px down
        assert_eq!(anchor_destination(200.0, 1000.0, 80.0), 1120.0);
    }
}
