//! Device classification and capability probes.
//!
//! Classification is coarse user-agent matching, kept identical to the token
//! sets the site always shipped with. Capabilities are probed exactly once at
//! init and carried as booleans so event handlers never re-check the platform.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

const IOS_TOKENS: &[&str] = &["iPad", "iPhone", "iPod"];

/// Case-insensitive match against the known mobile platform tokens.
pub fn is_mobile_ua(ua: &str) -> bool {
    let ua = ua.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| ua.contains(token))
}

/// iOS is a narrower, case-sensitive match, qualified by the historical
/// Windows-Phone exclusion (`MSStream` present means not iOS).
pub fn is_ios_ua(ua: &str, has_ms_stream: bool) -> bool {
    IOS_TOKENS.iter().any(|token| ua.contains(token)) && !has_ms_stream
}

/// Coarse device class plus the reduced-motion preference.
#[derive(Debug, Clone, Copy)]
pub struct Device {
    pub mobile: bool,
    pub ios: bool,
    pub reduced_motion: bool,
}

impl Device {
    pub fn detect(window: &Window) -> Self {
        let ua = window.navigator().user_agent().unwrap_or_default();
        let has_ms_stream =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("MSStream"))
                .unwrap_or(false);
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);
        Self {
            mobile: is_mobile_ua(&ua),
            ios: is_ios_ua(&ua, has_ms_stream),
            reduced_motion,
        }
    }
}

/// Platform capabilities resolved once into strategy flags.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub intersection_observer: bool,
    pub native_smooth_scroll: bool,
    pub native_lazy_loading: bool,
}

impl Capabilities {
    pub fn probe(window: &Window, document: &Document) -> Self {
        let intersection_observer =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);

        let native_smooth_scroll = document
            .document_element()
            .map(|root| {
                js_sys::Reflect::get(root.as_ref(), &JsValue::from_str("style"))
                    .ok()
                    .map(|style| {
                        js_sys::Reflect::has(&style, &JsValue::from_str("scrollBehavior"))
                            .unwrap_or(false)
                    })
                    .unwrap_or(false)
            })
            .unwrap_or(false);

        // Probing a fresh element is equivalent to checking the prototype.
        let native_lazy_loading = web_sys::HtmlImageElement::new()
            .ok()
            .map(|img| {
                js_sys::Reflect::has(img.as_ref(), &JsValue::from_str("loading"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);

        Self {
            intersection_observer,
            native_smooth_scroll,
            native_lazy_loading,
        }
    }
}
