//! Page-behavior module for the Evora Travel marketing site.
//!
//! The crate attaches scroll, touch and visibility behavior to static markup
//! it does not own. Everything is wired once on page load by
//! [`page::attach`]; there is no teardown path, listeners live for the page
//! lifetime.

pub mod config;
pub mod device;
pub(crate) mod dom;
pub mod easing;
pub mod hero;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod touch;
pub mod viewport;
