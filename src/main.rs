use log::{info, Level};

use evora_frontend::config::PageConfig;
use evora_frontend::page;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    page::attach(&window, &document, PageConfig::default());

    info!("Evora page behavior attached");
}
