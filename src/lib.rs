//! Traffic Trap site front-end.
//!
//! Every page of the promotional site loads this wasm module and calls
//! `start_site()`. Each controller (content feeds, contact form, cookie
//! banner, decorative chaos timers) initializes independently and degrades to
//! a no-op when its DOM targets are not present on the current page, so the
//! same binary serves all pages. Pure logic (parsing, templating, form state)
//! lives apart from the browser glue and is exercised by host-side tests.

use wasm_bindgen::prelude::*;

pub mod chaos;
pub mod consent;
pub mod contact;
pub mod feed;
pub mod layout;
pub mod render;

mod tasks;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Logger may already be installed when start is re-entered (hot reloads).
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wires every page controller. Safe to call on any page: controllers whose
/// target elements are missing simply do nothing.
#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    log::info!("traffic trap site starting");
    layout::load_header_component();
    layout::load_footer_component();
    layout::update_copyright_year();
    feed::load_all_feeds();
    contact::setup_contact_form()?;
    consent::setup_consent_banner()?;
    chaos::activate_chaos()?;
    Ok(())
}

/// Disposal hook: clears every registered interval and aborts all in-flight
/// feed loads. After this call the page is inert until `start_site()` runs
/// again.
#[wasm_bindgen]
pub fn stop_site() {
    tasks::dispose_all();
    log::info!("traffic trap site stopped");
}
