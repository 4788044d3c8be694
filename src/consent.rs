//! Cookie consent banner.
//!
//! The only durable state on the whole site: a single boolean flag in
//! `localStorage`. Absent flag shows the banner after a short delay; accepting
//! persists the flag and animates the banner away. `reset_consent` exists for
//! manual testing from the console.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Storage, window};

use crate::tasks;

pub const CONSENT_KEY: &str = "trafficTrapCookiesAccepted";

const SHOW_DELAY_MS: i32 = 1_000;
const HIDE_DELAY_MS: i32 = 500;

fn storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

/// Pure read of the durable flag.
#[wasm_bindgen]
pub fn check_consent() -> bool {
    storage()
        .and_then(|s| s.get_item(CONSENT_KEY).ok())
        .flatten()
        .as_deref()
        == Some("true")
}

/// Persists acceptance and hides the banner. Idempotent.
#[wasm_bindgen]
pub fn grant_consent() {
    if let Some(storage) = storage() {
        let _ = storage.set_item(CONSENT_KEY, "true");
    }
    log::info!("cookie consent granted");

    let Some(banner) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("cookie-consent"))
    else {
        return;
    };
    let _ = banner.class_list().remove_1("show");
    // Let the slide-out transition finish before dropping it from layout.
    tasks::schedule_timeout(HIDE_DELAY_MS, move || {
        if let Ok(el) = banner.dyn_into::<HtmlElement>() {
            let _ = el.style().set_property("display", "none");
        }
    });
}

/// Diagnostic: drops the flag and re-shows the banner.
#[wasm_bindgen]
pub fn reset_consent() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(CONSENT_KEY);
    }
    if let Some(banner) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("cookie-consent"))
    {
        if let Some(el) = banner.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("display", "block");
        }
        let _ = banner.class_list().add_1("show");
    }
    log::info!("cookie consent reset");
}

/// Shows the banner when the flag is absent and wires the accept button.
/// Pages without the banner skip the controller.
pub fn setup_consent_banner() -> Result<(), JsValue> {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return Ok(());
    };

    if let Some(banner) = doc.get_element_by_id("cookie-consent") {
        if !check_consent() {
            tasks::schedule_timeout(SHOW_DELAY_MS, move || {
                let _ = banner.class_list().add_1("show");
            });
        }
    } else {
        log::debug!("no cookie banner on this page");
        return Ok(());
    }

    if let Some(button) = doc.get_element_by_id("accept-cookies") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            grant_consent();
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
