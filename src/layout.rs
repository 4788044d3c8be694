//! Shared page chrome: header/footer fragments, burger menu, copyright year.
//!
//! The header and footer are HTML fragments fetched like any other resource.
//! A failed footer fetch substitutes the built-in emergency footer; a failed
//! header fetch only logs, since every page still renders without it.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, window};

use crate::feed;
use crate::render::replace_year;
use crate::tasks;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// The hard-coded footer rendered when `footer-trap.html` cannot be fetched.
pub fn emergency_footer(year: u32) -> String {
    format!(
        "<footer class=\"jam-footer\">\
         <div class=\"footer-content\">\
         <div class=\"footer-section\">\
         <h3 class=\"footer-title\">Legal</h3>\
         <a href=\"./traffic-disclaimer.html\" class=\"footer-link\">Disclaimer</a>\
         <a href=\"./traffic-cookies.html\" class=\"footer-link\">Cookie Policy</a>\
         <a href=\"./traffic-privacy.html\" class=\"footer-link\">Privacy Policy</a>\
         </div>\
         <div class=\"footer-section\">\
         <h3 class=\"footer-title\">Contact</h3>\
         <p class=\"footer-text\">chaos@experiencehb.com</p>\
         <p class=\"footer-text\">+39 091 616 5691</p>\
         <p class=\"footer-text\">Via Roma, 375, 90133 Palermo PA, Italia</p>\
         </div>\
         </div>\
         <div class=\"copyright-text\">© {year} Traffic Trap. All rights reserved.</div>\
         </footer>"
    )
}

fn inject_fragment(container_id: &str, html: &str) -> bool {
    let Some(container) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    else {
        log::debug!("container #{container_id} not on this page");
        return false;
    };
    container.set_inner_html(html);
    true
}

pub fn load_header_component() {
    let Some(controller) = tasks::begin_feed("header") else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match feed::fetch_text("header-trap.html", &controller).await {
            Ok(html) => {
                if inject_fragment("header-container", &html) {
                    setup_burger_menu();
                }
            }
            Err(err) => log::warn!("header loading failed: {err}"),
        }
        tasks::end_feed("header");
    });
}

pub fn load_footer_component() {
    let Some(controller) = tasks::begin_feed("footer") else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match feed::fetch_text("footer-trap.html", &controller).await {
            Ok(html) => {
                inject_fragment("footer-container", &html);
            }
            Err(err) => {
                log::warn!("footer loading failed ({err}), using emergency footer");
                inject_fragment("footer-container", &emergency_footer(current_year()));
            }
        }
        tasks::end_feed("footer");
    });
}

// --- Burger menu ----------------------------------------------------------------

fn close_menu(trigger: &Element, menu: &Element) {
    let _ = trigger.class_list().remove_1("active");
    let _ = menu.class_list().remove_2("active", "show");
    set_body_overflow("");
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if value.is_empty() {
            let _ = body.style().remove_property("overflow");
        } else {
            let _ = body.style().set_property("overflow", value);
        }
    }
}

/// Wires the burger trigger after the header fragment is injected. Toggling
/// the menu open locks body scroll; any menu link closes it again.
fn setup_burger_menu() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(Some(trigger)), Ok(Some(menu))) = (
        doc.query_selector(".burger-trigger"),
        doc.query_selector(".traffic-menu"),
    ) else {
        return;
    };

    {
        let trigger_cl = trigger.clone();
        let menu_cl = menu.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            let _ = trigger_cl.class_list().toggle("active");
            let _ = menu_cl.class_list().toggle("active");
            if menu_cl.class_list().contains("active") {
                // Small delay so the slide-in transition actually runs.
                let menu = menu_cl.clone();
                tasks::schedule_timeout(10, move || {
                    let _ = menu.class_list().add_1("show");
                });
                set_body_overflow("hidden");
            } else {
                let _ = menu_cl.class_list().remove_1("show");
                set_body_overflow("");
            }
        }) as Box<dyn FnMut(_)>);
        let _ = trigger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Ok(links) = menu.query_selector_all("a") {
        for i in 0..links.length() {
            let Some(link) = links.item(i) else { continue };
            let trigger = trigger.clone();
            let menu = menu.clone();
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
                close_menu(&trigger, &menu);
            }) as Box<dyn FnMut(_)>);
            let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

// --- Copyright year -------------------------------------------------------------

/// Rewrites the year in every `.copyright-text` element to the current one.
pub fn update_copyright_year() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    refresh_copyright(&doc, current_year());
}

fn refresh_copyright(doc: &Document, year: u32) {
    let Ok(elements) = doc.query_selector_all(".copyright-text") else {
        return;
    };
    for i in 0..elements.length() {
        let Some(node) = elements.item(i) else { continue };
        if let Some(el) = node.dyn_ref::<HtmlElement>()
            && let Some(text) = el.text_content()
        {
            el.set_text_content(Some(&replace_year(&text, year)));
        }
    }
}
