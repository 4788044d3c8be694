//! Contact form controller.
//!
//! Submission is simulated: validated messages sit in an in-memory queue for
//! the lifetime of the page and "delivery" is a fixed 2 second delay behind a
//! blocking overlay. The `ContactCenter` state machine holds the queue and
//! the two re-entrancy latches and is pure, so the Idle -> Submitting -> Idle
//! cycle and the emergency one-shot are tested on the host without a DOM.

use std::cell::RefCell;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, window};

use crate::render::escape_html;
use crate::tasks;

const SUBMIT_DELAY_MS: i32 = 2_000;
const SUCCESS_NOTICE_MS: i32 = 4_000;
const ERROR_NOTICE_MS: i32 = 5_000;
const EMERGENCY_FLASH_MS: i32 = 1_000;

const SUCCESS_MESSAGE: &str = "Messaggio inviato con successo! Ti risponderemo presto.";
const EMERGENCY_MESSAGE: &str =
    "🚨 Messaggio di emergenza ricevuto! Il nostro team risponderà immediatamente.";

// --- State machine ------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedMessage {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// User-facing validation message, shown verbatim on the page.
    #[error("Compila tutti i campi")]
    EmptyFields,
    #[error("submission already in progress")]
    AlreadySubmitting,
}

/// A validated, trimmed message waiting out the simulated delivery delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMessage {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// True when the message text asks for emergency handling.
pub fn is_emergency_text(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("emergency") || lower.contains("urgent")
}

#[derive(Debug, Default)]
pub struct ContactCenter {
    queue: Vec<QueuedMessage>,
    submitting: bool,
    emergency_active: bool,
}

impl ContactCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Messages in append order. Never flushed anywhere; lost on unload.
    pub fn queue(&self) -> &[QueuedMessage] {
        &self.queue
    }

    /// Validates the fields and latches the machine into Submitting. All
    /// three fields must be non-empty after trimming; a failed validation
    /// leaves the queue and state untouched.
    pub fn begin_submission(
        &mut self,
        name: &str,
        phone: &str,
        message: &str,
    ) -> Result<PendingMessage, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let name = name.trim();
        let phone = phone.trim();
        let message = message.trim();
        if name.is_empty() || phone.is_empty() || message.is_empty() {
            return Err(SubmitError::EmptyFields);
        }
        self.submitting = true;
        Ok(PendingMessage {
            name: name.to_owned(),
            phone: phone.to_owned(),
            message: message.to_owned(),
        })
    }

    /// Appends the message to the queue, releases the latch and reports
    /// whether the text requests emergency handling.
    pub fn complete_submission(&mut self, pending: PendingMessage, timestamp: String) -> bool {
        let emergency = is_emergency_text(&pending.message);
        self.queue.push(QueuedMessage {
            name: pending.name,
            phone: pending.phone,
            message: pending.message,
            timestamp,
        });
        self.submitting = false;
        emergency
    }

    /// One-shot emergency latch: overlapping triggers inside the active
    /// window collapse into a single alert.
    pub fn try_trigger_emergency(&mut self) -> bool {
        if self.emergency_active {
            return false;
        }
        self.emergency_active = true;
        true
    }

    pub fn clear_emergency(&mut self) {
        self.emergency_active = false;
    }
}

thread_local! {
    static CONTACT: RefCell<ContactCenter> = RefCell::new(ContactCenter::new());
}

// --- Browser wiring -----------------------------------------------------------

/// Hooks the submit listener onto `#contact-form`. Pages without the form
/// skip the whole controller.
pub fn setup_contact_form() -> Result<(), JsValue> {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return Ok(());
    };
    let Some(el) = doc.get_element_by_id("contact-form") else {
        log::debug!("no contact form on this page");
        return Ok(());
    };
    let form: HtmlFormElement = el.dyn_into()?;

    let form_for_handler = form.clone();
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        evt.prevent_default();
        handle_submission(&form_for_handler);
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn handle_submission(form: &HtmlFormElement) {
    let Ok(data) = FormData::new_with_form(form) else {
        return;
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    let (name, phone, message) = (field("driverName"), field("phoneNumber"), field("messageText"));

    let pending = CONTACT.with(|c| c.borrow_mut().begin_submission(&name, &phone, &message));
    let pending = match pending {
        Ok(pending) => pending,
        Err(SubmitError::AlreadySubmitting) => return,
        Err(err @ SubmitError::EmptyFields) => {
            show_error_message(form, &err.to_string());
            return;
        }
    };

    log::info!("form submission initiated");
    show_overlay();

    let button = form
        .query_selector(".escape-button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    if let Some(btn) = &button {
        btn.set_text_content(Some("Sending..."));
        btn.set_disabled(true);
    }

    let form = form.clone();
    tasks::schedule_timeout(SUBMIT_DELAY_MS, move || {
        finish_submission(&form, button.as_ref(), &original_label, pending);
    });
}

fn finish_submission(
    form: &HtmlFormElement,
    button: Option<&HtmlButtonElement>,
    original_label: &str,
    pending: PendingMessage,
) {
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let emergency = CONTACT.with(|c| c.borrow_mut().complete_submission(pending, timestamp));
    log::info!("message queued for delivery");

    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
    show_falling_notification(SUCCESS_MESSAGE);

    form.reset();
    if let Some(btn) = button {
        btn.set_text_content(Some(original_label));
        btn.set_disabled(false);
    }

    if emergency {
        trigger_emergency_alert();
    }
}

fn trigger_emergency_alert() {
    let fired = CONTACT.with(|c| c.borrow_mut().try_trigger_emergency());
    if !fired {
        return;
    }
    log::warn!("emergency contact triggered");

    let body = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".gridlock-body").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(body) = &body {
        let _ = body.style().set_property("background-color", "var(--brake-light)");
    }
    tasks::schedule_timeout(EMERGENCY_FLASH_MS, move || {
        if let Some(body) = &body {
            let _ = body.style().remove_property("background-color");
        }
        CONTACT.with(|c| c.borrow_mut().clear_emergency());
    });

    if let Some(win) = window() {
        let _ = win.alert_with_message(EMERGENCY_MESSAGE);
    }
}

// --- Overlay & notifications --------------------------------------------------

fn overlay_element(doc: &Document) -> Option<Element> {
    doc.get_element_by_id("overlay")
}

fn show_overlay() {
    if let Some(doc) = window().and_then(|w| w.document())
        && let Some(overlay) = overlay_element(&doc)
    {
        let _ = overlay.class_list().add_1("active");
    }
}

fn hide_overlay() {
    if let Some(doc) = window().and_then(|w| w.document())
        && let Some(overlay) = overlay_element(&doc)
    {
        let _ = overlay.class_list().remove_1("active");
    }
}

fn show_falling_notification(message: &str) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(notice) = doc.create_element("div") else {
        return;
    };
    notice.set_class_name("falling-notification");
    notice.set_text_content(Some(message));
    if let Some(body) = doc.body() {
        let _ = body.append_child(&notice);
    }
    tasks::schedule_timeout(SUCCESS_NOTICE_MS, move || {
        notice.remove();
        hide_overlay();
    });
}

fn show_error_message(form: &HtmlFormElement, message: &str) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(parent) = form.parent_element() else {
        return;
    };
    // Replace any banner still on screen from a previous attempt.
    if let Ok(Some(existing)) = parent.query_selector(".error-message") {
        existing.remove();
    }
    let Ok(banner) = doc.create_element("div") else {
        return;
    };
    banner.set_class_name("error-message");
    banner.set_inner_html(&format!(
        "<h3 class=\"panic-title\">Errore!</h3><p class=\"gridlock-text\">{}</p>",
        escape_html(message)
    ));
    let anchor: &web_sys::Node = form.as_ref();
    let _ = parent.insert_before(&banner, Some(anchor));
    tasks::schedule_timeout(ERROR_NOTICE_MS, move || banner.remove());
}
