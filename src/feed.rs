//! Content feeds: the fetch → fallback → render pipeline.
//!
//! Every display region on the site is fed by the same contract: one JSON
//! resource holding a single top-level key whose value is an ordered record
//! array. A successful fetch renders the records; any failure (network,
//! non-JSON body, missing key, timeout) substitutes the built-in fallback set
//! instead. A region is never left empty and no fetch error ever surfaces to
//! the visitor.
//!
//! Loads are fire-and-forget `spawn_local` tasks. A per-resource guard
//! coalesces concurrent calls into the single outstanding request, and an
//! `AbortController` bounds the wait so a hung request degrades to fallback
//! content instead of stalling the region forever.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response, window};

use crate::render;
use crate::tasks;

pub mod fallback;

/// Bound on how long a feed fetch may stay pending before it is aborted and
/// the fallback set is rendered.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

// --- Record types -------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tip {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reaction {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Update {
    pub title: String,
    pub version: String,
    pub date: String,
    pub description: String,
    pub changes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Crash {
    pub title: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub severity: String,
}

// --- Parsing ------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("missing top-level key '{0}'")]
    MissingKey(&'static str),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("network failure: {0}")]
    Network(String),
}

/// Extracts the record array under `key` from a feed document. The document
/// must be a JSON object with the records directly under that key; anything
/// else is a parse failure and the caller falls back to static content.
pub fn parse_records<T: DeserializeOwned>(body: &str, key: &'static str) -> Result<Vec<T>, FeedError> {
    let mut doc: serde_json::Value = serde_json::from_str(body)?;
    let records = doc
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or(FeedError::MissingKey(key))?;
    Ok(serde_json::from_value(records)?)
}

// --- Fetch --------------------------------------------------------------------

fn js_err(context: &str, err: wasm_bindgen::JsValue) -> FeedError {
    FeedError::Network(format!("{context}: {err:?}"))
}

pub(crate) async fn fetch_text(url: &str, controller: &AbortController) -> Result<String, FeedError> {
    let win = window().ok_or_else(|| FeedError::Network("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_signal(Some(&controller.signal()));
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| js_err("bad request", e))?;

    // Abort the request once the timeout elapses; the JsFuture then rejects
    // and we land on the fallback path.
    let abort = controller.clone();
    let timeout_id = tasks::schedule_timeout(FETCH_TIMEOUT_MS, move || abort.abort());

    let result = async {
        let response = JsFuture::from(win.fetch_with_request(&request))
            .await
            .map_err(|e| js_err("fetch", e))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| js_err("not a response", e))?;
        if !response.ok() {
            return Err(FeedError::Status(response.status()));
        }
        let text = JsFuture::from(response.text().map_err(|e| js_err("body", e))?)
            .await
            .map_err(|e| js_err("body", e))?;
        Ok(text.as_string().unwrap_or_default())
    }
    .await;

    if let Some(id) = timeout_id {
        tasks::clear_timeout(id);
    }
    result
}

async fn fetch_records<T: DeserializeOwned>(
    url: &str,
    key: &'static str,
    controller: &AbortController,
) -> Result<Vec<T>, FeedError> {
    let body = fetch_text(url, controller).await?;
    parse_records(&body, key)
}

/// Fire-and-forget feed load. `apply` receives either the fetched records or
/// the fallback set; it never receives an empty substitute for a failure.
fn spawn_feed<T, F>(key: &'static str, url: &'static str, fallback: fn() -> Vec<T>, apply: F)
where
    T: DeserializeOwned + 'static,
    F: Fn(&[T]) + 'static,
{
    let Some(controller) = tasks::begin_feed(key) else {
        log::debug!("{key} feed already loading, coalescing");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let records = match fetch_records::<T>(url, key, &controller).await {
            Ok(records) => {
                log::info!("{key} feed loaded ({} records)", records.len());
                records
            }
            Err(err) => {
                log::warn!("{key} feed failed ({err}), using fallback content");
                fallback()
            }
        };
        apply(&records);
        tasks::end_feed(key);
    });
}

// --- Region application -------------------------------------------------------

/// Replaces a region's content in a single assignment. Pages that do not
/// include the region simply skip the write.
fn set_region(id: &str, html: &str) {
    let Some(el) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("region #{id} not on this page");
        return;
    };
    el.set_inner_html(html);
}

pub fn load_contact_info() {
    spawn_feed(
        "contacts",
        "assets/data/contact-info.json",
        fallback::contacts,
        |records| set_region("contact-info-content", &render::contact_cards(records)),
    );
}

pub fn load_escape_tips() {
    spawn_feed(
        "tips",
        "assets/data/escape-tips.json",
        fallback::escape_tips,
        |records| set_region("escape-content", &render::escape_cards(records)),
    );
}

pub fn load_driver_reactions() {
    spawn_feed(
        "reactions",
        "assets/data/driver-reactions.json",
        fallback::driver_reactions,
        |records| {
            let (first, second) = render::split_reactions(records);
            set_region("reactions-content-1", &render::reaction_items(first));
            set_region("reactions-content-2", &render::reaction_items(second));
        },
    );
}

pub fn load_game_updates() {
    spawn_feed(
        "updates",
        "assets/data/game-updates.json",
        fallback::game_updates,
        |records| set_region("game-updates-content", &render::update_cards(records)),
    );
}

pub fn load_crash_logs() {
    spawn_feed(
        "crashes",
        "assets/data/crash-logs.json",
        fallback::crash_logs,
        |records| set_region("crash-logs-content", &render::crash_cards(records)),
    );
}

/// Kicks off every feed. Each load is independent; regions missing from the
/// current page are no-ops.
pub fn load_all_feeds() {
    load_contact_info();
    load_escape_tips();
    load_driver_reactions();
    load_game_updates();
    load_crash_logs();
}
