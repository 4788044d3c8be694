//! Page-lifetime task registry.
//!
//! Timers and in-flight feed loads register here so `stop_site()` can drop
//! pending work deterministically instead of leaving orphaned callbacks
//! behind. Everything is single-threaded browser state, hence the
//! `thread_local!` cells.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AbortController, window};

thread_local! {
    static INTERVALS: RefCell<Vec<i32>> = const { RefCell::new(Vec::new()) };
    static IN_FLIGHT: RefCell<HashMap<&'static str, AbortController>> =
        RefCell::new(HashMap::new());
}

/// One-shot timer. The closure leaks (`forget`), which is fine for fire-once
/// UI delays bounded by the page lifetime.
pub(crate) fn schedule_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = window()?;
    let closure = Closure::once(f);
    let id = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    closure.forget();
    Some(id)
}

pub(crate) fn clear_timeout(id: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(id);
    }
}

/// Repeating timer, registered for disposal.
pub(crate) fn schedule_interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let win = window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    closure.forget();
    INTERVALS.with(|cell| cell.borrow_mut().push(id));
    Some(id)
}

pub(crate) fn clear_interval(id: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(id);
    }
    INTERVALS.with(|cell| cell.borrow_mut().retain(|&i| i != id));
}

/// Marks a feed as in flight and hands back its abort controller. Returns
/// `None` when a load for the same resource is already outstanding, so
/// concurrent calls coalesce into the single pending request.
pub(crate) fn begin_feed(key: &'static str) -> Option<AbortController> {
    IN_FLIGHT.with(|cell| {
        let mut map = cell.borrow_mut();
        if map.contains_key(key) {
            return None;
        }
        let controller = AbortController::new().ok()?;
        map.insert(key, controller.clone());
        Some(controller)
    })
}

pub(crate) fn end_feed(key: &'static str) {
    IN_FLIGHT.with(|cell| {
        cell.borrow_mut().remove(key);
    });
}

/// Clears every interval and aborts every pending feed load.
pub(crate) fn dispose_all() {
    INTERVALS.with(|cell| {
        for id in cell.borrow_mut().drain(..) {
            if let Some(win) = window() {
                win.clear_interval_with_handle(id);
            }
        }
    });
    IN_FLIGHT.with(|cell| {
        for (_, controller) in cell.borrow_mut().drain() {
            controller.abort();
        }
    });
}
