//! Decorative "chaos" effects.
//!
//! Independent repeating timers that perturb style properties for atmosphere:
//! panic meters, blinking headings, horn color alternation and card ripples.
//! None of it carries a correctness contract beyond never crashing when the
//! target elements are absent; every lookup tolerates a missing node. The
//! `Meter` arithmetic is the only pure part and is tested on the host.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement, window};

use crate::tasks;

// --- Meters -------------------------------------------------------------------

/// Capped accumulator behind the periodic effect triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meter {
    level: f64,
    step: f64,
    cap: f64,
}

impl Meter {
    pub fn new(step: f64, cap: f64) -> Self {
        Self { level: 0.0, step, cap }
    }

    /// Advances one step and returns the new level, saturating at the cap.
    pub fn tick(&mut self) -> f64 {
        self.level = (self.level + self.step).min(self.cap);
        self.level
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}

#[derive(Debug)]
struct ChaosState {
    panic: Meter,
    crash_log: Meter,
    signal_glitch: bool,
    horn_interval: Option<i32>,
}

thread_local! {
    static CHAOS: RefCell<ChaosState> = RefCell::new(ChaosState {
        panic: Meter::new(0.1, 10.0),
        crash_log: Meter::new(0.2, 10.0),
        signal_glitch: false,
        horn_interval: None,
    });
}

// --- Style helpers ------------------------------------------------------------

fn for_each_styled(selector: &str, f: impl Fn(&HtmlElement)) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Some(el) = node.dyn_ref::<HtmlElement>()
        {
            f(el);
        }
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

// --- Timers -------------------------------------------------------------------

/// Starts every chaos timer and the card click ripple listener.
pub fn activate_chaos() -> Result<(), JsValue> {
    log::info!("chaos mode activated");

    tasks::schedule_interval(5_000, || {
        let level = CHAOS.with(|c| c.borrow_mut().panic.tick());
        if level > 5.0 {
            trigger_signal_glitch();
        }
    });

    tasks::schedule_interval(8_000, || {
        let level = CHAOS.with(|c| c.borrow_mut().crash_log.tick());
        if level > 7.0 {
            trigger_emergency_broadcast();
        }
    });

    // Panic monitor: high panic fires the horn signal and drains the meter.
    tasks::schedule_interval(10_000, || {
        let high = CHAOS.with(|c| {
            let mut state = c.borrow_mut();
            if state.panic.level() > 7.0 {
                state.panic.reset();
                true
            } else {
                false
            }
        });
        if high {
            log::info!("high panic level detected");
            activate_horn_signal();
        }
    });

    if let Some(doc) = window().and_then(|w| w.document()) {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let Some(target) = evt.target() else { return };
            let Some(el) = target.dyn_ref::<Element>() else {
                return;
            };
            let classes = el.class_list();
            if classes.contains("trap-card")
                || classes.contains("intersection-card")
                || classes.contains("upgrade-card")
            {
                reroute_traffic();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Blinks the glitch headings for 3 seconds. Latch-gated so overlapping
/// triggers collapse into one run.
fn trigger_signal_glitch() {
    let fired = CHAOS.with(|c| {
        let mut state = c.borrow_mut();
        if state.signal_glitch {
            return false;
        }
        state.signal_glitch = true;
        true
    });
    if !fired {
        return;
    }
    log::info!("signal glitch detected");

    for_each_styled(".glitch-heading", |el| {
        set_style(el, "animation", "signalBlink 0.5s infinite");
    });
    tasks::schedule_timeout(3_000, || {
        CHAOS.with(|c| c.borrow_mut().signal_glitch = false);
        for_each_styled(".glitch-heading", |el| {
            set_style(el, "animation", "signalBlink 2s infinite");
        });
    });
}

/// Flashes the panic titles for 5 seconds, then resets the crash-log meter.
fn trigger_emergency_broadcast() {
    log::info!("emergency broadcast triggered");
    for_each_styled(".panic-title", |el| {
        set_style(el, "color", "var(--brake-light)");
        set_style(el, "animation", "signalBlink 0.3s infinite");
    });
    tasks::schedule_timeout(5_000, || {
        for_each_styled(".panic-title", |el| {
            set_style(el, "color", "var(--panic-glow)");
            set_style(el, "animation", "signalBlink 2s infinite");
        });
        CHAOS.with(|c| c.borrow_mut().crash_log.reset());
    });
}

/// Alternates the horn title colors every 500 ms for 3 seconds.
#[wasm_bindgen]
pub fn activate_horn_signal() {
    let already_running = CHAOS.with(|c| c.borrow().horn_interval.is_some());
    if already_running {
        return;
    }
    let id = tasks::schedule_interval(500, || {
        for_each_styled(".horn-title", |el| {
            let current = el.style().get_property_value("color").unwrap_or_default();
            let next = if current == "var(--horn-signal)" {
                "var(--panic-glow)"
            } else {
                "var(--horn-signal)"
            };
            set_style(el, "color", next);
        });
    });
    CHAOS.with(|c| c.borrow_mut().horn_interval = id);

    tasks::schedule_timeout(3_000, || {
        let id = CHAOS.with(|c| c.borrow_mut().horn_interval.take());
        if let Some(id) = id {
            tasks::clear_interval(id);
        }
        for_each_styled(".horn-title", |el| {
            set_style(el, "color", "var(--lane-white)");
        });
    });
}

/// Card ripple: nudges every card with a staggered lift-and-settle.
#[wasm_bindgen]
pub fn reroute_traffic() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(cards) = doc.query_selector_all(".trap-card, .intersection-card, .upgrade-card") else {
        return;
    };
    for i in 0..cards.length() {
        let Some(node) = cards.item(i) else { continue };
        let Some(el) = node.dyn_ref::<HtmlElement>().cloned() else {
            continue;
        };
        tasks::schedule_timeout((i as i32) * 100, move || {
            set_style(&el, "transform", "translateY(-10px) rotate(2deg)");
            let el = el.clone();
            tasks::schedule_timeout(300, move || {
                set_style(&el, "transform", "translateY(0) rotate(0deg)");
            });
        });
    }
}

/// "Play now" button theatre: a fake loading sequence before the game opens.
#[wasm_bindgen]
pub fn initiate_escape() {
    if let Some(win) = window() {
        let _ = win.alert_with_message(
            "🚨 Welcome to Traffic Trap! Prepare for the ultimate road chaos experience!",
        );
    }
    let Some(button) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".escape-button").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };
    button.set_text_content(Some("Loading..."));
    button.set_disabled(true);
    tasks::schedule_timeout(1_000, move || {
        button.set_text_content(Some("Game Starting..."));
        let button = button.clone();
        tasks::schedule_timeout(2_000, move || {
            button.set_text_content(Some("Play Now"));
            button.set_disabled(false);
        });
    });
}
