// Host-side tests for the contact form state machine: validation, the
// Idle -> Submitting -> Idle cycle, queue append order and the emergency
// one-shot latch.

use traffic_trap_web::contact::{ContactCenter, SubmitError, is_emergency_text};

fn ts(n: u32) -> String {
    format!("2024-12-15T10:0{n}:00.000Z")
}

#[test]
fn blank_fields_are_rejected_with_the_italian_error() {
    let mut center = ContactCenter::new();
    for (name, phone, message) in [
        ("", "123", "ciao"),
        ("Mario", "", "ciao"),
        ("Mario", "123", ""),
        ("   ", "123", "ciao"),
        ("Mario", "\t", "ciao"),
        ("Mario", "123", "  \n "),
    ] {
        let err = center.begin_submission(name, phone, message).unwrap_err();
        assert_eq!(err, SubmitError::EmptyFields);
        assert_eq!(err.to_string(), "Compila tutti i campi");
    }
    assert!(center.queue().is_empty(), "failed validation must never enqueue");
    assert!(!center.is_submitting());
}

#[test]
fn valid_submission_trims_and_queues_in_order() {
    let mut center = ContactCenter::new();

    let first = center
        .begin_submission("  Mario ", " +39 123 ", " ciao ")
        .unwrap();
    assert_eq!(first.name, "Mario");
    assert_eq!(first.phone, "+39 123");
    assert_eq!(first.message, "ciao");
    assert!(center.is_submitting());

    assert!(!center.complete_submission(first, ts(1)));
    assert!(!center.is_submitting());

    let second = center.begin_submission("Luigi", "456", "aiuto").unwrap();
    center.complete_submission(second, ts(2));

    let names: Vec<&str> = center.queue().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Mario", "Luigi"]);
    assert_eq!(center.queue()[0].timestamp, ts(1));
}

#[test]
fn submitting_latch_rejects_reentrant_submission() {
    let mut center = ContactCenter::new();
    let pending = center.begin_submission("Mario", "123", "ciao").unwrap();
    assert_eq!(
        center.begin_submission("Luigi", "456", "aiuto").unwrap_err(),
        SubmitError::AlreadySubmitting
    );
    center.complete_submission(pending, ts(1));
    assert_eq!(center.queue().len(), 1);
    // Latch released: the next submission goes through.
    assert!(center.begin_submission("Luigi", "456", "aiuto").is_ok());
}

#[test]
fn emergency_keywords_are_detected_case_insensitively() {
    assert!(is_emergency_text("this is an EMERGENCY"));
    assert!(is_emergency_text("Urgent: please reply"));
    assert!(is_emergency_text("molto URGENTE"));
    assert!(!is_emergency_text("just saying hi"));
}

#[test]
fn completing_an_urgent_message_reports_emergency() {
    let mut center = ContactCenter::new();
    let pending = center
        .begin_submission("Mario", "123", "URGENT braking problem")
        .unwrap();
    assert!(center.complete_submission(pending, ts(1)));
}

#[test]
fn emergency_alert_fires_exactly_once_inside_the_active_window() {
    let mut center = ContactCenter::new();
    assert!(center.try_trigger_emergency());
    // A second trigger inside the window collapses into the first.
    assert!(!center.try_trigger_emergency());
    center.clear_emergency();
    assert!(center.try_trigger_emergency());
}
