// Host-side tests for feed parsing and the fallback datasets. The fetch
// itself is browser-only, but the parse -> fallback decision and the fallback
// content are pure and covered here.

use traffic_trap_web::feed::{
    Contact, Crash, FeedError, Reaction, Tip, Update, fallback, parse_records,
};
use traffic_trap_web::render::{contact_cards, update_cards};

#[test]
fn parses_contacts_envelope() {
    let body = r#"{
        "contacts": [
            {
                "title": "Main Office",
                "email": "chaos@experiencehb.com",
                "phone": "+39 091 616 5691",
                "location": "Palermo",
                "description": "HQ"
            }
        ]
    }"#;
    let contacts: Vec<Contact> = parse_records(body, "contacts").unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].title, "Main Office");
}

#[test]
fn parses_updates_with_ordered_changes() {
    let body = r#"{
        "updates": [
            {
                "title": "Patch",
                "version": "2.1.1",
                "date": "December 15, 2024",
                "description": "Fixes",
                "changes": ["one", "two"]
            }
        ]
    }"#;
    let updates: Vec<Update> = parse_records(body, "updates").unwrap();
    assert_eq!(updates[0].changes, vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn record_order_is_preserved() {
    let body = r#"{"tips": [
        {"title": "first", "content": "a"},
        {"title": "second", "content": "b"},
        {"title": "third", "content": "c"}
    ]}"#;
    let tips: Vec<Tip> = parse_records(body, "tips").unwrap();
    let titles: Vec<&str> = tips.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_records::<Tip>("not json at all", "tips").unwrap_err();
    assert!(matches!(err, FeedError::InvalidJson(_)));
}

#[test]
fn missing_top_level_key_is_an_error() {
    let err = parse_records::<Tip>(r#"{"something_else": []}"#, "tips").unwrap_err();
    assert!(matches!(err, FeedError::MissingKey("tips")));
}

#[test]
fn wrong_shape_under_key_is_an_error() {
    let err = parse_records::<Tip>(r#"{"tips": {"title": "not an array"}}"#, "tips").unwrap_err();
    assert!(matches!(err, FeedError::InvalidJson(_)));
}

// Failure substitutes the fallback set, which must render a populated region
// rather than an empty one.
#[test]
fn parse_failure_falls_back_to_populated_content() {
    let records = match parse_records::<Contact>("garbage", "contacts") {
        Ok(records) => records,
        Err(_) => fallback::contacts(),
    };
    let html = contact_cards(&records);
    assert_eq!(html.matches("class=\"trap-card\"").count(), 3);
    assert!(!html.is_empty());
}

#[test]
fn fallback_sets_are_populated() {
    assert_eq!(fallback::contacts().len(), 3);
    assert_eq!(fallback::escape_tips().len(), 3);
    assert_eq!(fallback::driver_reactions().len(), 3);
    assert_eq!(fallback::game_updates().len(), 2);
    assert_eq!(fallback::crash_logs().len(), 3);
}

// Every field referenced by a renderer must be present and non-empty in the
// fallback data, otherwise a failed fetch would show half-empty cards.
#[test]
fn fallback_records_have_no_blank_fields() {
    for c in fallback::contacts() {
        let Contact { title, email, phone, location, description } = c;
        for field in [title, email, phone, location, description] {
            assert!(!field.trim().is_empty());
        }
    }
    for Tip { title, content } in fallback::escape_tips() {
        assert!(!title.trim().is_empty() && !content.trim().is_empty());
    }
    for Reaction { name, text } in fallback::driver_reactions() {
        assert!(!name.trim().is_empty() && !text.trim().is_empty());
    }
    for u in fallback::game_updates() {
        assert!(!u.title.trim().is_empty());
        assert!(!u.changes.is_empty());
        assert!(u.changes.iter().all(|c| !c.trim().is_empty()));
    }
    for Crash { title, location, date, description, severity } in fallback::crash_logs() {
        for field in [title, location, date, description, severity] {
            assert!(!field.trim().is_empty());
        }
    }
}

#[test]
fn fallback_updates_render_with_all_changes() {
    let html = update_cards(&fallback::game_updates());
    assert_eq!(html.matches("class=\"trap-card\"").count(), 2);
    assert_eq!(html.matches("<li>").count(), 8);
}
