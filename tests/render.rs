// Host-side tests for the markup templating contract. No browser APIs are
// touched: rendering is a pure function of records -> markup.

use traffic_trap_web::feed::{Contact, Crash, Reaction, Tip, Update};
use traffic_trap_web::render::{
    contact_cards, crash_cards, escape_cards, escape_html, reaction_items, replace_year,
    split_reactions, update_cards,
};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn tip(title: &str, content: &str) -> Tip {
    Tip {
        title: title.into(),
        content: content.into(),
    }
}

fn reaction(name: &str) -> Reaction {
    Reaction {
        name: name.into(),
        text: format!("{name} says hi"),
    }
}

#[test]
fn one_fragment_per_record_in_input_order() {
    let tips = vec![tip("Alpha", "a"), tip("Bravo", "b"), tip("Charlie", "c")];
    let html = escape_cards(&tips);
    assert_eq!(count(&html, "class=\"escape-card\""), 3);
    let a = html.find("Alpha").unwrap();
    let b = html.find("Bravo").unwrap();
    let c = html.find("Charlie").unwrap();
    assert!(a < b && b < c, "fragments must keep input order");
}

#[test]
fn empty_record_set_renders_empty_region() {
    assert_eq!(escape_cards(&[]), "");
    assert_eq!(reaction_items(&[]), "");
}

#[test]
fn dynamic_text_is_escaped() {
    let tips = vec![tip("<script>alert(1)</script>", "a & b \"quoted\"")];
    let html = escape_cards(&tips);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("a &amp; b &quot;quoted&quot;"));
}

#[test]
fn escape_html_covers_all_significant_characters() {
    assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn contact_card_interpolates_every_field() {
    let contacts = vec![Contact {
        title: "Main Office".into(),
        email: "chaos@experiencehb.com".into(),
        phone: "+39 091 616 5691".into(),
        location: "Palermo".into(),
        description: "HQ".into(),
    }];
    let html = contact_cards(&contacts);
    assert_eq!(count(&html, "class=\"trap-card\""), 1);
    for field in ["Main Office", "chaos@experiencehb.com", "+39 091 616 5691", "Palermo", "HQ"] {
        assert!(html.contains(field), "missing field {field}");
    }
}

#[test]
fn reactions_split_eight_into_two_groups_of_four() {
    let all: Vec<Reaction> = (0..8).map(|i| reaction(&format!("driver{i}"))).collect();
    let (first, second) = split_reactions(&all);
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 4);
    assert_eq!(first[0].name, "driver0");
    assert_eq!(second[0].name, "driver4");
    assert_eq!(second[3].name, "driver7");
}

#[test]
fn reactions_split_two_leaves_second_group_empty() {
    let all = vec![reaction("a"), reaction("b")];
    let (first, second) = split_reactions(&all);
    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(reaction_items(second), "");
}

#[test]
fn reactions_split_ignores_records_past_eight() {
    let all: Vec<Reaction> = (0..10).map(|i| reaction(&format!("driver{i}"))).collect();
    let (first, second) = split_reactions(&all);
    assert_eq!(first.len() + second.len(), 8);
}

#[test]
fn update_card_lists_every_change_in_order() {
    let updates = vec![Update {
        title: "Patch".into(),
        version: "2.1.1".into(),
        date: "December 15, 2024".into(),
        description: "Fixes".into(),
        changes: vec!["first".into(), "second".into(), "third".into()],
    }];
    let html = update_cards(&updates);
    assert_eq!(count(&html, "<li>"), 3);
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
    assert!(html.find("second").unwrap() < html.find("third").unwrap());
    assert!(html.contains("<strong>Version:</strong> 2.1.1"));
}

#[test]
fn crash_card_carries_severity_badge() {
    let crashes = vec![Crash {
        title: "Gridlock".into(),
        location: "LA".into(),
        date: "yesterday".into(),
        description: "bad".into(),
        severity: "Critical".into(),
    }];
    let html = crash_cards(&crashes);
    assert_eq!(count(&html, "class=\"intersection-card\""), 1);
    assert!(html.contains("Severity: Critical"));
}

#[test]
fn emergency_footer_embeds_the_given_year() {
    let html = traffic_trap_web::layout::emergency_footer(2026);
    assert!(html.contains("© 2026 Traffic Trap. All rights reserved."));
    assert!(html.contains("class=\"jam-footer\""));
    assert_eq!(count(&html, "class=\"footer-link\""), 3);
}

#[test]
fn replace_year_rewrites_first_four_digit_run() {
    assert_eq!(
        replace_year("© 2024 Traffic Trap. All rights reserved.", 2026),
        "© 2026 Traffic Trap. All rights reserved."
    );
    // Shorter digit runs are left alone, later runs untouched.
    assert_eq!(replace_year("v2 since 2020, was 2019", 2026), "v2 since 2026, was 2019");
    assert_eq!(replace_year("no year here", 2026), "no year here");
}
