//! Markup generation for the content regions.
//!
//! Pure string templating: each record maps to one fragment, fragments
//! concatenate in input order, and the caller replaces the region content in
//! a single assignment. Every dynamic field is HTML-escaped before
//! interpolation; feed data is display-only and must never inject markup.

use std::fmt::Write;

use crate::feed::{Contact, Crash, Reaction, Tip, Update};

/// Escapes text for interpolation into element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn contact_cards(contacts: &[Contact]) -> String {
    let mut html = String::new();
    for c in contacts {
        let _ = write!(
            html,
            "<div class=\"trap-card\">\
             <h3 class=\"panic-title\">{title}</h3>\
             <p class=\"gridlock-text\"><strong>Email:</strong> {email}</p>\
             <p class=\"gridlock-text\"><strong>Phone:</strong> {phone}</p>\
             <p class=\"gridlock-text\"><strong>Location:</strong> {location}</p>\
             <p class=\"gridlock-text\">{description}</p>\
             </div>",
            title = escape_html(&c.title),
            email = escape_html(&c.email),
            phone = escape_html(&c.phone),
            location = escape_html(&c.location),
            description = escape_html(&c.description),
        );
    }
    html
}

pub fn escape_cards(tips: &[Tip]) -> String {
    let mut html = String::new();
    for tip in tips {
        let _ = write!(
            html,
            "<div class=\"escape-card\">\
             <h3 class=\"escape-title\">{title}</h3>\
             <p class=\"escape-text\">{content}</p>\
             </div>",
            title = escape_html(&tip.title),
            content = escape_html(&tip.content),
        );
    }
    html
}

pub fn reaction_items(reactions: &[Reaction]) -> String {
    let mut html = String::new();
    for r in reactions {
        let _ = write!(
            html,
            "<div class=\"reaction-item\">\
             <h4 class=\"reaction-name\">{name}</h4>\
             <p class=\"reaction-text\">&quot;{text}&quot;</p>\
             </div>",
            name = escape_html(&r.name),
            text = escape_html(&r.text),
        );
    }
    html
}

/// The reactions section renders into two columns: records 0..4 and 4..8 in
/// input order. Short inputs leave the second slice (and possibly part of the
/// first) empty.
pub fn split_reactions(reactions: &[Reaction]) -> (&[Reaction], &[Reaction]) {
    let len = reactions.len();
    let first = &reactions[..len.min(4)];
    let second = &reactions[len.min(4)..len.min(8)];
    (first, second)
}

pub fn update_cards(updates: &[Update]) -> String {
    let mut html = String::new();
    for u in updates {
        let changes: String = u
            .changes
            .iter()
            .map(|change| format!("<li>{}</li>", escape_html(change)))
            .collect();
        let _ = write!(
            html,
            "<div class=\"trap-card\">\
             <h3 class=\"panic-title\">{title}</h3>\
             <p class=\"gridlock-text\"><strong>Version:</strong> {version}</p>\
             <p class=\"gridlock-text\"><strong>Date:</strong> {date}</p>\
             <p class=\"gridlock-text\">{description}</p>\
             <div class=\"update-details\"><h4>Changes:</h4><ul>{changes}</ul></div>\
             </div>",
            title = escape_html(&u.title),
            version = escape_html(&u.version),
            date = escape_html(&u.date),
            description = escape_html(&u.description),
            changes = changes,
        );
    }
    html
}

pub fn crash_cards(crashes: &[Crash]) -> String {
    let mut html = String::new();
    for c in crashes {
        let _ = write!(
            html,
            "<div class=\"intersection-card\">\
             <h3 class=\"panic-title\">{title}</h3>\
             <p class=\"gridlock-text\"><strong>Location:</strong> {location}</p>\
             <p class=\"gridlock-text\"><strong>Date:</strong> {date}</p>\
             <p class=\"gridlock-text\">{description}</p>\
             <div class=\"crash-severity\">\
             <span class=\"severity-level\">Severity: {severity}</span>\
             </div>\
             </div>",
            title = escape_html(&c.title),
            location = escape_html(&c.location),
            date = escape_html(&c.date),
            description = escape_html(&c.description),
            severity = escape_html(&c.severity),
        );
    }
    html
}

/// Replaces the first 4-digit run in a copyright line with the current year.
pub fn replace_year(text: &str, year: u32) -> String {
    let bytes = text.as_bytes();
    let mut start = None;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let run_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - run_start == 4 {
                start = Some(run_start);
                break;
            }
        } else {
            i += 1;
        }
    }
    match start {
        Some(s) => format!("{}{}{}", &text[..s], year, &text[s + 4..]),
        None => text.to_owned(),
    }
}
