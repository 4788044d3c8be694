//! Built-in fallback record sets.
//!
//! Substituted whenever a feed resource cannot be fetched or parsed. The
//! content mirrors what the live resources normally carry so a broken fetch
//! is invisible to the visitor.

use super::{Contact, Crash, Reaction, Tip, Update};

pub fn contacts() -> Vec<Contact> {
    let phone = "+39 091 616 5691";
    let location = "Via Roma, 375, 90133 Palermo PA, Italia";
    vec![
        Contact {
            title: "Main Office".into(),
            email: "chaos@experiencehb.com".into(),
            phone: phone.into(),
            location: location.into(),
            description: "Our main headquarters where all the traffic chaos is coordinated."
                .into(),
        },
        Contact {
            title: "Support Team".into(),
            email: "support@experiencehb.com".into(),
            phone: phone.into(),
            location: location.into(),
            description: "Technical support and game assistance for all your traffic trap needs."
                .into(),
        },
        Contact {
            title: "Emergency Hotline".into(),
            email: "emergency@experiencehb.com".into(),
            phone: phone.into(),
            location: location.into(),
            description: "24/7 emergency support for critical traffic situations.".into(),
        },
    ]
}

pub fn escape_tips() -> Vec<Tip> {
    vec![
        Tip {
            title: "Stay Alert".into(),
            content: "Always keep your eyes on the road and be prepared for sudden obstacles."
                .into(),
        },
        Tip {
            title: "Use Signals".into(),
            content:
                "Proper signaling can help you communicate with other drivers and avoid collisions."
                    .into(),
        },
        Tip {
            title: "Maintain Distance".into(),
            content: "Keep a safe distance from other vehicles to give yourself time to react."
                .into(),
        },
    ]
}

pub fn driver_reactions() -> Vec<Reaction> {
    vec![
        Reaction {
            name: "Speed Demon".into(),
            text: "This game is absolutely insane! The chaos is real and I love every second of it."
                .into(),
        },
        Reaction {
            name: "Traffic Master".into(),
            text: "Finally, a game that captures the true essence of rush hour madness!".into(),
        },
        Reaction {
            name: "Road Warrior".into(),
            text: "The traps are unpredictable and the adrenaline rush is incredible!".into(),
        },
    ]
}

pub fn game_updates() -> Vec<Update> {
    vec![
        Update {
            title: "Emergency Patch v2.1.1".into(),
            version: "2.1.1".into(),
            date: "December 15, 2024".into(),
            description:
                "Critical bug fixes and performance improvements to handle increased traffic chaos."
                    .into(),
            changes: vec![
                "Fixed collision detection in high-speed scenarios".into(),
                "Improved AI driver behavior patterns".into(),
                "Enhanced emergency brake responsiveness".into(),
                "Reduced lag in crowded intersections".into(),
            ],
        },
        Update {
            title: "Chaos Expansion v2.1.0".into(),
            version: "2.1.0".into(),
            date: "December 10, 2024".into(),
            description:
                "Major update introducing new intersection types and enhanced chaos mechanics."
                    .into(),
            changes: vec![
                "Added 5 new intersection types".into(),
                "Implemented dynamic weather effects".into(),
                "Enhanced panic level system".into(),
                "New vehicle upgrade categories".into(),
            ],
        },
    ]
}

pub fn crash_logs() -> Vec<Crash> {
    vec![
        Crash {
            title: "Massive Gridlock Incident".into(),
            location: "Downtown Los Angeles".into(),
            date: "December 14, 2024".into(),
            description: "A record-breaking traffic jam involving 50+ vehicles created the most \
                          chaotic intersection scenario ever recorded."
                .into(),
            severity: "Critical".into(),
        },
        Crash {
            title: "Signal System Failure".into(),
            location: "Times Square, NYC".into(),
            date: "December 12, 2024".into(),
            description: "Complete traffic signal malfunction led to unprecedented chaos with \
                          vehicles moving in all directions simultaneously."
                .into(),
            severity: "High".into(),
        },
        Crash {
            title: "Emergency Vehicle Chaos".into(),
            location: "Chicago Loop".into(),
            date: "December 10, 2024".into(),
            description: "Multiple emergency vehicles created a complex traffic pattern that \
                          tested even the most experienced drivers."
                .into(),
            severity: "Medium".into(),
        },
    ]
}
