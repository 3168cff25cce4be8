//! Bundled sample events
//!
//! The store is seeded from this fixed list at startup and the data is
//! discarded on exit. Ids are contiguous from 1; the store's id counter
//! starts above the highest of them.

use chrono::NaiveDate;

use crate::models::{Event, EventType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

/// The sample events shown on first launch
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Sunrise Yoga in the Park".to_string(),
            event_type: EventType::Fitness,
            date: date(2026, 8, 22),
            time: "6:30 AM".to_string(),
            location: "Cubbon Park, Bangalore".to_string(),
            description: "An easy vinyasa flow under the rain trees. Mats provided, \
                          all levels welcome. Come for the stretch, stay for the chai."
                .to_string(),
            host: "Ananya Rao".to_string(),
            host_image: "AR".to_string(),
            image: "🧘".to_string(),
            attendees: 18,
            max_attendees: 25,
        },
        Event {
            id: 2,
            title: "Indie Music Night".to_string(),
            event_type: EventType::Music,
            date: date(2026, 8, 29),
            time: "7:30 PM".to_string(),
            location: "The Humming Tree, Indiranagar".to_string(),
            description: "Three local bands, one small stage. Expect loud guitars, \
                          louder singalongs, and a merch table that only takes cash."
                .to_string(),
            host: "Rohan Mehta".to_string(),
            host_image: "RM".to_string(),
            image: "🎸".to_string(),
            attendees: 42,
            max_attendees: 60,
        },
        Event {
            id: 3,
            title: "Startup Founders Meetup".to_string(),
            event_type: EventType::Meetup,
            date: date(2026, 9, 5),
            time: "6:00 PM".to_string(),
            location: "WeWork Galaxy, Residency Road".to_string(),
            description: "Lightning pitches, honest post-mortems, and unstructured \
                          hallway time with founders at every stage."
                .to_string(),
            host: "Priya Sharma".to_string(),
            host_image: "PS".to_string(),
            image: "🚀".to_string(),
            attendees: 57,
            max_attendees: 60,
        },
        Event {
            id: 4,
            title: "Pottery Wheel Workshop".to_string(),
            event_type: EventType::Workshop,
            date: date(2026, 9, 12),
            time: "11:00 AM".to_string(),
            location: "Clay Station, Koramangala".to_string(),
            description: "Throw your first bowl on the wheel. Clay, tools, firing and \
                          aprons included; your pieces ship back glazed in two weeks."
                .to_string(),
            host: "Dev Patel".to_string(),
            host_image: "DP".to_string(),
            image: "🏺".to_string(),
            attendees: 12,
            max_attendees: 12,
        },
        Event {
            id: 5,
            title: "Weekend Box Cricket".to_string(),
            event_type: EventType::Sports,
            date: date(2026, 9, 19),
            time: "4:00 PM".to_string(),
            location: "Play Arena, Sarjapur Road".to_string(),
            description: "Six-a-side box cricket under lights. Teams drawn on the day, \
                          tennis balls only, bragging rights forever."
                .to_string(),
            host: "Arjun Nair".to_string(),
            host_image: "AN".to_string(),
            image: "🏏".to_string(),
            attendees: 14,
            max_attendees: 22,
        },
        Event {
            id: 6,
            title: "Board Games & Chai".to_string(),
            event_type: EventType::Social,
            date: date(2026, 7, 18),
            time: "5:00 PM".to_string(),
            location: "Dice District, HSR Layout".to_string(),
            description: "A relaxed table-top evening: Catan, Codenames, carrom and \
                          endless cutting chai. Beginners actively recruited."
                .to_string(),
            host: "Meera Iyer".to_string(),
            host_image: "MI".to_string(),
            image: "🎲".to_string(),
            attendees: 21,
            max_attendees: 30,
        },
        Event {
            id: 7,
            title: "Open Mic Comedy Evening".to_string(),
            event_type: EventType::Entertainment,
            date: date(2026, 10, 3),
            time: "8:00 PM".to_string(),
            location: "Urban Solace, Ulsoor".to_string(),
            description: "Twelve brave first-timers, five minutes each, one very \
                          forgiving crowd. Doors close when the first act starts."
                .to_string(),
            host: "Kabir Singh".to_string(),
            host_image: "KS".to_string(),
            image: "🎤".to_string(),
            attendees: 75,
            max_attendees: 120,
        },
        Event {
            id: 8,
            title: "Trail Run & Breakfast".to_string(),
            event_type: EventType::Fitness,
            date: date(2026, 6, 14),
            time: "7:00 AM".to_string(),
            location: "Nandi Hills Base, Bangalore Rural".to_string(),
            description: "A gentle 8k on the lower trails followed by idli-vada at the \
                          base canteen. Carpool coordination in the comments."
                .to_string(),
            host: "Sneha Kulkarni".to_string(),
            host_image: "SK".to_string(),
            image: "🏃".to_string(),
            attendees: 35,
            max_attendees: 40,
        },
    ]
}
