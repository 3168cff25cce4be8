//! Filtering properties
//!
//! The visible list is always an ordered subset of the canonical list, for
//! any combination of criteria, checked by property tests over generated
//! stores and filters, plus a few pinned examples.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use eventhub::models::{Event, EventType, FilterCriteria, TypeFilter};
use eventhub::EventStore;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        "[a-z ]{0,12}",
        "[a-z ]{0,20}",
        0..EventType::ALL.len(),
        0i64..60,
        prop::sample::select(vec![
            "Cubbon Park",
            "Indiranagar",
            "HSR Layout",
            "Koramangala",
        ]),
        0u32..30,
        1u32..40,
    )
        .prop_map(
            |(title, description, type_idx, day_offset, location, attendees, max_attendees)| {
                Event {
                    id: 0,
                    title,
                    event_type: EventType::ALL[type_idx],
                    date: base_date() + Duration::days(day_offset),
                    time: "6:00 PM".to_string(),
                    location: location.to_string(),
                    description,
                    host: "Test Host".to_string(),
                    host_image: "TH".to_string(),
                    image: "🎉".to_string(),
                    attendees: attendees.min(max_attendees),
                    max_attendees,
                }
            },
        )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        "[a-z]{0,4}",
        0..=EventType::ALL.len(),
        prop::option::of(0i64..60),
        "[a-z]{0,4}",
    )
        .prop_map(|(search, type_idx, day_offset, location)| FilterCriteria {
            search,
            event_type: if type_idx == 0 {
                TypeFilter::All
            } else {
                TypeFilter::Only(EventType::ALL[type_idx - 1])
            },
            date: day_offset.map(|d| base_date() + Duration::days(d)),
            location,
        })
}

/// True when `candidate` appears in `full` in order (possibly with gaps)
fn is_subsequence(candidate: &[i64], full: &[i64]) -> bool {
    let mut remaining = full.iter();
    candidate
        .iter()
        .all(|id| remaining.any(|other| other == id))
}

proptest! {
    #[test]
    fn visible_events_are_an_ordered_subset(
        events in prop::collection::vec(arb_event(), 0..20),
        criteria in arb_criteria(),
    ) {
        let events: Vec<Event> = events
            .into_iter()
            .enumerate()
            .map(|(i, mut e)| {
                e.id = i as i64 + 1;
                e
            })
            .collect();
        let mut store = EventStore::with_events(events);
        store.set_filters(criteria);

        let visible: Vec<i64> = store.visible_events().iter().map(|e| e.id).collect();
        let all: Vec<i64> = store.all_events().iter().map(|e| e.id).collect();
        prop_assert!(is_subsequence(&visible, &all));
    }

    #[test]
    fn blank_criteria_hide_nothing(events in prop::collection::vec(arb_event(), 0..20)) {
        let events: Vec<Event> = events
            .into_iter()
            .enumerate()
            .map(|(i, mut e)| {
                e.id = i as i64 + 1;
                e
            })
            .collect();
        let store = EventStore::with_events(events);
        prop_assert_eq!(store.visible_events().len(), store.all_events().len());
    }
}

#[test]
fn search_matches_title_and_description_case_insensitively() {
    let mut store = EventStore::seeded();

    store.set_filters(FilterCriteria {
        search: "YOGA".to_string(),
        ..Default::default()
    });
    assert!(store
        .visible_events()
        .iter()
        .any(|e| e.title == "Sunrise Yoga in the Park"));

    // "idli" appears only in the trail run's description.
    store.set_filters(FilterCriteria {
        search: "idli".to_string(),
        ..Default::default()
    });
    let visible = store.visible_events();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Trail Run & Breakfast");
}

#[test]
fn combined_criteria_must_all_hold() {
    let mut store = EventStore::seeded();
    store.set_filters(FilterCriteria {
        event_type: TypeFilter::Only(EventType::Fitness),
        location: "cubbon".to_string(),
        ..Default::default()
    });

    let visible = store.visible_events();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
}

#[test]
fn date_filter_is_exact() {
    let mut store = EventStore::seeded();
    store.set_filters(FilterCriteria {
        date: NaiveDate::from_ymd_opt(2026, 9, 5),
        ..Default::default()
    });

    let visible = store.visible_events();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Startup Founders Meetup");
}
