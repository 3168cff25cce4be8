//! Complete user journey tests
//!
//! Drives the application the way a session would: scripted command input
//! through the run loop, assertions on the rendered output.

use std::io::Cursor;

use chrono::{Days, Local};

use eventhub::{App, EventStore, Settings};

fn run_script(script: &str) -> String {
    let mut app = App::new(Settings::default(), EventStore::seeded());
    let mut output = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut output)
        .expect("session runs to completion");
    String::from_utf8(output).expect("rendered output is utf-8")
}

#[test]
fn browse_open_and_rsvp_journey() {
    let output = run_script("open 3\nrsvp\nmy\nquit\n");

    // Detail page for the meetup, then the confirmation block.
    assert!(output.contains("Startup Founders Meetup"));
    assert!(output.contains("You're all set!"));
    assert!(output.contains("Successfully registered for Startup Founders Meetup"));
    // My-events shows the registration; the session ends politely.
    assert!(output.contains("My Events — 1 Event"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn rsvp_twice_reports_already_registered() {
    let output = run_script("open 5\nrsvp\nrsvp\nquit\n");
    assert!(output.contains("You're already registered for this event."));
}

#[test]
fn full_event_cannot_be_joined() {
    // Seed event 4 (pottery workshop) is at capacity.
    let output = run_script("open 4\nrsvp\nquit\n");
    assert!(output.contains("⚠️ Event Full"));
    assert!(output.contains("This event is full."));
    assert!(!output.contains("You're all set!"));
}

#[test]
fn stale_detail_route_renders_not_found_instead_of_crashing() {
    let output = run_script("open 999\nquit\n");
    assert!(output.contains("Event not found"));
    assert!(output.contains("doesn't exist or has been removed"));
}

#[test]
fn filtering_narrows_the_home_list() {
    let output = run_script("search yoga\nquit\n");
    assert!(output.contains("Showing 1-1 of 1 event\n"));
    assert!(output.contains("Sunrise Yoga in the Park"));
}

#[test]
fn impossible_filter_shows_the_empty_state() {
    let output = run_script("search underwater basket weaving\nquit\n");
    assert!(output.contains("No events found"));
    assert!(output.contains("Try adjusting your filters"));
}

#[test]
fn create_flow_validates_then_creates_and_lists_first() {
    let date = (Local::now().date_naive() + Days::new(45))
        .format("%Y-%m-%d")
        .to_string();
    let script = format!(
        "create\n\
         set title abc\n\
         submit\n\
         set title Rooftop Salsa Social\n\
         set type Social\n\
         set date {date}\n\
         set time 19:30\n\
         set location Skye Lounge, MG Road\n\
         set description Beginner friendly salsa social with live percussion.\n\
         set host Carlos Mendes\n\
         set max 40\n\
         submit\n\
         home\n\
         quit\n"
    );
    let output = run_script(&script);

    // The premature submit surfaces per-field messages.
    assert!(output.contains("! Title must be at least 5 characters"));
    assert!(output.contains("! Date is required"));
    // The completed form succeeds and the new event heads the home list.
    assert!(output.contains("✓ Event Created!"));
    assert!(output.contains("Showing 1-6 of 9 events"));
    let created = output.rfind("Rooftop Salsa Social").unwrap();
    let seeded_first = output.rfind("Sunrise Yoga in the Park").unwrap();
    assert!(created < seeded_first);
}

#[test]
fn created_event_card_carries_derived_fields() {
    let date = (Local::now().date_naive() + Days::new(10))
        .format("%Y-%m-%d")
        .to_string();
    let script = format!(
        "create\n\
         set title Evening Sketch Walk\n\
         set type Social\n\
         set date {date}\n\
         set time 17:00\n\
         set location Lalbagh Botanical Garden\n\
         set description Two hours of urban sketching around the lake and glasshouse.\n\
         set host Maya Krishnan\n\
         set max 12\n\
         submit\n\
         home\n\
         quit\n"
    );
    let output = run_script(&script);

    // Host initials, default icon, 12-hour time, zero attendees.
    assert!(output.contains("🎉 Evening Sketch Walk"));
    assert!(output.contains("Hosted by Maya Krishnan (MK) — 0/12 attending"));
    assert!(output.contains("5:00 PM"));
}

#[test]
fn cancel_returns_to_home_without_creating() {
    let output = run_script("create\nset title Abandoned Plan Meetup\ncancel\nquit\n");
    assert!(output.contains("Showing 1-6 of 8 events"));
    assert!(!output.contains("Event Created!"));
}

#[test]
fn bad_commands_are_reported_and_the_session_continues() {
    let output = run_script("frobnicate\nopen one\nquit\n");
    assert!(output.contains("Unknown command: frobnicate"));
    assert!(output.contains("Not an event id: one"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn unknown_page_names_fall_back_to_home() {
    let output = run_script("open 2\ngoto dashboard\nquit\n");
    // After the fallback navigation the home list is showing again.
    assert!(output.contains("Showing 1-6 of 8 events"));
}

#[test]
fn pagination_moves_and_navigation_resets_it() {
    let output = run_script("page 2\nquit\n");
    assert!(output.contains("Showing 7-8 of 8 events"));
    assert!(output.contains("Page 2 of 2"));
}
