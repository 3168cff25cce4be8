//! Event detail page, including the RSVP affordance and the not-found state

use crate::models::{Event, EventId};
use crate::store::EventStore;
use crate::utils::helpers;

/// Render the detail page for the routed event id
///
/// A missing or stale id is a recognized empty-result state, rendered with a
/// navigation escape hatch rather than treated as an error.
pub fn render(store: &EventStore, event_id: Option<EventId>, rsvp_confirmed: bool) -> String {
    let event = event_id.and_then(|id| store.find_event(id));
    let Some(event) = event else {
        return render_not_found();
    };

    let registered = store.is_registered(event.id);
    let mut out = String::new();

    let badge = if registered { "   ✓ Registered" } else { "" };
    out.push_str(&format!(
        "{} {}  [{}]{}\n",
        event.image, event.title, event.event_type, badge
    ));
    out.push_str("──────────────────────────────────────────\n");
    out.push_str(&format!(
        "  Date & Time : {} at {}\n",
        helpers::format_date_long(event.date),
        event.time
    ));
    out.push_str(&format!("  Location    : {}\n", event.location));
    out.push_str(&format!(
        "  Hosted by   : {} ({}) ⭐ Verified Host\n",
        event.host, event.host_image
    ));
    out.push_str(&format!(
        "  Attendees   : {} / {} registered ({}%)\n",
        event.attendees,
        event.max_attendees,
        attendance_percentage(event)
    ));

    let spots_left = event.spots_left();
    if spots_left > 0 && spots_left <= 10 {
        out.push_str(&format!(
            "  🔥 {} spot{} left!\n",
            spots_left,
            helpers::plural_suffix(spots_left as usize)
        ));
    }

    out.push_str("\nAbout this event\n");
    out.push_str(&format!("  {}\n", event.description));

    out.push('\n');
    if registered {
        out.push_str("✓ Already Registered\n");
    } else if spots_left == 0 {
        out.push_str("⚠️ Event Full\n");
    } else {
        out.push_str("🎉 RSVP for this Event — type `rsvp`\n");
    }

    if rsvp_confirmed {
        out.push('\n');
        out.push_str("✓ You're all set!\n");
        out.push_str(&format!("Successfully registered for {}\n", event.title));
        out.push_str(&format!(
            "📅 {} at {}\n",
            helpers::format_date_long(event.date),
            event.time
        ));
        out.push_str("Type `my` to view your events.\n");
    }

    out.push_str("\nCommands: rsvp · home · my · help · quit\n");
    out
}

fn render_not_found() -> String {
    let mut out = String::new();
    out.push_str("😕 Event not found\n");
    out.push_str("The event you're looking for doesn't exist or has been removed.\n");
    out.push_str("Type `home` to go back to events.\n");
    out
}

fn attendance_percentage(event: &Event) -> u32 {
    if event.max_attendees == 0 {
        return 0;
    }
    event.attendees * 100 / event.max_attendees
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_renders_not_found() {
        let store = EventStore::seeded();
        let page = render(&store, Some(999), false);
        assert!(page.contains("Event not found"));
        assert!(page.contains("`home`"));
    }

    #[test]
    fn test_missing_param_renders_not_found() {
        let store = EventStore::seeded();
        let page = render(&store, None, false);
        assert!(page.contains("Event not found"));
    }

    #[test]
    fn test_detail_shows_event_facts_and_rsvp() {
        let store = EventStore::seeded();
        let page = render(&store, Some(2), false);
        assert!(page.contains("Indie Music Night"));
        assert!(page.contains("Saturday, August 29, 2026 at 7:30 PM"));
        assert!(page.contains("42 / 60 registered (70%)"));
        assert!(page.contains("RSVP for this Event"));
    }

    #[test]
    fn test_full_event_offers_no_rsvp() {
        let store = EventStore::seeded();
        let page = render(&store, Some(4), false);
        assert!(page.contains("⚠️ Event Full"));
        assert!(!page.contains("type `rsvp`"));
    }

    #[test]
    fn test_registered_event_shows_badge_and_confirmation() {
        let mut store = EventStore::seeded();
        assert!(store.register_for_event(2));
        let page = render(&store, Some(2), true);
        assert!(page.contains("✓ Registered"));
        assert!(page.contains("✓ Already Registered"));
        assert!(page.contains("You're all set!"));
        assert!(page.contains("Successfully registered for Indie Music Night"));
    }

    #[test]
    fn test_spots_warning_appears_at_ten_or_fewer() {
        let store = EventStore::seeded();
        // Seed event 3 has 57/60.
        let page = render(&store, Some(3), false);
        assert!(page.contains("🔥 3 spots left!"));
        // Seed event 7 has 45 spots left, no warning.
        let page = render(&store, Some(7), false);
        assert!(!page.contains("spots left!"));
    }
}
