//! My-events page: the events the session user has registered for

use chrono::NaiveDate;

use crate::models::Event;
use crate::store::EventStore;
use crate::utils::helpers;

/// Render the my-events page
///
/// Registered events sorted by date, split into upcoming and past relative
/// to `today` (date-only, the event's own day still counts as upcoming).
pub fn render(store: &EventStore, today: NaiveDate) -> String {
    let mut events = store.registered_events();
    events.sort_by_key(|e| e.date);

    let mut out = String::new();
    out.push_str(&format!(
        "My Events — {} Event{}\n",
        events.len(),
        helpers::plural_suffix(events.len())
    ));
    out.push_str("Events you've registered for\n");

    if events.is_empty() {
        out.push_str("\n📅 No events yet\n");
        out.push_str("Start exploring and register for events!\n");
        out.push_str("Type `home` to browse events.\n");
        return out;
    }

    let (upcoming, past): (Vec<&Event>, Vec<&Event>) =
        events.into_iter().partition(|e| e.is_upcoming(today));

    if !upcoming.is_empty() {
        out.push_str(&format!("\n● Upcoming Events ({})\n", upcoming.len()));
        for event in &upcoming {
            out.push_str(&render_item(event, true));
        }
    }

    if !past.is_empty() {
        out.push_str(&format!("\n○ Past Events ({})\n", past.len()));
        for event in &past {
            out.push_str(&render_item(event, false));
        }
    }

    out.push_str("\nCommands: open <id> · home · create · help · quit\n");
    out
}

fn render_item(event: &Event, upcoming: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  [{}] {} {}  ({})\n",
        event.id, event.image, event.title, event.event_type
    ));
    out.push_str(&super::render_event_summary(event));
    if !upcoming {
        out.push_str("      This event has ended\n");
    }
    out
}
