//! Home page: search, filters and the paginated event list

use crate::config::Settings;
use crate::models::{Event, EventType, TypeFilter};
use crate::store::EventStore;
use crate::utils::helpers;

/// Render the home page for the given 1-based list page
pub fn render(store: &EventStore, settings: &Settings, list_page: usize) -> String {
    let mut out = String::new();

    out.push_str(&render_filters(store, settings));

    let events = store.visible_events();
    if events.is_empty() {
        out.push_str("\n🔍 No events found\n");
        out.push_str("Try adjusting your filters or search terms\n");
    } else {
        out.push_str(&render_list(store, settings, &events, list_page));
    }

    out.push_str(
        "\nCommands: open <id> · search <text> · type <category> · date <YYYY-MM-DD> · \
         location <text> · clear · page <n> · create · my · help · quit\n",
    );
    out
}

/// The search box and filter chips block
fn render_filters(store: &EventStore, settings: &Settings) -> String {
    let filters = store.filters();
    let mut out = String::new();

    let search = if filters.search.is_empty() {
        "Search amazing events...".to_string()
    } else {
        format!("\"{}\"", filters.search)
    };
    out.push_str(&format!("🔎 {}\n", search));

    if settings.features.quick_filters {
        let mut chips: Vec<String> = Vec::with_capacity(EventType::ALL.len() + 1);
        chips.push(chip("All", filters.event_type == TypeFilter::All));
        for event_type in EventType::ALL {
            chips.push(chip(
                event_type.as_str(),
                filters.event_type == TypeFilter::Only(event_type),
            ));
        }
        out.push_str(&format!("   {}\n", chips.join(" ")));
    }

    if filters.date.is_some() || !filters.location.is_empty() {
        let mut active = Vec::new();
        if let Some(date) = filters.date {
            active.push(format!("date = {}", helpers::format_date_short(date)));
        }
        if !filters.location.is_empty() {
            active.push(format!("location ~ \"{}\"", filters.location));
        }
        out.push_str(&format!("   Filters: {}\n", active.join(", ")));
    }
    if filters.is_active() {
        out.push_str("   (type `clear` to reset filters)\n");
    }

    out
}

fn chip(label: &str, active: bool) -> String {
    if active {
        format!("[{}*]", label)
    } else {
        format!("[{}]", label)
    }
}

/// The result count, the cards of the current page, and the pager line
fn render_list(store: &EventStore, settings: &Settings, events: &[&Event], list_page: usize) -> String {
    let mut out = String::new();

    let per_page = if settings.features.pagination {
        settings.app.events_per_page
    } else {
        events.len().max(1)
    };
    let total_pages = helpers::page_count(events.len(), per_page);
    let page = list_page.clamp(1, total_pages);
    let (start, end) = helpers::page_bounds(page, per_page, events.len());

    out.push_str(&format!(
        "\nShowing {}-{} of {} event{}\n",
        start + 1,
        end,
        events.len(),
        helpers::plural_suffix(events.len())
    ));

    for event in &events[start..end] {
        out.push('\n');
        out.push_str(&render_card(event, store.is_registered(event.id)));
    }

    if total_pages > 1 {
        out.push_str(&format!(
            "\n{} — `page <n>` to move\n",
            helpers::pagination_info(page, total_pages, events.len())
        ));
    }

    out
}

/// One event card
fn render_card(event: &Event, registered: bool) -> String {
    let mut out = String::new();

    let badge = if registered { "  ✓ registered" } else { "" };
    out.push_str(&format!(
        "  [{}] {} {}  ({}){}\n",
        event.id, event.image, event.title, event.event_type, badge
    ));
    out.push_str(&super::render_event_summary(event));
    out.push_str(&format!(
        "      Hosted by {} ({}) — {}/{} attending\n",
        event.host, event.host_image, event.attendees, event.max_attendees
    ));
    out.push_str(&format!(
        "      {}\n",
        helpers::truncate_text(&event.description, 64)
    ));

    let spots_left = event.spots_left();
    if spots_left == 0 {
        out.push_str("      Event Full\n");
    } else if spots_left <= 5 {
        out.push_str(&format!(
            "      🔥 Only {} spot{} left!\n",
            spots_left,
            helpers::plural_suffix(spots_left as usize)
        ));
    }

    out
}
