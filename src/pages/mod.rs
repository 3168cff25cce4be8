//! Page views
//!
//! Each page renders to a plain string from a snapshot of the store and the
//! current route; nothing here mutates state. The dispatcher at the bottom
//! is the single switch over the page enum, exhaustive, so a new page
//! cannot be added without deciding what it renders.

pub mod create;
pub mod detail;
pub mod home;
pub mod my_events;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Page;
use crate::router::Router;
use crate::store::EventStore;
use crate::utils::helpers;

pub use create::CreateFormState;

/// The page-local view state the app carries between commands
///
/// The list page of the home view, the post-RSVP confirmation flag of the
/// detail view, and the create form. None of it belongs to the store or the
/// router, and all of it resets on navigation.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub list_page: usize,
    pub rsvp_confirmed: bool,
    pub create: CreateFormState,
}

impl ViewState {
    pub fn reset(&mut self) {
        *self = ViewState {
            list_page: 1,
            ..ViewState::default()
        };
    }
}

/// Render the header bar shown above every page
pub fn render_header(store: &EventStore, settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "══ 📅 {} — {} ══\n",
        settings.app.name, settings.app.tagline
    ));
    let registered = store.registration_count();
    if registered > 0 {
        out.push_str(&format!(
            "   [home] browse   [create] new event   [my] my events ({})\n",
            registered
        ));
    } else {
        out.push_str("   [home] browse   [create] new event\n");
    }
    out
}

/// Render the current page
///
/// The route decides the page; the page decides what it needs from the
/// store and the view state.
pub fn render_current(
    store: &EventStore,
    router: &Router,
    settings: &Settings,
    view: &ViewState,
    today: NaiveDate,
) -> String {
    let route = router.current_route();
    let body = match route.page {
        Page::Home => home::render(store, settings, view.list_page),
        Page::Detail => detail::render(store, route.params.event_id, view.rsvp_confirmed),
        Page::Create => create::render(&view.create),
        Page::MyEvents => my_events::render(store, today),
    };
    format!("{}\n{}", render_header(store, settings), body)
}

/// One event line block shared by the home and my-events lists
fn render_event_summary(event: &crate::models::Event) -> String {
    format!(
        "      {} • {} · {}\n",
        helpers::format_date_short(event.date),
        event.time,
        event.location
    )
}
