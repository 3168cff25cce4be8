//! Application shell
//!
//! Parses user commands, dispatches them against the current page, and runs
//! the read-render session loop. This is the only place that mutates the
//! store, the router, or the page-local view state; pages just render.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::forms::{self, FormField, ValidationErrors};
use crate::models::{Event, EventId, FilterCriteria, Page, Route, RouteParams, TypeFilter};
use crate::pages::{self, ViewState};
use crate::router::Router;
use crate::store::EventStore;
use crate::utils::errors::{EventHubError, Result};
use crate::utils::logging;

/// One parsed user command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Navigate to a page; unknown page names land on home
    Goto(Page),
    /// Open an event's detail page
    Open(EventId),
    /// Register for the event on the current detail page
    Rsvp,
    Search(String),
    FilterType(TypeFilter),
    FilterDate(Option<NaiveDate>),
    FilterLocation(String),
    ClearFilters,
    /// Switch to a list page on home
    ListPage(usize),
    /// Edit one create-form field
    Set(FormField, String),
    Submit,
    Cancel,
    /// Dump the session state as JSON (diagnostic)
    Dump,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line
    pub fn parse(input: &str) -> Result<Command> {
        let input = input.trim();
        let (keyword, rest) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };

        match keyword.to_lowercase().as_str() {
            "home" => Ok(Command::Goto(Page::Home)),
            "create" => Ok(Command::Goto(Page::Create)),
            "my" | "myevents" => Ok(Command::Goto(Page::MyEvents)),
            "goto" => Ok(Command::Goto(Page::parse(rest))),
            "open" => rest
                .parse::<EventId>()
                .map(Command::Open)
                .map_err(|_| EventHubError::InvalidInput(format!("Not an event id: {}", rest))),
            "rsvp" => Ok(Command::Rsvp),
            "search" => Ok(Command::Search(rest.to_string())),
            "type" => {
                if rest.eq_ignore_ascii_case("all") || rest.is_empty() {
                    Ok(Command::FilterType(TypeFilter::All))
                } else {
                    Ok(Command::FilterType(TypeFilter::Only(rest.parse()?)))
                }
            }
            "date" => {
                if rest.is_empty() {
                    Ok(Command::FilterDate(None))
                } else {
                    NaiveDate::parse_from_str(rest, "%Y-%m-%d")
                        .map(|d| Command::FilterDate(Some(d)))
                        .map_err(|_| {
                            EventHubError::InvalidInput(format!(
                                "Not a date (YYYY-MM-DD): {}",
                                rest
                            ))
                        })
                }
            }
            "location" => Ok(Command::FilterLocation(rest.to_string())),
            "clear" => Ok(Command::ClearFilters),
            "page" => rest
                .parse::<usize>()
                .map(Command::ListPage)
                .map_err(|_| EventHubError::InvalidInput(format!("Not a page number: {}", rest))),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                Ok(Command::Set(FormField::parse(field)?, value.to_string()))
            }
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(EventHubError::InvalidInput(format!(
                "Unknown command: {}. Type `help` for the command list.",
                keyword
            ))),
        }
    }
}

/// Whether the session keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Serializable session snapshot for the `dump` diagnostic
#[derive(Serialize)]
struct StateSnapshot<'a> {
    route: &'a Route,
    filters: &'a FilterCriteria,
    registered: Vec<EventId>,
    events: &'a [Event],
}

/// The interactive application: one store, one router, one session user
pub struct App {
    settings: Settings,
    store: EventStore,
    router: Router,
    view: ViewState,
    notice: Option<String>,
}

impl App {
    pub fn new(settings: Settings, store: EventStore) -> Self {
        let mut view = ViewState::default();
        view.reset();
        Self {
            settings,
            store,
            router: Router::new(),
            view,
            notice: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Render the current page for the given `today`
    pub fn render(&self, today: NaiveDate) -> String {
        pages::render_current(&self.store, &self.router, &self.settings, &self.view, today)
    }

    /// Apply one command to the session
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(page = self.router.page().as_str(), command = ?command, "Handling command");
        match command {
            Command::Goto(page) => self.navigate(page, RouteParams::empty()),
            Command::Open(event_id) => self.navigate(Page::Detail, RouteParams::for_event(event_id)),
            Command::Rsvp => self.handle_rsvp(),
            Command::Search(text) => self.update_filters(|f| f.search = text),
            Command::FilterType(type_filter) => self.update_filters(|f| f.event_type = type_filter),
            Command::FilterDate(date) => self.update_filters(|f| f.date = date),
            Command::FilterLocation(location) => self.update_filters(|f| f.location = location),
            Command::ClearFilters => {
                self.store.set_filters(FilterCriteria::default());
            }
            Command::ListPage(page) => {
                self.view.list_page = page.max(1);
            }
            Command::Set(field, value) => self.handle_set(field, &value),
            Command::Submit => self.handle_submit()?,
            Command::Cancel => self.handle_cancel(),
            Command::Dump => {
                self.notice = Some(self.dump_state()?);
            }
            Command::Help => {
                self.notice = Some(help_text(self.router.page()).to_string());
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run the session loop until quit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        self.render_to(writer)?;
        for line in reader.lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                self.prompt(writer)?;
                continue;
            }

            logging::log_command(self.router.page().as_str(), input);
            let flow = match Command::parse(input) {
                Ok(command) => self.handle(command)?,
                Err(err) if err.is_recoverable() => {
                    self.notice = Some(err.to_string());
                    Flow::Continue
                }
                Err(err) => return Err(err),
            };

            if flow == Flow::Quit {
                writeln!(writer, "Goodbye! 👋")?;
                return Ok(());
            }
            self.render_to(writer)?;
        }
        Ok(())
    }

    /// Route change plus the page-local state reset a remount would do
    fn navigate(&mut self, page: Page, params: RouteParams) {
        self.router.navigate(page, params);
        self.view.reset();
    }

    fn handle_rsvp(&mut self) {
        if self.router.page() != Page::Detail {
            self.notice = Some("RSVP works from an event's detail page.".to_string());
            return;
        }
        let Some(event_id) = self.router.current_route().params.event_id else {
            self.notice = Some("No event selected.".to_string());
            return;
        };

        let applied = self.store.register_for_event(event_id);
        logging::log_store_mutation("register_for_event", Some(event_id), applied);
        if applied {
            self.view.rsvp_confirmed = true;
        } else if self.store.is_registered(event_id) {
            self.notice = Some("You're already registered for this event.".to_string());
        } else if self.store.find_event(event_id).is_none() {
            self.notice = Some("That event doesn't exist.".to_string());
        } else {
            self.notice = Some("This event is full.".to_string());
        }
    }

    /// Merge one change into a copy of the current criteria, then replace
    /// them wholesale; the store never merges.
    fn update_filters<F: FnOnce(&mut FilterCriteria)>(&mut self, change: F) {
        let mut filters = self.store.filters().clone();
        change(&mut filters);
        self.store.set_filters(filters);
    }

    fn handle_set(&mut self, field: FormField, value: &str) {
        if self.router.page() != Page::Create {
            self.notice = Some("The form lives on the create page. Type `create` to start one.".to_string());
            return;
        }
        if self.view.create.created.is_some() {
            self.notice = Some("Event already created. Type `home` to browse.".to_string());
            return;
        }

        match self.view.create.form.set_field(field, value) {
            Ok(()) => {
                // Editing a field clears its validation message.
                self.view.create.errors.clear_field(field);
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn handle_submit(&mut self) -> Result<()> {
        if self.router.page() != Page::Create {
            self.notice = Some("Nothing to submit here. Type `create` to start a form.".to_string());
            return Ok(());
        }
        if self.view.create.created.is_some() {
            self.notice = Some("Event already created. Type `home` to browse.".to_string());
            return Ok(());
        }

        let today = Local::now().date_naive();
        let errors = forms::validate(&self.view.create.form, today);
        if !errors.is_empty() {
            warn!(error_count = errors.len(), "Create form failed validation");
            self.view.create.errors = errors;
            return Ok(());
        }

        let draft = self.view.create.form.to_draft()?;
        let title = draft.title.clone();
        let event_id = self.store.create_event(draft);
        logging::log_store_mutation("create_event", Some(event_id), true);
        self.view.create.created = Some(title);
        self.view.create.errors = ValidationErrors::default();
        Ok(())
    }

    fn handle_cancel(&mut self) {
        if self.router.page() == Page::Create {
            self.navigate(Page::Home, RouteParams::empty());
        } else {
            self.notice = Some("Nothing to cancel.".to_string());
        }
    }

    fn dump_state(&self) -> Result<String> {
        let snapshot = StateSnapshot {
            route: self.router.current_route(),
            filters: self.store.filters(),
            registered: {
                let mut ids: Vec<_> = self
                    .store
                    .all_events()
                    .iter()
                    .map(|e| e.id)
                    .filter(|id| self.store.is_registered(*id))
                    .collect();
                ids.sort_unstable();
                ids
            },
            events: self.store.all_events(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    fn render_to<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        let today = Local::now().date_naive();
        writeln!(writer, "{}", self.render(today))?;
        if let Some(notice) = self.notice.take() {
            writeln!(writer, "ℹ {}", notice)?;
        }
        self.prompt(writer)
    }

    fn prompt<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "> ")?;
        writer.flush()?;
        Ok(())
    }
}

fn help_text(page: Page) -> &'static str {
    match page {
        Page::Home => {
            "Browse: open <id> · search <text> · type <category|all> · date <YYYY-MM-DD> · \
             location <text> · clear · page <n> · create · my · quit"
        }
        Page::Detail => "Detail: rsvp · home · my · create · quit",
        Page::Create => {
            "Create: set <field> <value> · submit · cancel · fields: title type date time \
             location description host max-attendees"
        }
        Page::MyEvents => "My events: open <id> · home · create · quit",
    }
}
