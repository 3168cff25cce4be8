//! In-memory event store
//!
//! The store owns the canonical event list, the set of events the session
//! user has registered for, and the active filter criteria, for the lifetime
//! of the process. Pages read snapshots and mutate state only through the
//! operations here.
//!
//! All operations are total: a missing event, a full event, or a duplicate
//! registration is an ordinary `false`/`None` outcome, never an error.

pub mod seed;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::models::{Event, EventDraft, EventId, FilterCriteria, DEFAULT_EVENT_IMAGE};
use crate::utils::helpers;

/// Owner of all event and registration state for one session
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    registered: HashSet<EventId>,
    filters: FilterCriteria,
    next_id: EventId,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Create a store seeded with the bundled sample events
    pub fn seeded() -> Self {
        Self::with_events(seed::sample_events())
    }

    /// Create a store from an existing event list
    ///
    /// The id counter starts above the highest existing id, so later created
    /// events can never collide with seeded ones.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            events,
            registered: HashSet::new(),
            filters: FilterCriteria::default(),
            next_id,
        }
    }

    /// The unfiltered canonical event list
    ///
    /// Pages that must resolve a specific event regardless of the current
    /// filters (detail, my-events) read this.
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    /// Events passing the active filter criteria, in canonical order
    ///
    /// Recomputed on every call, never cached.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.filters.matches(e))
            .collect()
    }

    /// Look up an event by id; `None` is a recognized empty-result state
    pub fn find_event(&self, event_id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// The active filter criteria
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Replace the filter criteria wholesale
    ///
    /// Callers merge their change into a copy of the current criteria first;
    /// the store never merges.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        debug!(filters = ?filters, "Filters replaced");
        self.filters = filters;
    }

    /// Register the session user for an event
    ///
    /// No-op returning `false` when already registered, when no such event
    /// exists, or when the event is at capacity. Returns `true` exactly when
    /// the registration set grew and the event's attendee count went up by
    /// one. `attendees <= max_attendees` holds after every call.
    pub fn register_for_event(&mut self, event_id: EventId) -> bool {
        if self.registered.contains(&event_id) {
            debug!(event_id = event_id, "Registration skipped: already registered");
            return false;
        }

        let event = match self.events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => event,
            None => {
                debug!(event_id = event_id, "Registration skipped: no such event");
                return false;
            }
        };

        if event.attendees >= event.max_attendees {
            debug!(
                event_id = event_id,
                max_attendees = event.max_attendees,
                "Registration skipped: event full"
            );
            return false;
        }

        event.attendees += 1;
        self.registered.insert(event_id);
        info!(
            event_id = event_id,
            attendees = event.attendees,
            max_attendees = event.max_attendees,
            "Registered for event"
        );
        true
    }

    /// Whether the session user has registered for `event_id`
    pub fn is_registered(&self, event_id: EventId) -> bool {
        self.registered.contains(&event_id)
    }

    /// Number of events the session user has registered for
    pub fn registration_count(&self) -> usize {
        self.registered.len()
    }

    /// The events the session user has registered for, in canonical order
    pub fn registered_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.registered.contains(&e.id))
            .collect()
    }

    /// Create a new event from a validated draft and return its id
    ///
    /// The store assigns the id, starts the attendee count at zero, derives
    /// the host initials, applies the default image token, and prepends the
    /// event so newly created events list first.
    pub fn create_event(&mut self, draft: EventDraft) -> EventId {
        let id = self.next_id;
        self.next_id += 1;

        let event = Event {
            id,
            host_image: helpers::host_initials(&draft.host),
            image: DEFAULT_EVENT_IMAGE.to_string(),
            attendees: 0,
            title: draft.title,
            event_type: draft.event_type,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            host: draft.host,
            max_attendees: draft.max_attendees,
        };

        info!(event_id = id, title = %event.title, "Event created");
        self.events.insert(0, event);
        id
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::EventType;

    fn draft(title: &str, host: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            event_type: EventType::Workshop,
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            time: "5:00 PM".to_string(),
            location: "Community Hall, Jayanagar".to_string(),
            description: "Hands-on session, all materials provided.".to_string(),
            host: host.to_string(),
            max_attendees: 12,
        }
    }

    #[test]
    fn test_seeded_store_counter_sits_above_max_id() {
        let mut store = EventStore::seeded();
        let max_id = store.all_events().iter().map(|e| e.id).max().unwrap();
        let new_id = store.create_event(draft("Bread Baking Basics", "Tara Shah"));
        assert_eq!(new_id, max_id + 1);
    }

    #[test]
    fn test_create_event_fills_derived_fields_and_prepends() {
        let mut store = EventStore::seeded();
        let before = store.all_events().len();

        let id = store.create_event(draft("Bread Baking Basics", "Tara Shah"));

        let event = store.all_events().first().unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.attendees, 0);
        assert_eq!(event.host_image, "TS");
        assert_eq!(event.image, DEFAULT_EVENT_IMAGE);
        assert_eq!(store.all_events().len(), before + 1);
    }

    #[test]
    fn test_pre_seeded_events_keep_relative_order_after_create() {
        let mut store = EventStore::seeded();
        let seeded_ids: Vec<_> = store.all_events().iter().map(|e| e.id).collect();

        store.create_event(draft("Bread Baking Basics", "Tara Shah"));

        let after: Vec<_> = store.all_events().iter().skip(1).map(|e| e.id).collect();
        assert_eq!(after, seeded_ids);
    }

    #[test]
    fn test_register_unknown_event_is_a_noop() {
        let mut store = EventStore::seeded();
        assert!(!store.register_for_event(999));
        assert_eq!(store.registration_count(), 0);
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let mut store = EventStore::seeded();
        let id = store.all_events()[0].id;
        let before = store.find_event(id).unwrap().attendees;

        assert!(store.register_for_event(id));
        assert!(!store.register_for_event(id));

        assert_eq!(store.find_event(id).unwrap().attendees, before + 1);
        assert_eq!(store.registration_count(), 1);
    }

    #[test]
    fn test_register_respects_capacity_even_when_called_directly() {
        let mut store = EventStore::with_events(vec![Event {
            id: 1,
            title: "Tiny Supper Club".to_string(),
            event_type: EventType::Social,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            time: "8:00 PM".to_string(),
            location: "Home kitchen, Richmond Town".to_string(),
            description: "Six seats, one long table.".to_string(),
            host: "Leela D'Souza".to_string(),
            host_image: "LD".to_string(),
            image: "🍲".to_string(),
            attendees: 6,
            max_attendees: 6,
        }]);

        assert!(!store.register_for_event(1));
        assert_eq!(store.find_event(1).unwrap().attendees, 6);
        assert!(!store.is_registered(1));
    }

    #[test]
    fn test_set_filters_replaces_wholesale() {
        let mut store = EventStore::seeded();
        store.set_filters(FilterCriteria {
            search: "yoga".to_string(),
            ..Default::default()
        });
        store.set_filters(FilterCriteria {
            location: "indiranagar".to_string(),
            ..Default::default()
        });

        // The search from the first call must not survive the second.
        assert_eq!(store.filters().search, "");
        assert_eq!(store.filters().location, "indiranagar");
    }

    #[test]
    fn test_visible_events_subset_preserves_order() {
        let mut store = EventStore::seeded();
        store.set_filters(FilterCriteria {
            event_type: crate::models::TypeFilter::Only(EventType::Fitness),
            ..Default::default()
        });

        let visible: Vec<_> = store.visible_events().iter().map(|e| e.id).collect();
        let all_filtered: Vec<_> = store
            .all_events()
            .iter()
            .filter(|e| e.event_type == EventType::Fitness)
            .map(|e| e.id)
            .collect();
        assert_eq!(visible, all_filtered);
        assert!(!visible.is_empty());
    }
}
