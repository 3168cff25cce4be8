//! Event model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::errors::EventHubError;

/// Identifier for an event, assigned by the store at creation time
pub type EventId = i64;

/// Default icon token for user-created events
pub const DEFAULT_EVENT_IMAGE: &str = "🎉";

/// A community event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    /// Display time, e.g. "6:30 PM"
    pub time: String,
    pub location: String,
    pub description: String,
    pub host: String,
    /// Host initials shown as the avatar, derived from `host`
    pub host_image: String,
    /// Emoji/icon token shown on cards
    pub image: String,
    pub attendees: u32,
    pub max_attendees: u32,
}

impl Event {
    /// Remaining capacity; zero when the event is full
    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.attendees)
    }

    pub fn is_full(&self) -> bool {
        self.attendees >= self.max_attendees
    }

    /// Whether the event is today or later, date-only comparison
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

/// The fixed set of event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Fitness,
    Music,
    Meetup,
    Workshop,
    Sports,
    Social,
    Entertainment,
}

impl EventType {
    /// All categories, in the order the filter chips show them
    pub const ALL: [EventType; 7] = [
        EventType::Fitness,
        EventType::Music,
        EventType::Meetup,
        EventType::Workshop,
        EventType::Sports,
        EventType::Social,
        EventType::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Fitness => "Fitness",
            EventType::Music => "Music",
            EventType::Meetup => "Meetup",
            EventType::Workshop => "Workshop",
            EventType::Sports => "Sports",
            EventType::Social => "Social",
            EventType::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EventHubError::InvalidInput(format!("Unknown event type: {}", s)))
    }
}

/// Payload for creating a new event
///
/// The store fills in what the draft omits: id, attendee count, host initials
/// and the default image token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub event_type: EventType,
    pub date: NaiveDate,
    /// Display time, already reformatted to 12-hour form
    pub time: String,
    pub location: String,
    pub description: String,
    pub host: String,
    pub max_attendees: u32,
}
