//! Filter criteria narrowing the visible event set

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::{Event, EventType};

/// Type filter: everything, or one category exactly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    pub fn matches(&self, event_type: EventType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == event_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("All"),
            TypeFilter::Only(t) => f.write_str(t.as_str()),
        }
    }
}

/// User-specified criteria for the visible event list
///
/// Replaced wholesale through `EventStore::set_filters`; callers merge their
/// change into a copy of the current criteria first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub event_type: TypeFilter,
    pub date: Option<NaiveDate>,
    pub location: String,
}

impl FilterCriteria {
    /// Whether any criterion differs from the blank state
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.event_type != TypeFilter::All
            || self.date.is_some()
            || !self.location.is_empty()
    }

    /// Whether `event` satisfies every criterion
    ///
    /// Search matches title or description case-insensitively; an empty
    /// search matches everything. Location is a case-insensitive substring
    /// match, date an exact match.
    pub fn matches(&self, event: &Event) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || event.title.to_lowercase().contains(&search)
            || event.description.to_lowercase().contains(&search);
        let matches_type = self.event_type.matches(event.event_type);
        let matches_date = self.date.map_or(true, |d| d == event.date);
        let matches_location = self.location.is_empty()
            || event
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase());

        matches_search && matches_type && matches_date && matches_location
    }
}
