//! Create-event form: raw input state, validation, and time reformatting
//!
//! Validation is a pure function from the raw form to a field → message
//! mapping; an empty mapping means the form is valid. Every rule is checked
//! independently, so a form with several problems reports all of them at
//! once, and edits clear only the edited field's message.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{EventDraft, EventType};
use crate::utils::errors::{EventHubError, Result};

/// Strict `HH:MM` 24-hour shape, what the time widget would have enforced
const TIME_INPUT_PATTERN: &str = r"^([01]?\d|2[0-3]):[0-5]\d$";

/// Raw create-form state, everything still as typed
///
/// Only the event type is structured from the start (it comes from a fixed
/// choice list); date and max attendees stay strings until the form
/// validates and converts to an [`EventDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub event_type: EventType,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub host: String,
    pub max_attendees: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            event_type: EventType::Workshop,
            date: String::new(),
            time: String::new(),
            location: String::new(),
            description: String::new(),
            host: String::new(),
            max_attendees: String::new(),
        }
    }
}

/// The editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormField {
    Title,
    Type,
    Date,
    Time,
    Location,
    Description,
    Host,
    MaxAttendees,
}

impl FormField {
    /// All fields in form order
    pub const ALL: [FormField; 8] = [
        FormField::Title,
        FormField::Type,
        FormField::Date,
        FormField::Time,
        FormField::Location,
        FormField::Description,
        FormField::Host,
        FormField::MaxAttendees,
    ];

    /// The token used to address the field in commands
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Type => "type",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Location => "location",
            FormField::Description => "description",
            FormField::Host => "host",
            FormField::MaxAttendees => "max-attendees",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Event Title",
            FormField::Type => "Event Type",
            FormField::Date => "Date",
            FormField::Time => "Time",
            FormField::Location => "Location",
            FormField::Description => "Description",
            FormField::Host => "Host Name",
            FormField::MaxAttendees => "Max Attendees",
        }
    }

    /// Parse a field name from a command token
    pub fn parse(input: &str) -> Result<FormField> {
        let token = input.trim().to_lowercase();
        match token.as_str() {
            "title" => Ok(FormField::Title),
            "type" => Ok(FormField::Type),
            "date" => Ok(FormField::Date),
            "time" => Ok(FormField::Time),
            "location" => Ok(FormField::Location),
            "description" => Ok(FormField::Description),
            "host" => Ok(FormField::Host),
            "max-attendees" | "max_attendees" | "maxattendees" | "max" => {
                Ok(FormField::MaxAttendees)
            }
            _ => Err(EventHubError::InvalidInput(format!(
                "Unknown form field: {}",
                input
            ))),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages; empty means the form is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    /// Drop the message for one field, as edits do
    pub fn clear_field(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl EventForm {
    /// Set one field from raw command input
    ///
    /// The event type must name a known category and the time must be
    /// `HH:MM`; those two are shape-checked at capture, the way a select
    /// and a time widget would constrain them. Everything else is accepted
    /// as typed and judged by [`validate`].
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Title => self.title = value.trim().to_string(),
            FormField::Type => self.event_type = value.parse()?,
            FormField::Date => self.date = value.trim().to_string(),
            FormField::Time => {
                let value = value.trim();
                if !value.is_empty() && !is_valid_time_input(value)? {
                    return Err(EventHubError::InvalidInput(
                        "Time must be in 24-hour HH:MM form".to_string(),
                    ));
                }
                self.time = value.to_string();
            }
            FormField::Location => self.location = value.trim().to_string(),
            FormField::Description => self.description = value.trim().to_string(),
            FormField::Host => self.host = value.trim().to_string(),
            FormField::MaxAttendees => self.max_attendees = value.trim().to_string(),
        }
        Ok(())
    }

    /// Convert a validated form into a create payload
    ///
    /// Only meaningful after [`validate`] returned an empty mapping; the
    /// time is reformatted to its 12-hour display form here.
    pub fn to_draft(&self) -> Result<EventDraft> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            EventHubError::InvalidInput(format!("Unparseable date: {}", self.date))
        })?;
        let max_attendees = self.max_attendees.trim().parse::<u32>().map_err(|_| {
            EventHubError::InvalidInput(format!(
                "Unparseable max attendees: {}",
                self.max_attendees
            ))
        })?;

        Ok(EventDraft {
            title: self.title.trim().to_string(),
            event_type: self.event_type,
            date,
            time: format_time_12h(self.time.trim()),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            host: self.host.trim().to_string(),
            max_attendees,
        })
    }
}

/// Validate a raw form against the creation rules
///
/// `today` anchors the date-not-in-the-past rule; the comparison is
/// date-only.
pub fn validate(form: &EventForm, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required");
    } else if form.title.trim().chars().count() < 5 {
        errors.insert(FormField::Title, "Title must be at least 5 characters");
    }

    if form.date.trim().is_empty() {
        errors.insert(FormField::Date, "Date is required");
    } else {
        match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.insert(FormField::Date, "Date cannot be in the past");
            }
            Ok(_) => {}
            Err(_) => {
                errors.insert(FormField::Date, "Date must be a valid date (YYYY-MM-DD)");
            }
        }
    }

    if form.time.trim().is_empty() {
        errors.insert(FormField::Time, "Time is required");
    }

    if form.location.trim().is_empty() {
        errors.insert(FormField::Location, "Location is required");
    } else if form.location.trim().chars().count() < 3 {
        errors.insert(FormField::Location, "Location must be at least 3 characters");
    }

    if form.description.trim().is_empty() {
        errors.insert(FormField::Description, "Description is required");
    } else if form.description.trim().chars().count() < 20 {
        errors.insert(
            FormField::Description,
            "Description must be at least 20 characters",
        );
    }

    if form.host.trim().is_empty() {
        errors.insert(FormField::Host, "Host name is required");
    } else if form.host.trim().chars().count() < 2 {
        errors.insert(FormField::Host, "Host name must be at least 2 characters");
    }

    if form.max_attendees.trim().is_empty() {
        errors.insert(FormField::MaxAttendees, "Max attendees is required");
    } else {
        match form.max_attendees.trim().parse::<i64>() {
            Err(_) => errors.insert(FormField::MaxAttendees, "Max attendees must be a number"),
            Ok(n) if n < 1 => errors.insert(FormField::MaxAttendees, "Must allow at least 1 attendee"),
            Ok(n) if n > 1000 => {
                errors.insert(FormField::MaxAttendees, "Maximum 1000 attendees allowed")
            }
            Ok(_) => {}
        }
    }

    errors
}

/// Reformat 24-hour `HH:MM` to its 12-hour display form, e.g. "13:05" -> "1:05 PM"
///
/// Total over arbitrary input: anything that does not parse comes back
/// unchanged.
pub fn format_time_12h(time24: &str) -> String {
    match NaiveTime::parse_from_str(time24, "%H:%M") {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => time24.to_string(),
    }
}

/// Shape check for raw time input
fn is_valid_time_input(input: &str) -> Result<bool> {
    let regex = Regex::new(TIME_INPUT_PATTERN)
        .map_err(|_| EventHubError::Config("Invalid time input pattern".to_string()))?;
    Ok(regex.is_match(input))
}
