//! Create-event page: the form, its per-field errors, and the success view

use crate::forms::{EventForm, FormField, ValidationErrors};
use crate::models::EventType;

/// Page-local state of the create flow
///
/// `created` holds the title of the just-created event while the success
/// view is showing. Navigation away resets the whole state; a fresh visit
/// always starts with a blank form.
#[derive(Debug, Clone, Default)]
pub struct CreateFormState {
    pub form: EventForm,
    pub errors: ValidationErrors,
    pub created: Option<String>,
}

/// Render the create page: the success view after submission, the form otherwise
pub fn render(state: &CreateFormState) -> String {
    if let Some(title) = &state.created {
        return render_success(title);
    }
    render_form(&state.form, &state.errors)
}

fn render_success(title: &str) -> String {
    let mut out = String::new();
    out.push_str("✓ Event Created!\n");
    out.push_str("Your event has been successfully created.\n");
    out.push_str(&format!("  {}\n", title));
    out.push_str("Type `home` to view all events.\n");
    out
}

fn render_form(form: &EventForm, errors: &ValidationErrors) -> String {
    let mut out = String::new();
    out.push_str("Create New Event\n");
    out.push_str("Fill in the details to create your community event\n\n");

    for field in FormField::ALL {
        out.push_str(&render_field(form, errors, field));
    }

    out.push_str(&format!(
        "\n  Event types: {}\n",
        EventType::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    ));
    out.push_str("\nCommands: set <field> <value> · submit · cancel · help · quit\n");
    out
}

fn render_field(form: &EventForm, errors: &ValidationErrors, field: FormField) -> String {
    let value = field_value(form, field);
    let shown = if value.is_empty() { "—" } else { value };
    let mut line = format!("  {:<13}: {}", field.label(), shown);
    if let Some(message) = errors.get(field) {
        line.push_str(&format!("   ! {}", message));
    }
    line.push('\n');
    line
}

fn field_value(form: &EventForm, field: FormField) -> &str {
    match field {
        FormField::Title => &form.title,
        FormField::Type => form.event_type.as_str(),
        FormField::Date => &form.date,
        FormField::Time => &form.time,
        FormField::Location => &form.location,
        FormField::Description => &form.description,
        FormField::Host => &form.host,
        FormField::MaxAttendees => &form.max_attendees,
    }
}
