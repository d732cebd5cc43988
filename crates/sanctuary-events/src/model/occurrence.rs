use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::{Event, RecurrenceRule};

/// A dated instance of an [`Event`], computed on demand and never stored.
///
/// Instances derived from a recurring event carry a synthetic id of the form
/// `<event id>_<start millis>` and point back at the event they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub requires_registration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrenceRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_recurring_instance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_event_id: Option<uuid::Uuid>,
}

impl Occurrence {
    /// The event itself, unchanged, as a single occurrence.
    #[must_use]
    pub fn of_event(event: &Event) -> Self {
        Self::project(event, event.id.to_string(), event.start_date, event.end_date, None)
    }

    /// A derived instance of a recurring event.
    #[must_use]
    pub fn instance_of(event: &Event, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let id = format!("{}_{}", event.id, start.timestamp_millis());
        Self::project(event, id, start, end, Some(event.id))
    }

    fn project(
        event: &Event,
        id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        original_event_id: Option<uuid::Uuid>,
    ) -> Self {
        Self {
            id,
            title: event.title.clone(),
            description: event.description.clone(),
            start_date: start,
            end_date: end,
            location: event.location.clone(),
            image_url: event.image_url.clone(),
            requires_registration: event.requires_registration,
            registration_url: event.registration_url.clone(),
            is_recurring: event.is_recurring,
            recurrence_pattern: event.recurrence_pattern.clone(),
            created_at: event.created_at,
            updated_at: event.updated_at,
            is_recurring_instance: original_event_id.is_some(),
            original_event_id,
        }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_date.signed_duration_since(self.start_date)
    }
}
