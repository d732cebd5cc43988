mod occurrence;
mod rule;

pub use occurrence::Occurrence;
pub use rule::{Frequency, RecurrenceRule, weekday_from_number};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled church activity as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub requires_registration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrenceRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or overwriting an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub requires_registration: bool,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<RecurrenceRule>,
}

impl Event {
    /// ## Summary
    /// Builds a new event from a draft, stamping both bookkeeping timestamps with `now`.
    #[must_use]
    pub fn from_draft(id: uuid::Uuid, draft: EventDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            location: draft.location,
            image_url: draft.image_url,
            requires_registration: draft.requires_registration,
            registration_url: draft.registration_url,
            is_recurring: draft.is_recurring,
            recurrence_pattern: draft.recurrence_pattern,
            created_at: now,
            updated_at: now,
        }
    }

    /// ## Summary
    /// Overwrites every client-editable field in place.
    ///
    /// Identity and `created_at` are preserved; `updated_at` becomes `now`.
    pub fn apply_draft(&mut self, draft: EventDraft, now: DateTime<Utc>) {
        *self = Self {
            id: self.id,
            created_at: self.created_at,
            ..Self::from_draft(self.id, draft, now)
        };
    }

    /// Length of a single occurrence of this event.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_date.signed_duration_since(self.start_date)
    }

    /// The recurrence rule, if this event actually recurs.
    #[must_use]
    pub fn rule(&self) -> Option<&RecurrenceRule> {
        if self.is_recurring {
            self.recurrence_pattern.as_ref()
        } else {
            None
        }
    }

    /// Whether the event is still running at `window_start` or starts at or
    /// before `window_end`, matching the expander's inclusive window end.
    #[must_use]
    pub fn overlaps(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.start_date <= window_end && self.end_date > window_start
    }
}
