//! Input validation for event drafts.
//!
//! The expander trusts its input; everything it relies on is checked here
//! before an event is stored.

use chrono::{DateTime, Utc};

use crate::error::{EventError, EventResult};
use crate::model::{EventDraft, Frequency, RecurrenceRule};

/// ## Summary
/// Checks a draft before it is stored.
///
/// ## Errors
/// Returns `EventError::ValidationError` naming the first offending field.
pub fn validate_draft(draft: &EventDraft) -> EventResult<()> {
    if draft.title.trim().is_empty() {
        return Err(EventError::invalid("title", "must not be blank"));
    }
    if draft.end_date <= draft.start_date {
        return Err(EventError::invalid("endDate", "must be after startDate"));
    }
    if draft.requires_registration
        && draft
            .registration_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
    {
        return Err(EventError::invalid(
            "registrationUrl",
            "must not be blank when given",
        ));
    }

    match (&draft.recurrence_pattern, draft.is_recurring) {
        (Some(rule), true) => validate_rule(rule, draft.start_date),
        (None, true) => Err(EventError::invalid(
            "recurrencePattern",
            "is required for recurring events",
        )),
        (_, false) => Ok(()),
    }
}

/// ## Summary
/// Checks a recurrence rule against the start of the event it belongs to.
///
/// ## Errors
/// Returns `EventError::ValidationError` naming the first offending field.
pub fn validate_rule(rule: &RecurrenceRule, start: DateTime<Utc>) -> EventResult<()> {
    if rule.interval == 0 {
        return Err(EventError::invalid("interval", "must be at least 1"));
    }

    if let Some(days) = &rule.days_of_week {
        if days.is_empty() {
            return Err(EventError::invalid("daysOfWeek", "must not be empty"));
        }
        if let Some(day) = days.iter().find(|day| **day > 6) {
            return Err(EventError::invalid(
                "daysOfWeek",
                format!("{day} is not a weekday number (0-6)"),
            ));
        }
        if rule.frequency != Frequency::Weekly {
            tracing::debug!(frequency = %rule.frequency, "daysOfWeek is ignored for this frequency");
        }
    }

    if let Some(day) = rule.day_of_month
        && !(1..=31).contains(&day)
    {
        return Err(EventError::invalid(
            "dayOfMonth",
            format!("{day} is outside 1-31"),
        ));
    }

    if let Some(month) = rule.month_of_year
        && month > 11
    {
        return Err(EventError::invalid(
            "monthOfYear",
            format!("{month} is outside 0-11"),
        ));
    }

    if let Some(end) = rule.end_date
        && end < start
    {
        return Err(EventError::invalid(
            "recurrencePattern.endDate",
            "must not be before startDate",
        ));
    }

    Ok(())
}
