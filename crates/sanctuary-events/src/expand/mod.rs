//! Recurrence expansion.
//!
//! Turns a stored [`Event`] into the concrete [`Occurrence`]s that fall inside
//! a query window. Calendar arithmetic happens in the expander's time zone so
//! a weekly 09:00 service stays at 09:00 local time across DST changes.

mod calendar;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;

use crate::model::{Event, Frequency, Occurrence, RecurrenceRule};
use calendar::{clamped_date, from_month_index, month_index, resolve_local};

/// Expands recurring events in a fixed time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    tz: Tz,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Expander {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// ## Summary
    /// Produces the occurrences of `event` between `window_start` and
    /// `window_end`, in ascending start order.
    ///
    /// A non-recurring event is returned as-is, whatever the window. For a
    /// recurring event every occurrence starts at or after the event's own
    /// start and at or before `window_end` (and the rule's end date, if any),
    /// keeps the event's duration, and the total never exceeds the rule's
    /// count.
    #[must_use]
    pub fn expand(
        &self,
        event: &Event,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Vec<Occurrence> {
        let Some(rule) = event.rule() else {
            return vec![Occurrence::of_event(event)];
        };

        let limit = rule
            .count
            .map_or(usize::MAX, |count| usize::try_from(count).unwrap_or(usize::MAX));
        let duration = event.duration();
        let max_end = rule.end_date.map_or(window_end, |end| end.min(window_end));
        let floor = event.start_date.max(window_start);

        let anchor = event.start_date.with_timezone(&self.tz).naive_local();
        let cadence = Cadence::for_rule(rule, anchor);
        let mut index = if event.start_date < window_start {
            cadence.seek(
                anchor.date(),
                window_start.with_timezone(&self.tz).date_naive(),
            )
        } else {
            0
        };

        let mut occurrences = Vec::new();
        while occurrences.len() < limit {
            let Some(date) = cadence.candidate(anchor.date(), index) else {
                break;
            };
            let Some(start) = resolve_local(self.tz, date.and_time(anchor.time())) else {
                break;
            };
            if start > max_end {
                break;
            }
            index += 1;

            if start < floor || !cadence.accepts(date) {
                continue;
            }
            let Some(end) = start.checked_add_signed(duration) else {
                break;
            };
            occurrences.push(Occurrence::instance_of(event, start, end));
        }

        tracing::trace!(
            event_id = %event.id,
            frequency = %rule.frequency,
            interval = rule.interval,
            occurrences = occurrences.len(),
            "Expanded recurring event"
        );

        occurrences
    }
}

/// ## Summary
/// Expands `event` over `[window_start, window_end]` using UTC calendar arithmetic.
#[must_use]
pub fn expand(
    event: &Event,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<Occurrence> {
    Expander::default().expand(event, window_start, window_end)
}

/// Candidate generator for one rule, relative to the event's local start date.
///
/// Candidate `n` is a pure function of `n`, and consecutive candidates are at
/// least one day apart, so every walk terminates once it passes its bound.
#[derive(Debug, Clone)]
enum Cadence {
    /// Every `n` days.
    Days(u32),
    /// Every `n` weeks on the start's weekday.
    Weeks(u32),
    /// Day-by-day walk accepting listed weekdays in every `interval`-th
    /// Sunday-based week counted from `week_origin`.
    WeekDays {
        weekdays: Vec<Weekday>,
        interval: u32,
        week_origin: NaiveDate,
    },
    /// Every `interval` months on `day`, clamped to short months.
    Months { interval: u32, day: u32 },
    /// Every `interval` years on `month`/`day`, clamped to short months.
    Years { interval: u32, month: u32, day: u32 },
}

impl Cadence {
    fn for_rule(rule: &RecurrenceRule, anchor: NaiveDateTime) -> Self {
        // A zero interval never passes validation; treat it as 1 so the walk always moves.
        let interval = rule.interval.max(1);
        let start = anchor.date();

        match rule.frequency {
            Frequency::Daily => Self::Days(interval),
            Frequency::Weekly => match rule.weekdays() {
                Some(weekdays) => Self::WeekDays {
                    weekdays,
                    interval,
                    week_origin: add_days(
                        start,
                        -i64::from(start.weekday().num_days_from_sunday()),
                    )
                    .unwrap_or(start),
                },
                None => Self::Weeks(interval),
            },
            Frequency::Monthly => Self::Months {
                interval,
                day: rule.target_day_of_month().unwrap_or_else(|| start.day()),
            },
            Frequency::Yearly => Self::Years {
                interval,
                month: rule.target_month().unwrap_or_else(|| start.month()),
                day: start.day(),
            },
        }
    }

    fn candidate(&self, start: NaiveDate, index: i64) -> Option<NaiveDate> {
        match self {
            Self::Days(n) => add_days(start, index.checked_mul(i64::from(*n))?),
            Self::Weeks(n) => add_days(start, index.checked_mul(7 * i64::from(*n))?),
            Self::WeekDays { .. } => add_days(start, index),
            Self::Months { interval, day } => {
                let months = index.checked_mul(i64::from(*interval))?;
                let (year, month) = from_month_index(month_index(start).checked_add(months)?)?;
                clamped_date(year, month, *day)
            }
            Self::Years {
                interval,
                month,
                day,
            } => {
                let years = index.checked_mul(i64::from(*interval))?;
                let year = i32::try_from(i64::from(start.year()).checked_add(years)?).ok()?;
                clamped_date(year, *month, *day)
            }
        }
    }

    fn accepts(&self, date: NaiveDate) -> bool {
        match self {
            Self::WeekDays {
                weekdays,
                interval,
                week_origin,
            } => {
                let week = date.signed_duration_since(*week_origin).num_days().div_euclid(7);
                weekdays.contains(&date.weekday()) && week % i64::from(*interval) == 0
            }
            Self::Days(_) | Self::Weeks(_) | Self::Months { .. } | Self::Years { .. } => true,
        }
    }

    /// Index of a candidate at most one step before `target`, so the walk
    /// can resume there instead of stepping through every earlier candidate.
    fn seek(&self, start: NaiveDate, target: NaiveDate) -> i64 {
        let days = target.signed_duration_since(start).num_days();
        let steps = match self {
            Self::Days(n) => days / i64::from(*n),
            Self::Weeks(n) => days / (7 * i64::from(*n)),
            Self::WeekDays { .. } => days,
            Self::Months { interval, .. } => {
                (month_index(target) - month_index(start)) / i64::from(*interval)
            }
            Self::Years { interval, .. } => {
                i64::from(target.year() - start.year()) / i64::from(*interval)
            }
        };
        (steps - 1).max(0)
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}
