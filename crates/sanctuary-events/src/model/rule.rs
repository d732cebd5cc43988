use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Unit of repetition for a [`RecurrenceRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_interval() -> u32 {
    1
}

/// Recurrence settings embedded in a recurring event.
///
/// Weekday numbers run 0 (Sunday) through 6 (Saturday); `month_of_year`
/// runs 0 (January) through 11 (December). Each refinement is only read for
/// the frequency it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every `interval` units of `frequency`.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Weekly only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// Monthly only, 1-31.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    /// Yearly only, 0-11.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_of_year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl RecurrenceRule {
    /// A rule with no refinements and no termination condition.
    #[must_use]
    pub const fn new(frequency: Frequency, interval: u32) -> Self {
        Self {
            frequency,
            interval,
            days_of_week: None,
            day_of_month: None,
            month_of_year: None,
            end_date: None,
            count: None,
        }
    }

    /// ## Summary
    /// Weekdays this rule is restricted to, when the frequency is weekly and
    /// a non-empty set was given.
    ///
    /// Out-of-range numbers are dropped.
    #[must_use]
    pub fn weekdays(&self) -> Option<Vec<Weekday>> {
        if self.frequency != Frequency::Weekly {
            return None;
        }
        let days: Vec<Weekday> = self
            .days_of_week
            .as_deref()?
            .iter()
            .filter_map(|n| weekday_from_number(*n))
            .collect();
        (!days.is_empty()).then_some(days)
    }

    /// Target day of month when the frequency is monthly.
    #[must_use]
    pub fn target_day_of_month(&self) -> Option<u32> {
        (self.frequency == Frequency::Monthly)
            .then_some(self.day_of_month)
            .flatten()
    }

    /// Target month as 1-12 when the frequency is yearly; `None` when the
    /// stored month is outside 0-11.
    #[must_use]
    pub fn target_month(&self) -> Option<u32> {
        (self.frequency == Frequency::Yearly)
            .then_some(self.month_of_year)
            .flatten()
            .filter(|m| *m < 12)
            .and_then(|m| m.checked_add(1))
    }
}

/// ## Summary
/// Maps a 0 (Sunday) through 6 (Saturday) weekday number to a [`Weekday`].
#[must_use]
pub const fn weekday_from_number(n: u8) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
