use chrono::{DateTime, TimeZone, Utc};
use rrule::RRuleSet;

use crate::model::{Event, EventDraft, Frequency, RecurrenceRule};

/// A rule whose expansion must agree with the RFC 5545 reading of `rruleset`.
pub struct RRuleCase {
    pub name: &'static str,
    pub rruleset: &'static str,
    pub start: &'static str,
    pub duration_minutes: i64,
    pub rule: RecurrenceRule,
    pub limit: u16,
}

fn rule(frequency: Frequency, interval: u32) -> RecurrenceRule {
    RecurrenceRule::new(frequency, interval)
}

pub fn rrule_cases() -> Vec<RRuleCase> {
    vec![
        RRuleCase {
            name: "daily_every_other_day",
            rruleset: "DTSTART:20260302T080000Z\nRRULE:FREQ=DAILY;INTERVAL=2;COUNT=5",
            start: "2026-03-02T08:00:00Z",
            duration_minutes: 90,
            rule: RecurrenceRule {
                count: Some(5),
                ..rule(Frequency::Daily, 2)
            },
            limit: 100,
        },
        RRuleCase {
            name: "daily_until",
            rruleset: "DTSTART:20260301T080000Z\nRRULE:FREQ=DAILY;UNTIL=20260310T080000Z",
            start: "2026-03-01T08:00:00Z",
            duration_minutes: 30,
            rule: RecurrenceRule {
                end_date: Some(parse("2026-03-10T08:00:00Z")),
                ..rule(Frequency::Daily, 1)
            },
            limit: 100,
        },
        RRuleCase {
            name: "weekly_sunday_wednesday",
            rruleset: "DTSTART:20260104T090000Z\nRRULE:FREQ=WEEKLY;BYDAY=SU,WE;COUNT=8",
            start: "2026-01-04T09:00:00Z",
            duration_minutes: 180,
            rule: RecurrenceRule {
                days_of_week: Some(vec![0, 3]),
                count: Some(8),
                ..rule(Frequency::Weekly, 1)
            },
            limit: 100,
        },
        RRuleCase {
            name: "weekly_fortnightly",
            rruleset: "DTSTART:20260301T090000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=4",
            start: "2026-03-01T09:00:00Z",
            duration_minutes: 60,
            rule: RecurrenceRule {
                count: Some(4),
                ..rule(Frequency::Weekly, 2)
            },
            limit: 100,
        },
        RRuleCase {
            name: "monthly_fifteenth",
            rruleset: "DTSTART:20260115T190000Z\nRRULE:FREQ=MONTHLY;BYMONTHDAY=15;COUNT=6",
            start: "2026-01-15T19:00:00Z",
            duration_minutes: 120,
            rule: RecurrenceRule {
                day_of_month: Some(15),
                count: Some(6),
                ..rule(Frequency::Monthly, 1)
            },
            limit: 100,
        },
        RRuleCase {
            name: "monthly_quarterly",
            rruleset: "DTSTART:20260110T100000Z\nRRULE:FREQ=MONTHLY;INTERVAL=3;COUNT=4",
            start: "2026-01-10T10:00:00Z",
            duration_minutes: 60,
            rule: RecurrenceRule {
                count: Some(4),
                ..rule(Frequency::Monthly, 3)
            },
            limit: 100,
        },
        RRuleCase {
            name: "yearly_christmas_eve",
            rruleset: "DTSTART:20261224T230000Z\nRRULE:FREQ=YEARLY;COUNT=4",
            start: "2026-12-24T23:00:00Z",
            duration_minutes: 90,
            rule: RecurrenceRule {
                count: Some(4),
                ..rule(Frequency::Yearly, 1)
            },
            limit: 100,
        },
        RRuleCase {
            name: "yearly_by_month",
            rruleset: "DTSTART:20260610T120000Z\nRRULE:FREQ=YEARLY;BYMONTH=6;COUNT=3",
            start: "2026-06-10T12:00:00Z",
            duration_minutes: 240,
            rule: RecurrenceRule {
                month_of_year: Some(5),
                count: Some(3),
                ..rule(Frequency::Yearly, 1)
            },
            limit: 100,
        },
    ]
}

pub fn assert_case(case: &RRuleCase) {
    let rrule_set: RRuleSet = case
        .rruleset
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
    let expected: Vec<i64> = rrule_set
        .all(case.limit)
        .dates
        .iter()
        .map(chrono::DateTime::timestamp)
        .collect();

    let start = parse(case.start);
    let event = Event::from_draft(
        uuid::Uuid::now_v7(),
        EventDraft {
            title: case.name.to_string(),
            description: String::new(),
            start_date: start,
            end_date: start + chrono::TimeDelta::minutes(case.duration_minutes),
            location: String::new(),
            image_url: None,
            requires_registration: false,
            registration_url: None,
            is_recurring: true,
            recurrence_pattern: Some(case.rule.clone()),
        },
        start,
    );
    let window_end = Utc.with_ymd_and_hms(2035, 1, 1, 0, 0, 0).unwrap();
    let actual: Vec<i64> = super::expand(&event, start, window_end)
        .iter()
        .map(|occurrence| occurrence.start_date.timestamp())
        .collect();

    assert_eq!(actual, expected, "Case {} did not match", case.name);
}

fn parse(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|err| panic!("Failed to parse rfc3339 value {value}: {err}"))
        .with_timezone(&Utc)
}
