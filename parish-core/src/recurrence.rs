//! Occurrence expansion for parish events.
//!
//! Decides whether an event (one-off or recurring) lands on a given date,
//! and materializes date-adjusted occurrence copies for calendar views.
//! Everything here is pure: malformed or contradictory configs yield
//! "does not occur", never an error, and no function reads the wall clock.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, RecurrenceEnd, RecurrenceKind, WeekDay};
use crate::grid::days_in_month;

/// Whether `event` has a scheduled instance on `target`.
///
/// All interval checks divide the target-minus-anchor difference, not
/// absolute calendar fields, so steps compose correctly across month and
/// year boundaries.
pub fn occurs_on(event: &Event, target: NaiveDate) -> bool {
    let anchor = event.date;

    let Some(config) = &event.recurrence else {
        return target == anchor;
    };

    // No occurrences predate the series start
    if target < anchor {
        return false;
    }

    // The end date is inclusive
    if let RecurrenceEnd::Until(end) = config.end {
        if target > end {
            return false;
        }
    }

    // An interval of 0 would divide by zero; treat it as 1
    let interval = i64::from(config.interval.max(1));

    match config.kind {
        RecurrenceKind::Daily => (target - anchor).num_days() % interval == 0,
        RecurrenceKind::Weekly => {
            if !config.week_days.is_empty()
                && !config.week_days.contains(&WeekDay::from_date(target))
            {
                return false;
            }
            let weeks = (target - anchor).num_days().div_euclid(7);
            weeks % interval == 0
        }
        RecurrenceKind::Monthly => {
            let months = i64::from(target.year() - anchor.year()) * 12
                + (i64::from(target.month()) - i64::from(anchor.month()));
            // A 31st anchor still lands in shorter months: last day
            // pairs with last day
            let same_day = target.day() == anchor.day();
            let both_last = is_last_day_of_month(anchor) && is_last_day_of_month(target);
            (same_day || both_last) && months % interval == 0
        }
        RecurrenceKind::Yearly => {
            let years = i64::from(target.year() - anchor.year());
            if years % interval != 0 {
                return false;
            }
            if anchor.month() == 2 && anchor.day() == 29 {
                // Leap-day anniversaries fall on Feb 28 in common years
                if is_leap_year(target.year()) {
                    target.month() == 2 && target.day() == 29
                } else {
                    target.month() == 2 && target.day() == 28
                }
            } else {
                target.month() == anchor.month() && target.day() == anchor.day()
            }
        }
        RecurrenceKind::Custom => config.week_days.contains(&WeekDay::from_date(target)),
    }
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Events occurring on `date`, with recurring matches materialized as
/// occurrence copies: `date` becomes the queried day, `original_date`
/// keeps the anchor. One-off events pass through unchanged.
pub fn events_for_date(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| occurs_on(event, date))
        .map(|event| materialize(event, date))
        .collect()
}

fn materialize(event: &Event, date: NaiveDate) -> Event {
    let Some(config) = &event.recurrence else {
        return event.clone();
    };

    let mut occurrence = event.clone();
    occurrence.original_date = Some(event.date);
    occurrence.date = date;

    // Custom patterns may override times per weekday
    if config.kind == RecurrenceKind::Custom {
        if let Some(times) = config.time_override(WeekDay::from_date(date)) {
            occurrence.start_time = times.start;
            occurrence.end_time = times.end;
        }
    }

    occurrence
}

/// All occurrences within the given month (1-based), exactly one entry per
/// qualifying (event, date) pair, in day-of-iteration order.
pub fn events_for_month(events: &[Event], year: i32, month: u32) -> Vec<Event> {
    let mut seen: HashSet<(String, Option<NaiveDate>)> = HashSet::new();
    let mut occurrences = Vec::new();

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        for occurrence in events_for_date(events, date) {
            // Recurring events dedup per (id, date); one-offs per id alone
            let key = if occurrence.is_recurring() {
                (occurrence.id.clone(), Some(date))
            } else {
                (occurrence.id.clone(), None)
            };
            if seen.insert(key) {
                occurrences.push(occurrence);
            }
        }
    }

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{RecurringConfig, RsvpCounts, TimeOverride};
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(id: &str, anchor: NaiveDate) -> Event {
        Event {
            id: id.to_string(),
            date: anchor,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            title: "Sunday Worship".to_string(),
            description: String::new(),
            location: "Main Sanctuary".to_string(),
            department: "worship".to_string(),
            color: "blue".to_string(),
            image: None,
            featured: false,
            recurrence: None,
            original_date: None,
            rsvp: RsvpCounts::default(),
            attendees: vec![],
        }
    }

    fn recurring(
        id: &str,
        anchor: NaiveDate,
        kind: RecurrenceKind,
        interval: u32,
        week_days: &[WeekDay],
        end: RecurrenceEnd,
    ) -> Event {
        let mut event = make_event(id, anchor);
        event.recurrence = Some(RecurringConfig {
            kind,
            interval,
            week_days: week_days.to_vec(),
            end,
            times: vec![],
        });
        event
    }

    #[test]
    fn one_off_only_occurs_on_its_own_date() {
        let event = make_event("egg-hunt", date(2025, 4, 19));
        assert!(occurs_on(&event, date(2025, 4, 19)));
        assert!(!occurs_on(&event, date(2025, 4, 18)));
        assert!(!occurs_on(&event, date(2025, 4, 20)));
        assert!(!occurs_on(&event, date(2026, 4, 19)));
    }

    #[test]
    fn series_includes_its_own_anchor() {
        let anchor = date(2025, 3, 16); // a Sunday
        let event = recurring(
            "service",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[WeekDay::Sun],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, anchor));
    }

    #[test]
    fn nothing_occurs_before_the_anchor() {
        let event = recurring(
            "daily",
            date(2025, 3, 16),
            RecurrenceKind::Daily,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(!occurs_on(&event, date(2025, 3, 15)));
        assert!(!occurs_on(&event, date(2024, 3, 16)));
    }

    #[test]
    fn daily_interval_skips_intervening_days() {
        let anchor = date(2025, 3, 10);
        let event = recurring(
            "every-third",
            anchor,
            RecurrenceKind::Daily,
            3,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, anchor));
        assert!(!occurs_on(&event, date(2025, 3, 11)));
        assert!(!occurs_on(&event, date(2025, 3, 12)));
        assert!(occurs_on(&event, date(2025, 3, 13)));
        // Intervals compose across the month boundary: Apr 3 is 24 days out
        assert!(!occurs_on(&event, date(2025, 4, 1)));
        assert!(!occurs_on(&event, date(2025, 4, 2)));
        assert!(occurs_on(&event, date(2025, 4, 3)));
    }

    #[test]
    fn weekly_filter_rejects_other_weekdays() {
        let anchor = date(2025, 3, 17); // a Monday
        let event = recurring(
            "study",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[WeekDay::Mon, WeekDay::Wed],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 3, 17)), "Monday");
        assert!(occurs_on(&event, date(2025, 3, 19)), "Wednesday");
        assert!(!occurs_on(&event, date(2025, 3, 18)), "Tuesday");
        assert!(!occurs_on(&event, date(2025, 3, 21)), "Friday");
        assert!(occurs_on(&event, date(2025, 3, 24)), "next Monday");
    }

    #[test]
    fn weekly_without_weekdays_has_no_day_filter() {
        // Any day inside a qualifying week occurs when no weekdays are given
        let anchor = date(2025, 3, 16); // a Sunday
        let event = recurring(
            "open-gym",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 3, 18)), "Tuesday, same week");
        assert!(occurs_on(&event, date(2025, 3, 22)), "Saturday, same week");
        assert!(occurs_on(&event, date(2025, 3, 27)), "Thursday, next week");

        // With an interval, off weeks are still skipped wholesale
        let biweekly = recurring(
            "open-gym-biweekly",
            anchor,
            RecurrenceKind::Weekly,
            2,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&biweekly, date(2025, 3, 18)), "week zero");
        assert!(!occurs_on(&biweekly, date(2025, 3, 25)), "week one is off");
        assert!(occurs_on(&biweekly, date(2025, 3, 30)), "week two");
    }

    #[test]
    fn biweekly_skips_the_off_week() {
        let anchor = date(2025, 3, 16); // a Sunday
        let event = recurring(
            "communion",
            anchor,
            RecurrenceKind::Weekly,
            2,
            &[WeekDay::Sun],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 3, 16)));
        assert!(!occurs_on(&event, date(2025, 3, 23)));
        assert!(occurs_on(&event, date(2025, 3, 30)));
        assert!(!occurs_on(&event, date(2025, 4, 6)));
        assert!(occurs_on(&event, date(2025, 4, 13)));
    }

    #[test]
    fn monthly_matches_day_of_month() {
        let event = recurring(
            "board",
            date(2025, 1, 15),
            RecurrenceKind::Monthly,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 2, 15)));
        assert!(occurs_on(&event, date(2025, 7, 15)));
        assert!(!occurs_on(&event, date(2025, 2, 14)));
        assert!(!occurs_on(&event, date(2025, 2, 16)));
    }

    #[test]
    fn monthly_interval_divides_month_difference() {
        let event = recurring(
            "quarterly",
            date(2025, 1, 15),
            RecurrenceKind::Monthly,
            3,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 4, 15)));
        assert!(occurs_on(&event, date(2026, 1, 15)), "crosses the year");
        assert!(!occurs_on(&event, date(2025, 2, 15)));
        assert!(!occurs_on(&event, date(2025, 5, 15)));
    }

    #[test]
    fn monthly_31st_anchor_lands_on_last_day_of_short_months() {
        let event = recurring(
            "month-end",
            date(2025, 1, 31),
            RecurrenceKind::Monthly,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 2, 28)), "last day of February");
        assert!(occurs_on(&event, date(2025, 3, 31)));
        assert!(occurs_on(&event, date(2025, 4, 30)), "last day of April");
        assert!(!occurs_on(&event, date(2025, 4, 29)));
        assert!(occurs_on(&event, date(2028, 2, 29)), "leap-year February");
    }

    #[test]
    fn yearly_anniversary_matches_month_and_day() {
        let event = recurring(
            "founding",
            date(2020, 9, 12),
            RecurrenceKind::Yearly,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 9, 12)));
        assert!(!occurs_on(&event, date(2025, 9, 13)));
        assert!(!occurs_on(&event, date(2025, 10, 12)));
    }

    #[test]
    fn yearly_interval_divides_year_difference() {
        let event = recurring(
            "jubilee",
            date(2020, 9, 12),
            RecurrenceKind::Yearly,
            5,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 9, 12)));
        assert!(!occurs_on(&event, date(2024, 9, 12)));
        assert!(occurs_on(&event, date(2030, 9, 12)));
    }

    #[test]
    fn leap_day_anniversary_falls_back_to_feb_28() {
        let event = recurring(
            "dedication",
            date(2024, 2, 29),
            RecurrenceKind::Yearly,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 2, 28)), "common year fallback");
        assert!(!occurs_on(&event, date(2025, 3, 1)));
        assert!(occurs_on(&event, date(2028, 2, 29)), "next leap year");
        assert!(
            !occurs_on(&event, date(2028, 2, 28)),
            "leap years use the real anniversary"
        );
    }

    #[test]
    fn end_date_is_inclusive() {
        let event = recurring(
            "lent-devotional",
            date(2025, 6, 1),
            RecurrenceKind::Daily,
            1,
            &[],
            RecurrenceEnd::Until(date(2025, 6, 30)),
        );
        assert!(occurs_on(&event, date(2025, 6, 30)));
        assert!(!occurs_on(&event, date(2025, 7, 1)));
    }

    #[test]
    fn custom_is_weekday_membership() {
        let anchor = date(2025, 3, 18); // a Tuesday
        let event = recurring(
            "prayer",
            anchor,
            RecurrenceKind::Custom,
            1,
            &[WeekDay::Tue, WeekDay::Thu],
            RecurrenceEnd::Always,
        );
        assert!(occurs_on(&event, date(2025, 3, 18)));
        assert!(occurs_on(&event, date(2025, 3, 20)));
        assert!(!occurs_on(&event, date(2025, 3, 19)));
        assert!(occurs_on(&event, date(2025, 3, 25)));
    }

    #[test]
    fn custom_with_no_weekdays_never_occurs() {
        // Malformed config that slipped past validation: fail closed
        let event = recurring(
            "broken",
            date(2025, 3, 18),
            RecurrenceKind::Custom,
            1,
            &[],
            RecurrenceEnd::Always,
        );
        assert!(!occurs_on(&event, date(2025, 3, 18)));
        assert!(!occurs_on(&event, date(2025, 3, 25)));
    }

    #[test]
    fn events_for_date_stamps_occurrence_copies() {
        let anchor = date(2025, 3, 16);
        let events = vec![recurring(
            "service",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[WeekDay::Sun],
            RecurrenceEnd::Always,
        )];

        let occurrences = events_for_date(&events, date(2025, 3, 23));
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].date, date(2025, 3, 23));
        assert_eq!(occurrences[0].original_date, Some(anchor));
    }

    #[test]
    fn events_for_date_passes_one_offs_through_unchanged() {
        let events = vec![make_event("egg-hunt", date(2025, 4, 19))];
        let occurrences = events_for_date(&events, date(2025, 4, 19));
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].original_date, None);
        assert_eq!(occurrences[0].date, date(2025, 4, 19));
    }

    #[test]
    fn custom_time_overrides_apply_per_weekday() {
        let anchor = date(2025, 3, 18); // a Tuesday
        let mut event = recurring(
            "prayer",
            anchor,
            RecurrenceKind::Custom,
            1,
            &[WeekDay::Tue, WeekDay::Thu],
            RecurrenceEnd::Always,
        );
        event.recurrence.as_mut().unwrap().times = vec![TimeOverride {
            day: WeekDay::Thu,
            start: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            end: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
        }];
        let events = vec![event];

        // Thursday picks up the override
        let thursday = events_for_date(&events, date(2025, 3, 20));
        assert_eq!(
            thursday[0].start_time,
            NaiveTime::from_hms_opt(6, 30, 0).unwrap()
        );
        assert_eq!(
            thursday[0].end_time,
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );

        // Tuesday keeps the anchor times
        let tuesday = events_for_date(&events, date(2025, 3, 25));
        assert_eq!(
            tuesday[0].start_time,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn month_of_weekly_sundays_expands_from_the_anchor() {
        let anchor = date(2025, 3, 16); // the third Sunday of March 2025
        let events = vec![recurring(
            "service",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[WeekDay::Sun],
            RecurrenceEnd::Always,
        )];

        let occurrences = events_for_month(&events, 2025, 3);
        let dates: Vec<NaiveDate> = occurrences.iter().map(|e| e.date).collect();
        // Sundays before the series start are not occurrences
        assert_eq!(
            dates,
            vec![date(2025, 3, 16), date(2025, 3, 23), date(2025, 3, 30)]
        );
        for occurrence in &occurrences {
            assert_eq!(occurrence.original_date, Some(anchor));
        }
    }

    #[test]
    fn five_sunday_month_yields_five_distinct_occurrences() {
        // March 2025 has five Sundays; anchor on the first of them
        let anchor = date(2025, 3, 2);
        let events = vec![recurring(
            "service",
            anchor,
            RecurrenceKind::Weekly,
            1,
            &[WeekDay::Sun],
            RecurrenceEnd::Always,
        )];

        let occurrences = events_for_month(&events, 2025, 3);
        assert_eq!(occurrences.len(), 5);

        let dates: HashSet<NaiveDate> = occurrences.iter().map(|e| e.date).collect();
        assert_eq!(dates.len(), 5, "each occurrence has a distinct date");
        assert_eq!(
            dates,
            HashSet::from([
                date(2025, 3, 2),
                date(2025, 3, 9),
                date(2025, 3, 16),
                date(2025, 3, 23),
                date(2025, 3, 30),
            ])
        );
        for occurrence in &occurrences {
            assert_eq!(occurrence.original_date, Some(anchor));
        }
    }

    #[test]
    fn one_offs_appear_once_per_month() {
        let events = vec![make_event("egg-hunt", date(2025, 4, 19))];
        let occurrences = events_for_month(&events, 2025, 4);
        assert_eq!(occurrences.len(), 1);

        let empty_month = events_for_month(&events, 2025, 5);
        assert!(empty_month.is_empty());
    }

    #[test]
    fn february_iteration_respects_leap_years() {
        let events = vec![recurring(
            "morning-prayer",
            date(2024, 2, 1),
            RecurrenceKind::Daily,
            1,
            &[],
            RecurrenceEnd::Always,
        )];
        assert_eq!(events_for_month(&events, 2024, 2).len(), 29);
        assert_eq!(events_for_month(&events, 2025, 2).len(), 28);
    }
}
