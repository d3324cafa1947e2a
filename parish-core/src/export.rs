//! Export helpers for single event occurrences.
//!
//! Both helpers take one resolved occurrence. Recurring series are expanded
//! before export, so the output never carries an RRULE; exporting a
//! recurring event exports that occurrence, not the pattern.

use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use url::form_urlencoded;

use crate::event::Event;

/// Compact UTC basic format shared by both export targets (YYYYMMDDTHHMMSSZ).
/// Event times are floating local datetimes, stamped as-is.
fn format_stamp(datetime: NaiveDateTime) -> String {
    datetime.format("%Y%m%dT%H%M%SZ").to_string()
}

fn start_end(event: &Event) -> (NaiveDateTime, NaiveDateTime) {
    (
        event.date.and_time(event.start_time),
        event.date.and_time(event.end_time),
    )
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Build a Google Calendar "render" deep link for one occurrence.
///
/// The `dates=` values use the compact UTC basic format, but carry the
/// event's floating local times verbatim; the dataset has no timezone, so
/// the wall-clock time is stamped as if it were UTC.
pub fn google_calendar_url(event: &Event) -> String {
    let (start, end) = start_end(event);

    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        encode(&event.title),
        format_stamp(start),
        format_stamp(end),
        encode(&event.description),
        encode(&event.location),
    )
}

/// Generate minimal .ics content for one occurrence.
///
/// `now` supplies DTSTAMP so output stays deterministic under test; the
/// caller reads the clock, never this function.
pub fn event_to_ics(event: &Event, now: DateTime<Utc>) -> String {
    let (start, end) = start_end(event);

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@parish", event.id));
    ics_event.summary(&event.title);

    // DTSTAMP - required by RFC 5545
    ics_event.add_property("DTSTAMP", now.format("%Y%m%dT%H%M%SZ").to_string());

    ics_event.add_property("DTSTART", start.format("%Y%m%dT%H%M%S").to_string());
    ics_event.add_property("DTEND", end.format("%Y%m%dT%H%M%S").to_string());

    if !event.description.is_empty() {
        ics_event.description(&event.description);
    }
    if !event.location.is_empty() {
        ics_event.location(&event.location);
    }

    let mut cal = Calendar::new();
    cal.push(ics_event.done());
    let cal = cal.done();

    strip_ics_bloat(&cal.to_string())
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with PARISH (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:PARISH\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
