//! Event types for the parish calendar.
//!
//! An `Event` is the anchor record of an activity (service, study,
//! rehearsal, ...). Recurring events carry a `RecurringConfig`; the
//! recurrence engine materializes per-date occurrence copies from it.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParishError, ParishResult};

/// A scheduled parish activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    // Temporal
    /// Calendar date of the first (anchor) occurrence
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    // Descriptive
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Ministry the event belongs to (e.g. "worship", "youth")
    #[serde(default)]
    pub department: String,
    /// Display tag color for calendar views
    #[serde(default)]
    pub color: String,
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,

    // Recurrence
    /// `Some` means the event repeats. One-off events carry no config,
    /// so a "recurring event without a config" is unrepresentable.
    pub recurrence: Option<RecurringConfig>,
    /// Anchor date of the series. Set only on materialized occurrence
    /// copies; its presence signals "generated occurrence, not the anchor".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_date: Option<NaiveDate>,

    // Attendance
    #[serde(default)]
    pub rsvp: RsvpCounts,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl Event {
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Tally one RSVP response. Application state only, never persisted.
    pub fn record_rsvp(&mut self, response: RsvpResponse) {
        match response {
            RsvpResponse::Yes => self.rsvp.yes += 1,
            RsvpResponse::Maybe => self.rsvp.maybe += 1,
            RsvpResponse::No => self.rsvp.no += 1,
        }
    }
}

/// How a recurring event repeats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringConfig {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,

    /// Step between occurrences (every N days/weeks/months/years)
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Restricts weekly/custom occurrences to these weekdays; empty = no filter
    #[serde(default)]
    pub week_days: Vec<WeekDay>,

    #[serde(default)]
    pub end: RecurrenceEnd,

    /// Per-weekday start/end overrides, used by the custom kind
    #[serde(default)]
    pub times: Vec<TimeOverride>,
}

fn default_interval() -> u32 {
    1
}

impl RecurringConfig {
    /// Check internal consistency. Run at the data-access boundary so the
    /// engine never sees a contradictory config.
    pub fn validate(&self) -> ParishResult<()> {
        if self.interval < 1 {
            return Err(ParishError::InvalidEvent(
                "recurrence interval must be at least 1".to_string(),
            ));
        }
        if self.kind == RecurrenceKind::Custom && self.week_days.is_empty() {
            return Err(ParishError::InvalidEvent(
                "custom recurrence requires at least one weekday".to_string(),
            ));
        }
        Ok(())
    }

    /// The time override for a given weekday, if one is configured.
    pub fn time_override(&self, day: WeekDay) -> Option<&TimeOverride> {
        self.times.iter().find(|t| t.day == day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

/// When a recurring series stops.
///
/// Serialized as the string "always" (unbounded) or a literal YYYY-MM-DD
/// end date. The end date is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrenceEnd {
    #[default]
    Always,
    Until(NaiveDate),
}

impl Serialize for RecurrenceEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecurrenceEnd::Always => serializer.serialize_str("always"),
            RecurrenceEnd::Until(date) => {
                serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
            }
        }
    }
}

impl<'de> Deserialize<'de> for RecurrenceEnd {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value == "always" {
            return Ok(RecurrenceEnd::Always);
        }
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map(RecurrenceEnd::Until)
            .map_err(|_| {
                serde::de::Error::custom(format!(
                    "expected \"always\" or YYYY-MM-DD, got '{value}'"
                ))
            })
    }
}

/// Per-weekday start/end override for custom patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOverride {
    pub day: WeekDay,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Weekday tag as used in recurrence configs ("sun" .. "sat").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl WeekDay {
    /// All weekdays in Sunday-first calendar order.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Sun,
        WeekDay::Mon,
        WeekDay::Tue,
        WeekDay::Wed,
        WeekDay::Thu,
        WeekDay::Fri,
        WeekDay::Sat,
    ];

    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        match date.weekday() {
            Weekday::Sun => WeekDay::Sun,
            Weekday::Mon => WeekDay::Mon,
            Weekday::Tue => WeekDay::Tue,
            Weekday::Wed => WeekDay::Wed,
            Weekday::Thu => WeekDay::Thu,
            Weekday::Fri => WeekDay::Fri,
            Weekday::Sat => WeekDay::Sat,
        }
    }

    /// Short display name ("Sun")
    pub fn short_name(&self) -> &'static str {
        match self {
            WeekDay::Sun => "Sun",
            WeekDay::Mon => "Mon",
            WeekDay::Tue => "Tue",
            WeekDay::Wed => "Wed",
            WeekDay::Thu => "Thu",
            WeekDay::Fri => "Fri",
            WeekDay::Sat => "Sat",
        }
    }

    /// Full English name ("Sunday")
    pub fn name(&self) -> &'static str {
        match self {
            WeekDay::Sun => "Sunday",
            WeekDay::Mon => "Monday",
            WeekDay::Tue => "Tuesday",
            WeekDay::Wed => "Wednesday",
            WeekDay::Thu => "Thursday",
            WeekDay::Fri => "Friday",
            WeekDay::Sat => "Saturday",
        }
    }
}

/// RSVP tallies for an event (yes/maybe/no counts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpCounts {
    #[serde(default)]
    pub yes: u32,
    #[serde(default)]
    pub maybe: u32,
    #[serde(default)]
    pub no: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Yes,
    Maybe,
    No,
}

/// Someone attending an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image reference
    pub avatar: Option<String>,
}
