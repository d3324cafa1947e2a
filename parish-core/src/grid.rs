//! Month-view layout helpers.
//!
//! Pure functions over (year, month) pairs. Months are 1-based. None of
//! these validate their inputs; callers normalize out-of-range months
//! before calling.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month (28/29/30/31), or 0 for an
/// unrepresentable (year, month) pair.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 0,
    }
}

/// Day cells for a Sunday-first month view.
///
/// `None` placeholders pad the leading weekday offset of day 1, then
/// `Some(1)..=Some(last)` follow, so a fixed 7-column grid renders directly.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<u32>> = vec![None; offset];
    cells.extend((1..=days_in_month(year, month)).map(Some));
    cells
}

/// Format a calendar date the way the dataset stores them (YYYY-MM-DD).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
