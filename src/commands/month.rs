use std::collections::HashSet;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use parish_core::event::WeekDay;
use parish_core::grid::month_grid;
use parish_core::recurrence::events_for_month;
use parish_core::store::{EventStore, InMemoryEventStore};

use crate::config::GlobalConfig;
use crate::render::Render;

pub fn run(year: i32, month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12, got {month}");
    }

    let config = GlobalConfig::load()?;
    let store = InMemoryEventStore::load(&config.events_path())?;
    let events = store.events()?;

    let mut occurrences = events_for_month(&events, year, month);
    occurrences.sort_by_key(|e| (e.date, e.start_time));

    // Days with at least one occurrence get a marker in the grid
    let busy: HashSet<u32> = occurrences.iter().map(|e| e.date.day()).collect();

    let heading = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    println!("{}", heading.bold());

    let header: Vec<String> = WeekDay::ALL
        .iter()
        .map(|d| format!("{:>3}", &d.short_name()[..2]))
        .collect();
    println!("{}", header.join(" ").dimmed());

    let mut line = String::new();
    for (i, cell) in month_grid(year, month).iter().enumerate() {
        let text = match cell {
            Some(day) if busy.contains(day) => format!("{:>3}{}", day, "*".yellow()),
            Some(day) => format!("{day:>3} "),
            None => "    ".to_string(),
        };
        line.push_str(&text);
        if (i + 1) % 7 == 0 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.trim().is_empty() {
        println!("{}", line.trim_end());
    }

    if occurrences.is_empty() {
        println!();
        println!("{}", "No events this month".dimmed());
        return Ok(());
    }

    // Group occurrences by day, in day-of-month order
    let mut current: Option<NaiveDate> = None;
    for event in &occurrences {
        if current != Some(event.date) {
            println!();
            println!("{}", event.date.format("%a %b %-d").to_string().bold());
            current = Some(event.date);
        }
        println!("  {}", event.render());
    }

    Ok(())
}
