use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use parish_core::recurrence::events_for_date;
use parish_core::store::{EventStore, InMemoryEventStore};

use crate::config::GlobalConfig;
use crate::render::Render;

pub fn run(date: NaiveDate) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = InMemoryEventStore::load(&config.events_path())?;
    let events = store.events()?;

    let mut occurrences = events_for_date(&events, date);
    occurrences.sort_by_key(|e| e.start_time);

    println!("{}", date.format("%A, %B %-d %Y").to_string().bold());

    if occurrences.is_empty() {
        println!("{}", "No events on this date".dimmed());
        return Ok(());
    }

    for event in &occurrences {
        println!("  {}", event.render());
    }

    Ok(())
}
