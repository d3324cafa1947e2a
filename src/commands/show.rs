use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::store::{EventStore, InMemoryEventStore};

use crate::config::GlobalConfig;
use crate::render::Render;

pub fn run(id: &str) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = InMemoryEventStore::load(&config.events_path())?;
    let event = store.event(id)?;

    println!("{}", event.title.bold());
    println!(
        "  {} {}-{}",
        event.date.format("%a %b %-d %Y"),
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M")
    );

    if !event.location.is_empty() {
        println!("  {}", event.location);
    }
    if !event.department.is_empty() {
        println!("  {}", format!("[{}]", event.department).dimmed());
    }
    if let Some(config) = &event.recurrence {
        println!("  Repeats {}", config.render());
    }
    if !event.description.is_empty() {
        println!();
        println!("  {}", event.description);
    }

    println!();
    println!(
        "  RSVP: {} yes / {} maybe / {} no",
        event.rsvp.yes.to_string().green(),
        event.rsvp.maybe.to_string().yellow(),
        event.rsvp.no.to_string().red()
    );

    if !event.attendees.is_empty() {
        println!();
        println!("  Attending:");
        for attendee in &event.attendees {
            println!("    {} {}", attendee.name, format!("({})", attendee.id).dimmed());
        }
    }

    Ok(())
}
