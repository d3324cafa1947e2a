use std::path::Path;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::ValueEnum;
use parish_core::export::{event_to_ics, google_calendar_url};
use parish_core::recurrence::events_for_date;
use parish_core::store::{EventStore, InMemoryEventStore};

use crate::config::GlobalConfig;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Minimal RFC 5545 .ics content
    Ics,
    /// Google Calendar deep link
    Gcal,
}

pub fn run(
    id: &str,
    date: Option<NaiveDate>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let store = InMemoryEventStore::load(&config.events_path())?;
    let event = store.event(id)?;

    // Resolve the concrete occurrence before exporting; the series itself
    // is never exported
    let date = date.unwrap_or(event.date);
    let occurrence = events_for_date(std::slice::from_ref(&event), date)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("'{id}' does not occur on {date}"))?;

    match format {
        ExportFormat::Gcal => {
            println!("{}", google_calendar_url(&occurrence));
        }
        ExportFormat::Ics => {
            let ics = event_to_ics(&occurrence, Utc::now());
            match output {
                Some(path) => {
                    std::fs::write(path, &ics)?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{ics}"),
            }
        }
    }

    Ok(())
}
