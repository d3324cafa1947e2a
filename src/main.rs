mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::export::ExportFormat;
use commands::notes::NotesCommand;

#[derive(Parser)]
#[command(name = "parish")]
#[command(about = "Browse parish events, expand recurring services, and export occurrences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config and a sample events dataset
    Init,
    /// Render a month view with occurrence markers
    Month {
        year: i32,
        /// 1-based month
        month: u32,
    },
    /// List occurrences on a single date (YYYY-MM-DD)
    Day { date: NaiveDate },
    /// Show one event's details, RSVP tallies and attendees
    Show { id: String },
    /// Export one occurrence as an .ics file or a Google Calendar link
    Export {
        id: String,

        /// The occurrence date to export (YYYY-MM-DD); defaults to the anchor date
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, value_enum, default_value = "ics")]
        format: ExportFormat,

        /// Write .ics output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage Bible annotations
    #[command(subcommand)]
    Notes(NotesCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Month { year, month } => commands::month::run(year, month),
        Commands::Day { date } => commands::day::run(date),
        Commands::Show { id } => commands::show::run(&id),
        Commands::Export {
            id,
            date,
            format,
            output,
        } => commands::export::run(&id, date, format, output.as_deref()),
        Commands::Notes(command) => commands::notes::run(command),
    }
}
