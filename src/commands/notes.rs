use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use parish_core::annotations::{AnnotationKind, AnnotationStore, JsonFileStore, VerseRef};

use crate::config::GlobalConfig;
use crate::render::Render;

#[derive(Subcommand)]
pub enum NotesCommand {
    /// List all annotations
    List,
    /// Add a note on a verse (e.g. `parish notes add John 3 16 "..."`)
    Add {
        book: String,
        chapter: u32,
        verse: u32,
        text: String,
    },
    /// Delete an annotation by id
    Remove { id: String },
}

pub fn run(command: NotesCommand) -> Result<()> {
    let config = GlobalConfig::load()?;
    let mut store = JsonFileStore::open(&config.annotations_path())?;

    match command {
        NotesCommand::List => {
            let annotations = store.list()?;
            if annotations.is_empty() {
                println!("{}", "No annotations yet".dimmed());
                return Ok(());
            }
            for annotation in &annotations {
                println!("{}", annotation.render());
            }
        }
        NotesCommand::Add {
            book,
            chapter,
            verse,
            text,
        } => {
            let id = store.add(AnnotationKind::Note {
                verse: VerseRef {
                    book,
                    chapter,
                    verse,
                },
                text,
            })?;
            println!("Added note {id}");
        }
        NotesCommand::Remove { id } => {
            store.delete(&id)?;
            println!("Removed {id}");
        }
    }

    Ok(())
}
