//! Terminal rendering for parish types.
//!
//! Extension traits that add colored output to parish-core types using
//! owo_colors, keeping display concerns out of the core crate.

use owo_colors::OwoColorize;
use parish_core::annotations::{Annotation, AnnotationKind};
use parish_core::event::{Event, RecurrenceEnd, RecurrenceKind, RecurringConfig};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        let title = if self.featured {
            self.title.bold().to_string()
        } else {
            self.title.clone()
        };
        let tag = format!("[{}]", self.department);

        format!("{} {} {}", time.dimmed(), title, tag.dimmed())
    }
}

impl Render for RecurringConfig {
    fn render(&self) -> String {
        let unit = match self.kind {
            RecurrenceKind::Daily => "day",
            RecurrenceKind::Weekly | RecurrenceKind::Custom => "week",
            RecurrenceKind::Monthly => "month",
            RecurrenceKind::Yearly => "year",
        };

        let mut out = if self.interval > 1 {
            format!("every {} {}s", self.interval, unit)
        } else {
            format!("every {unit}")
        };

        if !self.week_days.is_empty() {
            let days: Vec<&str> = self.week_days.iter().map(|d| d.short_name()).collect();
            out.push_str(&format!(" on {}", days.join(", ")));
        }

        if let RecurrenceEnd::Until(date) = self.end {
            out.push_str(&format!(" until {date}"));
        }

        out
    }
}

impl Render for Annotation {
    fn render(&self) -> String {
        match &self.kind {
            AnnotationKind::Highlight { verse, color } => format!(
                "{} {} {}",
                self.id.dimmed(),
                verse.to_string().bold(),
                format!("({color} highlight)").yellow()
            ),
            AnnotationKind::Note { verse, text } => {
                format!("{} {}: {}", self.id.dimmed(), verse.to_string().bold(), text)
            }
            AnnotationKind::Label { name, verses, .. } => format!(
                "{} {} ({} {})",
                self.id.dimmed(),
                name.bold(),
                verses.len(),
                if verses.len() == 1 { "verse" } else { "verses" }
            ),
        }
    }
}
