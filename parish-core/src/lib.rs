//! Core types and logic for the parish ecosystem.
//!
//! This crate provides everything the CLI consumes:
//! - `Event` and related types for parish activities
//! - `recurrence` module for occurrence expansion (daily/weekly/monthly/yearly/custom)
//! - `grid` module for month-view layout helpers
//! - `export` module for Google Calendar links and .ics generation
//! - `store` and `annotations` modules for the data-access ports

pub mod annotations;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod recurrence;
pub mod store;

// Re-export all event types at crate root for convenience
pub use error::{ParishError, ParishResult};
pub use event::*;
