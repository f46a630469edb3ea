//! Observability subsystem
//!
//! Structured JSON logging of typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on comparison results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! The comparator never logs; only its consumers (sort, config loading) do.
//!
//! # Usage
//!
//! ```ignore
//! use docorder::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! log_event_with_fields(Event::SortComplete, &[("documents", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
