//! Observability subsystem for aerolookup
//!
//! - Structured logging (JSON lines)
//! - Monotonic counters
//! - Scoped tracing of dataset loads
//!
//! Observability is read-only: nothing here influences search results.
//!
//! ```ignore
//! use aerolookup::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::SearchExecuted, &[("dataset", "airports")]);
//!
//! let scope = ObservationScope::new("DATASET_LOAD");
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a typed event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a typed event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
