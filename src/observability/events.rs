//! Observable events
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Comparator configuration loaded
    ConfigLoaded,
    /// Sort finished
    SortComplete,
    /// Sort aborted by a comparator error
    SortAborted,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SortComplete => "SORT_COMPLETE",
            Event::SortAborted => "SORT_ABORTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded => Severity::Info,
            Event::SortComplete => Severity::Trace,
            Event::SortAborted => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        for event in [Event::ConfigLoaded, Event::SortComplete, Event::SortAborted] {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_abort_is_error() {
        assert_eq!(Event::SortAborted.severity(), Severity::Error);
        assert!(Event::SortComplete.severity() < Event::ConfigLoaded.severity());
    }
}
