//! Observable events
//!
//! Every log line carries an `event` field taken from this enum, so log
//! consumers can match on stable names instead of message text.

use std::fmt;

/// Observable events in the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Listener bound, ready to serve
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Configuration
    /// Configuration resolved from env and flags
    ConfigLoaded,

    // Database
    /// Database client created
    DatabaseReady,
    /// Database settings incomplete
    DatabaseNotConfigured,
    /// Database client could not be created
    DatabaseUnavailable,
    /// In-memory store selected
    MemoryStoreSelected,

    // Requests
    /// Payload rejected by schema validation
    ValidationRejected,
    /// Record inserted
    RecordCreated,
    /// Records listed
    RecordsListed,
    /// Store call failed
    StorageFailed,
    /// Diagnostic probe ran
    DiagnosticProbe,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::DatabaseReady => "DATABASE_READY",
            Event::DatabaseNotConfigured => "DATABASE_NOT_CONFIGURED",
            Event::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Event::MemoryStoreSelected => "MEMORY_STORE_SELECTED",

            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordsListed => "RECORDS_LISTED",
            Event::StorageFailed => "STORAGE_FAILED",
            Event::DiagnosticProbe => "DIAGNOSTIC_PROBE",
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
        let events = [
            Event::BootStart,
            Event::Serving,
            Event::ConfigLoaded,
            Event::DatabaseReady,
            Event::RecordCreated,
            Event::StorageFailed,
        ];
        for event in events {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{}", name);
        }
    }

    #[test]
    fn test_names_follow_variants() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_START");
        assert_eq!(Event::ShutdownStart.as_str(), "SHUTDOWN_START");
        assert_eq!(Event::MemoryStoreSelected.as_str(), "MEMORY_STORE_SELECTED");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Event::RecordCreated.to_string(), "RECORD_CREATED");
    }
}
