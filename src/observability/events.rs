//! Observable events for execscan
//!
//! Every log line carries one of these names in its `event` field, so runs
//! can be grepped by stage regardless of message wording.

use std::fmt;

/// Observable events during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    /// Configuration resolved from file and flags
    ConfigLoaded,
    /// A predicate was added to the filter list
    FilterAdded,
    /// Store connection established
    StoreConnected,

    // Discovery
    /// Key enumeration started
    KeysScanStart,
    /// Key enumeration finished
    KeysListed,
    /// Per-record filtering started
    FilteringStart,
    /// A single predicate was evaluated against a record
    PredicateEvaluated,
    /// A predicate could not be evaluated; record skipped
    FilterFailed,
    /// startTime missing or unparseable; record skipped
    StartTimeInvalid,
    /// An extra field could not be read; sentinel substituted
    FieldReadFailed,
    /// Discovery pass finished
    DiscoveryComplete,
}

impl Event {
    /// Returns the event name string
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::FilterAdded => "FILTER_ADDED",
            Event::StoreConnected => "STORE_CONNECTED",
            Event::KeysScanStart => "KEYS_SCAN_START",
            Event::KeysListed => "KEYS_LISTED",
            Event::FilteringStart => "FILTERING_START",
            Event::PredicateEvaluated => "PREDICATE_EVALUATED",
            Event::FilterFailed => "FILTER_FAILED",
            Event::StartTimeInvalid => "START_TIME_INVALID",
            Event::FieldReadFailed => "FIELD_READ_FAILED",
            Event::DiscoveryComplete => "DISCOVERY_COMPLETE",
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
    fn test_event_names() {
        assert_eq!(Event::KeysListed.as_str(), "KEYS_LISTED");
        assert_eq!(Event::FilterAdded.to_string(), "FILTER_ADDED");
    }
}
