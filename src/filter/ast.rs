//! Predicate structures for execution filtering
//!
//! A predicate is a `Key=Value` pair. Its evaluation strategy is resolved
//! once, when the predicate is built, from the key name.

use std::fmt;

/// Key that selects the stage-containment strategy
pub const CONTAINS_STAGE_KEY: &str = "ContainsStage";

/// Key of the implicit status predicate
pub const STATUS_KEY: &str = "status";

/// Evaluation strategy for a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Hash field named by the key must equal the value
    Equality,
    /// Some `stage.<id>.type` field must equal the value
    StageContains,
}

impl PredicateKind {
    /// Resolves the strategy for a predicate key
    pub fn for_key(key: &str) -> Self {
        match key {
            CONTAINS_STAGE_KEY => PredicateKind::StageContains,
            _ => PredicateKind::Equality,
        }
    }

    /// Returns the strategy name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateKind::Equality => "equality",
            PredicateKind::StageContains => "stage_contains",
        }
    }
}

/// A single `Key=Value` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    key: String,
    value: String,
    kind: PredicateKind,
}

impl Predicate {
    /// Create a predicate, resolving its kind from the key
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let kind = PredicateKind::for_key(&key);
        Self {
            key,
            value: value.into(),
            kind,
        }
    }

    /// Create the implicit status predicate
    pub fn status(value: impl Into<String>) -> Self {
        Self::new(STATUS_KEY, value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
