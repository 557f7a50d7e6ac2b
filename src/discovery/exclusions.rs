//! Structural key exclusion
//!
//! Enumerating `<type>:*` also returns index and aggregate keys that are not
//! execution hashes. They are dropped before any predicate is evaluated.

const STAGE_INDEX_SUFFIX: &str = ":stageIndex";

/// Decides which enumerated keys are execution records
#[derive(Debug, Clone)]
pub struct KeyExclusions {
    app_prefix: String,
    executions_prefix: String,
}

impl KeyExclusions {
    /// Build the exclusion rules for an execution type
    pub fn for_type(execution_type: &str) -> Self {
        Self {
            app_prefix: format!("{}:app:", execution_type),
            executions_prefix: format!("{}:executions", execution_type),
        }
    }

    /// Returns true for index and aggregate keys
    pub fn is_excluded(&self, key: &str) -> bool {
        key.starts_with(&self.app_prefix)
            || key.starts_with(&self.executions_prefix)
            || key.ends_with(STAGE_INDEX_SUFFIX)
    }
}

/// Enumeration pattern for an execution type
pub fn key_pattern(execution_type: &str) -> String {
    format!("{}:*", execution_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_keys_excluded() {
        let rules = KeyExclusions::for_type("orchestration");
        assert!(rules.is_excluded("orchestration:app:deck"));
        assert!(rules.is_excluded("orchestration:executions"));
        assert!(rules.is_excluded("orchestration:executionsByApp"));
        assert!(rules.is_excluded("orchestration:42:stageIndex"));
    }

    #[test]
    fn test_execution_keys_kept() {
        let rules = KeyExclusions::for_type("orchestration");
        assert!(!rules.is_excluded("orchestration:42"));
        assert!(!rules.is_excluded("orchestration:01HX-app"));
        assert!(!rules.is_excluded("orchestration:application"));
    }

    #[test]
    fn test_rules_follow_type() {
        let rules = KeyExclusions::for_type("pipeline");
        assert!(rules.is_excluded("pipeline:app:deck"));
        assert!(!rules.is_excluded("orchestration:app:deck"));
        assert!(rules.is_excluded("orchestration:1:stageIndex"));
    }

    #[test]
    fn test_key_pattern() {
        assert_eq!(key_pattern("pipeline"), "pipeline:*");
    }
}
