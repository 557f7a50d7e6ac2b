//! Predicate evaluation against stored execution hashes
//!
//! Two strategies, picked by `PredicateKind`:
//! - Equality: the hash field named by the key equals the value
//! - StageContains: any `stage.<id>.type` field equals the value
//!
//! Absent keys and fields evaluate to false, never to an error.

use tracing::debug;

use super::ast::{Predicate, PredicateKind};
use super::errors::EvaluationError;
use crate::observability::Event;
use crate::store::ExecutionStore;

const STAGE_FIELD_PREFIX: &str = "stage.";
const STAGE_FIELD_SUFFIX: &str = ".type";

/// Evaluates predicates against execution hashes in a store
pub struct PredicateEvaluator;

impl PredicateEvaluator {
    /// Checks a record against every predicate, in order (AND semantics).
    ///
    /// Stops at the first predicate that is false or fails to evaluate.
    pub fn matches<S: ExecutionStore + ?Sized>(
        store: &mut S,
        key: &str,
        predicates: &[Predicate],
    ) -> Result<bool, EvaluationError> {
        for predicate in predicates {
            let matched = Self::evaluate(store, key, predicate)?;
            debug!(
                event = Event::PredicateEvaluated.as_str(),
                key,
                predicate = %predicate,
                kind = predicate.kind().as_str(),
                matched,
                "evaluated filter"
            );
            if !matched {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluates a single predicate against a record
    pub fn evaluate<S: ExecutionStore + ?Sized>(
        store: &mut S,
        key: &str,
        predicate: &Predicate,
    ) -> Result<bool, EvaluationError> {
        match predicate.kind() {
            PredicateKind::Equality => Self::field_equals(store, key, predicate),
            PredicateKind::StageContains => Self::contains_stage(store, key, predicate),
        }
    }

    fn field_equals<S: ExecutionStore + ?Sized>(
        store: &mut S,
        key: &str,
        predicate: &Predicate,
    ) -> Result<bool, EvaluationError> {
        let value = store
            .hget(key, predicate.key())
            .map_err(|e| EvaluationError::field_read(key, predicate.key(), e))?;
        Ok(value.as_deref() == Some(predicate.value()))
    }

    fn contains_stage<S: ExecutionStore + ?Sized>(
        store: &mut S,
        key: &str,
        predicate: &Predicate,
    ) -> Result<bool, EvaluationError> {
        let fields = store
            .hkeys(key)
            .map_err(|e| EvaluationError::field_listing(key, e))?;

        for field in fields.iter().filter(|f| is_stage_type_field(f)) {
            let stage_type = store
                .hget(key, field)
                .map_err(|e| EvaluationError::field_read(key, field, e))?;
            // A field removed since the listing reads as absent: not a match
            if stage_type.as_deref() == Some(predicate.value()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Returns true for field names shaped like `stage.<anything>.type`
pub fn is_stage_type_field(field: &str) -> bool {
    field.starts_with(STAGE_FIELD_PREFIX) && field.ends_with(STAGE_FIELD_SUFFIX)
}
