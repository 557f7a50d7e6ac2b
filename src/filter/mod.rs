//! Filter predicate engine
//!
//! Turns the `-filters` string into an ordered predicate list and evaluates
//! each predicate against an execution hash.
//!
//! # Semantics
//!
//! - The implicit `status=<value>` predicate is always first
//! - User predicates follow in input order
//! - Predicates combine with AND
//! - Exact string equality, no coercion
//! - Missing keys or fields never match and are never errors

mod ast;
mod errors;
mod evaluator;
mod parser;

pub use ast::{Predicate, PredicateKind, CONTAINS_STAGE_KEY, STATUS_KEY};
pub use errors::{EvaluationError, FilterError, FilterResult};
pub use evaluator::{is_stage_type_field, PredicateEvaluator};
pub use parser::parse_filters;
