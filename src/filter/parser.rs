//! Parser for the comma-delimited `Key=Value` filter string

use super::ast::Predicate;
use super::errors::{FilterError, FilterResult};

/// Parses a filter string into an ordered predicate list.
///
/// The status predicate is always first, followed by the user predicates
/// in input order. Each token must split on `=` into exactly two parts,
/// either of which may be empty. The first bad token fails the whole parse.
pub fn parse_filters(raw: &str, status: &str) -> FilterResult<Vec<Predicate>> {
    let mut predicates = vec![Predicate::status(status)];

    if raw.is_empty() {
        return Ok(predicates);
    }

    for token in raw.split(',') {
        let parts: Vec<&str> = token.split('=').collect();
        match parts.as_slice() {
            [key, value] => predicates.push(Predicate::new(*key, *value)),
            _ => {
                return Err(FilterError::Malformed {
                    token: token.to_string(),
                })
            }
        }
    }

    Ok(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PredicateKind;

    fn pairs(predicates: &[Predicate]) -> Vec<(&str, &str)> {
        predicates.iter().map(|p| (p.key(), p.value())).collect()
    }

    #[test]
    fn test_status_only_when_empty() {
        let predicates = parse_filters("", "RUNNING").unwrap();
        assert_eq!(pairs(&predicates), vec![("status", "RUNNING")]);
    }

    #[test]
    fn test_order_preserved() {
        let predicates = parse_filters("A=1,B=2", "RUNNING").unwrap();
        assert_eq!(
            pairs(&predicates),
            vec![("status", "RUNNING"), ("A", "1"), ("B", "2")]
        );
    }

    #[test]
    fn test_missing_equals_fails_on_token() {
        let err = parse_filters("A=1,B", "RUNNING").unwrap_err();
        assert_eq!(err.token(), "B");
    }

    #[test]
    fn test_extra_equals_fails() {
        let err = parse_filters("A=1=2", "RUNNING").unwrap_err();
        assert_eq!(err.token(), "A=1=2");
    }

    #[test]
    fn test_fails_fast_on_first_bad_token() {
        let err = parse_filters("X,A=1,Y", "RUNNING").unwrap_err();
        assert_eq!(err.token(), "X");
    }

    #[test]
    fn test_empty_sides_allowed() {
        let predicates = parse_filters("=,owner=", "RUNNING").unwrap();
        assert_eq!(
            pairs(&predicates),
            vec![("status", "RUNNING"), ("", ""), ("owner", "")]
        );
    }

    #[test]
    fn test_trailing_comma_is_malformed() {
        let err = parse_filters("A=1,", "RUNNING").unwrap_err();
        assert_eq!(err.token(), "");
    }

    #[test]
    fn test_status_override_kept_alongside_implicit() {
        let predicates = parse_filters("status=TERMINAL", "RUNNING").unwrap();
        assert_eq!(
            pairs(&predicates),
            vec![("status", "RUNNING"), ("status", "TERMINAL")]
        );
    }

    #[test]
    fn test_contains_stage_resolved_at_parse() {
        let predicates = parse_filters("ContainsStage=deploy", "RUNNING").unwrap();
        assert_eq!(predicates[0].kind(), PredicateKind::Equality);
        assert_eq!(predicates[1].kind(), PredicateKind::StageContains);
    }
}
