//! Compiles a [`ClauseSet`] into a parameterized `WHERE` fragment.
//!
//! Spacing in the emitted text is exact and stable: every keyword, key,
//! operator and placeholder run is followed by a single space, except the
//! closing parenthesis of a multi-key clause.

use crate::error::PredicateError;
use crate::predicate::clause::{Clause, ClauseSet};

const WHERE_PREFIX: &str = "WHERE ";

/// Compiled `WHERE` text and the values bound to its placeholders, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereFragment {
    /// SQL text, empty when there is nothing to filter on.
    pub sql: String,
    /// One entry per `?` placeholder in `sql`, in emission order.
    pub values: Vec<String>,
}

impl WhereFragment {
    /// True when no filter was produced.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Compile `clause_set` into SQL text plus positional parameters.
///
/// An empty clause set yields an empty fragment. Validation failures abort
/// compilation without returning any partial output.
pub fn compile(clause_set: &ClauseSet) -> Result<WhereFragment, PredicateError> {
    if clause_set.groups.is_empty() {
        return Ok(WhereFragment::default());
    }

    let mut sql = String::from(WHERE_PREFIX);
    let mut values = Vec::new();

    for (group_idx, group) in clause_set.groups.iter().enumerate() {
        if group_idx > 0 {
            sql.push_str(clause_set.relativity.as_sql());
            sql.push(' ');
        }

        let parenthesized = group.clauses.len() > 1;
        if parenthesized {
            sql.push_str("( ");
        }

        for (clause_idx, clause) in group.clauses.iter().enumerate() {
            validate_clause(clause, group_idx, clause_idx)?;

            if clause_idx > 0 && sql.len() > WHERE_PREFIX.len() {
                sql.push_str(clause.relativity.as_sql());
                sql.push(' ');
            }

            emit_clause(clause, &mut sql, &mut values);
        }

        if parenthesized {
            sql.push_str(") ");
        }
    }

    Ok(WhereFragment { sql, values })
}

fn validate_clause(clause: &Clause, grouping: usize, index: usize) -> Result<(), PredicateError> {
    if clause.keys.is_empty() || (clause.values.is_empty() && !clause.is_nullity_test()) {
        return Err(PredicateError::IncompletePredicate {
            grouping,
            clause: index,
        });
    }
    if clause.values.len() > 1 && !clause.is_in_operator() {
        return Err(PredicateError::TooManyValues {
            grouping,
            clause: index,
        });
    }
    Ok(())
}

/// Emit one clause. Multi-key clauses repeat the full value list per key.
fn emit_clause(clause: &Clause, sql: &mut String, values: &mut Vec<String>) {
    let operator = clause.effective_operator();
    let multi_key = clause.keys.len() > 1;

    if multi_key {
        sql.push_str("( ");
    }

    for (key_idx, key) in clause.keys.iter().enumerate() {
        if key_idx > 0 {
            sql.push_str("OR ");
        }

        sql.push_str(key);
        sql.push(' ');
        sql.push_str(operator);
        sql.push(' ');

        match clause.values.as_slice() {
            [] => {}
            [value] => {
                sql.push_str("? ");
                values.push(value.clone());
            }
            many => {
                sql.push('(');
                sql.push_str(&vec!["?"; many.len()].join(","));
                sql.push_str(") ");
                values.extend(many.iter().cloned());
            }
        }
    }

    if multi_key {
        sql.push(')');
    }
}

impl ClauseSet {
    /// Compile this clause set; see [`compile`].
    pub fn to_sql(&self) -> Result<WhereFragment, PredicateError> {
        compile(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::clause::{Grouping, Relativity};

    fn single(clause: Clause) -> ClauseSet {
        ClauseSet::new(vec![Grouping::from(clause)])
    }

    #[test]
    fn empty_clause_set_compiles_to_nothing() {
        let fragment = compile(&ClauseSet::default()).unwrap();
        assert_eq!(fragment, WhereFragment::default());
        assert!(fragment.is_empty());
    }

    #[test]
    fn basic_equality() {
        let fragment = compile(&single(Clause::new("type", "=", "test"))).unwrap();
        assert_eq!(fragment.sql, "WHERE type = ? ");
        assert_eq!(fragment.values, vec!["test"]);
    }

    #[test]
    fn unset_operator_defaults_to_equals() {
        let clause = Clause {
            keys: vec!["type".to_string()],
            values: vec!["test".to_string()],
            ..Clause::default()
        };
        let fragment = compile(&single(clause)).unwrap();
        assert_eq!(fragment.sql, "WHERE type = ? ");
    }

    #[test]
    fn multi_key_clause_duplicates_values_per_key() {
        let clause = Clause {
            keys: vec!["a".to_string(), "b".to_string()],
            operator: "=".to_string(),
            values: vec!["x".to_string()],
            ..Clause::default()
        };
        let fragment = compile(&single(clause)).unwrap();
        assert_eq!(fragment.sql, "WHERE ( a = ? OR b = ? )");
        assert_eq!(fragment.values, vec!["x", "x"]);
    }

    #[test]
    fn multi_value_in_expands_placeholders() {
        let clause = Clause {
            keys: vec!["type".to_string()],
            operator: "IN".to_string(),
            values: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..Clause::default()
        };
        let fragment = compile(&single(clause)).unwrap();
        assert_eq!(fragment.sql, "WHERE type IN (?,?,?) ");
        assert_eq!(fragment.values, vec!["a", "b", "c"]);
    }

    #[test]
    fn in_operator_is_matched_case_insensitively() {
        let clause = Clause {
            keys: vec!["type".to_string()],
            operator: "in".to_string(),
            values: vec!["a".to_string(), "b".to_string()],
            ..Clause::default()
        };
        let fragment = compile(&single(clause)).unwrap();
        assert_eq!(fragment.sql, "WHERE type in (?,?) ");
    }

    #[test]
    fn multi_key_multi_value_repeats_the_whole_list() {
        let clause = Clause {
            keys: vec!["a".to_string(), "b".to_string()],
            operator: "IN".to_string(),
            values: vec!["1".to_string(), "2".to_string()],
            ..Clause::default()
        };
        let fragment = compile(&single(clause)).unwrap();
        assert_eq!(fragment.sql, "WHERE ( a IN (?,?) OR b IN (?,?) )");
        assert_eq!(fragment.values, vec!["1", "2", "1", "2"]);
    }

    #[test]
    fn nullity_test_binds_nothing() {
        let fragment = compile(&single(Clause::nullity("hostname", "IS NOT NULL"))).unwrap();
        assert_eq!(fragment.sql, "WHERE hostname IS NOT NULL ");
        assert!(fragment.values.is_empty());
    }

    #[test]
    fn missing_keys_is_incomplete() {
        let clause = Clause {
            operator: "IS NULL".to_string(),
            ..Clause::default()
        };
        assert_eq!(
            compile(&single(clause)),
            Err(PredicateError::IncompletePredicate {
                grouping: 0,
                clause: 0
            })
        );
    }

    #[test]
    fn missing_values_without_nullity_operator_is_incomplete() {
        let clause = Clause::nullity("type", "=");
        assert!(matches!(
            compile(&single(clause)),
            Err(PredicateError::IncompletePredicate { .. })
        ));

        let lowercase = Clause::nullity("type", "is null");
        assert!(matches!(
            compile(&single(lowercase)),
            Err(PredicateError::IncompletePredicate { .. })
        ));
    }

    #[test]
    fn several_values_without_in_is_rejected() {
        let mut clause = Clause::new("type", "=", "a");
        clause.values.push("b".to_string());
        let set = ClauseSet::new(vec![
            Grouping::from(Clause::new("ip", "=", "10.0.0.1")),
            Grouping::new(vec![Clause::new("hostname", "=", "h"), clause]),
        ]);
        assert_eq!(
            compile(&set),
            Err(PredicateError::TooManyValues {
                grouping: 1,
                clause: 1
            })
        );
    }

    #[test]
    fn several_values_with_unset_operator_is_rejected() {
        let clause = Clause {
            keys: vec!["type".to_string()],
            values: vec!["a".to_string(), "b".to_string()],
            ..Clause::default()
        };
        assert!(matches!(
            compile(&single(clause)),
            Err(PredicateError::TooManyValues { .. })
        ));
    }

    #[test]
    fn clause_relativity_joins_siblings_inside_parentheses() {
        let set = ClauseSet::new(vec![Grouping::new(vec![
            Clause::new("type", "=", "a"),
            Clause::new("ip", "LIKE", "10.%").with_relativity(Relativity::Or),
            Clause::new("hostname", "!=", "h"),
        ])]);
        let fragment = compile(&set).unwrap();
        assert_eq!(
            fragment.sql,
            "WHERE ( type = ? OR ip LIKE ? AND hostname != ? ) "
        );
        assert_eq!(fragment.values, vec!["a", "10.%", "h"]);
    }

    #[test]
    fn first_clause_relativity_is_never_emitted() {
        let set = single(Clause::new("type", "=", "a").with_relativity(Relativity::Or));
        assert_eq!(compile(&set).unwrap().sql, "WHERE type = ? ");
    }

    #[test]
    fn groupings_are_joined_by_the_set_relativity() {
        let set = ClauseSet {
            relativity: Relativity::Or,
            groups: vec![
                Grouping::from(Clause::new("type", "=", "a")),
                Grouping::from(Clause::new("type", "=", "b")),
            ],
        };
        assert_eq!(compile(&set).unwrap().sql, "WHERE type = ? OR type = ? ");
    }

    #[test]
    fn empty_groupings_compile_without_error() {
        let set = ClauseSet::new(vec![
            Grouping::default(),
            Grouping::from(Clause::new("type", "=", "a")),
        ]);
        assert_eq!(compile(&set).unwrap().sql, "WHERE AND type = ? ");
    }

    #[test]
    fn compiling_does_not_modify_the_input() {
        let set = single(Clause {
            keys: vec!["type".to_string()],
            values: vec!["test".to_string()],
            ..Clause::default()
        });
        let before = set.clone();
        let first = set.to_sql().unwrap();
        let second = set.to_sql().unwrap();
        assert_eq!(first, second);
        assert_eq!(set, before);
    }
}
