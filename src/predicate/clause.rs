//! Value types making up a predicate tree: clauses, groupings and clause sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Boolean joiner between two sibling predicate elements.
///
/// Parses case-insensitively; the empty string parses as [`Relativity::And`].
/// Always rendered upper-case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Relativity {
    /// `AND`
    #[default]
    And,
    /// `OR`
    Or,
}

impl Relativity {
    /// SQL keyword for this joiner.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Relativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Relativity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if trimmed.eq_ignore_ascii_case("or") {
            Ok(Self::Or)
        } else {
            Err(format!("unknown relativity '{s}', expected AND or OR"))
        }
    }
}

impl TryFrom<String> for Relativity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Relativity> for String {
    fn from(value: Relativity) -> Self {
        value.as_sql().to_string()
    }
}

/// A single comparison.
///
/// Every key is compared against the same operator and values; keys are
/// OR-joined with one another. An empty `operator` means `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clause {
    /// Joiner to the previous clause in the same grouping.
    pub relativity: Relativity,
    /// Column expressions; raw SQL fragments, never bound.
    pub keys: Vec<String>,
    /// Comparison operator text, e.g. `=`, `LIKE`, `IN`, `IS NOT NULL`.
    pub operator: String,
    /// Values bound positionally to `?` placeholders.
    pub values: Vec<String>,
}

impl Clause {
    /// Single-key, single-value comparison.
    pub fn new(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            relativity: Relativity::And,
            keys: vec![key.into()],
            operator: operator.into(),
            values: vec![value.into()],
        }
    }

    /// Nullity test without bound values.
    pub fn nullity(key: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            relativity: Relativity::And,
            keys: vec![key.into()],
            operator: operator.into(),
            values: Vec::new(),
        }
    }

    /// Same clause joined to its predecessor with `relativity`.
    #[must_use]
    pub fn with_relativity(mut self, relativity: Relativity) -> Self {
        self.relativity = relativity;
        self
    }

    /// Operator used in emitted SQL: the configured one, or `=` when unset.
    pub fn effective_operator(&self) -> &str {
        if self.operator.is_empty() {
            "="
        } else {
            &self.operator
        }
    }

    /// True when the operator text marks a nullity test (`IS NULL`, `IS NOT NULL`).
    ///
    /// This is a plain substring test for `IS N`, case-sensitive.
    pub fn is_nullity_test(&self) -> bool {
        self.operator.contains("IS N")
    }

    /// True when the operator is `IN`, ignoring ASCII case.
    pub fn is_in_operator(&self) -> bool {
        self.operator.eq_ignore_ascii_case("IN")
    }
}

/// Ordered clauses, parenthesized in SQL when there is more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grouping {
    /// Clauses in emission order.
    pub clauses: Vec<Clause>,
}

impl Grouping {
    /// Grouping over the given clauses.
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }
}

impl From<Clause> for Grouping {
    fn from(clause: Clause) -> Self {
        Self {
            clauses: vec![clause],
        }
    }
}

/// Top-level predicate: groupings joined by a single relativity.
///
/// An empty clause set means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseSet {
    /// Joiner between groupings.
    pub relativity: Relativity,
    /// Groupings in emission order.
    pub groups: Vec<Grouping>,
}

impl ClauseSet {
    /// AND-joined clause set over `groups`.
    pub fn new(groups: Vec<Grouping>) -> Self {
        Self {
            relativity: Relativity::And,
            groups,
        }
    }

    /// True when there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Appends a grouping.
    pub fn push(&mut self, grouping: impl Into<Grouping>) {
        self.groups.push(grouping.into());
    }
}
