use crate::predicate::clause::{Clause, Grouping, Relativity};

/// Columns matched with `LIKE` by a free-text search, in emission order.
pub const SEARCH_COLUMNS: [&str; 4] = ["hostname", "ip", "type", "committer"];

/// Build the OR grouping behind the `_search` query parameter.
///
/// The term is matched anywhere inside the `data` and `context` JSON documents
/// and as a substring of each of [`SEARCH_COLUMNS`]. The JSON probes embed the
/// term in the key expression itself, so quotes and backslashes are escaped
/// there; the `LIKE` comparisons bind it as a parameter.
pub fn search_grouping(term: &str) -> Grouping {
    let pattern = format!("%{term}%");
    let escaped = escape_sql_literal(&pattern);

    let mut clauses = Vec::with_capacity(2 + SEARCH_COLUMNS.len());
    for (idx, document) in ["data", "context"].iter().enumerate() {
        let relativity = if idx == 0 {
            Relativity::And
        } else {
            Relativity::Or
        };
        clauses.push(
            Clause::nullity(
                format!("json_search({document}, 'one', '{escaped}')"),
                "IS NOT NULL",
            )
            .with_relativity(relativity),
        );
    }
    for column in SEARCH_COLUMNS {
        clauses.push(Clause::new(column, "LIKE", pattern.clone()).with_relativity(Relativity::Or));
    }

    Grouping::new(clauses)
}

fn escape_sql_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}
