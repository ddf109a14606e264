//! Mapping from API query parameters to predicate clauses.
//!
//! A query parameter such as `flavor` can live in a different place for every
//! record type: a table column, a path inside the `context` JSON document, or
//! a path inside the `data` JSON document. [`QueryParam`] records those
//! locations and [`ApiV0Config::clause_for`] turns a parameter plus its
//! requested values into a [`Clause`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::settings::ApiV0Config;
use crate::predicate::{Clause, ClauseSet, Grouping, Relativity};

/// Where one query parameter's value is stored for one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParam {
    /// JSON path inside `context`, e.g. `.flavor`.
    pub context: String,
    /// JSON path inside `data`.
    pub data: String,
    /// Label shown in user interfaces.
    #[serde(rename = "_name")]
    pub display_name: String,
    /// Column of the records table.
    pub table: String,
}

impl QueryParam {
    /// Column expressions for every configured location: table, context, data.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if !self.table.is_empty() {
            keys.push(self.table.clone());
        }
        if !self.context.is_empty() {
            keys.push(json_extract("context", &self.context));
        }
        if !self.data.is_empty() {
            keys.push(json_extract("data", &self.data));
        }
        keys
    }
}

/// `JSON_UNQUOTE(JSON_EXTRACT(<document>, '$<path>'))`
fn json_extract(document: &str, path: &str) -> String {
    let path = path.replace('\'', "''");
    if path.starts_with('.') || path.starts_with('[') {
        format!("JSON_UNQUOTE(JSON_EXTRACT({document}, '${path}'))")
    } else {
        format!("JSON_UNQUOTE(JSON_EXTRACT({document}, '$.{path}'))")
    }
}

impl ApiV0Config {
    /// Mapping for `param` on `record_type`, if configured.
    pub fn query_param(&self, param: &str, record_type: &str) -> Option<&QueryParam> {
        self.query_params.get(param)?.get(record_type)
    }

    /// Build the clause filtering `record_type` rows on `param`.
    ///
    /// Returns `None` when the parameter is not mapped for this record type,
    /// the mapping has no locations, or no values were requested. One value
    /// compares with `=`, several with `IN`.
    pub fn clause_for(&self, param: &str, record_type: &str, values: &[String]) -> Option<Clause> {
        if values.is_empty() {
            return None;
        }
        let keys = self.query_param(param, record_type)?.keys();
        if keys.is_empty() {
            return None;
        }
        let operator = if values.len() > 1 { "IN" } else { "=" };
        Some(Clause {
            relativity: Relativity::And,
            keys,
            operator: operator.to_string(),
            values: values.to_vec(),
        })
    }

    /// AND-joined clause set for every recognised parameter, one grouping each.
    ///
    /// Unknown parameters are skipped and logged at debug level.
    pub fn clause_set_for(
        &self,
        record_type: &str,
        params: &BTreeMap<String, Vec<String>>,
    ) -> ClauseSet {
        let mut set = ClauseSet::default();
        for (param, values) in params {
            match self.clause_for(param, record_type, values) {
                Some(clause) => set.push(Grouping::from(clause)),
                None => {
                    tracing::debug!(param = %param, record_type, "query parameter not mapped");
                }
            }
        }
        set
    }
}
