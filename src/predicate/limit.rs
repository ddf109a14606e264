use serde::{Deserialize, Serialize};

/// Row cap and offset appended after a `WHERE` fragment.
///
/// A zero `limit` disables the clause entirely, offset included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Limit {
    /// Maximum rows to return; `0` means unset.
    pub limit: i64,
    /// Rows to skip; `0` omits `OFFSET`.
    pub offset: i64,
}

impl Limit {
    /// Limit without an offset.
    pub fn new(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }

    /// Same limit, skipping `offset` rows.
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Render as `LIMIT n [OFFSET m]`, or an empty string when unset.
    ///
    /// Values are not range-checked.
    pub fn to_sql(&self) -> String {
        if self.limit == 0 {
            return String::new();
        }
        if self.offset == 0 {
            format!("LIMIT {}", self.limit)
        } else {
            format!("LIMIT {} OFFSET {}", self.limit, self.offset)
        }
    }
}
