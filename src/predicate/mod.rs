/// Predicate tree value types.
pub mod clause;
/// `ClauseSet` to parameterized `WHERE` text.
pub mod compiler;
/// `LIMIT`/`OFFSET` rendering.
pub mod limit;
/// Free-text search grouping.
pub mod search;

pub use clause::{Clause, ClauseSet, Grouping, Relativity};
pub use compiler::{compile, WhereFragment};
pub use limit::Limit;
