//! Client library for HostDB, an inventory record store behind an HTTP API.
//!
//! The core is [`predicate`]: a compiler from a nested filter description
//! into a parameterized SQL `WHERE` fragment, plus `LIMIT`/`OFFSET` rendering.
#![warn(missing_docs)]

/// HTTP transport and response shapes.
pub mod api;
/// Configuration structs and query-parameter mapping.
pub mod config;
/// Crate error types.
pub mod error;
/// Predicate trees, the `WHERE` compiler and `LIMIT` rendering.
pub mod predicate;
/// Inventory records and their on-disk sample-data form.
pub mod record;

pub use error::{Error, PredicateError, Result};
