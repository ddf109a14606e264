/// Authenticated HTTP transport for records.
pub mod client;
/// JSON response shapes returned by the HostDB API.
pub mod responses;

pub use client::{Client, ClientConfig};
