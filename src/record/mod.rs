/// `Record` and `RecordSet` wire types.
pub mod model;
/// Writing record sets to disk as sample data.
pub mod persist;

pub use model::{Record, RecordSet};
