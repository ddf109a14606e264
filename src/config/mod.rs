/// Query-parameter to column/JSON-path mapping and clause construction.
pub mod query_params;
/// Global, server, database and API configuration structs.
pub mod settings;

pub use query_params::QueryParam;
pub use settings::{ApiConfig, ApiV0Config, GlobalConfig, MariadbConfig, ServerConfig};
