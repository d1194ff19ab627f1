mod database;
mod errors;
mod logging;
mod monitor;
mod resolver;
mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
