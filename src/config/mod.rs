//! Configuration loading for the invite client.

mod loader;
mod types;

pub use loader::{ConfigError, TOKEN_ENV_VAR};
pub use types::{Config, LoggingConfig, ServiceConfig};
