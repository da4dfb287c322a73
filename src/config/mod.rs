//! Configuration: `config.toml` under the platform config directory.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, DemoConfig, RuntimeConfig};
