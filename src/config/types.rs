use serde::{Deserialize, Serialize};

use crate::api::UserType;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Page runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Upper bound on task chains running at once per page runtime.
    #[serde(default = "default_max_in_flight_tasks")]
    pub max_in_flight_tasks: usize,
    /// Log every processed intent at debug level.
    #[serde(default = "default_log_messages")]
    pub log_messages: bool,
}

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Simulated latency of every in-memory API call.
    #[serde(default = "default_api_latency_ms")]
    pub api_latency_ms: u64,
    /// Type of the signed-in demo user.
    #[serde(default = "default_session_user_type")]
    pub session_user_type: UserType,
}

fn default_max_in_flight_tasks() -> usize {
    64
}

fn default_log_messages() -> bool {
    true
}

fn default_api_latency_ms() -> u64 {
    50
}

fn default_session_user_type() -> UserType {
    UserType::Vendor
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_in_flight_tasks: default_max_in_flight_tasks(),
            log_messages: default_log_messages(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            api_latency_ms: default_api_latency_ms(),
            session_user_type: default_session_user_type(),
        }
    }
}
