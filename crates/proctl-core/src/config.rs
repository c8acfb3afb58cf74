use crate::error::ConfigurationError;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Local endpoint the shutdown notification is posted to unless configured
/// otherwise.
pub const DEFAULT_NOTIFY_ENDPOINT: &str = "http://localhost:8000/shutdown";

/// Cooperative shutdown strategy for platforms without a direct interrupt
/// signal (Windows)
///
/// The two strategies are deliberately kept separate: the right choice
/// depends on whether the target process exposes a cooperative shutdown
/// channel of its own.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "strategy")]
pub enum CooperativeShutdown {
    /// Force-terminate the target's direct children, then the target itself
    #[default]
    ChildSweep,
    /// POST an empty body to a local shutdown endpoint exposed by the target
    Notify { endpoint: String },
}

impl CooperativeShutdown {
    /// Notification strategy pointed at the default local endpoint
    pub fn notify_default() -> Self {
        Self::Notify {
            endpoint: DEFAULT_NOTIFY_ENDPOINT.to_string(),
        }
    }
}

/// Controller configuration shared by all platform adapters
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option))]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    /// Strategy used when a cooperative shutdown request cannot be mapped
    /// to an interrupt signal
    #[builder(default)]
    #[serde(default)]
    pub cooperative: CooperativeShutdown,

    /// Exit code reported for forcibly terminated processes (Windows)
    #[builder(default = "default_kill_exit_code()")]
    #[serde(default = "default_kill_exit_code")]
    pub kill_exit_code: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            cooperative: CooperativeShutdown::default(),
            kill_exit_code: default_kill_exit_code(),
        }
    }
}

impl ControllerConfig {
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let CooperativeShutdown::Notify { endpoint } = &self.cooperative {
            if endpoint.is_empty() {
                return Err(ConfigurationError::EmptyEndpoint);
            }
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigurationError::InvalidEndpoint(endpoint.clone()));
            }
        }
        Ok(())
    }
}

fn default_kill_exit_code() -> u32 {
    1
}
