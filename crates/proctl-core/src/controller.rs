use crate::config::ControllerConfig;
use crate::error::{ConfigurationError, KillError, ShutdownError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// Unique identifier for a target process
pub type ProcessId = u32;

/// Logical shutdown intent, mapped by each platform adapter to its native
/// primitive (signal number, console control event, or notification call).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShutdownIntent {
    /// Ask the process to exit on its own terms, allowing cleanup
    Cooperative,
    /// Terminate immediately
    Forceful,
}

/// Platform contract for controlling the lifecycle of a single child process
///
/// One implementation exists per target platform, selected at compile time
/// by the facade crate. The external executor owns the target process and
/// serializes calls against one PID itself; implementations perform no
/// internal locking, retries, or background work.
#[async_trait]
pub trait ProcessController: Send + Sync {
    /// Configure `cmd` so the spawned child lands in its own signal domain
    /// (new session on Unix, new process group on Windows).
    ///
    /// Must be called before the command is spawned; taking `&mut Command`
    /// makes a post-spawn call unrepresentable.
    fn isolate(&self, cmd: &mut Command) -> Result<(), ConfigurationError>;

    /// Deliver a cooperative or forceful shutdown request to `pid`.
    ///
    /// Success means the request was accepted for delivery, not that the
    /// process has exited; callers wait or poll separately. Delivering to
    /// an already-exited process is success, not an error.
    async fn shutdown(
        &self,
        intent: ShutdownIntent,
        pid: ProcessId,
    ) -> Result<(), ShutdownError>;

    /// Verify whether `pid` is still alive and forcibly terminate it if so.
    ///
    /// An already-exited process is success. An unopenable or unqueryable
    /// process is an error, because "gone" and "access denied" are
    /// indistinguishable at that point and the caller must decide.
    async fn kill_tree(&self, pid: ProcessId) -> Result<(), KillError>;

    /// Non-blocking liveness check for the executor's poll loop.
    fn is_alive(&self, pid: ProcessId) -> bool;
}

/// Factory trait for creating platform-specific controllers
pub trait ControllerFactory {
    /// The type of controller this factory creates
    type Controller: ProcessController;

    /// Validate `config` and build a controller for the current platform.
    fn create_controller(
        config: &ControllerConfig,
    ) -> Result<Self::Controller, ConfigurationError>;

    /// Get the platform name for logging and debugging
    fn platform_name() -> &'static str;
}
