use async_trait::async_trait;
use proctl_core::{
    ConfigurationError, ControllerConfig, ControllerFactory, KillError, ProcessController,
    ProcessId, ShutdownError, ShutdownIntent,
};
use tokio::process::Command;
use tracing::info;

/// Platform-specific controller implementations
pub enum PlatformController {
    #[cfg(unix)]
    Unix(proctl_unix::UnixProcessController),
    #[cfg(windows)]
    Windows(proctl_windows::WindowsProcessController),
}

impl PlatformController {
    pub fn new(config: &ControllerConfig) -> Result<Self, ConfigurationError> {
        #[cfg(unix)]
        {
            info!("Creating Unix process controller");
            Ok(Self::Unix(
                proctl_unix::UnixControllerFactory::create_controller(config)?,
            ))
        }

        #[cfg(windows)]
        {
            info!("Creating Windows process controller");
            Ok(Self::Windows(
                proctl_windows::WindowsControllerFactory::create_controller(config)?,
            ))
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform: only Unix and Windows are currently supported");
        }
    }

    pub fn platform_name() -> &'static str {
        #[cfg(unix)]
        {
            proctl_unix::UnixControllerFactory::platform_name()
        }

        #[cfg(windows)]
        {
            proctl_windows::WindowsControllerFactory::platform_name()
        }

        #[cfg(not(any(unix, windows)))]
        {
            "Unknown"
        }
    }
}

#[async_trait]
impl ProcessController for PlatformController {
    fn isolate(&self, cmd: &mut Command) -> Result<(), ConfigurationError> {
        match self {
            #[cfg(unix)]
            Self::Unix(controller) => controller.isolate(cmd),
            #[cfg(windows)]
            Self::Windows(controller) => controller.isolate(cmd),
        }
    }

    async fn shutdown(&self, intent: ShutdownIntent, pid: ProcessId) -> Result<(), ShutdownError> {
        match self {
            #[cfg(unix)]
            Self::Unix(controller) => controller.shutdown(intent, pid).await,
            #[cfg(windows)]
            Self::Windows(controller) => controller.shutdown(intent, pid).await,
        }
    }

    async fn kill_tree(&self, pid: ProcessId) -> Result<(), KillError> {
        match self {
            #[cfg(unix)]
            Self::Unix(controller) => controller.kill_tree(pid).await,
            #[cfg(windows)]
            Self::Windows(controller) => controller.kill_tree(pid).await,
        }
    }

    fn is_alive(&self, pid: ProcessId) -> bool {
        match self {
            #[cfg(unix)]
            Self::Unix(controller) => controller.is_alive(pid),
            #[cfg(windows)]
            Self::Windows(controller) => controller.is_alive(pid),
        }
    }
}

/// Platform-agnostic factory that selects the appropriate implementation at
/// compile time
pub struct PlatformControllerFactory;

impl PlatformControllerFactory {
    pub fn create_controller(
        config: &ControllerConfig,
    ) -> Result<PlatformController, ConfigurationError> {
        PlatformController::new(config)
    }

    pub fn platform_name() -> &'static str {
        PlatformController::platform_name()
    }
}
