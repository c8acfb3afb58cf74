//! Windows-specific process lifecycle controller

mod windows_controller;

pub use windows_controller::WindowsProcessController;

#[cfg(windows)]
pub use windows_controller::{find_child_processes, send_ctrl_break, send_ctrl_c};

/// Windows-specific controller factory
pub struct WindowsControllerFactory;

#[cfg(windows)]
impl proctl_core::ControllerFactory for WindowsControllerFactory {
    type Controller = WindowsProcessController;

    fn create_controller(
        config: &proctl_core::ControllerConfig,
    ) -> Result<WindowsProcessController, proctl_core::ConfigurationError> {
        config.validate()?;
        Ok(WindowsProcessController::new(config))
    }

    fn platform_name() -> &'static str {
        "Windows"
    }
}
