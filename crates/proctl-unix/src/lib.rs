//! Unix-specific process lifecycle controller

mod unix_controller;

pub use unix_controller::UnixProcessController;

/// Unix-specific controller factory
pub struct UnixControllerFactory;

#[cfg(unix)]
impl proctl_core::ControllerFactory for UnixControllerFactory {
    type Controller = UnixProcessController;

    fn create_controller(
        config: &proctl_core::ControllerConfig,
    ) -> Result<UnixProcessController, proctl_core::ConfigurationError> {
        config.validate()?;
        Ok(UnixProcessController::new())
    }

    fn platform_name() -> &'static str {
        "Unix"
    }
}
