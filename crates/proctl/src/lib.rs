//! Cross-platform process lifecycle control for task-execution drivers
//!
//! One [`ProcessController`] contract, one implementation per target
//! platform, selected at compile time. The external executor spawns the
//! child with [`ProcessController::isolate`] applied to the command, later
//! calls [`ProcessController::shutdown`] with a cooperative or forceful
//! intent, and escalates to [`ProcessController::kill_tree`] on timeout or
//! for hard kills.

mod platform;

pub use platform::{PlatformController, PlatformControllerFactory};
pub use proctl_core::*;
