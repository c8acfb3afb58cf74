//! Proctl Core - Platform-independent abstractions and configurations
//!
//! This crate provides the controller contract, configurations, and error
//! types that are shared across platform-specific implementations.

mod config;
mod controller;
mod error;
mod notify;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use notify::*;
