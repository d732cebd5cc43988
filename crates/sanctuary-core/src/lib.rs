//! Shared building blocks for the Sanctuary workspace: configuration,
//! time source, route constants and core errors.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
