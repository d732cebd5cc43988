pub mod app;
pub mod clock_handler;
pub mod config;
pub mod error;
pub mod store_handler;
