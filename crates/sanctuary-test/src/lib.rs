//! Sanctuary events server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `sanctuary_test::` paths.

pub mod component {
    pub use sanctuary_core::{clock, constants};
    pub use sanctuary_events as events;
    pub use sanctuary_service::{event, store};

    // Config types from core alongside the handler that injects them
    pub mod config {
        pub use sanctuary_app::config::ConfigHandler;
        pub use sanctuary_core::config::*;
    }

    pub mod handlers {
        pub use sanctuary_app::clock_handler::ClockHandler;
        pub use sanctuary_app::store_handler::StoreHandler;
    }
}

pub mod app {
    pub mod api {
        pub use sanctuary_app::app::api::*;
    }
}
