//! Event management service: storage abstraction and the operations the
//! HTTP layer calls.

pub mod error;
pub mod event;
pub mod store;
