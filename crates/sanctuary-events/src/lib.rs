//! Event data model and the recurrence expander.
//!
//! Everything in this crate is synchronous and free of I/O: the model types
//! describe what is stored and what is served, and [`expand::Expander`]
//! turns a stored event into the concrete occurrences inside a window.

pub mod error;
pub mod expand;
pub mod model;
pub mod validate;
pub mod window;

pub use expand::{Expander, expand};
pub use model::{Event, EventDraft, Frequency, Occurrence, RecurrenceRule};
pub use window::QueryWindow;
