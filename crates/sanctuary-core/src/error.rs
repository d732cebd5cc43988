use thiserror::Error;

/// Errors raised by the shared building blocks.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A handler ran without a value its hoop should have injected.
    #[error("{0} not found in depot")]
    MissingFromDepot(&'static str),
}
