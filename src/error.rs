use thiserror::Error;

/// Construction failures. `pick` and `reset` cannot fail on a pool that was
/// accepted here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("cannot sample from an empty pool")]
    EmptyPool,
}
