//! Shared error types for the sampling core.

use thiserror::Error;

/// Errors raised by weighted-sampler construction and draws.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// An entry in the input list is missing its value or weight field.
    ///
    /// Raised at build time, before any pool construction. `index` is the
    /// position of the offending entry in the input list and `missing`
    /// names the absent field.
    #[error("entry {index} is missing its `{missing}` field; every entry must have a value and a weight")]
    InvalidEntry { index: usize, missing: &'static str },

    /// A draw was attempted against a pool with zero total weight.
    ///
    /// Building such a pool is legal (zero-weight entries are a valid, if
    /// useless, input); only sampling from it is an error.
    #[error("cannot sample from an empty pool (total weight is zero)")]
    EmptyPool,
}
