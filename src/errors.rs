use thiserror::Error;

use crate::Side;

/// Errors of the fallible entry points of the crate. `morph` itself accepts
/// any pair of strings and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// One of the inputs doesn't look like text
    #[error("The {side} input is binary or not valid UTF-8")]
    BinaryInput {
        /// The input that was rejected
        side: Side,
    },
}
