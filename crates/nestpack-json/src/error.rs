//! Error type for the JSON front-ends.

use nestpack::NestError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonNestError {
    /// The `flat_sequence` argument was not an ordered, indexable sequence
    /// (for example a bare string).
    #[error("flat_sequence must be an ordered sequence, got {kind}")]
    FlatSequenceNotIndexable { kind: &'static str },

    /// An element of `flat_sequence` was itself a container; the flat supply
    /// must consist of leaf values only.
    #[error("flat_sequence[{index}] is a {kind}, expected a leaf value")]
    FlatElementNotLeaf { index: usize, kind: &'static str },

    /// The structure has no JSON image (non-finite float, set, non-string
    /// mapping key).
    #[error("no JSON representation: {reason}")]
    Unrepresentable { reason: String },

    #[error(transparent)]
    Nest(#[from] NestError),
}
