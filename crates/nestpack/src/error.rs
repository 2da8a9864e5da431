//! Error type shared by the traversal operations.

use thiserror::Error;

use crate::structure::Leaf;

/// Every operation either returns a complete new value or one of these;
/// there are no partial results. Messages name the offending argument role
/// (`structure`, `flat_sequence`, `dictionary`) so callers can tell which
/// contract was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NestError {
    /// A non-container value filled a role that requires a traversable
    /// container.
    #[error("{role} must be a traversable container, got a {kind} leaf")]
    NotASequence {
        role: &'static str,
        kind: &'static str,
    },

    /// `flatten_dict_items` was handed something other than a mapping.
    #[error("dictionary must be a mapping, got {kind}")]
    NotAMapping { kind: &'static str },

    /// Leaf counts disagree between a template and its flat supply.
    #[error("structure had {expected} leaves, but flat_sequence had {got}")]
    LeafCountMismatch { expected: usize, got: usize },

    /// A dictionary key and its paired value flatten to different lengths.
    #[error("Key had {key_leaves} elements, but value had {value_leaves} elements")]
    KeyValueLeafMismatch {
        key_leaves: usize,
        value_leaves: usize,
    },

    /// Two dictionary entries produced the same flattened key leaf.
    #[error("flattened dictionary keys are not unique: {0:?} repeats")]
    DuplicateKey(Leaf),

    /// Two structures diverge in shape; `path` points at the first
    /// diverging node.
    #[error("structures differ at `{path}`: {reason}")]
    StructureMismatch { path: String, reason: String },
}
