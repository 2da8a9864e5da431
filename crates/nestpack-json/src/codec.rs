//! Dynamically-typed front-ends over native JSON values.
//!
//! These carry the loosely-typed error contract of the API: the `structure`
//! and `flat_sequence` roles are checked at entry and violations name the
//! offending argument.

use nestpack::{Leaf, Structure};
use serde_json::Value;

use crate::classify::{classify, leaf_to_value, to_value, value_kind};
use crate::error::JsonNestError;

/// True iff a JSON value is a traversable container (array or object).
/// Strings are flat and answer false.
pub fn is_sequence_value(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Flatten a JSON value into its leaves in deterministic traversal order:
/// array elements by index, object values by sorted key.
pub fn flatten_value(structure: &Value) -> Result<Vec<Value>, JsonNestError> {
    let flat = nestpack::flatten(&classify(structure))?;
    flat.iter().map(leaf_to_value).collect()
}

/// Rebuild `flat_sequence` into the shape of `structure`.
///
/// `structure` must be an array or object; a bare string (or other scalar)
/// template is a classification error naming "structure". `flat_sequence`
/// must be a JSON array of leaf values; anything else is a classification
/// error naming "flat_sequence". A leaf-count mismatch is a cardinality
/// error, never a silent truncation.
pub fn pack_value_as(structure: &Value, flat_sequence: &Value) -> Result<Value, JsonNestError> {
    let Value::Array(flat_items) = flat_sequence else {
        return Err(JsonNestError::FlatSequenceNotIndexable {
            kind: value_kind(flat_sequence),
        });
    };
    let mut leaves = Vec::with_capacity(flat_items.len());
    for (index, item) in flat_items.iter().enumerate() {
        match classify(item) {
            Structure::Leaf(leaf) => leaves.push(leaf),
            container => {
                return Err(JsonNestError::FlatElementNotLeaf {
                    index,
                    kind: container.kind(),
                })
            }
        }
    }
    let packed = nestpack::pack_sequence_as(&classify(structure), &leaves)?;
    to_value(&packed)
}

/// Flatten a JSON object whose keys and values are parallel structures,
/// pairing corresponding leaves. Keys arrive as JSON strings, so this
/// front-end pairs each object key with the leaves of its value only when
/// the value is itself a leaf; structured keys live in the core API.
pub fn flatten_dict_value_items(dictionary: &Value) -> Result<Value, JsonNestError> {
    let items = nestpack::flatten_dict_items(&classify(dictionary))?;
    let mut out = serde_json::Map::new();
    for (key, value) in items {
        let Leaf::Str(key) = key else {
            return Err(JsonNestError::Unrepresentable {
                reason: format!("flattened key is a {}, JSON keys are strings", key.kind()),
            });
        };
        out.insert(key, leaf_to_value(&value)?);
    }
    Ok(Value::Object(out))
}
