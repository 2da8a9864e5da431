//! nestpack-json — flatten and pack native JSON values.
//!
//! Bridges [`serde_json::Value`] to the nestpack traversal model: arrays and
//! objects classify as traversable containers, strings and scalars as
//! leaves. The front-ends carry the loosely-typed error contract a dynamic
//! caller expects — a string handed in as a template or as the flat supply
//! fails with an error naming the offending role.
//!
//! ```
//! use serde_json::json;
//!
//! let structure = json!([[3, 4], 5]);
//! let flat = nestpack_json::flatten_value(&structure)?;
//! assert_eq!(flat, vec![json!(3), json!(4), json!(5)]);
//! let packed = nestpack_json::pack_value_as(&structure, &json!(["a", "b", "c"]))?;
//! assert_eq!(packed, json!([["a", "b"], "c"]));
//! # Ok::<(), nestpack_json::JsonNestError>(())
//! ```

mod classify;
mod codec;
mod error;

pub use classify::{classify, leaf_to_value, to_value, value_kind, DATA_URI_PREFIX};
pub use codec::{flatten_dict_value_items, flatten_value, is_sequence_value, pack_value_as};
pub use error::JsonNestError;
