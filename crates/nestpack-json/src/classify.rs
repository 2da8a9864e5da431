//! Classification of native JSON values into the traversal model and back.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use nestpack::{Leaf, Structure};
use serde_json::{Map, Number, Value};

use crate::error::JsonNestError;

/// Prefix used when rendering opaque byte payloads as JSON strings.
pub const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Short kind name of a JSON value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Classify a JSON value into the traversal model.
///
/// Arrays become sequences and objects become mappings with string keys in
/// their stored entry order; everything else — strings included — is a leaf.
/// Total function, no errors.
pub fn classify(value: &Value) -> Structure {
    match value {
        Value::Null => Structure::Leaf(Leaf::Null),
        Value::Bool(b) => Structure::Leaf(Leaf::Bool(*b)),
        Value::Number(n) => Structure::Leaf(classify_number(n)),
        Value::String(s) => Structure::Leaf(Leaf::Str(s.clone())),
        Value::Array(items) => Structure::Seq(items.iter().map(classify).collect()),
        Value::Object(entries) => Structure::Map(
            entries
                .iter()
                .map(|(key, value)| (Structure::Leaf(Leaf::Str(key.clone())), classify(value)))
                .collect(),
        ),
    }
}

fn classify_number(n: &Number) -> Leaf {
    if let Some(i) = n.as_i64() {
        Leaf::Int(i)
    } else if let Some(u) = n.as_u64() {
        Leaf::UInt(u)
    } else {
        Leaf::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Render a structure back to a JSON value.
///
/// Sequences become arrays, string-keyed mappings become objects (stored
/// entry order preserved), records render as objects of their fields, and
/// byte payloads render as base64 data-URI strings. Sets, non-finite floats,
/// and non-string mapping keys have no JSON image.
pub fn to_value(structure: &Structure) -> Result<Value, JsonNestError> {
    match structure {
        Structure::Leaf(leaf) => leaf_to_value(leaf),
        Structure::Seq(items) => Ok(Value::Array(
            items.iter().map(to_value).collect::<Result<_, _>>()?,
        )),
        Structure::Map(entries) => {
            let mut out = Map::new();
            for (key, value) in entries {
                let Structure::Leaf(Leaf::Str(key)) = key else {
                    return Err(JsonNestError::Unrepresentable {
                        reason: format!("mapping key is a {}, JSON keys are strings", key.kind()),
                    });
                };
                out.insert(key.clone(), to_value(value)?);
            }
            Ok(Value::Object(out))
        }
        Structure::Record(record) => {
            let mut out = Map::new();
            for (name, field) in &record.fields {
                out.insert(name.clone(), to_value(field)?);
            }
            Ok(Value::Object(out))
        }
    }
}

/// JSON image of a single leaf.
pub fn leaf_to_value(leaf: &Leaf) -> Result<Value, JsonNestError> {
    match leaf {
        Leaf::Null => Ok(Value::Null),
        Leaf::Bool(b) => Ok(Value::Bool(*b)),
        Leaf::Int(i) => Ok(Value::from(*i)),
        Leaf::UInt(u) => Ok(Value::from(*u)),
        Leaf::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| JsonNestError::Unrepresentable {
                reason: format!("non-finite float {f}"),
            }),
        Leaf::Str(s) => Ok(Value::String(s.clone())),
        Leaf::Bytes(bytes) => Ok(Value::String(format!(
            "{DATA_URI_PREFIX}{}",
            STANDARD.encode(bytes)
        ))),
        Leaf::Set(_) => Err(JsonNestError::Unrepresentable {
            reason: "sets have no JSON representation".to_string(),
        }),
    }
}
