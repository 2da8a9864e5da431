//! Packing: rebuild a flat leaf sequence into a template's shape.

use std::slice;

use crate::error::NestError;
use crate::flatten::{is_sequence, leaf_count, sorted_entry_order};
use crate::structure::{Leaf, Record, Structure};

/// Rebuild a new structure with the same shape as `structure`, substituting
/// leaves from `flat_sequence` in flatten's traversal order.
///
/// The template must be container-classified at top level, and its leaf
/// count must equal `flat_sequence.len()` — a mismatch is an error, never a
/// silent truncation or pad. The template is read-only; the result is a
/// brand-new structure.
pub fn pack_sequence_as(
    structure: &Structure,
    flat_sequence: &[Leaf],
) -> Result<Structure, NestError> {
    if !is_sequence(structure) {
        return Err(NestError::NotASequence {
            role: "structure",
            kind: structure.kind(),
        });
    }
    let mut cursor = flat_sequence.iter();
    match rebuild(structure, &mut cursor) {
        Some(packed) if cursor.next().is_none() => Ok(packed),
        // Cursor ran dry mid-rebuild, or leaves were left over.
        _ => Err(NestError::LeafCountMismatch {
            expected: leaf_count(structure),
            got: flat_sequence.len(),
        }),
    }
}

/// Mirror of flatten's descent; `None` means the cursor ran out of leaves.
fn rebuild(node: &Structure, cursor: &mut slice::Iter<'_, Leaf>) -> Option<Structure> {
    match node {
        Structure::Leaf(_) => Some(Structure::Leaf(cursor.next()?.clone())),
        Structure::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(rebuild(item, cursor)?);
            }
            Some(Structure::Seq(out))
        }
        Structure::Map(entries) => {
            // Leaves are consumed in sorted-key order (the flatten order),
            // but entries are rebuilt in their stored order.
            let mut rebuilt: Vec<Option<Structure>> = vec![None; entries.len()];
            for idx in sorted_entry_order(entries) {
                rebuilt[idx] = Some(rebuild(&entries[idx].1, cursor)?);
            }
            let mut out = Vec::with_capacity(entries.len());
            for ((key, _), value) in entries.iter().zip(rebuilt) {
                out.push((key.clone(), value?));
            }
            Some(Structure::Map(out))
        }
        Structure::Record(record) => {
            let mut fields = Vec::with_capacity(record.fields.len());
            for (name, field) in &record.fields {
                fields.push((name.clone(), rebuild(field, cursor)?));
            }
            Some(Structure::Record(Record {
                name: record.name.clone(),
                fields,
            }))
        }
    }
}
