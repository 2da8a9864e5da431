//! Flattening: classify containers and collect leaves in traversal order.

use indexmap::IndexMap;

use crate::error::NestError;
use crate::structure::{Leaf, Structure};

/// True iff `value` is a traversable container that the flatten/pack
/// operations recurse into.
///
/// Strings, byte payloads, and sets are leaves: `is_sequence` answers false
/// for every [`Leaf`] kind.
pub fn is_sequence(value: &Structure) -> bool {
    matches!(
        value,
        Structure::Seq(_) | Structure::Map(_) | Structure::Record(_)
    )
}

/// Number of leaves in `structure` without materializing the flat vector.
pub fn leaf_count(structure: &Structure) -> usize {
    match structure {
        Structure::Leaf(_) => 1,
        Structure::Seq(items) => items.iter().map(leaf_count).sum(),
        Structure::Map(entries) => entries.iter().map(|(_, value)| leaf_count(value)).sum(),
        Structure::Record(record) => record.fields.iter().map(|(_, f)| leaf_count(f)).sum(),
    }
}

/// Collect all leaves of `structure` into one ordered sequence.
///
/// Traversal is pre-order and left-to-right: sequence children in index
/// order, mapping entries sorted by key, record fields in declaration order.
/// Two calls on the same structure yield identical sequences.
///
/// A bare leaf at top level is rejected — the caller asked to flatten a
/// nested structure and supplied an atom. Leaves reached mid-traversal are
/// collected normally.
pub fn flatten(structure: &Structure) -> Result<Vec<Leaf>, NestError> {
    if !is_sequence(structure) {
        return Err(NestError::NotASequence {
            role: "structure",
            kind: structure.kind(),
        });
    }
    let mut flat = Vec::with_capacity(leaf_count(structure));
    collect(structure, &mut flat);
    Ok(flat)
}

pub(crate) fn collect(node: &Structure, out: &mut Vec<Leaf>) {
    match node {
        Structure::Leaf(leaf) => out.push(leaf.clone()),
        Structure::Seq(items) => {
            for item in items {
                collect(item, out);
            }
        }
        Structure::Map(entries) => {
            for idx in sorted_entry_order(entries) {
                collect(&entries[idx].1, out);
            }
        }
        Structure::Record(record) => {
            for (_, field) in &record.fields {
                collect(field, out);
            }
        }
    }
}

/// Entry indices of a mapping in canonical key order. Flatten consumes and
/// pack supplies leaves in this order regardless of how entries are stored.
pub(crate) fn sorted_entry_order(entries: &[(Structure, Structure)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[a].0.cmp(&entries[b].0));
    order
}

/// Flatten a mapping whose keys and values are parallel structures of
/// identical shape, pairing each key leaf with its corresponding value leaf.
///
/// Every entry's key and value must flatten to the same number of leaves,
/// and no two entries may produce the same flattened key. The result keeps
/// first-seen key order; beyond uniqueness no ordering is guaranteed.
pub fn flatten_dict_items(dictionary: &Structure) -> Result<IndexMap<Leaf, Leaf>, NestError> {
    let Structure::Map(entries) = dictionary else {
        return Err(NestError::NotAMapping {
            kind: dictionary.kind(),
        });
    };
    let mut flat = IndexMap::new();
    for (key, value) in entries {
        // Bare-leaf keys and values count as single-leaf structures here.
        let mut key_leaves = Vec::new();
        collect(key, &mut key_leaves);
        let mut value_leaves = Vec::new();
        collect(value, &mut value_leaves);
        if key_leaves.len() != value_leaves.len() {
            return Err(NestError::KeyValueLeafMismatch {
                key_leaves: key_leaves.len(),
                value_leaves: value_leaves.len(),
            });
        }
        for (k, v) in key_leaves.into_iter().zip(value_leaves) {
            if flat.contains_key(&k) {
                return Err(NestError::DuplicateKey(k));
            }
            flat.insert(k, v);
        }
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Structure {
        Structure::Leaf(Leaf::Int(n))
    }

    fn str_leaf(s: &str) -> Structure {
        Structure::Leaf(Leaf::Str(s.into()))
    }

    #[test]
    fn classifies_containers_and_leaves() {
        assert!(is_sequence(&Structure::Seq(vec![])));
        assert!(is_sequence(&Structure::Map(vec![])));
        assert!(!is_sequence(&str_leaf("1234")));
        assert!(!is_sequence(&Structure::Leaf(Leaf::Set(vec![
            Leaf::Int(1),
            Leaf::Int(2)
        ]))));
        assert!(!is_sequence(&Structure::Leaf(Leaf::Bytes(vec![0; 6]))));
    }

    #[test]
    fn flattens_nested_seq_in_index_order() {
        let structure = Structure::Seq(vec![
            Structure::Seq(vec![int(3), int(4)]),
            int(5),
            Structure::Seq(vec![int(6), int(7), Structure::Seq(vec![int(9), int(10)]), int(8)]),
        ]);
        let flat = flatten(&structure).unwrap();
        let expected: Vec<Leaf> = [3, 4, 5, 6, 7, 9, 10, 8]
            .iter()
            .map(|&n| Leaf::Int(n))
            .collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn flattens_map_values_in_sorted_key_order() {
        let map = Structure::Map(vec![
            (str_leaf("z"), int(1)),
            (str_leaf("a"), int(2)),
            (str_leaf("m"), int(3)),
        ]);
        let flat = flatten(&map).unwrap();
        assert_eq!(flat, vec![Leaf::Int(2), Leaf::Int(3), Leaf::Int(1)]);
    }

    #[test]
    fn top_level_leaf_is_rejected() {
        let err = flatten(&int(5)).unwrap_err();
        assert!(matches!(err, NestError::NotASequence { role: "structure", .. }));
        assert!(err.to_string().contains("structure"));
    }

    #[test]
    fn leaf_count_matches_flatten_len() {
        let structure = Structure::Seq(vec![
            Structure::Map(vec![(str_leaf("k"), Structure::Seq(vec![int(1), int(2)]))]),
            int(3),
        ]);
        assert_eq!(leaf_count(&structure), flatten(&structure).unwrap().len());
    }

    #[test]
    fn dict_items_pairs_corresponding_leaves() {
        let dict = Structure::Map(vec![(
            Structure::Seq(vec![int(4), int(5), Structure::Seq(vec![int(6), int(8)])]),
            Structure::Seq(vec![
                str_leaf("a"),
                str_leaf("b"),
                Structure::Seq(vec![str_leaf("c"), str_leaf("d")]),
            ]),
        )]);
        let flat = flatten_dict_items(&dict).unwrap();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[&Leaf::Int(4)], Leaf::Str("a".into()));
        assert_eq!(flat[&Leaf::Int(5)], Leaf::Str("b".into()));
        assert_eq!(flat[&Leaf::Int(6)], Leaf::Str("c".into()));
        assert_eq!(flat[&Leaf::Int(8)], Leaf::Str("d".into()));
    }

    #[test]
    fn dict_items_rejects_non_mapping() {
        let err = flatten_dict_items(&int(4)).unwrap_err();
        assert!(matches!(err, NestError::NotAMapping { kind: "int" }));
    }

    #[test]
    fn dict_items_rejects_duplicate_flat_keys() {
        let dict = Structure::Map(vec![(
            Structure::Seq(vec![int(4), int(5), Structure::Seq(vec![int(4), int(8)])]),
            Structure::Seq(vec![
                str_leaf("a"),
                str_leaf("b"),
                Structure::Seq(vec![str_leaf("c"), str_leaf("d")]),
            ]),
        )]);
        let err = flatten_dict_items(&dict).unwrap_err();
        assert!(err.to_string().contains("not unique"));
    }

    #[test]
    fn dict_items_rejects_key_value_arity_mismatch() {
        let dict = Structure::Map(vec![(
            Structure::Seq(vec![int(4), int(5), Structure::Seq(vec![int(6), int(8)])]),
            Structure::Seq(vec![
                str_leaf("a"),
                str_leaf("b"),
                Structure::Seq(vec![
                    str_leaf("c"),
                    Structure::Seq(vec![str_leaf("d"), str_leaf("e")]),
                ]),
            ]),
        )]);
        let err = flatten_dict_items(&dict).unwrap_err();
        assert_eq!(
            err,
            NestError::KeyValueLeafMismatch {
                key_leaves: 4,
                value_leaves: 5
            }
        );
        assert_eq!(
            err.to_string(),
            "Key had 4 elements, but value had 5 elements"
        );
    }
}
