//! Recursive structure visitor and the leaf-mapping operation built on it.

use crate::error::NestError;
use crate::flatten::{flatten, sorted_entry_order};
use crate::pack::pack_sequence_as;
use crate::structure::{Leaf, Structure};

/// Walk every node of a structure, calling `callback` on each.
///
/// The callback is called on the root first, then on every nested node in
/// flatten's traversal order: sequence children by index, mapping values by
/// sorted key, record fields in declaration order. Mapping keys are part of
/// the shape, not visited content.
pub fn walk<F>(value: &Structure, callback: &mut F)
where
    F: FnMut(&Structure),
{
    callback(value);
    match value {
        Structure::Seq(items) => {
            for item in items {
                walk(item, callback);
            }
        }
        Structure::Map(entries) => {
            for idx in sorted_entry_order(entries) {
                walk(&entries[idx].1, callback);
            }
        }
        Structure::Record(record) => {
            for (_, field) in &record.fields {
                walk(field, callback);
            }
        }
        Structure::Leaf(_) => {}
    }
}

/// Apply `f` to every leaf of `structure`, preserving its shape.
///
/// Leaves are visited in flatten's traversal order, so a stateful closure
/// sees them in the same sequence `flatten` would return. Template rules
/// match [`flatten`]: a bare leaf at top level is rejected.
pub fn map_structure<F>(mut f: F, structure: &Structure) -> Result<Structure, NestError>
where
    F: FnMut(&Leaf) -> Leaf,
{
    let mapped: Vec<Leaf> = flatten(structure)?.iter().map(|leaf| f(leaf)).collect();
    pack_sequence_as(structure, &mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Structure {
        Structure::Leaf(Leaf::Int(n))
    }

    #[test]
    fn walks_scalar() {
        let mut visited = vec![];
        walk(&int(42), &mut |v| visited.push(v.clone()));
        assert_eq!(visited, vec![int(42)]);
    }

    #[test]
    fn walks_nested_seq() {
        let value = Structure::Seq(vec![int(1), Structure::Seq(vec![int(2), int(3)])]);
        let mut count = 0;
        walk(&value, &mut |_| count += 1);
        // root + 1 + inner seq + 2 + 3 = 5
        assert_eq!(count, 5);
    }

    #[test]
    fn walks_map_values_in_sorted_key_order() {
        let value = Structure::Map(vec![
            (Structure::Leaf(Leaf::Str("b".into())), int(2)),
            (Structure::Leaf(Leaf::Str("a".into())), int(1)),
        ]);
        let mut leaves = vec![];
        walk(&value, &mut |v| {
            if let Structure::Leaf(leaf) = v {
                leaves.push(leaf.clone());
            }
        });
        assert_eq!(leaves, vec![Leaf::Int(1), Leaf::Int(2)]);
    }

    #[test]
    fn map_structure_preserves_shape() {
        let structure = Structure::Seq(vec![Structure::Seq(vec![int(1), int(2)]), int(3)]);
        let doubled = map_structure(
            |leaf| match leaf {
                Leaf::Int(n) => Leaf::Int(n * 2),
                other => other.clone(),
            },
            &structure,
        )
        .unwrap();
        assert_eq!(
            doubled,
            Structure::Seq(vec![Structure::Seq(vec![int(2), int(4)]), int(6)])
        );
    }

    #[test]
    fn map_structure_rejects_bare_leaf() {
        let err = map_structure(|leaf| leaf.clone(), &int(5)).unwrap_err();
        assert!(matches!(err, NestError::NotASequence { .. }));
    }
}
