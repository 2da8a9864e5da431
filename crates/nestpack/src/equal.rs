//! Shape equality: do two structures have the same nesting, ignoring leaf
//! values?

use crate::error::NestError;
use crate::flatten::sorted_entry_order;
use crate::structure::Structure;

/// True iff `a` and `b` have the same shape: same container kinds, arities,
/// mapping key sets, record names and field names at every position. Leaf
/// values are not compared.
pub fn same_structure(a: &Structure, b: &Structure) -> bool {
    assert_same_structure(a, b).is_ok()
}

/// Like [`same_structure`], but reports the first diverging node on failure.
pub fn assert_same_structure(a: &Structure, b: &Structure) -> Result<(), NestError> {
    check(a, b, &mut Vec::new())
}

fn check(a: &Structure, b: &Structure, path: &mut Vec<String>) -> Result<(), NestError> {
    match (a, b) {
        (Structure::Leaf(_), Structure::Leaf(_)) => Ok(()),
        (Structure::Seq(x), Structure::Seq(y)) => {
            if x.len() != y.len() {
                return Err(mismatch(
                    path,
                    format!("sequence arity {} vs {}", x.len(), y.len()),
                ));
            }
            for (idx, (xa, ya)) in x.iter().zip(y).enumerate() {
                path.push(idx.to_string());
                check(xa, ya, path)?;
                path.pop();
            }
            Ok(())
        }
        (Structure::Map(x), Structure::Map(y)) => {
            if x.len() != y.len() {
                return Err(mismatch(
                    path,
                    format!("mapping arity {} vs {}", x.len(), y.len()),
                ));
            }
            // Keys are compared as sets: stored entry order does not matter.
            let x_order = sorted_entry_order(x);
            let y_order = sorted_entry_order(y);
            for (&xi, &yi) in x_order.iter().zip(&y_order) {
                let (x_key, x_value) = &x[xi];
                let (y_key, y_value) = &y[yi];
                if x_key != y_key {
                    return Err(mismatch(
                        path,
                        format!("mapping keys differ: {:?} vs {:?}", x_key, y_key),
                    ));
                }
                path.push(key_component(x_key));
                check(x_value, y_value, path)?;
                path.pop();
            }
            Ok(())
        }
        (Structure::Record(x), Structure::Record(y)) => {
            if x.name != y.name {
                return Err(mismatch(
                    path,
                    format!("record name `{}` vs `{}`", x.name, y.name),
                ));
            }
            if x.fields.len() != y.fields.len() {
                return Err(mismatch(
                    path,
                    format!("record arity {} vs {}", x.fields.len(), y.fields.len()),
                ));
            }
            for ((x_name, x_field), (y_name, y_field)) in x.fields.iter().zip(&y.fields) {
                if x_name != y_name {
                    return Err(mismatch(
                        path,
                        format!("record field `{}` vs `{}`", x_name, y_name),
                    ));
                }
                path.push(x_name.clone());
                check(x_field, y_field, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Err(mismatch(path, format!("{} vs {}", a.kind(), b.kind()))),
    }
}

fn key_component(key: &Structure) -> String {
    match key {
        Structure::Leaf(crate::structure::Leaf::Str(s)) => s.clone(),
        other => format!("{:?}", other),
    }
}

fn mismatch(path: &[String], reason: String) -> NestError {
    let mut pointer = String::new();
    for component in path {
        pointer.push('/');
        pointer.push_str(component);
    }
    NestError::StructureMismatch {
        path: pointer,
        reason,
    }
}
