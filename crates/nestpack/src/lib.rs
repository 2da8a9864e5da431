//! nestpack — flatten arbitrarily nested structures into a flat leaf
//! sequence and rebuild them.
//!
//! The traversal model is a closed set of container kinds — ordered
//! sequences, key-ordered mappings, fixed-field records — with a single
//! fallback leaf case for everything else. [`flatten`] collects leaves in a
//! fixed deterministic order, [`pack_sequence_as`] substitutes a flat supply
//! of leaves back into a template's shape, and [`is_sequence`] is the
//! classification predicate the two share.
//!
//! All operations are pure functions over immutable inputs: the input is
//! never mutated, and either a complete new value is returned or an error is
//! raised before any output is produced.
//!
//! ```
//! use nestpack::{flatten, pack_sequence_as, Leaf, Structure};
//!
//! let structure = Structure::Seq(vec![
//!     Structure::Seq(vec![
//!         Structure::Leaf(Leaf::Int(3)),
//!         Structure::Leaf(Leaf::Int(4)),
//!     ]),
//!     Structure::Leaf(Leaf::Int(5)),
//! ]);
//! let flat = flatten(&structure)?;
//! assert_eq!(flat, vec![Leaf::Int(3), Leaf::Int(4), Leaf::Int(5)]);
//! let packed = pack_sequence_as(&structure, &flat)?;
//! assert_eq!(packed, structure);
//! # Ok::<(), nestpack::NestError>(())
//! ```

mod equal;
mod error;
mod flatten;
mod pack;
mod structure;
mod walk;

pub use equal::{assert_same_structure, same_structure};
pub use error::NestError;
pub use flatten::{flatten, flatten_dict_items, is_sequence, leaf_count};
pub use pack::pack_sequence_as;
pub use structure::{Leaf, Record, Structure};
pub use walk::{map_structure, walk};
