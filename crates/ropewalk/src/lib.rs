//! An immutable rope over byte buffers.
//!
//! A rope stores a sequence as a binary tree of leaf buffers, making
//! concatenation O(1) and substring extraction O(log n + boundary work)
//! with structural sharing, instead of the full-array copies a flat
//! representation pays. Ropes are write-once: every operation returns a
//! new handle and leaves its operands untouched, and subtrees are shared
//! between handles through atomic reference counts.
//!
//! Indices are byte positions; slicing is not Unicode-aware and may cut
//! through a multi-byte sequence ([`Rope`]'s `Display` is lossy-UTF-8).
//!
//! # Example
//!
//! ```
//! use ropewalk::Rope;
//!
//! let r = Rope::from_segments(["foo", "bar"]).unwrap();
//! assert_eq!(r.len(), 6);
//! assert_eq!(r.byte_at(5).unwrap(), b'r');
//!
//! let cut = r.substring(2, 4).unwrap();
//! assert_eq!(cut.to_string(), "ob");
//!
//! let joined = r.concat(&cut);
//! assert_eq!(joined.to_string(), "foobarob");
//! assert!(joined.is_well_formed());
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`] tree, validator, leaf iterator, splitter |
//! | [`rope`] | [`Rope`] handle: indexing, concat, substring, flatten, equality |
//! | `builder` | single-buffer and balanced-sequence construction |
//! | [`error`] | [`RopeError`] |
//!
//! # Limitations
//!
//! There is no rebalancing: a chain of n concatenations can produce a tree
//! of height n, and the recursive operations (substring, deep copy,
//! validation) descend to that depth. Flattening, equality, and the leaf
//! iterator use an explicit stack and are unaffected.

pub mod error;
pub mod node;
pub mod rope;

mod builder;

pub use error::RopeError;
pub use node::{Leaves, Node};
pub use rope::Rope;
