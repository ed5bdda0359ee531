//! The rope handle and its read operations.

use std::fmt;
use std::sync::Arc;

use crate::error::RopeError;
use crate::node::{Leaves, Node};

/// An immutable rope: a handle over an optional shared node tree.
///
/// The empty rope has no root; it is never represented as an empty leaf.
/// All operations leave their operands untouched. Concatenation and
/// substring extraction share subtrees with their inputs, which is why the
/// tree is held through [`Arc`]s; use [`Rope::deep_copy`] when an
/// exclusively owned tree is required.
///
/// # Example
///
/// ```
/// use ropewalk::Rope;
///
/// let hello = Rope::from_text("hello, ");
/// let world = Rope::from_text("world");
/// let greeting = hello.concat(&world);
/// assert_eq!(greeting.to_string(), "hello, world");
/// assert_eq!(greeting.substring(7, 12).unwrap().to_string(), "world");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rope {
    root: Option<Arc<Node>>,
}

impl Rope {
    /// The empty rope.
    pub fn new() -> Rope {
        Rope { root: None }
    }

    /// Wrap an externally built node tree without validation.
    ///
    /// The rope operations assume their input satisfies
    /// [`Rope::is_well_formed`]; check it when the tree came from raw
    /// [`Node`] construction.
    pub fn from_root(root: Arc<Node>) -> Rope {
        Rope { root: Some(root) }
    }

    /// Total byte length.
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.weight())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the underlying tree; 0 for the empty rope and for a
    /// single leaf.
    ///
    /// There is no rebalancing, so a chain of `n` concatenations can make
    /// the height grow linearly in `n`. The recursive operations
    /// ([`Rope::substring`], [`Rope::deep_copy`], [`Rope::is_well_formed`])
    /// descend to this depth.
    pub fn height(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        self.root.as_deref().map_or(0, depth)
    }

    /// Byte at zero-based `index`, by iterative weighted descent.
    ///
    /// At each internal node the index is compared against the left
    /// child's weight to pick a side, subtracting that weight when going
    /// right. Out-of-range access (including any access on the empty rope)
    /// is an error, never a sentinel.
    ///
    /// # Example
    ///
    /// ```
    /// use ropewalk::Rope;
    ///
    /// let r = Rope::from_text("foobar");
    /// assert_eq!(r.byte_at(5).unwrap(), b'r');
    /// assert!(r.byte_at(6).is_err());
    /// ```
    pub fn byte_at(&self, mut index: usize) -> Result<u8, RopeError> {
        let len = self.len();
        let mut node = match self.root.as_deref() {
            Some(node) if index < len => node,
            _ => return Err(RopeError::IndexOutOfRange { index, len }),
        };
        loop {
            match node {
                Node::Leaf(bytes) => return Ok(bytes[index]),
                Node::Internal { left, right, .. } => {
                    let mid = left.weight();
                    if index < mid {
                        node = left;
                    } else {
                        index -= mid;
                        node = right;
                    }
                }
            }
        }
    }

    /// Concatenate, in O(1) beyond one new internal node.
    ///
    /// The result's children are the operands' roots, now shared. When one
    /// operand is empty the result is a [`Rope::deep_copy`] of the other,
    /// so the caller never receives a handle that silently aliases the
    /// pass-through operand's tree.
    pub fn concat(&self, other: &Rope) -> Rope {
        match (&self.root, &other.root) {
            (None, None) => Rope::new(),
            (None, Some(_)) => other.deep_copy(),
            (Some(_), None) => self.deep_copy(),
            (Some(left), Some(right)) => {
                Rope::from_root(Node::join(Arc::clone(left), Arc::clone(right)))
            }
        }
    }

    /// Extract the half-open byte range `[lo, hi)` as a new rope.
    ///
    /// Requires `0 <= lo <= hi <= len`; `lo == hi` yields the empty rope.
    /// Subtrees fully inside the range are shared with `self`; only
    /// boundary nodes are reallocated.
    ///
    /// # Example
    ///
    /// ```
    /// use ropewalk::Rope;
    ///
    /// let r = Rope::from_segments(["foo", "bar"]).unwrap();
    /// assert_eq!(r.substring(2, 4).unwrap().to_string(), "ob");
    /// assert!(r.substring(3, 1).is_err());
    /// ```
    pub fn substring(&self, lo: usize, hi: usize) -> Result<Rope, RopeError> {
        let len = self.len();
        if lo > hi || hi > len {
            return Err(RopeError::InvalidRange { lo, hi, len });
        }
        if lo == hi {
            return Ok(Rope::new());
        }
        match &self.root {
            Some(root) => Ok(Rope {
                root: Node::slice(root, lo, hi),
            }),
            // len == 0 forces lo == hi above
            None => Ok(Rope::new()),
        }
    }

    /// Fully independent duplicate sharing no nodes with `self`.
    pub fn deep_copy(&self) -> Rope {
        Rope {
            root: self.root.as_deref().map(Node::deep_clone),
        }
    }

    /// Flatten to a single contiguous buffer, preallocated to [`Rope::len`]
    /// and filled by one in-order leaf walk.
    pub fn flatten(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for chunk in self.leaves() {
            out.extend_from_slice(chunk);
        }
        out
    }

    /// In-order iterator over the leaf byte chunks.
    pub fn leaves(&self) -> Leaves<'_> {
        self.root.as_deref().map_or_else(Leaves::empty, Node::leaves)
    }

    /// Check the shape and weight invariants of the whole tree. The empty
    /// rope is always well-formed. See [`Node::is_well_formed`].
    pub fn is_well_formed(&self) -> bool {
        self.root.as_deref().map_or(true, Node::is_well_formed)
    }
}

/// Content equality, independent of tree shape.
///
/// Walks the leaf chunks of both ropes in lockstep, comparing the common
/// prefix of the current chunks; equivalent to comparing the flattened
/// forms without materializing them.
impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut ours = self.leaves();
        let mut theirs = other.leaves();
        let mut a: &[u8] = &[];
        let mut b: &[u8] = &[];
        loop {
            if a.is_empty() {
                a = match ours.next() {
                    Some(chunk) => chunk,
                    // Equal lengths: the other side is exhausted too.
                    None => return true,
                };
            }
            if b.is_empty() {
                b = match theirs.next() {
                    Some(chunk) => chunk,
                    None => return false,
                };
            }
            let n = a.len().min(b.len());
            if a[..n] != b[..n] {
                return false;
            }
            a = &a[n..];
            b = &b[n..];
        }
    }
}

impl Eq for Rope {}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.flatten()))
    }
}
