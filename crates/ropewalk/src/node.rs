//! Rope tree nodes.
//!
//! A [`Node`] is either a leaf owning a byte buffer, or an internal node
//! owning exactly two children. The enum shape makes a one-child internal
//! node unrepresentable. Nodes are shared with [`Arc`]: concatenation and
//! substring extraction alias subtrees of their inputs, which is sound
//! because a node is never mutated once built.
//!
//! Variants and fields are public so that test fixtures (and external
//! callers) can assemble arbitrary trees and check them with
//! [`Node::is_well_formed`]; none of the rope operations will produce an
//! ill-formed tree themselves.

use std::sync::Arc;

/// A rope tree node.
#[derive(Debug)]
pub enum Node {
    /// Owns a contiguous byte buffer. Never empty in a well-formed tree.
    Leaf(Box<[u8]>),
    /// Owns two children; holds no data of its own. `weight` is the total
    /// byte count of the subtree, equal to the sum of the children's
    /// weights in a well-formed tree.
    Internal {
        weight: usize,
        left: Arc<Node>,
        right: Arc<Node>,
    },
}

impl Node {
    /// Create a leaf over a copy of `bytes`.
    pub fn leaf(bytes: &[u8]) -> Arc<Node> {
        debug_assert!(!bytes.is_empty(), "leaves must hold data");
        Arc::new(Node::Leaf(bytes.into()))
    }

    /// Create an internal node over the two children, weight precomputed
    /// as the sum of their weights.
    pub fn join(left: Arc<Node>, right: Arc<Node>) -> Arc<Node> {
        Arc::new(Node::Internal {
            weight: left.weight() + right.weight(),
            left,
            right,
        })
    }

    /// Total byte count of the subtree rooted at this node.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf(bytes) => bytes.len(),
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Check the shape and weight invariants of the subtree.
    ///
    /// A leaf is valid iff its buffer is non-empty. An internal node is
    /// valid iff its stored weight equals the sum of its children's weights
    /// and both children are valid. Works on arbitrary externally
    /// constructed trees; recursion depth is bounded by tree height.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Node::Leaf(bytes) => !bytes.is_empty(),
            Node::Internal {
                weight,
                left,
                right,
            } => {
                *weight == left.weight() + right.weight()
                    && left.is_well_formed()
                    && right.is_well_formed()
            }
        }
    }

    /// In-order iterator over the leaf buffers of the subtree.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Fully independent duplicate of the subtree, sharing nothing.
    pub(crate) fn deep_clone(&self) -> Arc<Node> {
        match self {
            Node::Leaf(bytes) => Node::leaf(bytes),
            Node::Internal { left, right, .. } => {
                Node::join(left.deep_clone(), right.deep_clone())
            }
        }
    }

    /// Extract the node covering the byte range `[lo, hi)` of `node`.
    ///
    /// Caller guarantees `lo < hi <= node.weight()`. Untouched subtrees are
    /// reused by reference; new nodes are allocated only where a boundary
    /// cuts through a leaf or an internal node loses a side. A single-side
    /// result degrades to that side, so no one-child internal node can
    /// arise.
    pub(crate) fn slice(node: &Arc<Node>, lo: usize, hi: usize) -> Option<Arc<Node>> {
        if lo == 0 && hi == node.weight() {
            return Some(Arc::clone(node));
        }
        match node.as_ref() {
            Node::Leaf(bytes) => Some(Node::leaf(&bytes[lo..hi])),
            Node::Internal { left, right, .. } => {
                let mid = left.weight();
                let l = if lo < mid {
                    Node::slice(left, lo, hi.min(mid))
                } else {
                    None
                };
                let r = if hi > mid {
                    Node::slice(right, lo.max(mid) - mid, hi - mid)
                } else {
                    None
                };
                match (l, r) {
                    (Some(l), Some(r)) => Some(Node::join(l, r)),
                    (Some(one), None) | (None, Some(one)) => Some(one),
                    (None, None) => None,
                }
            }
        }
    }
}

/// Depth-first in-order walk yielding each leaf buffer.
///
/// Maintains an explicit stack, so traversal depth never touches the call
/// stack regardless of how unbalanced the tree is. Empty leaf buffers
/// (possible only in externally built ill-formed trees) are skipped.
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn empty() -> Leaves<'a> {
        Leaves { stack: Vec::new() }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        loop {
            match self.stack.pop()? {
                Node::Internal { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
                Node::Leaf(bytes) if bytes.is_empty() => continue,
                Node::Leaf(bytes) => return Some(bytes),
            }
        }
    }
}
