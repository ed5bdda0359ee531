//! Rope construction.
//!
//! Single-buffer ropes become one leaf. Sequence builds produce a balanced
//! binary tree of leaves, bottom-up, by splitting the segment list at its
//! midpoint, giving `O(log n)` height for `n` segments. Any non-empty
//! segment count is accepted.

use std::sync::Arc;

use crate::error::RopeError;
use crate::node::Node;
use crate::rope::Rope;

impl Rope {
    /// Build a rope from a single string. Empty input yields the empty rope.
    ///
    /// # Example
    ///
    /// ```
    /// use ropewalk::Rope;
    ///
    /// let r = Rope::from_text("foobar");
    /// assert_eq!(r.len(), 6);
    /// assert!(Rope::from_text("").is_empty());
    /// ```
    pub fn from_text(text: &str) -> Rope {
        Rope::from_chunk(text.as_bytes())
    }

    /// Build a rope from a single byte buffer. Empty input yields the
    /// empty rope.
    pub fn from_chunk(bytes: &[u8]) -> Rope {
        if bytes.is_empty() {
            Rope::new()
        } else {
            Rope::from_root(Node::leaf(bytes))
        }
    }

    /// Build a rope from an ordered sequence of segments as a balanced
    /// binary tree of leaves.
    ///
    /// Empty segments carry no bytes and are dropped before building; a
    /// sequence of only empty segments yields the empty rope. A sequence
    /// with no segments at all is rejected with
    /// [`RopeError::EmptySequence`].
    ///
    /// # Example
    ///
    /// ```
    /// use ropewalk::Rope;
    ///
    /// let r = Rope::from_segments(["foo", "bar"]).unwrap();
    /// assert_eq!(r.flatten(), b"foobar");
    /// assert!(Rope::from_segments::<[&str; 0], &str>([]).is_err());
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Result<Rope, RopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut any = false;
        let mut leaves = Vec::new();
        for segment in segments {
            any = true;
            let bytes = segment.as_ref();
            if !bytes.is_empty() {
                leaves.push(Node::leaf(bytes));
            }
        }
        if !any {
            return Err(RopeError::EmptySequence);
        }
        if leaves.is_empty() {
            return Ok(Rope::new());
        }
        Ok(Rope::from_root(build_balanced(&leaves)))
    }
}

/// Midpoint-split recursion over a non-empty leaf list.
fn build_balanced(leaves: &[Arc<Node>]) -> Arc<Node> {
    if leaves.len() == 1 {
        return Arc::clone(&leaves[0]);
    }
    let mid = leaves.len() / 2;
    Node::join(build_balanced(&leaves[..mid]), build_balanced(&leaves[mid..]))
}

impl From<&str> for Rope {
    fn from(text: &str) -> Rope {
        Rope::from_text(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Rope {
        Rope::from_text(&text)
    }
}
