//! Companion red-black keyed map for `ropewalk`.
//!
//! A left-leaning red-black tree over owned boxed nodes, supporting
//! insertion and lookup only — deletion is deliberately out of scope.
//! Consumers treat it purely as a keyed lookup structure.
//!
//! # Example
//!
//! ```
//! use ropewalk_rb_map::RbMap;
//!
//! let mut map = RbMap::new();
//! map.set(3, "c");
//! map.set(1, "a");
//! map.set(2, "b");
//! assert_eq!(map.get(&2), Some(&"b"));
//! assert_eq!(map.get(&9), None);
//! map.assert_valid().unwrap();
//! ```

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    color: Color,
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

/// Red-black tree map with insertion and lookup.
///
/// Inserting an existing key replaces its value. Lookup is an iterative
/// descent; insertion recurses to tree height, which the red-black
/// invariants keep at O(log n).
#[derive(Debug)]
pub struct RbMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> Default for RbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> RbMap<K, V> {
    pub fn new() -> Self {
        RbMap { root: None, len: 0 }
    }

    /// Insert `key` with `value`, replacing any existing value.
    /// Returns `true` when the key was not present before.
    pub fn set(&mut self, key: K, value: V) -> bool {
        let (mut root, inserted) = insert(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return Some(&n.value),
            };
        }
        None
    }

    pub fn has(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Verify the red-black invariants over the whole tree: the root is
    /// black, no red node has a red child, red links lean left, every
    /// path carries the same number of black nodes, and keys are in
    /// strict BST order.
    pub fn assert_valid(&self) -> Result<(), String> {
        if is_red(&self.root) {
            return Err("root is red".to_string());
        }
        check(self.root.as_deref(), None, None).map(|_| ())
    }
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    matches!(link.as_deref(), Some(n) if n.color == Color::Red)
}

/// Flip the colors of a node and both of its children.
fn color_flip<K, V>(h: &mut Node<K, V>) {
    h.color = h.color.flip();
    if let Some(l) = h.left.as_deref_mut() {
        l.color = l.color.flip();
    }
    if let Some(r) = h.right.as_deref_mut() {
        r.color = r.color.flip();
    }
}

fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h.right.take().expect("rotate_left requires right child");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.left = Some(h);
    x
}

fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = h.left.take().expect("rotate_right requires left child");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.right = Some(h);
    x
}

/// Restore the left-leaning invariants after an insertion below `h`.
fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && h.left.as_deref().is_some_and(|l| is_red(&l.left)) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        color_flip(&mut h);
    }
    h
}

fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, bool) {
    let mut h = match link {
        None => {
            return (
                Box::new(Node {
                    color: Color::Red,
                    key,
                    value,
                    left: None,
                    right: None,
                }),
                true,
            )
        }
        Some(h) => h,
    };
    let inserted = match key.cmp(&h.key) {
        Ordering::Less => {
            let (l, inserted) = insert(h.left.take(), key, value);
            h.left = Some(l);
            inserted
        }
        Ordering::Greater => {
            let (r, inserted) = insert(h.right.take(), key, value);
            h.right = Some(r);
            inserted
        }
        Ordering::Equal => {
            h.value = value;
            false
        }
    };
    (balance(h), inserted)
}

/// Returns the black height of `node`, checking ordering, red-red, and
/// left-leaning violations on the way down.
fn check<K: Ord, V>(
    node: Option<&Node<K, V>>,
    min: Option<&K>,
    max: Option<&K>,
) -> Result<usize, String> {
    let Some(n) = node else {
        return Ok(1);
    };
    if min.is_some_and(|min| n.key <= *min) || max.is_some_and(|max| n.key >= *max) {
        return Err("keys out of order".to_string());
    }
    if n.color == Color::Red && (is_red(&n.left) || is_red(&n.right)) {
        return Err("red node has a red child".to_string());
    }
    if is_red(&n.right) {
        return Err("right-leaning red link".to_string());
    }
    let left = check(n.left.as_deref(), min, Some(&n.key))?;
    let right = check(n.right.as_deref(), Some(&n.key), max)?;
    if left != right {
        return Err(format!("black height mismatch: {left} != {right}"));
    }
    Ok(left + usize::from(n.color == Color::Black))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map() {
        let map: RbMap<i32, i32> = RbMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(&1), None);
        map.assert_valid().unwrap();
    }

    #[test]
    fn set_and_get() {
        let mut map = RbMap::new();
        assert!(map.set("b", 2));
        assert!(map.set("a", 1));
        assert!(map.set("c", 3));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&"a"), Some(&1));
        assert_eq!(map.get(&"b"), Some(&2));
        assert_eq!(map.get(&"c"), Some(&3));
        assert!(!map.has(&"d"));
        map.assert_valid().unwrap();
    }

    #[test]
    fn set_replaces_on_key_collision() {
        let mut map = RbMap::new();
        assert!(map.set(1, "one"));
        assert!(!map.set(1, "uno"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"uno"));
        map.assert_valid().unwrap();
    }

    #[test]
    fn ascending_ladder_stays_balanced() {
        let mut map = RbMap::new();
        for i in 0..300 {
            map.set(i, i * 2);
            map.assert_valid().unwrap();
        }
        assert_eq!(map.len(), 300);
        for i in 0..300 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn descending_ladder_stays_balanced() {
        let mut map = RbMap::new();
        for i in (0..300).rev() {
            map.set(i, i);
            map.assert_valid().unwrap();
        }
        assert_eq!(map.len(), 300);
        assert!(map.has(&0) && map.has(&299));
    }
}
