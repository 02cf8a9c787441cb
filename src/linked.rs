//! A linked BST. Every node individually owns its children through
//! owned-or-absent links, the way one would draw the structure on a
//! whiteboard. Mutating operations recurse down the affected path and
//! return the new subtree root for the caller to re-link, so no node
//! needs a pointer back to its parent.
//!
//! Equal keys are sent into the left subtree, so inserting a key twice
//! keeps both entries. [`Tree::find`] follows the same descent rule and
//! returns the first entry for the key on the path from the root.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_err());
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.find(&1), Ok(&"one"));
//! assert_eq!(tree.len(), 1);
//!
//! // Inserting the same key again keeps both entries.
//! tree.insert(1, "uno");
//! assert_eq!(tree.len(), 2);
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::{TreeError, TreeResult};

/// An owned-or-absent child slot. Absence is the empty subtree.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that
/// is associated with that key. It exclusively owns its children, so
/// dropping a node drops its whole subtree.
#[derive(Clone, Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn has_left(&self) -> bool {
        self.left.is_some()
    }

    #[allow(dead_code)]
    fn has_right(&self) -> bool {
        self.right.is_some()
    }
}

/// A key-ordered Binary Search Tree mapping keys to values. This can be
/// used for inserting, finding, and clearing keys and values. The tree is
/// unbalanced: the shape (and so the cost of later operations) depends on
/// the insertion order.
///
/// Keys only need to implement [`Ord`]. Rendering the tree with
/// [`Display`][fmt::Display] additionally needs `V: Display`, and failed
/// lookups render the searched key into the returned error, which needs
/// `K: Display`.
#[derive(Clone, Debug)]
pub struct Tree<K, V> {
    root: Link<K, V>,
    size: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    // The derived drop would recurse once per level, which overflows the
    // stack on badly skewed trees. `clear` unlinks iteratively.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree from parallel key and value sequences, exactly as if
    /// each pair had been passed to [`insert`][Self::insert] in order.
    ///
    /// The sequences must have equal lengths; that is the caller's
    /// contract and only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree = Tree::from_parallel(vec![2, 1, 3], vec!["x", "y", "z"]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.find(&1), Ok(&"y"));
    /// ```
    pub fn from_parallel(keys: Vec<K>, values: Vec<V>) -> Self
    where
        K: Ord,
    {
        debug_assert_eq!(keys.len(), values.len());

        let mut tree = Self::new();
        for (key, value) in keys.into_iter().zip(values) {
            tree.insert(key, value);
        }
        tree
    }

    /// The number of entries currently in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts the given value into the tree stored at the given key.
    /// Inserting a new value for an existing key keeps both entries; the
    /// new one goes into the left subtree of the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Ok(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.len(), 2);
    /// // The entry reached first from the root wins the lookup.
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        self.root = Some(Self::insert_at(self.root.take(), key, value));
        self.size += 1;
    }

    /// Recursive worker for [`insert`][Self::insert]: takes ownership of a
    /// subtree link and returns the root of the edited subtree, which the
    /// caller re-links into the parent. An empty link is where the new
    /// node gets allocated.
    fn insert_at(link: Link<K, V>, key: K, value: V) -> Box<Node<K, V>>
    where
        K: Ord,
    {
        match link {
            None => Node::new(key, value),
            Some(mut node) => {
                match key.cmp(&node.key) {
                    // Equal keys go left so duplicates accumulate below
                    // the first node holding that key.
                    Ordering::Less | Ordering::Equal => {
                        node.left = Some(Self::insert_at(node.left.take(), key, value));
                    }
                    Ordering::Greater => {
                        node.right = Some(Self::insert_at(node.right.take(), key, value));
                    }
                }
                node
            }
        }
    }

    /// Finds the value associated with the given key. A key that is
    /// absent from the tree yields a [`TreeError::KeyNotFound`] carrying
    /// the searched key and the tree size at the time of the lookup.
    ///
    /// The descent mirrors the insert rule: strictly smaller keys go
    /// left, everything else goes right. With duplicate keys this returns
    /// the first matching entry on the path down from the root, which is
    /// not necessarily the most recently inserted one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert!(tree.find(&42).is_err());
    /// ```
    pub fn find(&self, key: &K) -> TreeResult<&V>
    where
        K: Ord + fmt::Display,
    {
        Self::find_in(self.root.as_deref(), key)
            .ok_or_else(|| TreeError::key_not_found(key, self.size))
    }

    fn find_in<'a>(link: Option<&'a Node<K, V>>, key: &K) -> Option<&'a V>
    where
        K: Ord,
    {
        let node = link?;
        match key.cmp(&node.key) {
            Ordering::Equal => Some(&node.value),
            Ordering::Less => Self::find_in(node.left.as_deref(), key),
            Ordering::Greater => Self::find_in(node.right.as_deref(), key),
        }
    }

    /// Removes every entry and returns the tree to the empty state.
    /// Clearing an already-empty tree is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::from_parallel(vec![2, 1, 3], vec!["x", "y", "z"]);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(tree.find(&2).is_err());
    /// ```
    pub fn clear(&mut self) {
        // Unlink with an explicit stack instead of post-order recursion.
        // Each node is freed only after being detached from its children,
        // and the stack depth stays bounded by the live node count rather
        // than the tree height.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Returns the entry with the smallest key, or `None` when the tree
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree = Tree::from_parallel(vec![5, 3, 8], vec!["a", "b", "c"]);
    ///
    /// assert_eq!(tree.min(), Some((&3, &"b")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(|root| {
            let node = Self::minimum(root);
            (&node.key, &node.value)
        })
    }

    /// The leftmost node of a non-empty subtree. Taking `&Node` rather
    /// than a link makes the non-emptiness precondition the caller's
    /// problem.
    fn minimum(node: &Node<K, V>) -> &Node<K, V> {
        match node.left.as_deref() {
            Some(left) => Self::minimum(left),
            None => node,
        }
    }

    /// Removes the leftmost node of a non-empty subtree and returns the
    /// root of what remains, in the same ownership-returning style as
    /// [`insert_at`][Self::insert_at]. If the subtree root itself is the
    /// minimum, its right child (possibly absent) takes its place.
    ///
    /// This is the splicing step for removing a node with two children:
    /// copy the in-order successor up, then delete the minimum of the
    /// right subtree. No public removal is wired up yet, so only tests
    /// call this.
    #[allow(dead_code)]
    fn delete_minimum(mut node: Box<Node<K, V>>) -> Link<K, V> {
        if !node.has_left() {
            return node.right.take();
        }
        node.left = node.left.take().and_then(Self::delete_minimum);
        Some(node)
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree = Tree::from_parallel(vec![2, 1, 3], vec!["x", "y", "z"]);
    /// let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    ///
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the size and the values in ascending key order:
/// `<BinaryTree> size: 3 values: [ b a c ]`.
impl<K, V> fmt::Display for Tree<K, V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BinaryTree> size: {} values: [ ", self.size)?;
        for (_, value) in self.iter() {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}

/// An in-order iterator over a [`Tree`], yielding `(&K, &V)` pairs in
/// ascending key order. Created by [`Tree::iter`].
///
/// Traversal keeps an explicit stack of the unvisited left spine, so
/// iterating a skewed tree cannot overflow the call stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a flat model of its
    /// expected contents, so properties can compare the two afterwards.
    fn do_ops(ops: &[Op<i8, i8>], tree: &mut Tree<i8, i8>, model: &mut Vec<(i8, i8)>) {
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    tree.insert(*k, *v);
                    model.push((*k, *v));
                }
                Op::Clear => {
                    tree.clear();
                    model.clear();
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_size_and_key_order(ops: Vec<Op<i8, i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();
            do_ops(&ops, &mut tree, &mut model);

            let mut expected: Vec<i8> = model.iter().map(|(k, _)| *k).collect();
            expected.sort_unstable();
            let actual: Vec<i8> = tree.iter().map(|(k, _)| *k).collect();

            tree.len() == model.len() && actual == expected
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x, *x);
            }

            xs.iter().all(|x| tree.find(x) == Ok(x))
        }
    }

    quickcheck::quickcheck! {
        fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
            use std::collections::HashSet;

            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x, *x);
            }
            let added: HashSet<_> = xs.into_iter().collect();

            nots.iter()
                .filter(|x| !added.contains(x))
                .all(|x| tree.find(x).is_err())
        }
    }
}
