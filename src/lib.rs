//! This crate implements a linked, node-based Binary Search Tree (BST)
//! mapping keys to values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and an
//! associated value and will sometimes have child `Node`s. The most
//! important invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    less than or equal to its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Equal keys going left means duplicate keys are allowed: inserting a key
//! twice keeps both entries rather than overwriting the first. Searching
//! follows the same descent rule as insertion and returns whichever entry
//! for a key it reaches first from the root.
//!
//! Searching takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing, so inserting keys in sorted order degrades the height to
//! `O(N)`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod linked;

#[cfg(test)]
pub(crate) mod test;
