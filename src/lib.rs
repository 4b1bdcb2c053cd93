//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any totally ordered
//! value type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! has up to two child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Inserting alone keeps this strictly greater;
//!    an equal value only ends up on the right when removing a value moves one of several
//!    equal copies up.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a
//! leaf `Node`. Nothing here rebalances the tree, so random insertion orders give an expected
//! height of `O(lg N)` while sorted insertion orders give a height of `N`. Visiting the left
//! subtree, then the subtree root, then the right subtree yields the values in sorted order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::from([30, 20, 10, 80, 40]);
//!
//! tree.remove(&30);
//! tree.insert(18);
//!
//! assert!(tree.search(&18));
//! assert!(!tree.search(&30));
//! assert_eq!(tree.inorder(), vec![&10, &18, &20, &40, &80]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod traversal;
pub mod tree;
mod util;


pub use traversal::Order;
pub use tree::OrderedTree;
