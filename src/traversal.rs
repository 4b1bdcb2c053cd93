//! Depth-first walks of an [`OrderedTree`] and its three-line text dump.
//!
//! Every walk materializes into a `Vec` of borrowed values, so it can be taken again at any
//! point and always reflects the tree as it is right now. The walks keep their own stack rather
//! than recursing so a degenerate tree (e.g. built from sorted input) is walked safely.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree = OrderedTree::from([2, 1, 3]);
//!
//! assert_eq!(tree.traverse(Order::Preorder), vec![&2, &1, &3]);
//! assert_eq!(tree.traverse(Order::Inorder), vec![&1, &2, &3]);
//! assert_eq!(tree.traverse(Order::Postorder), vec![&1, &3, &2]);
//!
//! assert_eq!(
//!     tree.display(),
//!     "Preorder: 2 1 3\nInorder: 1 2 3\nPostorder: 1 3 2\n"
//! );
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

/// The order a depth-first walk visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. This is sorted order.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl Order {
    /// Every order, in the order they're shown by [`OrderedTree::display`].
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];

    /// The label starting this order's line in [`OrderedTree::display`].
    pub fn label(self) -> &'static str {
        match self {
            Self::Preorder => "Preorder:",
            Self::Inorder => "Inorder:",
            Self::Postorder => "Postorder:",
        }
    }
}

impl<T> OrderedTree<T> {
    /// Collects every value in the tree in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        match order {
            Order::Preorder => self.preorder(),
            Order::Inorder => self.inorder(),
            Order::Postorder => self.postorder(),
        }
    }

    /// Collects every value, visiting each node before its left and then its right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(&node.val);
            // Right goes on first so left comes off first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        values
    }

    /// Collects every value in sorted (non-decreasing) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([3, 1, 2, 1]);
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut next = self.root();
        loop {
            while let Some(node) = next {
                stack.push(node);
                next = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    values.push(&node.val);
                    next = node.right.as_deref();
                }
                None => break,
            }
        }

        values
    }

    /// Collects every value, visiting each node after its left and then its right subtree.
    pub fn postorder(&self) -> Vec<&T> {
        // Node, right, left reversed is left, right, node.
        let mut values = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(&node.val);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        values.reverse();

        values
    }

    /// Renders the preorder, inorder, and postorder walks as labelled lines.
    ///
    /// This is the same text as the tree's [`Display`][fmt::Display] implementation.
    pub fn display(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in Order::ALL {
            f.write_str(order.label())?;
            for value in self.traverse(order) {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
