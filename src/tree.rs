//! An owned, unbalanced BST. Every node is held outright by exactly one slot (the tree's root or
//! one of its parent's children) so there are no parent pointers to keep in sync and nothing
//! here needs `unsafe`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.search(&1));
//!
//! // Removing a value that isn't there does nothing.
//! assert_eq!(tree.remove(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::util::Side;

/// A slot that owns (or doesn't own) a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of values. Values that compare equal to a value already in
/// the tree are stored again, to the left of it.
///
/// Everything left of a node is `<=` it. Everything right of it is `>` it, except that a value
/// moved up by [`remove`][Self::remove] may still have equal copies in its right subtree, so in
/// general the right side is only `>=`. Searching and removing stay correct either way.
///
/// The tree is deliberately neither `Clone` nor `Copy`: it's the single owner of its nodes and
/// can only be moved.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree by inserting each value, in order, into an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// How many values are stored in the tree, counting repeated values once per insertion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value as a new leaf. Values greater than a node go to its right, all
    /// others (including equal values) go to its left. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// // The second `2` became the left child of the first.
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.inorder(), vec![&2, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            depth += 1;
            let side = Side::toward(&value, &node.val);
            link = node.child_mut(side);
        }

        trace!("Attaching new leaf at depth {depth}");
        *link = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([5, 3, 8]);
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.val) {
                Ordering::Greater => &node.right,
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Removes one value equal to `value` from the tree and returns it. If the tree has no such
    /// value, nothing happens and `None` is returned.
    ///
    /// A node with a right child takes its in-order successor's value and the successor's node
    /// is spliced out. If that successor had equal copies above it, they're now to the right of
    /// the value that moved up. Otherwise a node with a left child takes its in-order predecessor's value
    /// instead. A leaf is simply detached from the slot that owns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([5, 3, 8, 7]);
    ///
    /// // `5` has a right subtree so its successor, `7`, moves up into the root.
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.preorder(), vec![&7, &3, &8]);
    ///
    /// assert_eq!(tree.remove(&42), None);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            // Decide with a shared borrow so that stopping on a match leaves `link` usable.
            let side = match link.as_deref() {
                None => {
                    debug!("Value to remove isn't in the tree; nothing to do");
                    return None;
                }
                Some(node) => match value.cmp(&node.val) {
                    Ordering::Greater => Side::Right,
                    Ordering::Less => Side::Left,
                    Ordering::Equal => break,
                },
            };
            let Some(node) = link.as_deref_mut() else {
                unreachable!("`link` was just seen to hold a node.");
            };
            link = node.child_mut(side);
        }

        let removed = unlink(link)?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes every value, releasing the nodes the same way dropping the tree does.
    pub fn clear(&mut self) {
        let released = release(self.root.take());
        debug_assert_eq!(released, self.len);
        self.len = 0;
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedTree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

pub(crate) struct Node<T> {
    pub(crate) val: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(val: T) -> Box<Self> {
        Box::new(Self {
            val,
            left: None,
            right: None,
        })
    }

    fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Removes the value of the node owned by `link`, returning `None` if `link` is empty.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_deref_mut()?;

    // A right subtree always wins, even when there is a left one too.
    let (replacement, neighbor) = if node.right.is_some() {
        (take_extreme(&mut node.right, Side::Left), "successor")
    } else {
        (take_extreme(&mut node.left, Side::Right), "predecessor")
    };

    match replacement {
        Some(value) => {
            trace!("Moved in-order {neighbor} up and spliced out its node");
            Some(mem::replace(&mut node.val, value))
        }
        None => {
            trace!("Detaching leaf");
            link.take().map(|leaf| leaf.val)
        }
    }
}

/// Detaches the node furthest toward `side` in the subtree owned by `link` and returns its value.
/// That node has no child on `side`, so its slot is relinked to its other child. An empty `link`
/// yields `None`.
fn take_extreme<T>(mut link: &mut Link<T>, side: Side) -> Option<T> {
    loop {
        match link.as_deref() {
            None => return None,
            Some(node) if node.child(side).is_none() => break,
            Some(_) => {}
        }
        let Some(node) = link.as_deref_mut() else {
            unreachable!("`link` was just seen to hold a node.");
        };
        link = node.child_mut(side);
    }

    let mut extreme = link.take()?;
    *link = extreme.child_mut(side.opposite()).take();
    Some(extreme.val)
}

/// Frees every node of the subtree in post-order (left subtree, right subtree, then the node)
/// using an explicit stack so list-shaped trees can't overflow the call stack. Returns how many
/// nodes were freed.
fn release<T>(root: Link<T>) -> usize {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    let mut released = 0;
    while let Some(top) = stack.last_mut() {
        if let Some(left) = top.left.take() {
            stack.push(left);
        } else if let Some(right) = top.right.take() {
            stack.push(right);
        } else {
            drop(stack.pop());
            released += 1;
        }
    }

    if released > 0 {
        debug!("Released {released} nodes");
    }
    released
}
