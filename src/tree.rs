//! An unbalanced Binary Search Tree whose nodes point back at their parents.
//!
//! Values are kept in sorted order and duplicates are rejected. Nothing is ever rebalanced, so
//! inserting already sorted values produces a tree as deep as it is large.
//!
//! # Examples
//!
//! ```
//! use parented_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.depth(), 0);
//! assert_eq!(tree.balance(), None);
//!
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Inserting a value twice changes nothing.
//! tree.insert(5);
//! assert_eq!(tree.size(), 7);
//!
//! // Neither does deleting a value that isn't there.
//! tree.delete(&6);
//! assert_eq!(tree.size(), 7);
//!
//! tree.delete(&5);
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.size(), 6);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::ptr::NonNull;

use log::{debug, trace};

use crate::error::Error;
use crate::node::{Link, Node};
use crate::traversal::{BreadthFirst, InOrder, PostOrder, PreOrder};
use crate::util::DeleteCase;

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and deleting
/// values.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

// SAFETY: The tree uniquely owns every node reachable from `root`.
unsafe impl<T: Send> Send for Tree<T> {}
// SAFETY: Shared access never mutates a node.
unsafe impl<T: Sync> Sync for Tree<T> {}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // SAFETY: The root link is owning and we just emptied it. `Node::drop` takes care of the
        // rest of the tree.
        drop(unsafe { self.root.take().into_node() });
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self
                .root()
                .map_or_else(Link::none, |root| Link::new_boxed(root.clone())),
            size: self.size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::none(),
            size: 0,
        }
    }

    /// Builds a tree out of an already assembled subtree. The size is counted from the subtree.
    ///
    /// Fails with [`Error::OutOfOrder`] if an in-order walk of `root` isn't strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::{Error, Node, Tree};
    ///
    /// let mut root = Node::new(2);
    /// root.set_left(Some(Node::new(1)));
    /// let tree = Tree::with_root(root).unwrap();
    /// assert_eq!(tree.size(), 2);
    ///
    /// let mut bad = Node::new(2);
    /// bad.set_left(Some(Node::new(3)));
    /// assert_eq!(Tree::with_root(bad).unwrap_err(), Error::OutOfOrder);
    /// ```
    pub fn with_root(mut root: Node<T>) -> Result<Self, Error>
    where
        T: Ord,
    {
        let ascending = root
            .in_order()
            .zip(root.in_order().skip(1))
            .all(|(smaller, larger)| smaller < larger);
        if !ascending {
            return Err(Error::OutOfOrder);
        }

        let size = root.in_order().count();
        root.parent = Link::none();
        Ok(Self {
            root: Link::new_boxed(root),
            size,
        })
    }

    /// The top node of the tree, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// How many values are stored in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`][Tree::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.locate(value).is_some()
    }

    /// Potentially finds the stored value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        // SAFETY: `locate` only returns live nodes of this tree and the returned reference is
        // bound to `&self`.
        self.locate(value).map(|node| unsafe { node.as_ref() }.value())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        iter::successors(self.root(), |node| node.left())
            .last()
            .map(Node::value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        iter::successors(self.root(), |node| node.right())
            .last()
            .map(Node::value)
    }

    /// Inserts `value` unless an equal value is already stored, in which case nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        if let Err(err) = self.try_insert(value) {
            trace!("insert skipped: {err}");
        }
    }

    /// Inserts `value`, reporting [`Error::Duplicate`] if an equal value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.try_insert(1), Ok(()));
    /// assert_eq!(tree.try_insert(1), Err(Error::Duplicate));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), Error>
    where
        T: Ord,
    {
        let Some(mut current) = self.root.0 else {
            trace!("inserting the root");
            self.root = Link::new_boxed(Node::new(value));
            self.size += 1;
            return Ok(());
        };

        let mut depth = 1;
        loop {
            // SAFETY: We hold `&mut self` so no other reference into the tree exists, and every
            // link in the tree points at a live node.
            let node = unsafe { current.as_mut() };
            let slot = match value.cmp(node.value()) {
                Ordering::Equal => return Err(Error::Duplicate),
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };

            match slot.0 {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => {
                    let mut leaf = Node::new(value);
                    leaf.parent = Link(Some(current));
                    *slot = Link::new_boxed(leaf);
                    self.size += 1;
                    trace!("attached a new leaf at depth {}", depth + 1);
                    return Ok(());
                }
            }
        }
    }

    /// Removes the value equal to `value` from the tree. If there is none, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15].into_iter().collect();
    /// tree.delete(&10);
    ///
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [5, 15]);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        if let Err(err) = self.try_delete(value) {
            trace!("delete skipped: {err}");
        }
    }

    /// Removes and returns the value equal to `value`, reporting [`Error::NotFound`] if there is
    /// none.
    ///
    /// A node with two children is never unlinked itself. It takes over the value of its in-order
    /// successor (or predecessor, when it is its parent's right child) and that neighbour, which
    /// has at most one child, is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.try_delete(&2), Ok(2));
    /// assert_eq!(tree.try_delete(&2), Err(Error::NotFound));
    /// ```
    pub fn try_delete(&mut self, value: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let target = self.locate(value).ok_or(Error::NotFound)?;

        // SAFETY: `target` is a live node of this tree, we hold `&mut self`, and no references
        // into the tree outlive the statements that create them.
        let removed = unsafe {
            let (left, right) = {
                let node = target.as_ref();
                (node.left.0, node.right.0)
            };
            let case = DeleteCase::of(left.is_some(), right.is_some());
            debug!("deleting a node ({case:?}) from a tree of size {}", self.size);

            match (case, left, right) {
                (DeleteCase::TwoChildren, Some(left), Some(right)) => {
                    let neighbour = if target.as_ref().is_right_child() {
                        rightmost(left)
                    } else {
                        leftmost(right)
                    };
                    std::mem::swap(
                        (*target.as_ptr()).value_mut(),
                        (*neighbour.as_ptr()).value_mut(),
                    );
                    self.unlink(neighbour)
                }
                _ => self.unlink(target),
            }
        };

        self.size -= 1;
        if self.size == 0 {
            debug!("tree is now empty");
        }
        Ok(removed)
    }

    /// Number of levels in the tree. An empty tree has a depth of 0.
    ///
    /// ```
    /// use parented_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    /// assert_eq!(tree.depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// How many more steps the leftmost path from the root takes than the rightmost one. This is
    /// only a rough skew indicator, not an AVL balance factor. `None` for an empty tree.
    ///
    /// ```
    /// use parented_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 2, 1, 4].into_iter().collect();
    /// assert_eq!(tree.balance(), Some(1));
    /// ```
    pub fn balance(&self) -> Option<isize> {
        let root = self.root()?;
        let left = iter::successors(root.left(), |node| node.left()).count();
        let right = iter::successors(root.right(), |node| node.right()).count();
        Some(left as isize - right as isize)
    }

    /// Values in sorted order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Values with every node before its subtrees, left subtree first.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Values with every node after its subtrees, left subtree first.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Values level by level from the root down, left to right within a level.
    pub fn breadth_first(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self.root())
    }

    /// Descends from the root to the node holding `value`. Running off the bottom of the tree
    /// yields `None`, never the last node visited.
    fn locate(&self, value: &T) -> Option<NonNull<Node<T>>>
    where
        T: Ord,
    {
        let mut current = self.root.0;
        while let Some(ptr) = current {
            // SAFETY: Every link in the tree points at a live node and `&self` keeps the tree
            // from being modified.
            let node = unsafe { ptr.as_ref() };
            current = match value.cmp(node.value()) {
                Ordering::Equal => return Some(ptr),
                Ordering::Less => node.left.0,
                Ordering::Greater => node.right.0,
            };
        }
        None
    }

    /// Removes `target` from the tree, moving its only child (if it has one) into its place, and
    /// returns its value.
    ///
    /// # Safety
    ///
    /// `target` must be a node of this tree with at most one child, and no reference into the
    /// tree may be alive.
    unsafe fn unlink(&mut self, target: NonNull<Node<T>>) -> T {
        let node = &mut *target.as_ptr();
        debug_assert!(node.left.0.is_none() || node.right.0.is_none());

        let mut child = if node.left.0.is_some() {
            node.left.take()
        } else {
            node.right.take()
        };
        let parent = node.parent.take();
        if let Some(child) = child.node_mut() {
            child.parent = parent;
        }

        match parent.0 {
            None => self.root = child,
            Some(parent) => {
                let parent = &mut *parent.as_ptr();
                if parent.left.0 == Some(target) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }

        // Nothing links to `target` anymore and it has no children left.
        let node = *Box::from_raw(target.as_ptr());
        node.into_value()
    }
}

/// The smallest node in the subtree rooted at `node`.
///
/// # Safety
///
/// `node` must be a live node of a tree that isn't being modified.
unsafe fn leftmost<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(left) = node.as_ref().left.0 {
        node = left;
    }
    node
}

/// The largest node in the subtree rooted at `node`.
///
/// # Safety
///
/// `node` must be a live node of a tree that isn't being modified.
unsafe fn rightmost<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(right) = node.as_ref().right.0 {
        node = right;
    }
    node
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Whether every child points back at its parent and the root has no parent.
#[cfg(test)]
fn parents_consistent<T>(tree: &Tree<T>) -> bool {
    let Some(root) = tree.root() else {
        return true;
    };
    if root.parent().is_some() {
        return false;
    }

    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        for child in [node.left(), node.right()].into_iter().flatten() {
            if child.parent.0 != Some(NonNull::from(node)) {
                return false;
            }
            pending.push(child);
        }
    }
    true
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    bst.insert(v.clone());
                    set.insert(v.clone());
                }
                Op::Remove(v) => {
                    if bst.try_delete(v).ok() != set.take(v) {
                        return false;
                    }
                }
                Op::Iter => {
                    if !bst.in_order().eq(set.iter()) {
                        return false;
                    }
                }
            }
            if bst.size() != set.len() || !parents_consistent(bst) {
                return false;
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set)
                && set.iter().all(|value| tree.contains(value))
                && tree.in_order().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn size_counts_distinct(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let distinct: BTreeSet<_> = xs.iter().copied().collect();

            tree.size() == distinct.len() && xs.iter().all(|x| tree.contains(x))
        }
    }
}
