//! The cell a [`Tree`][crate::Tree] is built from.
//!
//! A [`Node`] owns its two children and keeps a non-owning pointer back to its parent. The parent
//! pointer is rewritten every time a child is attached and cleared every time a child is
//! detached, so for any node `n` inside a tree `n.left.parent == n` (and the same on the right).
//!
//! # Examples
//!
//! ```
//! use parented_bst::{Node, Tree};
//!
//! let mut root = Node::new(5);
//! root.set_left(Some(Node::new(3)));
//! root.set_right(Some(Node::new(8)));
//!
//! assert_eq!(root.depth(), 2);
//! assert_eq!(root.in_order().copied().collect::<Vec<_>>(), [3, 5, 8]);
//!
//! let tree = Tree::with_root(root).unwrap();
//! assert_eq!(tree.size(), 3);
//! ```

use std::fmt;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};

use crate::traversal::{BreadthFirst, InOrder, PostOrder, PreOrder};

/// A nullable pointer to a heap allocated [`Node`]. Whether it owns the node depends on where it
/// is stored: `left`/`right` own, `parent` only borrows.
pub(crate) struct Link<T>(pub(crate) Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    pub(crate) const fn none() -> Self {
        Self(None)
    }

    /// Moves `node` onto the heap and points its children back at the new address.
    pub(crate) fn new_boxed(node: Node<T>) -> Self {
        let node = Box::leak(Box::new(node));
        node.fix_left_child_parent();
        node.fix_right_child_parent();
        Self(Some(NonNull::from(node)))
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty link always points at a live node that was allocated in
        // `Link::new_boxed`. Because we take `&self`, the returned reference can't alias with one
        // handed out by `node_mut` through the same link.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: See `node`.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Takes the node back off the heap.
    ///
    /// # Safety
    ///
    /// The link must be the owning one (a `left`, `right` or tree root link) and no other owning
    /// link may point at the same node afterwards.
    pub(crate) unsafe fn into_node(self) -> Option<Node<T>> {
        self.0.map(|ptr| *Box::from_raw(ptr.as_ptr()))
    }
}

/// A node of a binary search tree. It owns up to two children.
///
/// Nodes can be assembled by hand with [`set_left`][Node::set_left] and
/// [`set_right`][Node::set_right] and then handed to [`Tree::with_root`][crate::Tree::with_root],
/// which checks that the ordering invariant holds.
pub struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
}

// SAFETY: A `Node` uniquely owns its children, exactly like a `Box` would. The parent pointer is
// only followed while the whole tree is borrowed.
unsafe impl<T: Send> Send for Node<T> {}
// SAFETY: Shared access never mutates through any of the links.
unsafe impl<T: Sync> Sync for Node<T> {}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending: Vec<NonNull<Self>> =
            self.left.take().0.into_iter().chain(self.right.take().0).collect();

        while let Some(ptr) = pending.pop() {
            // SAFETY: Every child is owned by exactly one link and that link has just been
            // emptied, so nothing else can reach it. It was allocated in `Link::new_boxed`.
            let mut node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.extend(node.left.take().0);
            pending.extend(node.right.take().0);
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new(self.value.clone());
        copy.left = Self::leaf_copy(self.left());
        copy.right = Self::leaf_copy(self.right());

        let mut pending: Vec<(&Self, NonNull<Self>)> = Vec::new();
        pending.extend(self.left().zip(copy.left.0));
        pending.extend(self.right().zip(copy.right.0));
        while let Some((source, mut target)) = pending.pop() {
            // SAFETY: `target` was allocated by `leaf_copy` and is only reachable through `copy`,
            // which nothing else can see until we return it.
            let target = unsafe { target.as_mut() };
            target.left = Self::leaf_copy(source.left());
            target.right = Self::leaf_copy(source.right());
            target.fix_left_child_parent();
            target.fix_right_child_parent();
            pending.extend(source.left().zip(target.left.0));
            pending.extend(source.right().zip(target.right.0));
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Self::value))
            .field("right", &self.right().map(Self::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Creates a detached node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: Link::none(),
            right: Link::none(),
            parent: Link::none(),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Only meaningful for nodes living inside a `Tree`. A detached node's children may still
    /// point at the address it had before being moved.
    pub(crate) fn parent(&self) -> Option<&Self> {
        self.parent.node()
    }

    /// Replaces the left child, returning the previous one detached from this node.
    ///
    /// ```
    /// use parented_bst::Node;
    ///
    /// let mut root = Node::new(2);
    /// assert!(root.set_left(Some(Node::new(1))).is_none());
    ///
    /// let old = root.set_left(Some(Node::new(0))).unwrap();
    /// assert_eq!(old.value(), &1);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(0));
    /// ```
    pub fn set_left(&mut self, child: Option<Self>) -> Option<Self> {
        let previous = self.take_left();
        if let Some(child) = child {
            self.left = Link::new_boxed(child);
            self.fix_left_child_parent();
        }
        previous
    }

    /// Replaces the right child, returning the previous one detached from this node.
    pub fn set_right(&mut self, child: Option<Self>) -> Option<Self> {
        let previous = self.take_right();
        if let Some(child) = child {
            self.right = Link::new_boxed(child);
            self.fix_right_child_parent();
        }
        previous
    }

    /// Detaches and returns the left child along with its subtree.
    pub fn take_left(&mut self) -> Option<Self> {
        // SAFETY: `left` is an owning link and we just emptied it.
        let mut left = unsafe { self.left.take().into_node() }?;
        left.parent = Link::none();
        Some(left)
    }

    /// Detaches and returns the right child along with its subtree.
    pub fn take_right(&mut self) -> Option<Self> {
        // SAFETY: `right` is an owning link and we just emptied it.
        let mut right = unsafe { self.right.take().into_node() }?;
        right.parent = Link::none();
        Some(right)
    }

    /// Consumes the node, dropping any children, and returns its value.
    pub fn into_value(mut self) -> T {
        drop(self.take_left());
        drop(self.take_right());

        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped or used again so the value is moved out exactly once.
        // The children were released above so nothing leaks.
        unsafe { ptr::read(&this.value) }
    }

    /// Number of levels in the subtree rooted here. A leaf has a depth of 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left().map(|left| (left, level + 1)));
            pending.extend(node.right().map(|right| (right, level + 1)));
        }
        deepest
    }

    /// Values of this subtree in sorted (left, self, right) order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(Some(self))
    }

    /// Values of this subtree in (self, left, right) order.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(Some(self))
    }

    /// Values of this subtree in (left, right, self) order.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(Some(self))
    }

    /// Values of this subtree level by level, left to right.
    pub fn breadth_first(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(Some(self))
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Whether this node hangs off its parent's right side. Roots are not right children.
    pub(crate) fn is_right_child(&self) -> bool {
        let self_ptr = NonNull::from(self);
        self.parent()
            .map_or(false, |parent| parent.right.0 == Some(self_ptr))
    }

    /// A childless copy of `source` on the heap, or an empty link.
    fn leaf_copy(source: Option<&Self>) -> Link<T>
    where
        T: Clone,
    {
        source.map_or_else(Link::none, |node| Link::new_boxed(Self::new(node.value.clone())))
    }

    pub(crate) fn fix_left_child_parent(&mut self) {
        let self_ptr = NonNull::from(&mut *self);
        if let Some(left) = self.left.node_mut() {
            left.parent = Link(Some(self_ptr));
        }
    }

    pub(crate) fn fix_right_child_parent(&mut self) {
        let self_ptr = NonNull::from(&mut *self);
        if let Some(right) = self.right.node_mut() {
            right.parent = Link(Some(self_ptr));
        }
    }
}
