//! Lazy iterators over the values of a subtree.
//!
//! Every iterator borrows the tree it walks, so the tree can't be modified while one is alive.
//! None of them recurse: each keeps its own explicit stack or queue of pending nodes, which keeps
//! degenerate (list shaped) trees from exhausting the call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Sorted (left, node, right) traversal. Created by [`Tree::in_order`][crate::Tree::in_order]
/// and [`Node::in_order`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been scheduled but whose own value hasn't been yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// (node, left, right) traversal. Created by [`Tree::pre_order`][crate::Tree::pre_order] and
/// [`Node::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// (left, right, node) traversal. Created by [`Tree::post_order`][crate::Tree::post_order] and
/// [`Node::post_order`].
pub struct PostOrder<'a, T> {
    /// The flag is set once a node's children have been pushed above it.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Level order traversal, left to right within a level. Created by
/// [`Tree::breadth_first`][crate::Tree::breadth_first] and [`Node::breadth_first`].
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirst<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for BreadthFirst<'_, T> {}
