//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes
//! keep a pointer back to their parent, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does
//! nothing to keep its height down, so the order of insertion decides its shape.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Parent pointers
//!
//! Each [`Node`] also points at its parent. Deletion uses these to splice a
//! node out of the tree without walking down from the root a second time.
//!
//! ## Features
//!
//! - `dot` (default): [`Tree::to_dot_graph`] for rendering with Graphviz.
//!
//! The [`linked_list`] module holds a small singly linked list which is
//! unrelated to the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(feature = "dot")]
mod dot;
mod error;
pub mod linked_list;
mod node;
pub mod traversal;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::Error;
pub use node::Node;
pub use tree::Tree;
