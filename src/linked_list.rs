//! A minimal singly linked list.
//!
//! Values come out in the order they went in: [`insert`][LinkedList::insert] appends at the tail
//! and [`pop`][LinkedList::pop] takes from the head.
//!
//! # Examples
//!
//! ```
//! use parented_bst::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert(123);
//! list.insert(456);
//!
//! assert_eq!(list.size(), 2);
//! assert_eq!(list.display(), "(123, 456)");
//! assert_eq!(list.search(&123), Some(&123));
//!
//! assert_eq!(list.pop().map(|node| *node.get_data()), Some(123));
//! assert_eq!(list.display(), "(456)");
//! ```

use std::fmt;
use std::mem;

use log::trace;

use crate::error::Error;

/// A list cell: a value and the rest of the list.
#[derive(Debug)]
pub struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a node with no successor.
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// Replaces the stored value.
    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    /// The stored value.
    pub fn get_data(&self) -> &T {
        &self.data
    }

    /// Replaces the successor, returning the previous one.
    pub fn set_next(&mut self, next: Option<Self>) -> Option<Self> {
        mem::replace(&mut self.next, next.map(Box::new)).map(|node| *node)
    }

    /// The successor, if any.
    pub fn get_next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Consumes the node and returns its value, dropping any successors.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A singly linked list.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{data}")?;
        }
        f.write_str(")")
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Appends `data` at the tail.
    pub fn insert(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(data)));
        self.size += 1;
        trace!("list grew to {} nodes", self.size);
    }

    /// Detaches and returns the head node.
    pub fn pop(&mut self) -> Option<Node<T>> {
        let mut head = self.head.take()?;
        self.head = head.next.take();
        self.size -= 1;
        Some(*head)
    }

    /// Number of values in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first stored value equal to `data`.
    pub fn search(&self, data: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|stored| *stored == data)
    }

    /// Removes the first value equal to `data`, reporting [`Error::NotFound`] if there is none.
    pub fn remove(&mut self, data: &T) -> Result<T, Error>
    where
        T: PartialEq,
    {
        let position = self
            .iter()
            .position(|stored| stored == data)
            .ok_or(Error::NotFound)?;

        let mut cursor = &mut self.head;
        for _ in 0..position {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        let mut removed = cursor.take().ok_or(Error::NotFound)?;
        *cursor = removed.next.take();
        self.size -= 1;
        Ok(removed.data)
    }

    /// Renders the values as `(a, b, c)`.
    pub fn display(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Iterator over the values of a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.get_next();
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut size = 0;
        let mut tail = &mut list.head;
        for data in iter {
            let node = tail.insert(Box::new(Node::new(data)));
            tail = &mut node.next;
            size += 1;
        }
        list.size = size;
        list
    }
}
