//! Detached tree nodes used to hand values and whole subtrees to a [`Tree`](crate::Tree).

use std::fmt;

use serde::Deserialize;

/// An owned vertex: one value plus its ordered children.
///
/// `Node` is the construction unit of the crate. It is never stored in a tree directly:
/// [`Tree::set_root`](crate::Tree::set_root) and [`Tree::attach_child`](crate::Tree::attach_child)
/// copy it (including all descendants) into the tree's arena.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node<T> {
    pub value: T,
    #[serde(default = "Vec::new")]
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Builder style: append `child` and return self.
    pub fn with_child(mut self, child: Node<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node<T>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Number of vertices in this subtree, self included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
