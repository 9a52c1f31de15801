use generational_arena::Arena;
use tracing::instrument;

use super::{cursor_iterator, Order, TreeCursor};
use crate::arena::{NodeId, TreeNode};

/// Left subtree, node, right subtree.
///
/// The first child of a node is its left child and the second its right child, so a
/// node with a single child has only a left subtree.
#[derive(Debug, Clone)]
pub struct InOrder<'a, T> {
    nodes: &'a Arena<TreeNode<T>>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<TreeNode<T>>, root: Option<NodeId>) -> Self {
        let mut cursor = Self {
            nodes,
            stack: Vec::new(),
            current: None,
        };
        if let Some(root) = root {
            cursor.push_left_spine(root);
            cursor.current = cursor.stack.pop();
        }
        cursor
    }

    fn push_left_spine(&mut self, from: NodeId) {
        let mut next = Some(from);
        while let Some(idx) = next {
            self.stack.push(idx);
            next = self
                .nodes
                .get(idx)
                .and_then(|node| node.children().first().copied());
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for InOrder<'a, T> {
    fn order(&self) -> Order {
        Order::InOrder
    }

    #[instrument(level = "trace", skip(self))]
    fn advance(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        let right = self
            .nodes
            .get(current)
            .and_then(|node| node.children().get(1).copied());
        if let Some(right) = right {
            self.push_left_spine(right);
        }
        self.current = self.stack.pop();
    }

    fn current_id(&self) -> Option<NodeId> {
        self.current
    }

    fn nodes(&self) -> &'a Arena<TreeNode<T>> {
        self.nodes
    }
}

cursor_iterator!(InOrder);
