use generational_arena::Arena;
use tracing::instrument;

use super::{cursor_iterator, Order, TreeCursor};
use crate::arena::{NodeId, TreeNode};

/// Node first, then its children left to right.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    nodes: &'a Arena<TreeNode<T>>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<TreeNode<T>>, root: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for PreOrder<'a, T> {
    fn order(&self) -> Order {
        Order::PreOrder
    }

    #[instrument(level = "trace", skip(self))]
    fn advance(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        if let Some(node) = self.nodes.get(current) {
            // Reverse push so the leftmost child is popped first
            self.stack.extend(node.children().iter().rev());
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

cursor_iterator!(PreOrder);
