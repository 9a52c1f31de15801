use generational_arena::Arena;
use tracing::{instrument, trace};

use super::{cursor_iterator, Order, TreeCursor};
use crate::arena::{NodeId, TreeNode};

/// Children left to right, then the node.
///
/// The whole sequence is computed when the cursor is created and then replayed, so it
/// reflects the tree's shape at that instant.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, T> {
    nodes: &'a Arena<TreeNode<T>>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<TreeNode<T>>, root: Option<NodeId>) -> Self {
        let mut stack = Vec::new();
        // Two-stack walk: popping `pending` yields reverse post-order into `stack`,
        // so popping `stack` later yields post-order.
        let mut pending: Vec<NodeId> = root.into_iter().collect();
        while let Some(idx) = pending.pop() {
            stack.push(idx);
            if let Some(node) = nodes.get(idx) {
                pending.extend(node.children().iter());
            }
        }
        trace!(nodes = stack.len(), "post-order sequence precomputed");

        let current = stack.pop();
        Self {
            nodes,
            stack,
            current,
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for PostOrder<'a, T> {
    fn order(&self) -> Order {
        Order::PostOrder
    }

    #[instrument(level = "trace", skip(self))]
    fn advance(&mut self) {
        if self.current.is_none() {
            return;
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

cursor_iterator!(PostOrder);
