use std::collections::VecDeque;

use generational_arena::Arena;
use tracing::instrument;

use super::{cursor_iterator, Order, TreeCursor};
use crate::arena::{NodeId, TreeNode};

/// Level by level, each level left to right.
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a, T> {
    nodes: &'a Arena<TreeNode<T>>,
    queue: VecDeque<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> BreadthFirst<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<TreeNode<T>>, root: Option<NodeId>) -> Self {
        Self {
            nodes,
            queue: VecDeque::new(),
            current: root,
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for BreadthFirst<'a, T> {
    fn order(&self) -> Order {
        Order::BreadthFirst
    }

    #[instrument(level = "trace", skip(self))]
    fn advance(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        if let Some(node) = self.nodes.get(current) {
            self.queue.extend(node.children().iter());
        }
        self.current = self.queue.pop_front();
    }

    fn current_id(&self) -> Option<NodeId> {
        self.current
    }

    fn nodes(&self) -> &'a Arena<TreeNode<T>> {
        self.nodes
    }
}

cursor_iterator!(BreadthFirst);
