use generational_arena::Arena;
use tracing::instrument;

use super::{cursor_iterator, Order, TreeCursor};
use crate::arena::{NodeId, TreeNode};

/// Stack-driven deep-first scan for any arity.
///
/// Children are pushed in reverse so siblings come out left to right; on binary trees
/// the sequence coincides with [`PreOrder`](super::PreOrder).
#[derive(Debug, Clone)]
pub struct DepthFirst<'a, T> {
    nodes: &'a Arena<TreeNode<T>>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<TreeNode<T>>, root: Option<NodeId>) -> Self {
        let mut stack: Vec<NodeId> = root.into_iter().collect();
        let current = stack.pop();
        Self {
            nodes,
            stack,
            current,
        }
    }
}

impl<'a, T: 'a> TreeCursor<'a, T> for DepthFirst<'a, T> {
    fn order(&self) -> Order {
        Order::DepthFirst
    }

    #[instrument(level = "trace", skip(self))]
    fn advance(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        if let Some(node) = self.nodes.get(current) {
            for &child in node.children().iter().rev() {
                self.stack.push(child);
            }
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

cursor_iterator!(DepthFirst);
