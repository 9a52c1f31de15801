//! Restartable traversal cursors over a [`Tree`].
//!
//! Every strategy follows the same cursor contract ([`TreeCursor`]): it starts on the first
//! node of its order, [`advance`](TreeCursor::advance) moves to the next one, and once the
//! walk is exhausted the cursor sits at the end for good. A cursor built from an absent
//! root is the end sentinel; comparing a running cursor against it with `!=` is the loop
//! termination test. Equality is node identity, never value equality.
//!
//! All cursors also implement [`Iterator`], yielding `(NodeId, &TreeNode)` pairs.
//!
//! | strategy | arity | bookkeeping |
//! |---|---|---|
//! | [`PreOrder`] | any | stack |
//! | [`InOrder`] | 2 only | stack (left spine) |
//! | [`PostOrder`] | any | precomputed stack |
//! | [`BreadthFirst`] | any | queue |
//! | [`DepthFirst`] | any | stack |

use std::fmt;
use std::str::FromStr;

use generational_arena::Arena;
use serde::Deserialize;

use crate::arena::{NodeId, Tree, TreeNode};
use crate::errors::{TreeError, TreeResult};

mod breadth_first;
mod depth_first;
mod in_order;
mod post_order;
mod pre_order;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use in_order::InOrder;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

/// Traversal strategy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Order {
    PreOrder,
    InOrder,
    PostOrder,
    BreadthFirst,
    DepthFirst,
}

impl Order {
    pub const ALL: [Order; 5] = [
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
        Order::BreadthFirst,
        Order::DepthFirst,
    ];

    /// Whether the strategy is defined for trees of the given arity.
    pub fn supports_arity(self, arity: usize) -> bool {
        match self {
            Order::InOrder => arity == 2,
            _ => true,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
            Order::BreadthFirst => "breadth-first",
            Order::DepthFirst => "depth-first",
        };
        f.write_str(name)
    }
}

impl FromStr for Order {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pre" | "pre-order" | "preorder" => Ok(Order::PreOrder),
            "in" | "in-order" | "inorder" => Ok(Order::InOrder),
            "post" | "post-order" | "postorder" => Ok(Order::PostOrder),
            "bfs" | "breadth-first" | "level-order" => Ok(Order::BreadthFirst),
            "dfs" | "depth-first" => Ok(Order::DepthFirst),
            other => Err(TreeError::Config {
                message: format!("unknown traversal order: {other}"),
            }),
        }
    }
}

impl TryFrom<String> for Order {
    type Error = TreeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Shared contract of all traversal strategies.
pub trait TreeCursor<'a, T: 'a> {
    fn order(&self) -> Order;

    /// Moves to the next node. A cursor at the end stays at the end.
    fn advance(&mut self);

    /// Handle of the current node, `None` at the end.
    fn current_id(&self) -> Option<NodeId>;

    /// Storage the cursor resolves handles against.
    fn nodes(&self) -> &'a Arena<TreeNode<T>>;

    fn at_end(&self) -> bool {
        self.current_id().is_none()
    }

    fn try_current(&self) -> TreeResult<&'a TreeNode<T>> {
        self.current_id()
            .and_then(|idx| self.nodes().get(idx))
            .ok_or_else(|| {
                TreeError::Precondition(format!("{} cursor dereferenced at end", self.order()))
            })
    }

    /// Current node.
    ///
    /// # Panics
    /// When the cursor is at the end; use [`try_current`](TreeCursor::try_current) to get
    /// a `Precondition` error instead.
    fn current(&self) -> &'a TreeNode<T> {
        match self.try_current() {
            Ok(node) => node,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Wires the `Iterator` and identity-equality impls of a cursor type to its
/// `TreeCursor` impl.
macro_rules! cursor_iterator {
    ($cursor:ident) => {
        impl<'a, T> Iterator for $cursor<'a, T> {
            type Item = ($crate::arena::NodeId, &'a $crate::arena::TreeNode<T>);

            fn next(&mut self) -> Option<Self::Item> {
                use $crate::traversal::TreeCursor;
                let idx = self.current_id()?;
                let node = self.nodes().get(idx)?;
                self.advance();
                Some((idx, node))
            }
        }

        impl<'a, T> PartialEq for $cursor<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.current == other.current
            }
        }
    };
}
pub(crate) use cursor_iterator;

/// One of the five strategies, chosen at construction time.
#[derive(Debug, Clone)]
pub enum Traversal<'a, T> {
    PreOrder(PreOrder<'a, T>),
    InOrder(InOrder<'a, T>),
    PostOrder(PostOrder<'a, T>),
    BreadthFirst(BreadthFirst<'a, T>),
    DepthFirst(DepthFirst<'a, T>),
}

macro_rules! dispatch {
    ($self:expr, $cursor:ident => $body:expr) => {
        match $self {
            Traversal::PreOrder($cursor) => $body,
            Traversal::InOrder($cursor) => $body,
            Traversal::PostOrder($cursor) => $body,
            Traversal::BreadthFirst($cursor) => $body,
            Traversal::DepthFirst($cursor) => $body,
        }
    };
}

impl<'a, T: 'a> TreeCursor<'a, T> for Traversal<'a, T> {
    fn order(&self) -> Order {
        dispatch!(self, c => c.order())
    }

    fn advance(&mut self) {
        dispatch!(self, c => c.advance())
    }

    fn current_id(&self) -> Option<NodeId> {
        dispatch!(self, c => c.current_id())
    }

    fn nodes(&self) -> &'a Arena<TreeNode<T>> {
        dispatch!(self, c => c.nodes())
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        dispatch!(self, c => c.next())
    }
}

impl<'a, T: 'a> PartialEq for Traversal<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current_id() == other.current_id()
    }
}

impl<T, const K: usize> Tree<T, K> {
    pub fn begin_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.arena, self.root)
    }

    pub fn end_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.arena, None)
    }

    /// In-order walk (left child, node, right child).
    ///
    /// Only binary trees have a left and a right child, so any other arity is rejected
    /// with `UnsupportedTraversal`.
    pub fn begin_in_order(&self) -> TreeResult<InOrder<'_, T>> {
        if !Order::InOrder.supports_arity(K) {
            return Err(TreeError::UnsupportedTraversal {
                order: Order::InOrder,
                arity: K,
            });
        }
        Ok(InOrder::new(&self.arena, self.root))
    }

    pub fn end_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.arena, None)
    }

    /// Post-order walk. The sequence is fixed when the cursor is created.
    pub fn begin_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.arena, self.root)
    }

    pub fn end_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.arena, None)
    }

    pub fn begin_bfs_scan(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(&self.arena, self.root)
    }

    pub fn end_bfs_scan(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(&self.arena, None)
    }

    pub fn begin_dfs_scan(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(&self.arena, self.root)
    }

    pub fn end_dfs_scan(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(&self.arena, None)
    }

    pub fn traverse(&self, order: Order) -> TreeResult<Traversal<'_, T>> {
        Ok(match order {
            Order::PreOrder => Traversal::PreOrder(self.begin_pre_order()),
            Order::InOrder => Traversal::InOrder(self.begin_in_order()?),
            Order::PostOrder => Traversal::PostOrder(self.begin_post_order()),
            Order::BreadthFirst => Traversal::BreadthFirst(self.begin_bfs_scan()),
            Order::DepthFirst => Traversal::DepthFirst(self.begin_dfs_scan()),
        })
    }

    /// End sentinel matching [`traverse`](Tree::traverse).
    pub fn traverse_end(&self, order: Order) -> Traversal<'_, T> {
        match order {
            Order::PreOrder => Traversal::PreOrder(self.end_pre_order()),
            Order::InOrder => Traversal::InOrder(self.end_in_order()),
            Order::PostOrder => Traversal::PostOrder(self.end_post_order()),
            Order::BreadthFirst => Traversal::BreadthFirst(self.end_bfs_scan()),
            Order::DepthFirst => Traversal::DepthFirst(self.end_dfs_scan()),
        }
    }

    /// Values in the given order, cloned.
    pub fn values(&self, order: Order) -> TreeResult<Vec<T>>
    where
        T: Clone,
    {
        Ok(self
            .traverse(order)?
            .map(|(_, node)| node.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use rstest::rstest;

    #[rstest]
    #[case("pre", Order::PreOrder)]
    #[case("In-Order", Order::InOrder)]
    #[case("post_order", Order::PostOrder)]
    #[case("bfs", Order::BreadthFirst)]
    #[case("depth-first", Order::DepthFirst)]
    fn test_parse_order(#[case] input: &str, #[case] expected: Order) {
        assert_eq!(input.parse::<Order>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<Order>().unwrap(), expected);
    }

    #[test]
    fn test_parse_order_unknown() {
        assert!("zigzag".parse::<Order>().is_err());
    }

    #[rstest]
    fn test_empty_tree_yields_end(
        #[values(
            Order::PreOrder,
            Order::InOrder,
            Order::PostOrder,
            Order::BreadthFirst,
            Order::DepthFirst
        )]
        order: Order,
    ) {
        let tree: Tree<i32> = Tree::new();
        let cursor = tree.traverse(order).unwrap();
        assert!(cursor.at_end());
        assert!(cursor == tree.traverse_end(order));
        assert!(matches!(cursor.try_current(), Err(TreeError::Precondition(_))));
    }

    #[test]
    #[should_panic(expected = "dereferenced at end")]
    fn test_current_at_end_panics() {
        let tree: Tree<i32> = Tree::new();
        tree.begin_dfs_scan().current();
    }

    #[test]
    fn test_in_order_rejected_for_ternary() {
        let mut tree: Tree<i32, 3> = Tree::new();
        tree.set_root(&Node::new(1)).unwrap();
        let err = tree.begin_in_order().unwrap_err();
        assert!(matches!(
            err,
            TreeError::UnsupportedTraversal {
                order: Order::InOrder,
                arity: 3
            }
        ));
    }

    #[rstest]
    fn test_advance_past_end_is_idempotent(
        #[values(
            Order::PreOrder,
            Order::InOrder,
            Order::PostOrder,
            Order::BreadthFirst,
            Order::DepthFirst
        )]
        order: Order,
    ) {
        let mut tree: Tree<i32> = Tree::new();
        tree.set_root(&Node::new(1).with_children([Node::new(2), Node::new(3)]))
            .unwrap();
        let mut cursor = tree.traverse(order).unwrap();
        let mut visited = 0;
        while !cursor.at_end() {
            visited += 1;
            cursor.advance();
        }
        // pre-order must not come back to the root once exhausted
        assert_eq!(visited, tree.len());
        for _ in 0..10 {
            cursor.advance();
            assert!(cursor.at_end());
            assert!(cursor.try_current().is_err());
        }
        assert!(cursor == tree.traverse_end(order));
    }
}
