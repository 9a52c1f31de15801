//! Bounded-branching (K-ary) trees.
//!
//! A [`Tree<T, K>`](Tree) owns its nodes in an arena and lets every node hold at most `K`
//! ordered children (`K = 2` by default). Nodes are added, never removed. Trees are read
//! through five independent, restartable traversal cursors (see [`traversal`]) and their
//! values can be redistributed into level-order min-heap order with [`Tree::heapify`].
//!
//! ```
//! use karytree::{Node, Order, Tree};
//!
//! let mut tree: Tree<f64> = Tree::new();
//! tree.set_root(&Node::new(5.0)).unwrap();
//! tree.attach_child(&5.0, &Node::new(3.0)).unwrap();
//! tree.attach_child(&5.0, &Node::new(8.0)).unwrap();
//! tree.attach_child(&3.0, &Node::new(1.0)).unwrap();
//!
//! assert_eq!(tree.values(Order::PreOrder).unwrap(), vec![5.0, 3.0, 1.0, 8.0]);
//!
//! tree.heapify();
//! assert_eq!(tree.values(Order::BreadthFirst).unwrap(), vec![1.0, 3.0, 5.0, 8.0]);
//! ```
//!
//! Cursors borrow the tree, so a tree cannot be mutated while a traversal over it is alive.

pub mod arena;
pub mod cli;
pub mod complex;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod heapify;
pub mod layout;
pub mod node;
pub mod traversal;
pub mod tree_traits;
pub mod util;

pub use arena::{NodeId, Tree, TreeNode};
pub use complex::Complex;
pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use traversal::{
    BreadthFirst, DepthFirst, InOrder, Order, PostOrder, PreOrder, Traversal, TreeCursor,
};
pub use tree_traits::TreeRender;
