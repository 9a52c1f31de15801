use std::fmt::Display;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::arena::{NodeId, Tree};

/// Text rendering of a tree, one line per node with box-drawing connectors.
pub trait TreeRender {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: Display, const K: usize> TreeRender for Tree<T, K> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TermTree<String> {
        match self.root_node() {
            Some(root_node) => {
                let mut repr = TermTree::new(root_node.value().to_string());
                if let Some(root_idx) = self.root() {
                    build_tree_representation(self, root_idx, &mut repr);
                }
                repr
            }
            None => TermTree::new("Empty tree".to_string()),
        }
    }
}

/// Appends the subtree below `idx` to `parent_repr`.
pub fn build_tree_representation<T: Display, const K: usize>(
    tree: &Tree<T, K>,
    idx: NodeId,
    parent_repr: &mut TermTree<String>,
) {
    for &child_idx in tree.children(idx) {
        if let Some(child) = tree.get_node(child_idx) {
            let mut child_repr = TermTree::new(child.value().to_string());
            build_tree_representation(tree, child_idx, &mut child_repr);
            parent_repr.push(child_repr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn test_render_empty() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.to_tree_string().to_string(), "Empty tree\n");
    }

    #[test]
    fn test_render_nested() {
        let mut tree: Tree<i32> = Tree::new();
        tree.set_root(&Node::new(1)).unwrap();
        tree.attach_child(&1, &Node::new(2)).unwrap();
        tree.attach_child(&1, &Node::new(3)).unwrap();
        tree.attach_child(&2, &Node::new(4)).unwrap();
        let expected = "1\n├── 2\n│   └── 4\n└── 3\n";
        assert_eq!(tree.to_tree_string().to_string(), expected);
    }
}
