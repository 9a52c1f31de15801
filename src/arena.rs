use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;

/// Stable handle of a vertex inside one [`Tree`].
///
/// Handles stay valid until the tree is reset via [`Tree::set_root`] or [`Tree::clear`];
/// afterwards they are rejected instead of aliasing a newer node.
pub type NodeId = Index;

/// Vertex stored in the arena: a value plus the ids of its ordered children.
///
/// There is no parent link, the tree is a strict out-tree.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Children in insertion order, which is also traversal order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Arena-backed tree where every node holds at most `K` children.
///
/// Structure is append-only: nodes are attached, never removed or moved. Replacing the
/// root with [`Tree::set_root`] discards the whole previous tree.
///
/// Traversal cursors borrow the tree immutably, so the borrow checker rejects any
/// structural mutation while a traversal is in progress.
#[derive(Debug, Clone)]
pub struct Tree<T, const K: usize = 2> {
    pub(crate) arena: Arena<TreeNode<T>>,
    pub(crate) root: Option<NodeId>,
}

impl<T, const K: usize> Default for Tree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> Tree<T, K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Maximum number of children per node.
    pub const fn arity(&self) -> usize {
        K
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<&TreeNode<T>> {
        self.root.and_then(|idx| self.arena.get(idx))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    /// Mutable access to a node's value. Children cannot be edited through this.
    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: NodeId) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn value(&self, idx: NodeId) -> Option<&T> {
        self.arena.get(idx).map(TreeNode::value)
    }

    /// Child ids of `idx`; empty for leaves and for unknown handles.
    pub fn children(&self, idx: NodeId) -> &[NodeId] {
        self.arena
            .get(idx)
            .map(TreeNode::children)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        // Removing entries one by one bumps the arena generation, so handles into the
        // old tree never resolve to nodes of the new one.
        self.arena.retain(|_, _| false);
        self.root = None;
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, idx: NodeId) -> usize {
        if let Some(node) = self.get_node(idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Values of all leaves, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves<'a>(&'a self, idx: NodeId, leaves: &mut Vec<&'a T>) {
        if let Some(node) = self.get_node(idx) {
            if node.children.is_empty() {
                leaves.push(&node.value);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Rejects a detached subtree that would break the branching bound once inserted.
    fn check_subtree(node: &Node<T>) -> TreeResult<()>
    where
        T: fmt::Debug,
    {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if current.children.len() > K {
                return Err(TreeError::CapacityExceeded {
                    parent: format!("{:?}", current.value),
                    arity: K,
                });
            }
            stack.extend(current.children.iter());
        }
        Ok(())
    }

    /// Copies `node` and all its descendants into the arena below `parent`.
    fn insert_subtree(&mut self, node: &Node<T>, parent: Option<NodeId>) -> NodeId
    where
        T: Clone,
    {
        let top = self.insert_node(node.value.clone(), parent);
        let mut stack: Vec<(&Node<T>, NodeId)> = node
            .children
            .iter()
            .rev()
            .map(|child| (child, top))
            .collect();

        // Children are pushed reversed so siblings are appended in their original order.
        while let Some((current, parent_idx)) = stack.pop() {
            let idx = self.insert_node(current.value.clone(), Some(parent_idx));
            stack.extend(current.children.iter().rev().map(|child| (child, idx)));
        }
        top
    }

    fn insert_node(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let idx = self.arena.insert(TreeNode {
            value,
            children: Vec::new(),
        });
        match parent {
            Some(parent_idx) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    parent.children.push(idx);
                }
            }
            None => self.root = Some(idx),
        }
        idx
    }

    /// Installs a copy of `node` (with its descendants) as the new root, discarding the
    /// previous tree.
    ///
    /// Fails with `CapacityExceeded` only if `node` itself contains a vertex with more
    /// than `K` children; the current tree is left untouched in that case.
    #[instrument(level = "debug", skip_all)]
    pub fn set_root(&mut self, node: &Node<T>) -> TreeResult<NodeId>
    where
        T: Clone + fmt::Debug,
    {
        Self::check_subtree(node)?;
        self.clear();
        let idx = self.insert_subtree(node, None);
        debug!(nodes = self.len(), "root installed");
        Ok(idx)
    }

    /// Attaches a copy of `child` below the explicitly addressed node `parent`.
    #[instrument(level = "debug", skip_all)]
    pub fn attach_child_at(&mut self, parent: NodeId, child: &Node<T>) -> TreeResult<NodeId>
    where
        T: Clone + fmt::Debug,
    {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or_else(|| TreeError::NotFound(format!("{:?}", parent)))?;
        if parent_node.children.len() >= K {
            return Err(TreeError::CapacityExceeded {
                parent: format!("{:?}", parent_node.value),
                arity: K,
            });
        }
        Self::check_subtree(child)?;

        let idx = self.insert_subtree(child, Some(parent));
        debug!(?parent, child = ?idx, "child attached");
        Ok(idx)
    }

    /// Attaches a copy of `child` below the first node (pre-order) whose value equals
    /// `parent_key`.
    ///
    /// The new child becomes the parent's last child. Nothing changes on error.
    #[instrument(level = "debug", skip_all)]
    pub fn attach_child(&mut self, parent_key: &T, child: &Node<T>) -> TreeResult<NodeId>
    where
        T: Clone + PartialEq + fmt::Debug,
    {
        let parent = self
            .find(parent_key)
            .ok_or_else(|| TreeError::NotFound(format!("{:?}", parent_key)))?;
        self.attach_child_at(parent, child)
    }

    /// Pre-order search for the first node whose value equals `key`.
    ///
    /// With duplicate values the leftmost-shallowest match in pre-order wins, which may
    /// not be the node the caller meant. Prefer the handles returned by the attach
    /// operations when values are not unique.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, key: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = self.arena.get(idx)?;
            if node.value == *key {
                return Some(idx);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    pub fn contains(&self, key: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(key).is_some()
    }
}
