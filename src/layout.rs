//! TOML description of a tree.
//!
//! ```toml
//! arity = 2
//!
//! [root]
//! value = 1.0
//! children = [{ value = 2.0 }, { value = 3.0 }]
//!
//! # applied in order, parent located by value
//! [[attach]]
//! parent = 2.0
//! child = { value = 4.0 }
//! ```

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::arena::Tree;
use crate::errors::{TreeError, TreeResult};
use crate::node::Node;

/// One value-addressed attach operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge<T> {
    pub parent: T,
    pub child: Node<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeLayout<T> {
    /// Branching factor; `None` leaves the choice to the caller.
    pub arity: Option<usize>,
    pub root: Option<Node<T>>,
    #[serde(default = "Vec::new")]
    pub attach: Vec<Edge<T>>,
}

impl<T: DeserializeOwned> TreeLayout<T> {
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> TreeResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TreeError::io(format!("read {}", path.display()), e))?;
        Self::parse(&content).map_err(|e| match e {
            TreeError::Config { message } => TreeError::Config {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> TreeResult<Self> {
        toml::from_str(content).map_err(|e| TreeError::Config {
            message: format!("parse layout: {e}"),
        })
    }
}

impl<T> TreeLayout<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    /// Builds a `K`-ary tree: installs `root`, then applies every edge in order.
    ///
    /// Stops at the first failing edge.
    #[instrument(level = "debug", skip(self))]
    pub fn build<const K: usize>(&self) -> TreeResult<Tree<T, K>> {
        let mut tree = Tree::new();
        if let Some(root) = &self.root {
            tree.set_root(root)?;
        }
        for edge in &self.attach {
            tree.attach_child(&edge.parent, &edge.child)?;
        }
        debug!(nodes = tree.len(), arity = K, "layout built");
        Ok(tree)
    }
}
