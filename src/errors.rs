use thiserror::Error;

use crate::traversal::Order;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Node {parent} already holds {arity} children (maximum for a {arity}-ary tree)")]
    CapacityExceeded { parent: String, arity: usize },

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("{order} traversal is only defined for binary trees, tree arity is {arity}")]
    UnsupportedTraversal { order: Order, arity: usize },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
