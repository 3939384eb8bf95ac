//! Tableau tree nodes
//!
//! Nodes live in a flat arena owned by their [`Tableau`](super::Tableau).
//! A parent owns its children through the index list; the child keeps a
//! non-owning index back to its parent for ancestor walks.

use crate::logic::Literal;
use serde::{Deserialize, Serialize};

/// Index of a node in its tableau's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node of every tableau
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the proof tree holding one literal
#[derive(Debug, Clone)]
pub struct TableauNode {
    pub literal: Literal,
    /// None for the root
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl TableauNode {
    pub fn root(literal: Literal) -> Self {
        TableauNode {
            literal,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn child(literal: Literal, parent: NodeId) -> Self {
        TableauNode {
            literal,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
