//! Semantic tableaux: the proof tree, closure tests and the expansion step.

pub mod node;
pub mod tree;

pub use node::{NodeId, TableauNode};
pub use tree::Tableau;
