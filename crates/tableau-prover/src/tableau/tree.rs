//! The tableau: a proof tree under construction
//!
//! A [`Tableau`] is one proof state. It owns an arena of [`TableauNode`]s rooted
//! at the goal literal, shares the read-only axiom set with every other state
//! of the same problem, and tracks the open leaves still awaiting expansion.
//!
//! ## Closure
//!
//! A node is *closed* when one of its strict ancestors holds its exact
//! complement. The tableau is *fully closed* (a proof) when every branch
//! contains such a pair.
//!
//! ## Expansion
//!
//! Expansion never mutates the tableau it is called on. Every (open leaf,
//! applicable axiom) pair yields an independent successor in which the leaf
//! has one new child per literal of the axiom.

use super::node::{NodeId, TableauNode};
use crate::logic::{Clause, Literal};
use crate::selection::ActionPolicy;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Marker printed after closed leaves
const CLOSED_MARK: &str = "✗";

#[derive(Debug, Clone)]
pub struct Tableau {
    /// Axiom set shared by all states of one problem
    axioms: Arc<[Clause]>,
    /// Node arena, root at index 0
    nodes: Vec<TableauNode>,
    /// Open leaves in expansion order
    frontier: Vec<NodeId>,
    /// Expansion steps applied since the root was created
    inference_count: usize,
}

impl Tableau {
    /// Create the initial single-node tableau for `goal`
    pub fn new(goal: Literal, axioms: Arc<[Clause]>) -> Self {
        Tableau {
            axioms,
            nodes: vec![TableauNode::root(goal)],
            frontier: vec![NodeId::ROOT],
            inference_count: 0,
        }
    }

    pub fn axioms(&self) -> &Arc<[Clause]> {
        &self.axioms
    }

    pub fn root(&self) -> &TableauNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> &TableauNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[TableauNode] {
        &self.nodes
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tableau always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Open leaves, in the order they will be expanded
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    pub fn inference_count(&self) -> usize {
        self.inference_count
    }

    /// Whether a strict ancestor of `id` holds the complement of its literal.
    ///
    /// The root has no ancestors and is never closed.
    pub fn is_branch_closed(&self, id: NodeId) -> bool {
        let node = self.node(id);
        let mut current = node.parent;
        while let Some(ancestor) = current {
            let ancestor = self.node(ancestor);
            if ancestor.literal.is_complement_of(&node.literal) {
                return true;
            }
            current = ancestor.parent;
        }
        false
    }

    /// Whether every branch below `id` is closed.
    ///
    /// A leaf is fully closed iff it is closed. An internal node is fully
    /// closed iff it is closed itself or all of its children are fully closed.
    pub fn is_subtree_closed(&self, id: NodeId) -> bool {
        if self.is_branch_closed(id) {
            return true;
        }
        let node = self.node(id);
        !node.is_leaf() && node.children.iter().all(|&child| self.is_subtree_closed(child))
    }

    /// Whether this tableau is a proof
    pub fn is_fully_closed(&self) -> bool {
        !self.is_empty() && self.is_subtree_closed(NodeId::ROOT)
    }

    /// All leaves of the tree, open or closed, in arena order
    pub fn leaves(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.node(id).is_leaf())
            .collect()
    }

    /// Literals on the path from the root down to `id`
    pub fn branch(&self, id: NodeId) -> Vec<&Literal> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            path.push(&node.literal);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Literals in breadth-first order starting at the root
    pub fn level_order(&self) -> Vec<&Literal> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(id) = queue.pop_front() {
            let node = self.node(id);
            result.push(&node.literal);
            queue.extend(node.children.iter().copied());
        }
        result
    }

    /// Whether no open leaf has any applicable axiom.
    ///
    /// A fully closed tableau is not stuck.
    pub fn is_stuck(&self) -> bool {
        !self.frontier.is_empty()
            && self.frontier.iter().all(|&leaf| {
                let literal = &self.node(leaf).literal;
                !self.axioms.iter().any(|clause| clause.applies_to(literal))
            })
    }

    /// Apply `clause` at `leaf`, returning the successor tableau.
    ///
    /// The leaf gains one child per literal of the clause and leaves the
    /// frontier. Children that close immediately are kept in the tree but are
    /// not added to the frontier.
    pub fn expand_leaf(&self, leaf: NodeId, clause: &Clause) -> Tableau {
        let mut next = self.clone();
        next.frontier.retain(|&id| id != leaf);
        for literal in clause.literals() {
            let child = NodeId(next.nodes.len());
            next.nodes.push(TableauNode::child(literal.clone(), leaf));
            next.nodes[leaf.index()].children.push(child);
            if !next.is_branch_closed(child) {
                next.frontier.push(child);
            }
        }
        next.inference_count += 1;
        next
    }

    /// One inference step: every successor reachable by applying one
    /// policy-selected axiom at one open leaf.
    ///
    /// Returns an empty vector when every open leaf is stuck.
    pub fn expand(&self, policy: &mut dyn ActionPolicy) -> Vec<Tableau> {
        let mut successors = Vec::new();
        for &leaf in &self.frontier {
            if self.is_branch_closed(leaf) {
                continue;
            }
            let literal = &self.node(leaf).literal;
            let matches = policy.select_matches(literal, &self.axioms);
            log::trace!(
                "leaf {} ({}) has {} applicable axiom(s)",
                leaf.index(),
                literal,
                matches.len()
            );
            for clause in matches {
                successors.push(self.expand_leaf(leaf, clause));
            }
        }
        successors
    }

    fn subtree_eq(&self, a: NodeId, other: &Tableau, b: NodeId) -> bool {
        let left = self.node(a);
        let right = other.node(b);
        left.literal == right.literal
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(&ca, &cb)| self.subtree_eq(ca, other, cb))
    }

    fn hash_subtree<H: Hasher>(&self, id: NodeId, state: &mut H) {
        let node = self.node(id);
        node.literal.hash(state);
        node.children.len().hash(state);
        for &child in &node.children {
            self.hash_subtree(child, state);
        }
    }

    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        last: bool,
    ) -> fmt::Result {
        let node = self.node(id);
        let connector = if last { "└── " } else { "├── " };
        write!(f, "{}{}{}", prefix, connector, node.literal)?;
        if node.is_leaf() && self.is_branch_closed(id) {
            write!(f, " {}", CLOSED_MARK)?;
        }
        writeln!(f)?;
        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        for (i, &child) in node.children.iter().enumerate() {
            self.fmt_subtree(f, child, &child_prefix, i + 1 == node.children.len())?;
        }
        Ok(())
    }
}

/// Structural equality of the node trees; provenance and axioms are ignored
impl PartialEq for Tableau {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(NodeId::ROOT, other, NodeId::ROOT)
    }
}

impl Eq for Tableau {}

impl Hash for Tableau {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_subtree(NodeId::ROOT, state);
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root();
        writeln!(f, "{}", root.literal)?;
        for (i, &child) in root.children.iter().enumerate() {
            self.fmt_subtree(f, child, "", i + 1 == root.children.len())?;
        }
        Ok(())
    }
}
