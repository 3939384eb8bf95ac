//! Clauses (disjunctions of literals)

use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clause in clause-normal form.
///
/// Literal order is insertion order. It has no logical meaning but fixes the
/// order in which a leaf's children are created during expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literal-wise negation
    pub fn negate(&self) -> Clause {
        Clause {
            literals: self.literals.iter().map(Literal::negate).collect(),
        }
    }

    /// Whether some literal of this clause matches `target` under the
    /// syntactic matching rule (see [`Literal::matches`]).
    pub fn has_match_for(&self, target: &Literal) -> bool {
        self.literals.iter().any(|lit| lit.matches(target))
    }

    /// Whether the clause can be applied to a leaf holding `leaf`:
    /// some literal matches the leaf's complement.
    pub fn applies_to(&self, leaf: &Literal) -> bool {
        self.has_match_for(&leaf.negate())
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
