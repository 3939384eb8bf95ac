//! Atoms and signed literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filler character standing in for one argument in a match key
const ARG_FILLER: char = '_';

/// An atomic proposition: a predicate symbol applied to ground arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<String>,
}

impl Atom {
    /// Create an atom from a predicate symbol and its arguments
    pub fn new(predicate: impl Into<String>, args: Vec<String>) -> Self {
        Atom {
            predicate: predicate.into(),
            args,
        }
    }

    /// Create a zero-arity atom (a plain proposition)
    pub fn proposition(predicate: impl Into<String>) -> Self {
        Atom::new(predicate, Vec::new())
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Reduce the atom to `<predicate><one filler per argument>`.
    ///
    /// Argument identity is dropped: `P(a,b)` and `P(c,d)` both reduce to `P__`.
    pub fn match_key(&self) -> String {
        let mut key = String::with_capacity(self.predicate.len() + self.args.len());
        key.push_str(&self.predicate);
        key.extend(std::iter::repeat(ARG_FILLER).take(self.args.len()));
        key
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate)?;
        if self.args.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// A literal (an atom with a polarity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub atom: Atom,
    pub negated: bool,
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            negated: false,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            negated: true,
        }
    }

    /// Get the complement of this literal (same atom, flipped polarity)
    pub fn negate(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// Exact complementarity: same atom, opposite polarity.
    ///
    /// This is the test used for branch closure.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.negated != other.negated && self.atom == other.atom
    }

    /// Syntactic matching used to pick axioms for a leaf.
    ///
    /// Polarity must agree and both atoms must reduce to the same
    /// [`Atom::match_key`]. Arguments are not compared, so `P(a)` matches
    /// `P(b)`. No unification is performed.
    pub fn matches(&self, other: &Literal) -> bool {
        self.negated == other.negated && self.atom.match_key() == other.atom.match_key()
    }

    /// Match key including polarity, e.g. `¬P__`
    pub fn match_key(&self) -> String {
        if self.negated {
            format!("¬{}", self.atom.match_key())
        } else {
            self.atom.match_key()
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.atom)
    }
}
