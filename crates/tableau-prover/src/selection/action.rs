//! Action policies: which axioms to apply at an open leaf
//!
//! An [`ActionPolicy`] is consulted once per open leaf during expansion. The
//! clauses it returns each produce one successor tableau.

use crate::logic::{Clause, Literal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy selecting the axiom clauses to apply at a leaf.
pub trait ActionPolicy: Send {
    /// Axioms to apply at a leaf holding `leaf`.
    ///
    /// Only clauses containing a literal that matches the complement of
    /// `leaf` (see [`Clause::applies_to`]) may be returned.
    fn select_matches<'a>(&mut self, leaf: &Literal, axioms: &'a [Clause]) -> Vec<&'a Clause>;

    /// Policy name for logs and statistics
    fn name(&self) -> &str;

    /// Whether every applicable clause is returned, making search complete
    fn is_exhaustive(&self) -> bool {
        false
    }
}

/// Every applicable axiom, in axiom order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

/// All axioms applicable at `leaf`, in axiom order
pub fn applicable<'a>(leaf: &Literal, axioms: &'a [Clause]) -> Vec<&'a Clause> {
    axioms.iter().filter(|clause| clause.applies_to(leaf)).collect()
}

impl ActionPolicy for Exhaustive {
    fn select_matches<'a>(&mut self, leaf: &Literal, axioms: &'a [Clause]) -> Vec<&'a Clause> {
        applicable(leaf, axioms)
    }

    fn name(&self) -> &str {
        "Exhaustive"
    }

    fn is_exhaustive(&self) -> bool {
        true
    }
}

/// One applicable axiom chosen uniformly at random.
///
/// Cheap, but incomplete: proofs needing a clause that was never drawn are
/// missed.
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        UniformRandom { rng }
    }
}

impl ActionPolicy for UniformRandom {
    fn select_matches<'a>(&mut self, leaf: &Literal, axioms: &'a [Clause]) -> Vec<&'a Clause> {
        let mut candidates = applicable(leaf, axioms);
        if candidates.is_empty() {
            return candidates;
        }
        let pick = self.rng.gen_range(0..candidates.len());
        vec![candidates.swap_remove(pick)]
    }

    fn name(&self) -> &str {
        "UniformRandom"
    }
}
