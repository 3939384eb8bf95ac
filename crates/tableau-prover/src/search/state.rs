//! Proof states tracked by the search controller

use crate::tableau::Tableau;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Index of a proof state within one search round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub usize);

/// An immutable snapshot of one partial proof.
///
/// The tableau is never mutated after the state is created; successors are
/// fresh copies. `depth` equals the tableau's inference count.
#[derive(Debug, Clone)]
pub struct ProofState {
    pub id: StateId,
    pub parent: Option<StateId>,
    pub tableau: Arc<Tableau>,
    pub depth: usize,
}

impl ProofState {
    pub fn new(id: StateId, parent: Option<StateId>, tableau: Tableau) -> Self {
        ProofState {
            id,
            parent,
            depth: tableau.inference_count(),
            tableau: Arc::new(tableau),
        }
    }
}
