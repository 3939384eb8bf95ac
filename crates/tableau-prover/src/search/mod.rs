//! Proof search over tableau states

pub mod controller;
pub mod state;
pub mod stats;

pub use controller::{prove, ProofResult, RoundResult, SearchController, SearchStatus};
pub use state::{ProofState, StateId};
pub use stats::SearchStats;
