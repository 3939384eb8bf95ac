//! A propositional semantic-tableau theorem prover
//!
//! Given a goal literal and a set of axiom clauses, the prover searches for a
//! closed tableau: a proof tree in which every branch contains a literal and
//! its complement.
//!
//! Complementary literals are matched syntactically (predicate symbol and
//! arity), never by unification. The search is an iterative-deepening loop
//! over immutable tableau snapshots, with pluggable axiom and frontier
//! selection (exhaustive/FIFO by default, UCT as an alternative).

pub mod config;
pub mod error;
pub mod json;
pub mod logic;
pub mod search;
pub mod selection;
pub mod tableau;

pub use config::{PolicyConfig, SearchConfig};
pub use error::{ProverError, Result};
pub use logic::{Atom, Clause, ClauseRecord, Literal, LiteralRecord, Problem};
pub use search::{
    prove, ProofResult, ProofState, RoundResult, SearchController, SearchStats, SearchStatus,
    StateId,
};
pub use selection::{
    ActionPolicy, BranchOutcome, Exhaustive, FifoFrontier, FrontierSink, UctFrontier,
    UniformRandom,
};
pub use tableau::{NodeId, Tableau, TableauNode};
