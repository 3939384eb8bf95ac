//! Selection strategies for tableau search
//!
//! Two kinds of selection drive the search:
//!
//! - **Action selection** ([`ActionPolicy`]): which axiom clauses are applied
//!   at an open leaf when a tableau is expanded
//! - **Frontier selection** ([`FrontierSink`]): which pending proof state the
//!   controller expands next
//!
//! # Action policies
//!
//! - [`Exhaustive`]: every applicable axiom (complete; the default)
//! - [`UniformRandom`]: one applicable axiom chosen at random
//!
//! # Frontier strategies
//!
//! - [`FifoFrontier`]: breadth-first, earliest-enqueued state first
//! - [`UctFrontier`]: UCT score over rollout statistics

pub mod action;
pub mod frontier;
pub mod uct;

pub use action::{applicable, ActionPolicy, Exhaustive, UniformRandom};
pub use frontier::{BranchOutcome, FifoFrontier, FrontierSink};
pub use uct::{UctFrontier, UctStats};
