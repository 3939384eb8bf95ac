//! Propositional data structures: literals, clauses and problem instances.

pub mod clause;
pub mod literal;
pub mod problem;

pub use clause::Clause;
pub use literal::{Atom, Literal};
pub use problem::{ClauseRecord, LiteralRecord, Problem, ProblemRecord};
