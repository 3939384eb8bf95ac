//! Problem instances and validation of caller-supplied records
//!
//! The prover does not parse clause notation. Callers hand over structured
//! records (typically decoded from JSON or built by a front end), which are
//! checked here before any search starts. Ill-formed records are rejected with
//! [`ProverError::MalformedInput`], never coerced.

use super::{Atom, Clause, Literal};
use crate::error::{ProverError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Characters that may not appear inside a predicate symbol or argument
const RESERVED_CHARS: &[char] = &['(', ')', ',', '¬', '~', '∨', '|'];

/// A literal as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralRecord {
    pub predicate: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub negated: bool,
}

impl LiteralRecord {
    pub fn new(predicate: impl Into<String>, args: &[&str], negated: bool) -> Self {
        LiteralRecord {
            predicate: predicate.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            negated,
        }
    }

    /// Validate and convert into a [`Literal`]
    pub fn to_literal(&self) -> Result<Literal> {
        check_identifier(&self.predicate, "predicate symbol")?;
        for arg in &self.args {
            check_identifier(arg, &format!("argument of '{}'", self.predicate))?;
        }
        let atom = Atom::new(self.predicate.clone(), self.args.clone());
        Ok(if self.negated {
            Literal::negative(atom)
        } else {
            Literal::positive(atom)
        })
    }
}

/// A clause as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseRecord {
    pub literals: Vec<LiteralRecord>,
}

impl ClauseRecord {
    pub fn new(literals: Vec<LiteralRecord>) -> Self {
        ClauseRecord { literals }
    }

    /// Validate and convert into a [`Clause`]
    pub fn to_clause(&self) -> Result<Clause> {
        let literals = self
            .literals
            .iter()
            .map(LiteralRecord::to_literal)
            .collect::<Result<Vec<_>>>()?;
        Ok(Clause::new(literals))
    }
}

fn check_identifier(name: &str, what: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ProverError::MalformedInput(format!("empty {}", what)));
    }
    if name.chars().any(|c| c.is_whitespace() || RESERVED_CHARS.contains(&c)) {
        return Err(ProverError::MalformedInput(format!(
            "{} '{}' contains whitespace or a reserved character",
            what, name
        )));
    }
    Ok(())
}

/// A goal literal together with the axiom set it should follow from.
///
/// The axioms are shared read-only by every tableau derived from this problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub goal: Literal,
    pub axioms: Arc<[Clause]>,
}

/// Wire form of a problem, for decoding from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub goal: LiteralRecord,
    pub axioms: Vec<ClauseRecord>,
}

impl Problem {
    pub fn new(goal: Literal, axioms: Vec<Clause>) -> Self {
        Problem {
            goal,
            axioms: axioms.into(),
        }
    }

    /// Build a problem from caller records, rejecting anything ill-formed
    pub fn from_records(goal: &LiteralRecord, axioms: &[ClauseRecord]) -> Result<Self> {
        let goal = goal.to_literal()?;
        let axioms = axioms
            .iter()
            .enumerate()
            .map(|(i, record)| {
                record.to_clause().map_err(|e| match e {
                    ProverError::MalformedInput(msg) => {
                        ProverError::MalformedInput(format!("axiom {}: {}", i, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Problem::new(goal, axioms))
    }

    /// Decode a problem from JSON of the form
    /// `{"goal": {...}, "axioms": [[{...}, ...], ...]}`
    pub fn from_json(text: &str) -> Result<Self> {
        let record: ProblemRecord = serde_json::from_str(text)?;
        Problem::from_records(&record.goal, &record.axioms)
    }
}
