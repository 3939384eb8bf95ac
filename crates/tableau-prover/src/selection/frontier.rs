//! Frontier strategies: which proof state the search expands next
//!
//! The `FrontierSink` trait provides a signal-based interface between the
//! search controller and the ordering of its open proof states. The controller
//! announces every new state and every terminal outcome; the sink owns the
//! frontier and answers `select()`.

use crate::search::StateId;
use crate::tableau::Tableau;
use std::collections::VecDeque;

/// How the search disposed of a proof state it popped from the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Fully closed tableau: a proof
    Closed,
    /// Every open leaf is stuck
    DeadEnd,
    /// Pruned at the depth bound
    DepthExceeded,
    /// Structurally identical to a state already explored
    LoopDetected,
    /// Expanded into at least one successor
    Expanded,
}

impl BranchOutcome {
    /// Reward for terminal outcomes; `None` for states that were expanded
    pub fn reward(self) -> Option<f64> {
        match self {
            BranchOutcome::Closed => Some(1.0),
            BranchOutcome::DeadEnd
            | BranchOutcome::DepthExceeded
            | BranchOutcome::LoopDetected => Some(0.0),
            BranchOutcome::Expanded => None,
        }
    }
}

/// Signal-based interface for frontier ordering in the search loop.
///
/// Implementations track their own pending set from `on_enqueue` signals and
/// remove the chosen state during `select()`.
pub trait FrontierSink: Send {
    /// A new state entered the frontier. `parent` is `None` for the initial state.
    fn on_enqueue(&mut self, state: StateId, parent: Option<StateId>, tableau: &Tableau);

    /// A popped state reached an outcome.
    fn on_outcome(&mut self, _state: StateId, _outcome: BranchOutcome) {}

    /// Remove and return the next state to process.
    fn select(&mut self) -> Option<StateId>;

    /// Number of pending states
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sink name for logs
    fn name(&self) -> &str;

    /// Clear all state before a new round searched with `depth_bound`.
    fn reset(&mut self, _depth_bound: usize) {}
}

/// Breadth-first frontier: always selects the earliest-enqueued state.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<StateId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrontierSink for FifoFrontier {
    fn on_enqueue(&mut self, state: StateId, _parent: Option<StateId>, _tableau: &Tableau) {
        self.queue.push_back(state);
    }

    fn select(&mut self) -> Option<StateId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn name(&self) -> &str {
        "FIFO"
    }

    fn reset(&mut self, _depth_bound: usize) {
        self.queue.clear();
    }
}
