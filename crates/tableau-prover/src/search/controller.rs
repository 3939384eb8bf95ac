//! Search controller: depth-limited rounds and iterative deepening
//!
//! Each round starts from the single-node tableau for the goal and repeatedly
//! asks the frontier strategy for the next proof state:
//!
//! 1. A fully closed tableau ends the search with a proof.
//! 2. A state at the depth bound is pruned without expansion.
//! 3. Otherwise the tableau is expanded with the action policy; every
//!    successor not structurally identical to an already explored state is
//!    enqueued. A state without successors is a dead end.
//!
//! A round that empties its frontier is exhausted. [`SearchController::prove`]
//! then restarts with a larger bound until a proof is found, the round limit is
//! reached, or a round under an exhaustive action policy finishes without
//! pruning anything at the bound (the space is then exhausted at every bound).

use super::state::{ProofState, StateId};
use super::stats::SearchStats;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::logic::Problem;
use crate::selection::{ActionPolicy, BranchOutcome, FrontierSink};
use crate::tableau::Tableau;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Final state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// A fully closed tableau was found
    ProofFound,
    /// The frontier emptied in every round
    Exhausted,
    /// The per-round state limit was reached
    ResourceLimit,
    /// The wall-clock limit was reached
    Timeout,
    /// The cancel flag was raised
    Cancelled,
}

/// Result of one depth-limited round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub status: SearchStatus,
    pub proof: Option<Tableau>,
    pub depth_bound: usize,
    /// Largest inference count among the states popped this round
    pub deepest: usize,
    pub stats: SearchStats,
}

/// Outcome of a complete search
#[derive(Debug, Clone)]
pub struct ProofResult {
    pub status: SearchStatus,
    /// Fully closed tableau when a proof was found
    pub proof_tree: Option<Tableau>,
    /// Inferences in the proof, or the deepest inference count reached
    pub inferences_used: usize,
    /// Depth bound of the last round run
    pub final_bound: usize,
    pub stats: SearchStats,
}

impl ProofResult {
    pub fn found(&self) -> bool {
        self.status == SearchStatus::ProofFound
    }
}

/// Drives proof search for one problem instance.
pub struct SearchController {
    problem: Problem,
    config: SearchConfig,
    /// Axiom choice at each open leaf
    policy: Box<dyn ActionPolicy>,
    /// Frontier ordering (signal-based interface)
    sink: Box<dyn FrontierSink>,
    /// Cancellation flag, checked before each state is processed
    pub cancel: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl SearchController {
    /// Create a controller using the strategies named in `config`
    pub fn new(problem: Problem, config: SearchConfig) -> Result<Self> {
        let (policy, sink) = config.action_policy.build();
        Self::with_strategies(problem, config, policy, sink)
    }

    /// Create a controller with caller-supplied strategies.
    ///
    /// `config.action_policy` is ignored.
    pub fn with_strategies(
        problem: Problem,
        config: SearchConfig,
        policy: Box<dyn ActionPolicy>,
        sink: Box<dyn FrontierSink>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(SearchController {
            problem,
            config,
            policy,
            sink,
            cancel: Arc::new(AtomicBool::new(false)),
            deadline: None,
        })
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Set an absolute deadline for subsequent rounds
    pub fn set_deadline(&mut self, deadline: Option<Instant>) {
        self.deadline = deadline;
    }

    /// Iterative deepening over `config.max_rounds` rounds.
    pub fn prove(&mut self) -> ProofResult {
        if let Some(timeout) = self.config.timeout {
            self.deadline = Some(Instant::now() + timeout);
        }

        let mut total = SearchStats::default();
        let mut deepest = 0;
        let mut final_bound = self.config.depth_bound;

        for round in 0..self.config.max_rounds {
            let bound = self.config.bound_for_round(round);
            final_bound = bound;
            log::info!(
                "round {} (depth bound {}, policy {}, frontier {})",
                round + 1,
                bound,
                self.policy.name(),
                self.sink.name()
            );

            let result = self.search_round(bound);
            total.merge(&result.stats);
            deepest = deepest.max(result.deepest);
            log::info!(
                "round {} finished: {:?} after {} states",
                round + 1,
                result.status,
                result.stats.states_generated
            );

            match result.status {
                SearchStatus::ProofFound => {
                    let inferences_used = result
                        .proof
                        .as_ref()
                        .map(Tableau::inference_count)
                        .unwrap_or(deepest);
                    return ProofResult {
                        status: SearchStatus::ProofFound,
                        proof_tree: result.proof,
                        inferences_used,
                        final_bound,
                        stats: total,
                    };
                }
                // a round that pruned nothing at the bound settles every
                // larger bound only when the policy tries every axiom
                SearchStatus::Exhausted
                    if result.stats.depth_pruned == 0 && self.policy.is_exhaustive() =>
                {
                    log::debug!("nothing pruned at bound {}, search space exhausted", bound);
                    break;
                }
                SearchStatus::Exhausted => continue,
                status => {
                    return ProofResult {
                        status,
                        proof_tree: None,
                        inferences_used: deepest,
                        final_bound,
                        stats: total,
                    };
                }
            }
        }

        ProofResult {
            status: SearchStatus::Exhausted,
            proof_tree: None,
            inferences_used: deepest,
            final_bound,
            stats: total,
        }
    }

    /// One depth-limited search from the initial tableau.
    ///
    /// Callers implementing their own deepening schedule loop over this.
    pub fn search_round(&mut self, depth_bound: usize) -> RoundResult {
        let start = Instant::now();
        self.sink.reset(depth_bound);

        let mut round = Round {
            states: Vec::new(),
            seen: HashMap::new(),
            stats: SearchStats {
                rounds: 1,
                ..SearchStats::default()
            },
            deepest: 0,
        };

        let initial = Tableau::new(self.problem.goal.clone(), self.problem.axioms.clone());
        round.admit(initial, None, self.config.loop_detection, self.sink.as_mut());

        let status = loop {
            let Some(id) = self.sink.select() else {
                break SearchStatus::Exhausted;
            };
            if self.cancel.load(Ordering::Relaxed) {
                log::debug!("search cancelled");
                break SearchStatus::Cancelled;
            }
            if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                log::debug!("timeout reached at bound {}", depth_bound);
                break SearchStatus::Timeout;
            }

            let state = round.states[id.0].clone();
            round.deepest = round.deepest.max(state.depth);

            if state.tableau.is_fully_closed() {
                log::debug!(
                    "proof found: state {} with {} inferences",
                    id.0,
                    state.depth
                );
                self.sink.on_outcome(id, BranchOutcome::Closed);
                round.stats.elapsed = start.elapsed();
                return RoundResult {
                    status: SearchStatus::ProofFound,
                    proof: Some((*state.tableau).clone()),
                    depth_bound,
                    deepest: round.deepest,
                    stats: round.stats,
                };
            }

            if state.depth >= depth_bound {
                round.stats.depth_pruned += 1;
                self.sink.on_outcome(id, BranchOutcome::DepthExceeded);
                continue;
            }

            let successors = state.tableau.expand(self.policy.as_mut());
            round.stats.states_expanded += 1;
            log::trace!(
                "expanded state {} at depth {}: {} successor(s)",
                id.0,
                state.depth,
                successors.len()
            );

            if successors.is_empty() {
                log::debug!("state {} is a dead end", id.0);
                round.stats.dead_ends += 1;
                self.sink.on_outcome(id, BranchOutcome::DeadEnd);
                continue;
            }
            self.sink.on_outcome(id, BranchOutcome::Expanded);

            let mut limit_hit = false;
            for successor in successors {
                if self.config.max_states > 0 && round.states.len() >= self.config.max_states {
                    limit_hit = true;
                    break;
                }
                round.admit(
                    successor,
                    Some(id),
                    self.config.loop_detection,
                    self.sink.as_mut(),
                );
            }
            round.stats.max_frontier = round.stats.max_frontier.max(self.sink.len());
            if limit_hit {
                log::debug!("state limit {} reached", self.config.max_states);
                break SearchStatus::ResourceLimit;
            }
        };

        round.stats.elapsed = start.elapsed();
        RoundResult {
            status,
            proof: None,
            depth_bound,
            deepest: round.deepest,
            stats: round.stats,
        }
    }
}

/// Bookkeeping for a single round
struct Round {
    states: Vec<ProofState>,
    /// Structural hash -> states with that hash
    seen: HashMap<u64, Vec<StateId>>,
    stats: SearchStats,
    deepest: usize,
}

impl Round {
    /// Record a new state and hand it to the frontier, unless it duplicates
    /// one already explored.
    fn admit(
        &mut self,
        tableau: Tableau,
        parent: Option<StateId>,
        loop_detection: bool,
        sink: &mut dyn FrontierSink,
    ) {
        let mut hasher = DefaultHasher::new();
        tableau.hash(&mut hasher);
        let key = hasher.finish();

        if loop_detection {
            if let Some(ids) = self.seen.get(&key) {
                if ids.iter().any(|&other| *self.states[other.0].tableau == tableau) {
                    log::trace!("pruned duplicate of an explored state");
                    self.stats.loops_pruned += 1;
                    return;
                }
            }
        }

        let id = StateId(self.states.len());
        let state = ProofState::new(id, parent, tableau);
        sink.on_enqueue(id, parent, &state.tableau);
        self.seen.entry(key).or_default().push(id);
        self.states.push(state);
        self.stats.states_generated += 1;
    }
}

/// Run a full iterative-deepening search with the strategies named in `config`
pub fn prove(problem: Problem, config: SearchConfig) -> Result<ProofResult> {
    Ok(SearchController::new(problem, config)?.prove())
}
