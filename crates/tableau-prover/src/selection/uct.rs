//! UCT-guided frontier
//!
//! Keeps visit statistics for every proof state of the current round and
//! selects the pending state with the highest UCT score:
//!
//! ```text
//! UCT(s) = W(s) / N(s) + c * sqrt(ln(N(parent(s))) / N(s))
//! ```
//!
//! When a state is enqueued, `rollouts` random playouts are run from it
//! (uniformly random successor at each step, stopped at a closed tableau, a
//! dead end or the depth bound). Each playout's reward (1.0 for a closed
//! tableau, 0.0 otherwise) is backpropagated to the state and all its
//! ancestors. Terminal outcomes reported by the controller are backpropagated
//! the same way.

use super::action::Exhaustive;
use super::frontier::{BranchOutcome, FrontierSink};
use crate::search::StateId;
use crate::tableau::Tableau;
use indexmap::{IndexMap, IndexSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Visit statistics for one proof state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UctStats {
    pub parent: Option<StateId>,
    pub visit_count: u32,
    pub total_reward: f64,
}

impl UctStats {
    /// Mean reward W/N (0 when unvisited)
    pub fn mean_reward(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_reward / self.visit_count as f64
        }
    }

    /// UCT score. Unvisited states score infinity so they are tried first.
    pub fn uct_score(&self, parent_visits: u32, exploration_constant: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let explore = ((parent_visits.max(1) as f64).ln() / self.visit_count as f64).sqrt();
        self.mean_reward() + exploration_constant * explore
    }
}

/// Frontier ordered by UCT score over a per-round statistics table.
pub struct UctFrontier {
    exploration_constant: f64,
    rollouts: usize,
    seed: Option<u64>,
    depth_bound: usize,
    rng: StdRng,
    /// Statistics for every state seen this round, in enqueue order
    stats: IndexMap<StateId, UctStats>,
    /// States awaiting selection, in enqueue order (ties resolve to the oldest)
    pending: IndexSet<StateId>,
    /// Rewards backpropagated this round; parent visit count for root states
    total_visits: u32,
}

impl UctFrontier {
    pub fn new(exploration_constant: f64, rollouts: usize, seed: Option<u64>) -> Self {
        UctFrontier {
            exploration_constant,
            rollouts,
            seed,
            depth_bound: usize::MAX,
            rng: Self::make_rng(seed),
            stats: IndexMap::new(),
            pending: IndexSet::new(),
            total_visits: 0,
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn stats(&self, state: StateId) -> Option<&UctStats> {
        self.stats.get(&state)
    }

    pub fn total_visits(&self) -> u32 {
        self.total_visits
    }

    /// Add `reward` to `state` and every ancestor, counting one visit each.
    pub fn backpropagate(&mut self, state: StateId, reward: f64) {
        let mut current = Some(state);
        while let Some(id) = current {
            match self.stats.get_mut(&id) {
                Some(stats) => {
                    stats.visit_count += 1;
                    stats.total_reward += reward;
                    current = stats.parent;
                }
                None => break,
            }
        }
        self.total_visits += 1;
    }

    /// One random playout from `tableau`.
    fn rollout(&mut self, tableau: &Tableau) -> f64 {
        let mut current = tableau.clone();
        loop {
            if current.is_fully_closed() {
                return 1.0;
            }
            if current.inference_count() >= self.depth_bound {
                return 0.0;
            }
            let mut successors = current.expand(&mut Exhaustive);
            if successors.is_empty() {
                return 0.0;
            }
            let pick = self.rng.gen_range(0..successors.len());
            current = successors.swap_remove(pick);
        }
    }

    fn parent_visits(&self, stats: &UctStats) -> u32 {
        stats
            .parent
            .and_then(|parent| self.stats.get(&parent))
            .map(|parent| parent.visit_count)
            .unwrap_or(self.total_visits)
    }
}

impl FrontierSink for UctFrontier {
    fn on_enqueue(&mut self, state: StateId, parent: Option<StateId>, tableau: &Tableau) {
        self.stats.insert(
            state,
            UctStats {
                parent,
                ..UctStats::default()
            },
        );
        self.pending.insert(state);
        for _ in 0..self.rollouts {
            let reward = self.rollout(tableau);
            self.backpropagate(state, reward);
        }
    }

    fn on_outcome(&mut self, state: StateId, outcome: BranchOutcome) {
        if let Some(reward) = outcome.reward() {
            self.backpropagate(state, reward);
        }
    }

    fn select(&mut self) -> Option<StateId> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, id) in self.pending.iter().enumerate() {
            let Some(stats) = self.stats.get(id) else {
                continue;
            };
            let score = stats.uct_score(self.parent_visits(stats), self.exploration_constant);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        let (pos, _) = best?;
        self.pending.shift_remove_index(pos)
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn name(&self) -> &str {
        "UCT"
    }

    fn reset(&mut self, depth_bound: usize) {
        self.depth_bound = depth_bound;
        self.stats.clear();
        self.pending.clear();
        self.total_visits = 0;
        self.rng = Self::make_rng(self.seed);
    }
}
