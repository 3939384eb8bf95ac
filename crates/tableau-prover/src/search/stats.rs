//! Search statistics
//!
//! Counters collected by the controller for every round. Pruned and stuck
//! branches are not errors; they are counted here.

use serde::{Serialize, Serializer};
use std::time::Duration;

fn secs<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64())
}

/// Counters for one round, or accumulated over all rounds.
///
/// `elapsed` is serialized as `f64` seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub rounds: usize,
    /// Proof states created (including the initial one)
    pub states_generated: usize,
    /// Proof states passed to `expand`
    pub states_expanded: usize,
    /// States whose open leaves were all stuck
    pub dead_ends: usize,
    /// States discarded at the depth bound
    pub depth_pruned: usize,
    /// Successors discarded as duplicates of an explored state
    pub loops_pruned: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
    #[serde(serialize_with = "secs")]
    pub elapsed: Duration,
}

impl SearchStats {
    /// Fold the counters of a later round into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.rounds += other.rounds;
        self.states_generated += other.states_generated;
        self.states_expanded += other.states_expanded;
        self.dead_ends += other.dead_ends;
        self.depth_pruned += other.depth_pruned;
        self.loops_pruned += other.loops_pruned;
        self.max_frontier = self.max_frontier.max(other.max_frontier);
        self.elapsed += other.elapsed;
    }
}
