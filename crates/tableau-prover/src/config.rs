//! Search configuration types.

use crate::error::{ProverError, Result};
use crate::selection::{
    ActionPolicy, Exhaustive, FifoFrontier, FrontierSink, UctFrontier, UniformRandom,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the iterative-deepening search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Inference-step cap for the first round
    pub depth_bound: usize,
    /// Maximum number of deepening rounds
    pub max_rounds: usize,
    /// Bound increase between rounds
    pub bound_step: usize,
    /// Prune states structurally identical to one already explored
    pub loop_detection: bool,
    /// Maximum proof states generated per round (0 means no limit)
    pub max_states: usize,
    /// Wall-clock limit over all rounds
    pub timeout: Option<Duration>,
    pub action_policy: PolicyConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_bound: 4,
            max_rounds: 8,
            bound_step: 1,
            loop_detection: true,
            max_states: 0,
            timeout: None,
            action_policy: PolicyConfig::Exhaustive,
        }
    }
}

impl SearchConfig {
    /// A single round at a fixed bound
    pub fn with_bound(depth_bound: usize) -> Self {
        SearchConfig {
            depth_bound,
            max_rounds: 1,
            ..SearchConfig::default()
        }
    }

    /// Bound used by round `round` (0-based)
    pub fn bound_for_round(&self, round: usize) -> usize {
        self.depth_bound.saturating_add(round.saturating_mul(self.bound_step))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(ProverError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        if self.bound_step == 0 && self.max_rounds > 1 {
            return Err(ProverError::InvalidConfig(
                "bound_step must be positive when deepening over several rounds".into(),
            ));
        }
        if let PolicyConfig::Uct {
            exploration_constant,
            ..
        } = self.action_policy
        {
            if !exploration_constant.is_finite() || exploration_constant < 0.0 {
                return Err(ProverError::InvalidConfig(format!(
                    "UCT exploration constant must be finite and non-negative, got {}",
                    exploration_constant
                )));
            }
        }
        Ok(())
    }

    /// Decode and validate a configuration from JSON
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

fn default_rollouts() -> usize {
    1
}

/// Strategy used to choose axioms and order the frontier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PolicyConfig {
    /// Apply every matching axiom, breadth-first frontier
    #[default]
    Exhaustive,
    /// Apply one random matching axiom per leaf, breadth-first frontier
    UniformRandom {
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Apply every matching axiom, UCT-ordered frontier
    Uct {
        exploration_constant: f64,
        #[serde(default = "default_rollouts")]
        rollouts: usize,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl PolicyConfig {
    /// UCT with one rollout per state and a fresh random seed
    pub fn uct(exploration_constant: f64) -> Self {
        PolicyConfig::Uct {
            exploration_constant,
            rollouts: default_rollouts(),
            seed: None,
        }
    }

    /// Instantiate the action policy and frontier strategy
    pub fn build(&self) -> (Box<dyn ActionPolicy>, Box<dyn FrontierSink>) {
        match *self {
            PolicyConfig::Exhaustive => (Box::new(Exhaustive), Box::new(FifoFrontier::new())),
            PolicyConfig::UniformRandom { seed } => (
                Box::new(UniformRandom::new(seed)),
                Box::new(FifoFrontier::new()),
            ),
            PolicyConfig::Uct {
                exploration_constant,
                rollouts,
                seed,
            } => (
                Box::new(Exhaustive),
                Box::new(UctFrontier::new(exploration_constant, rollouts, seed)),
            ),
        }
    }
}
