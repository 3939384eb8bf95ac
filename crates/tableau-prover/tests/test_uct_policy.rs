//! Tests for pluggable selection strategies

use tableau_prover::{
    ActionPolicy, Atom, Clause, Exhaustive, FrontierSink, Literal, PolicyConfig, Problem,
    SearchConfig, SearchController, SearchStatus, StateId, Tableau, UctFrontier,
};

fn pos(p: &str) -> Literal {
    Literal::positive(Atom::proposition(p))
}

fn neg(p: &str) -> Literal {
    Literal::negative(Atom::proposition(p))
}

/// Goal G with a dead-end detour through D and a two-step proof through A.
fn detour_problem() -> Problem {
    Problem::new(
        pos("G"),
        vec![
            Clause::new(vec![neg("G"), pos("D")]),
            Clause::new(vec![neg("D"), pos("E")]),
            Clause::new(vec![neg("G"), pos("A")]),
            Clause::new(vec![neg("A")]),
        ],
    )
}

/// Depth-first frontier used to check the controller accepts any sink
#[derive(Default)]
struct LifoFrontier {
    stack: Vec<StateId>,
}

impl FrontierSink for LifoFrontier {
    fn on_enqueue(&mut self, state: StateId, _parent: Option<StateId>, _tableau: &Tableau) {
        self.stack.push(state);
    }

    fn select(&mut self) -> Option<StateId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn name(&self) -> &str {
        "LIFO"
    }

    fn reset(&mut self, _depth_bound: usize) {
        self.stack.clear();
    }
}

/// Action policy that only ever applies unit clauses
struct UnitOnly;

impl ActionPolicy for UnitOnly {
    fn select_matches<'a>(&mut self, leaf: &Literal, axioms: &'a [Clause]) -> Vec<&'a Clause> {
        Exhaustive
            .select_matches(leaf, axioms)
            .into_iter()
            .filter(|clause| clause.len() == 1)
            .collect()
    }

    fn name(&self) -> &str {
        "UnitOnly"
    }
}

#[test]
fn test_custom_frontier_plugs_into_controller() {
    let mut controller = SearchController::with_strategies(
        detour_problem(),
        SearchConfig::with_bound(4),
        Box::new(Exhaustive),
        Box::new(LifoFrontier::default()),
    )
    .unwrap();
    let result = controller.prove();
    assert!(result.found());
    assert_eq!(result.inferences_used, 2);
}

#[test]
fn test_custom_action_policy_restricts_search() {
    let mut controller = SearchController::with_strategies(
        detour_problem(),
        SearchConfig::with_bound(4),
        Box::new(UnitOnly),
        Box::new(tableau_prover::FifoFrontier::new()),
    )
    .unwrap();
    let result = controller.prove();
    // G has no unit axiom, so the root is stuck
    assert!(!result.found());
    assert_eq!(result.stats.dead_ends, 1);
}

#[test]
fn test_uct_search_finds_proof_past_detour() {
    for seed in 0..5 {
        let config = SearchConfig {
            depth_bound: 4,
            max_rounds: 1,
            action_policy: PolicyConfig::Uct {
                exploration_constant: std::f64::consts::SQRT_2,
                rollouts: 1,
                seed: Some(seed),
            },
            ..SearchConfig::default()
        };
        let mut controller = SearchController::new(detour_problem(), config).unwrap();
        let result = controller.prove();
        assert_eq!(result.status, SearchStatus::ProofFound, "seed {}", seed);
        assert_eq!(result.inferences_used, 2);
    }
}

#[test]
fn test_uct_rollouts_reward_provable_state() {
    let problem = detour_problem();
    let root = Tableau::new(problem.goal.clone(), problem.axioms.clone());
    let successors = root.expand(&mut Exhaustive);
    assert_eq!(successors.len(), 2);

    let mut sink = UctFrontier::new(1.0, 4, Some(5));
    sink.reset(4);
    sink.on_enqueue(StateId(0), None, &root);
    // successors[0] takes the D detour, successors[1] the A route
    sink.on_enqueue(StateId(1), Some(StateId(0)), &successors[0]);
    sink.on_enqueue(StateId(2), Some(StateId(0)), &successors[1]);

    let detour = *sink.stats(StateId(1)).unwrap();
    let direct = *sink.stats(StateId(2)).unwrap();
    assert_eq!(detour.total_reward, 0.0);
    assert_eq!(direct.total_reward, 4.0);
    assert_eq!(direct.mean_reward(), 1.0);

    let root_stats = sink.stats(StateId(0)).unwrap();
    assert_eq!(root_stats.visit_count, 12);

    // the provable successor outscores both the root and the detour
    assert_eq!(sink.select(), Some(StateId(2)));
}
