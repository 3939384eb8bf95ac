//! Integration tests for the tableau prover

use tableau_prover::{
    prove, ClauseRecord, Exhaustive, LiteralRecord, PolicyConfig, Problem, ProverError,
    SearchConfig, SearchController, SearchStatus, Tableau,
};
use std::time::{Duration, Instant};

fn lit(predicate: &str, args: &[&str], negated: bool) -> LiteralRecord {
    LiteralRecord::new(predicate, args, negated)
}

fn clause(literals: Vec<LiteralRecord>) -> ClauseRecord {
    ClauseRecord::new(literals)
}

fn problem(goal: LiteralRecord, axioms: Vec<ClauseRecord>) -> Problem {
    Problem::from_records(&goal, &axioms).expect("well-formed problem")
}

/// Goal P(a) with a chain P -> Q1 -> Q2 -> Q3 -> Q4 that needs five inferences.
fn five_step_chain() -> Problem {
    problem(
        lit("P", &["a"], false),
        vec![
            clause(vec![lit("P", &["a"], true), lit("Q1", &[], false)]),
            clause(vec![lit("Q1", &[], true), lit("Q2", &[], false)]),
            clause(vec![lit("Q2", &[], true), lit("Q3", &[], false)]),
            clause(vec![lit("Q3", &[], true), lit("Q4", &[], false)]),
            clause(vec![lit("Q4", &[], true)]),
        ],
    )
}

#[test_log::test]
fn test_scenario_a_provable_in_two_inferences() {
    let problem = problem(
        lit("P", &["a"], false),
        vec![
            clause(vec![lit("P", &["a"], true), lit("Q", &["b"], false)]),
            clause(vec![lit("Q", &["b"], true)]),
        ],
    );
    let result = prove(problem, SearchConfig::default()).unwrap();

    assert!(result.found());
    assert_eq!(result.inferences_used, 2);
    let proof = result.proof_tree.expect("proof tree");
    assert!(proof.is_fully_closed());
    assert!(proof.frontier().is_empty());
    assert_eq!(proof.inference_count(), 2);
}

#[test]
fn test_scenario_b_no_matching_axiom() {
    let problem = problem(
        lit("P", &["a"], false),
        vec![clause(vec![lit("R", &["a"], false), lit("S", &["a"], false)])],
    );
    let result = prove(problem, SearchConfig::default()).unwrap();

    assert!(!result.found());
    assert_eq!(result.status, SearchStatus::Exhausted);
    assert_eq!(result.inferences_used, 0);
    assert!(result.proof_tree.is_none());
    assert_eq!(result.stats.dead_ends, 1);
    // nothing was pruned at the bound, so deepening stops after one round
    assert_eq!(result.stats.rounds, 1);
}

#[test]
fn test_scenario_c_depth_bound_reached_first() {
    let result = prove(five_step_chain(), SearchConfig::with_bound(3)).unwrap();

    assert!(!result.found());
    assert_eq!(result.status, SearchStatus::Exhausted);
    assert!(result.stats.depth_pruned > 0);
    assert_eq!(result.inferences_used, 3);
}

#[test]
fn test_iterative_deepening_reaches_proof() {
    let config = SearchConfig {
        depth_bound: 3,
        max_rounds: 3,
        ..SearchConfig::default()
    };
    let result = prove(five_step_chain(), config).unwrap();

    assert!(result.found());
    assert_eq!(result.inferences_used, 5);
    assert_eq!(result.final_bound, 5);
    assert_eq!(result.stats.rounds, 3);
}

#[test]
fn test_caller_driven_deepening() {
    let mut controller =
        SearchController::new(five_step_chain(), SearchConfig::default()).unwrap();
    let mut found_at = None;
    for bound in 0..10 {
        let round = controller.search_round(bound);
        if round.status == SearchStatus::ProofFound {
            found_at = Some(bound);
            break;
        }
        assert_eq!(round.status, SearchStatus::Exhausted);
    }
    assert_eq!(found_at, Some(5));
}

#[test]
fn test_scenario_d_branching_choice() {
    let problem = problem(
        lit("P", &["a"], false),
        vec![
            clause(vec![lit("P", &["a"], true), lit("Q", &["a"], false)]),
            clause(vec![lit("P", &["a"], true), lit("R", &["a"], false)]),
        ],
    );
    let tableau = Tableau::new(problem.goal.clone(), problem.axioms.clone());
    let successors = tableau.expand(&mut Exhaustive);

    assert_eq!(successors.len(), 2);
    assert_ne!(successors[0], successors[1]);
    for successor in &successors {
        assert_eq!(successor.inference_count(), 1);
        assert_eq!(successor.frontier().len(), 1);
        // each successor is explored on its own; Q(a) and R(a) are stuck
        assert!(successor.expand(&mut Exhaustive).is_empty());
    }
}

#[test]
fn test_branching_proof_needs_every_branch_closed() {
    // P(a) splits into Q(a) and R(a); both must be refuted.
    let problem = problem(
        lit("P", &["a"], false),
        vec![
            clause(vec![
                lit("P", &["a"], true),
                lit("Q", &["a"], false),
                lit("R", &["a"], false),
            ]),
            clause(vec![lit("Q", &["a"], true)]),
            clause(vec![lit("R", &["a"], true)]),
        ],
    );
    let result = prove(problem, SearchConfig::default()).unwrap();

    assert!(result.found());
    assert_eq!(result.inferences_used, 3);
    let proof = result.proof_tree.unwrap();
    assert_eq!(
        proof.to_string(),
        "P(a)\n├── ¬P(a) ✗\n├── Q(a)\n│   └── ¬Q(a) ✗\n└── R(a)\n    └── ¬R(a) ✗\n"
    );
}

#[test]
fn test_matching_ignores_argument_identity() {
    // ¬P(b) matches the goal P(a) syntactically but does not close it.
    let problem = problem(
        lit("P", &["a"], false),
        vec![clause(vec![lit("P", &["b"], true)])],
    );
    let tableau = Tableau::new(problem.goal.clone(), problem.axioms.clone());
    let successors = tableau.expand(&mut Exhaustive);
    assert_eq!(successors.len(), 1);
    assert!(!successors[0].is_fully_closed());

    let result = prove(problem, SearchConfig::default()).unwrap();
    assert!(!result.found());
}

#[test]
fn test_uct_policy_finds_proof() {
    let config = SearchConfig {
        depth_bound: 3,
        max_rounds: 4,
        action_policy: PolicyConfig::Uct {
            exploration_constant: 1.4,
            rollouts: 2,
            seed: Some(17),
        },
        ..SearchConfig::default()
    };
    let result = prove(five_step_chain(), config).unwrap();
    assert!(result.found());
    assert_eq!(result.inferences_used, 5);
}

#[test]
fn test_random_policy_on_linear_chain() {
    // Every leaf has exactly one applicable axiom, so random choice is forced.
    let config = SearchConfig {
        depth_bound: 5,
        max_rounds: 1,
        action_policy: PolicyConfig::UniformRandom { seed: Some(3) },
        ..SearchConfig::default()
    };
    let result = prove(five_step_chain(), config).unwrap();
    assert!(result.found());
}

#[test]
fn test_random_policy_retries_after_dead_end_round() {
    // One inference closes P, the other leaves the dead end D. A random round
    // that picks D prunes nothing, yet later rounds may still pick the unit.
    let dead_end_or_unit = || {
        problem(
            lit("P", &[], false),
            vec![
                clause(vec![lit("P", &[], true), lit("D", &[], false)]),
                clause(vec![lit("P", &[], true)]),
            ],
        )
    };
    for seed in 0..20 {
        let config = SearchConfig {
            depth_bound: 1,
            max_rounds: 32,
            action_policy: PolicyConfig::UniformRandom { seed: Some(seed) },
            ..SearchConfig::default()
        };
        let result = prove(dead_end_or_unit(), config).unwrap();
        assert_eq!(result.status, SearchStatus::ProofFound, "seed {}", seed);
        assert_eq!(result.inferences_used, 1);
    }
}

#[test]
fn test_zero_timeout_reports_timeout() {
    let config = SearchConfig {
        timeout: Some(Duration::ZERO),
        ..SearchConfig::default()
    };
    let result = prove(five_step_chain(), config).unwrap();
    assert_eq!(result.status, SearchStatus::Timeout);
    assert!(!result.found());
    assert!(result.proof_tree.is_none());
    assert_eq!(result.stats.rounds, 1);
}

#[test]
fn test_past_deadline_stops_round() {
    let mut controller =
        SearchController::new(five_step_chain(), SearchConfig::with_bound(5)).unwrap();
    controller.set_deadline(Some(Instant::now()));
    let round = controller.search_round(5);
    assert_eq!(round.status, SearchStatus::Timeout);
    assert!(round.proof.is_none());

    controller.set_deadline(None);
    let round = controller.search_round(5);
    assert_eq!(round.status, SearchStatus::ProofFound);
}

#[test]
fn test_malformed_input_rejected_before_search() {
    let goal = lit("P", &["a"], false);
    let axioms = vec![clause(vec![lit("Q", &[""], false)])];
    let err = Problem::from_records(&goal, &axioms).unwrap_err();
    assert!(matches!(err, ProverError::MalformedInput(_)));

    let err = Problem::from_records(&lit("P Q", &[], false), &[]).unwrap_err();
    assert!(matches!(err, ProverError::MalformedInput(_)));
}

#[test]
fn test_invalid_config_rejected() {
    let config = SearchConfig {
        max_rounds: 0,
        ..SearchConfig::default()
    };
    assert!(matches!(
        prove(five_step_chain(), config),
        Err(ProverError::InvalidConfig(_))
    ));
}

#[test]
fn test_result_json() {
    let result = prove(five_step_chain(), SearchConfig::with_bound(5)).unwrap();
    let value = serde_json::to_value(result.to_json()).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["status"], "ProofFound");
    assert_eq!(value["inferences_used"], 5);
    assert_eq!(value["proof"]["fully_closed"], true);
    assert_eq!(value["proof"]["root"]["literal"], "P(a)");
}
