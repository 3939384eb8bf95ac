//! Run one problem under each search strategy and print the outcome.
//!
//! `RUST_LOG=debug cargo run --example compare_policies` shows the search log.

use tableau_prover::{PolicyConfig, Problem, SearchConfig, SearchController};

const PROBLEM: &str = r#"{
    "goal": {"predicate": "P", "args": ["a"]},
    "axioms": [
        [{"predicate": "P", "args": ["a"], "negated": true}, {"predicate": "Q", "args": ["b"]},
         {"predicate": "R", "args": ["a", "b"]}],
        [{"predicate": "Q", "args": ["b"], "negated": true}, {"predicate": "S", "args": ["b"]}],
        [{"predicate": "S", "args": ["b"], "negated": true}],
        [{"predicate": "R", "args": ["a", "b"], "negated": true}, {"predicate": "Q", "args": ["b"]}],
        [{"predicate": "R", "args": ["a", "b"], "negated": true}, {"predicate": "T", "args": []}]
    ]
}"#;

fn main() {
    env_logger::init();

    let problem = Problem::from_json(PROBLEM).expect("Failed to decode problem");
    for axiom in problem.axioms.iter() {
        println!("axiom: {}", axiom);
    }
    println!("goal:  {}\n", problem.goal);

    let policies = [
        PolicyConfig::Exhaustive,
        PolicyConfig::UniformRandom { seed: Some(1) },
        PolicyConfig::Uct {
            exploration_constant: std::f64::consts::SQRT_2,
            rollouts: 2,
            seed: Some(1),
        },
    ];

    for policy in policies {
        let config = SearchConfig {
            depth_bound: 2,
            max_rounds: 6,
            action_policy: policy.clone(),
            ..SearchConfig::default()
        };
        let mut controller =
            SearchController::new(problem.clone(), config).expect("Invalid configuration");
        let result = controller.prove();

        println!("=== {:?} ===", policy);
        println!(
            "status: {:?}, inferences: {}, bound: {}",
            result.status, result.inferences_used, result.final_bound
        );
        if let Some(proof) = &result.proof_tree {
            print!("{}", proof);
        }
        println!(
            "stats: {}\n",
            serde_json::to_string(&result.stats).unwrap_or_default()
        );
    }
}
