pub mod brute_force;
pub mod dynamic_programming;

pub use brute_force::BruteForceSolution;
pub use dynamic_programming::DpSolution;

use knap_challenges::knapsack::{Challenge, KnapsackError, Validation};

/// Both solvers run on the same instance plus the verdict on their optima.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossCheck {
    pub dp: DpSolution,
    pub brute_force: BruteForceSolution,
    pub validation: Validation,
}

pub fn cross_check(challenge: &Challenge) -> Result<CrossCheck, KnapsackError> {
    let dp = dynamic_programming::solve_challenge(challenge)?;
    let brute_force = brute_force::solve_challenge(challenge)?;
    let validation = Validation::new(
        dp.result.optimal_value,
        brute_force.result.optimal_value,
    );
    Ok(CrossCheck {
        dp,
        brute_force,
        validation,
    })
}
