//! Polynomial-time solver built on the layered DP engine.
//!
//! `solve` runs in `O(n * min(k, n))` time. Memory is one frontier per
//! checkpoint block plus the back-pointers of a single block.

use crate::builder::DpEngineBuilder;
use crate::engine::{DpEngine, DpPath};
use crate::error::ConfigError;
use crate::instance::{Bit, Completion, Instance};
use crate::problems::run_bound::RunBoundProblem;
use crate::solution::Solution;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum-deviation valid completion of `instance`.
///
/// ```
/// use runrepair::{solve, Instance};
///
/// let inst = Instance::parse(3, 1, "???", "000").unwrap();
/// assert!(!solve(&inst).is_feasible());
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(n = instance.len(), k = instance.k()))
)]
pub fn solve(instance: &Instance) -> Solution {
    into_solution(DpEngine::new(RunBoundProblem::new(instance)).run())
}

/// Like [`solve`], with an explicit checkpoint block size.
///
/// The result is identical for every block size; only memory use changes.
pub fn solve_with_block_size(
    instance: &Instance,
    block_size: usize,
) -> Result<Solution, ConfigError> {
    let engine = DpEngineBuilder::new(RunBoundProblem::new(instance))
        .with_block_size(block_size)
        .build()?;
    Ok(into_solution(engine.run()))
}

fn into_solution(path: Option<DpPath<Bit>>) -> Solution {
    match path {
        Some(path) => Solution::Feasible {
            cost: path.cost,
            witness: Completion::new(path.labels),
        },
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!("instance has no valid completion");
            Solution::Infeasible
        }
    }
}

/// Solve independent instances, preserving input order.
#[cfg(feature = "parallel")]
pub fn solve_batch(instances: &[Instance]) -> Vec<Solution> {
    instances.par_iter().map(solve).collect()
}

/// Solve independent instances, preserving input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch(instances: &[Instance]) -> Vec<Solution> {
    instances.iter().map(solve).collect()
}
