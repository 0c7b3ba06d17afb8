use crate::instance::Completion;

/// Outcome of a solve: an optimal witness, or proof that none exists.
///
/// `Infeasible` is a regular outcome, distinct from a zero-cost success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Feasible { cost: usize, witness: Completion },
    Infeasible,
}

impl Solution {
    /// Minimum number of deviations from the reference, if feasible.
    pub fn min_cost(&self) -> Option<usize> {
        match self {
            Solution::Feasible { cost, .. } => Some(*cost),
            Solution::Infeasible => None,
        }
    }

    pub fn witness(&self) -> Option<&Completion> {
        match self {
            Solution::Feasible { witness, .. } => Some(witness),
            Solution::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Solution::Feasible { .. })
    }
}
