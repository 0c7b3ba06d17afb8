//! Exhaustive reference oracle.
//!
//! Enumerates every assignment of the free positions, left to right, `0`
//! before `1`, and validates each finished string with [`is_valid`]. It shares
//! no code with the DP solver apart from the instance type and the validity
//! check, so disagreements between the two point at real bugs.
//!
//! The search visits `2^free` leaves. [`brute_force`] refuses instances with
//! more than [`ORACLE_FREE_LIMIT`] free positions.

use crate::error::{SolveError, SolveResult};
use crate::instance::{Bit, Cell, Completion, Instance};
use crate::solution::Solution;
use crate::validity::is_valid;

/// Largest number of free positions [`brute_force`] accepts.
pub const ORACLE_FREE_LIMIT: usize = 20;

/// Exhaustively solve `instance`.
///
/// Among equally cheap valid completions the lexicographically smallest one
/// is returned.
pub fn brute_force(instance: &Instance) -> SolveResult<Solution> {
    brute_force_with_limit(instance, ORACLE_FREE_LIMIT)
}

/// Like [`brute_force`], with a caller-chosen bound on free positions.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(instance),
        fields(n = instance.len(), k = instance.k())
    )
)]
pub fn brute_force_with_limit(instance: &Instance, limit: usize) -> SolveResult<Solution> {
    let free = instance.free_count();
    if free > limit {
        #[cfg(feature = "tracing")]
        tracing::debug!(free, limit, "refusing exhaustive search");
        return Err(SolveError::IntractableInputSize { free, limit });
    }

    let mut search = Search {
        instance,
        current: Vec::with_capacity(instance.len()),
        best: None,
    };
    search.descend(0, 0);

    Ok(match search.best {
        Some((cost, bits)) => Solution::Feasible {
            cost,
            witness: Completion::new(bits),
        },
        None => Solution::Infeasible,
    })
}

struct Search<'a> {
    instance: &'a Instance,
    current: Vec<Bit>,
    best: Option<(usize, Vec<Bit>)>,
}

impl Search<'_> {
    fn descend(&mut self, i: usize, cost: usize) {
        if i == self.instance.len() {
            self.visit_leaf(cost);
            return;
        }
        let choices: &[Bit] = match self.instance.pattern()[i] {
            Cell::Fixed(Bit::Zero) => &[Bit::Zero],
            Cell::Fixed(Bit::One) => &[Bit::One],
            Cell::Free => &[Bit::Zero, Bit::One],
        };
        for &c in choices {
            let step = usize::from(self.instance.reference()[i] != c);
            self.current.push(c);
            self.descend(i + 1, cost + step);
            self.current.pop();
        }
    }

    fn visit_leaf(&mut self, cost: usize) {
        if !is_valid(&self.current, self.instance.k()) {
            return;
        }
        if self.best.as_ref().map_or(true, |(b, _)| cost < *b) {
            self.best = Some((cost, self.current.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_lexicographically_smallest_optimum() {
        let inst = Instance::parse(4, 2, "????", "0000").unwrap();
        let sol = brute_force(&inst).unwrap();
        assert_eq!(sol.min_cost(), Some(2));
        assert_eq!(sol.witness().unwrap().to_string(), "0101");
    }

    #[test]
    fn all_fixed_instance_is_checked_directly() {
        let ok = Instance::parse(3, 2, "010", "111").unwrap();
        assert_eq!(brute_force(&ok).unwrap().min_cost(), Some(2));
        let bad = Instance::parse(3, 2, "011", "011").unwrap();
        assert_eq!(brute_force(&bad).unwrap(), Solution::Infeasible);
    }

    #[test]
    fn k_one_is_infeasible() {
        let inst = Instance::parse(3, 1, "???", "000").unwrap();
        assert_eq!(brute_force(&inst).unwrap(), Solution::Infeasible);
    }

    #[test]
    fn refuses_too_many_free_positions() {
        let inst = Instance::parse(5, 2, "?????", "00000").unwrap();
        assert_eq!(
            brute_force_with_limit(&inst, 4),
            Err(SolveError::IntractableInputSize { free: 5, limit: 4 })
        );
        assert!(brute_force_with_limit(&inst, 5).is_ok());
    }

    #[test]
    fn default_limit_guards_large_inputs() {
        let n = ORACLE_FREE_LIMIT + 1;
        let inst = Instance::parse(n, 3, &"?".repeat(n), &"0".repeat(n)).unwrap();
        assert!(matches!(
            brute_force(&inst),
            Err(SolveError::IntractableInputSize { .. })
        ));
    }
}
