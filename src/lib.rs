//! Bounded-run string repair.
//!
//! Given a binary string of length `n` with some positions fixed and others
//! free, and a reference string of the same length, find an assignment of
//! the free positions such that no `k` consecutive symbols are equal, while
//! differing from the reference in as few positions as possible.
//!
//! ## Core idea
//! 1. The only state that matters when deciding position `i` is the trailing
//!    run: its symbol and its length (below `k`).
//! 2. [`RunBoundProblem`](problems::run_bound::RunBoundProblem) encodes that
//!    state space as a layered DP.
//! 3. [`DpEngine`] runs the DP with checkpointed reconstruction and returns the
//!    optimal cost together with one witness.
//!
//! An independent exhaustive [`oracle`] exists to cross-check the solver on
//! small inputs. Both sides judge strings with the same [`is_valid`].
//!
//! ## Quick start
//! ```
//! use runrepair::{brute_force, is_valid, solve, Instance};
//!
//! let inst = Instance::parse(8, 4, "??0?????", "11111111").unwrap();
//! let fast = solve(&inst);
//! let slow = brute_force(&inst).unwrap();
//! assert_eq!(fast.min_cost(), slow.min_cost());
//! assert!(is_valid(fast.witness().unwrap(), inst.k()));
//! ```

pub mod blocks;
pub mod builder;
pub mod cases;
pub mod engine;
pub mod error;
pub mod instance;
pub mod oracle;
pub mod problems;
pub mod solution;
pub mod solver;
pub mod traits;
pub mod validity;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::{DpEngine, DpPath};
pub use crate::error::{CaseParseError, ConfigError, InstanceError, SolveError};
pub use crate::instance::{Bit, Cell, Completion, Instance};
pub use crate::oracle::{brute_force, brute_force_with_limit, ORACLE_FREE_LIMIT};
pub use crate::solution::Solution;
pub use crate::solver::{solve, solve_batch, solve_with_block_size};
pub use crate::traits::LayeredProblem;
pub use crate::validity::{hamming, is_valid};
