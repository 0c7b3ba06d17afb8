//! Generic checkpointed DP engine.
//!
//! Two phases:
//! 1. A forward pass over all layers that keeps only the frontier at the
//!    start of each block (plus the running frontier).
//! 2. A backward reconstruction that walks the blocks from last to first,
//!    recomputing each block's back-pointers from its checkpoint and following
//!    them from the current slot down to the block's first layer.
//!
//! Because [`LayeredProblem::forward_step`] is pure and breaks ties
//! deterministically, the reconstructed labels do not depend on the block
//! size. A block size of at least `T` is the classic full back-pointer table.

use crate::blocks::{block_bounds, default_block_size, Checkpoint};
use crate::error::ConfigError;
use crate::traits::{BackLayer, Frontier, LayeredProblem};

/// Result of a successful run: optimal cost and one label per layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpPath<L> {
    pub cost: usize,
    pub labels: Vec<L>,
}

/// Checkpointed DP engine for a problem instance `P`.
///
/// ```
/// use runrepair::{engine::DpEngine, problems::run_bound::RunBoundProblem, Instance};
///
/// let inst = Instance::parse(4, 2, "????", "0000").unwrap();
/// let path = DpEngine::new(RunBoundProblem::new(&inst)).run().unwrap();
/// assert_eq!(path.cost, 2);
/// assert_eq!(path.labels.len(), 4);
/// ```
pub struct DpEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> DpEngine<P> {
    /// Create an engine with the default block size (about `sqrt(T)`).
    pub fn new(problem: P) -> Self {
        let block_size = default_block_size(problem.num_layers());
        Self {
            problem,
            block_size,
        }
    }

    /// Create an engine with an explicit block size.
    pub fn with_block_size(problem: P, block_size: usize) -> Result<Self, ConfigError> {
        if block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(Self {
            problem,
            block_size,
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Phase I: forward pass, keeping one frontier per block.
    ///
    /// Returns the checkpoints and the frontier at layer `T`.
    fn forward_checkpoints(&self) -> (Vec<Checkpoint>, Frontier) {
        let t = self.problem.num_layers();
        let bounds = block_bounds(t, self.block_size);
        let mut checkpoints = Vec::with_capacity(bounds.len());
        let mut frontier = self.problem.init_frontier();

        for (idx, (start, end)) in bounds.into_iter().enumerate() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("forward_block", block = idx, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            #[cfg(not(feature = "tracing"))]
            let _ = idx;

            checkpoints.push(Checkpoint {
                start,
                end,
                frontier: frontier.clone(),
            });
            for layer in start..end {
                let (next, _) = self.problem.forward_step(layer, &frontier);
                frontier = next;
            }
        }

        (checkpoints, frontier)
    }

    /// Recompute the back-pointers of one block from its checkpoint.
    fn block_back_pointers(&self, block: &Checkpoint) -> Vec<BackLayer<P::Label>> {
        let mut frontier = block.frontier.clone();
        let mut layers = Vec::with_capacity(block.len());
        for layer in block.start..block.end {
            let (next, back) = self.problem.forward_step(layer, &frontier);
            layers.push(back);
            frontier = next;
        }
        layers
    }

    /// Run the DP and reconstruct one optimal label sequence.
    ///
    /// Returns `None` when no slot of the final layer is reachable.
    ///
    /// # Panics
    /// Panics if the problem violates the trait contract, for example by
    /// returning a back-pointer to an unreachable slot or by producing
    /// different pointers when a block is recomputed.
    pub fn run(&self) -> Option<DpPath<P::Label>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "dp_run",
            layers = self.problem.num_layers(),
            width = self.problem.width(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (checkpoints, frontier_t) = self.forward_checkpoints();

        let Some(end_slot) = self.problem.terminal_slot(&frontier_t) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no reachable terminal slot");
            return None;
        };
        let cost = frontier_t[end_slot]?;

        let mut labels = Vec::with_capacity(self.problem.num_layers());
        let mut slot = end_slot;
        for block in checkpoints.iter().rev() {
            #[cfg(feature = "tracing")]
            let span =
                tracing::trace_span!("reconstruct_block", start = block.start, end = block.end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let back = self.block_back_pointers(block);
            for layer in back.iter().rev() {
                let step = layer[slot]
                    .expect("back-pointer chain reached an unreachable slot");
                labels.push(step.label);
                slot = step.prev;
            }
        }
        labels.reverse();

        Some(DpPath { cost, labels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::BackPointer;

    /// Two slots; moving to the other slot costs `swap_cost[layer]`,
    /// staying costs 1.
    struct Toggle {
        swap_cost: Vec<usize>,
    }

    impl LayeredProblem for Toggle {
        type Label = bool;

        fn num_layers(&self) -> usize {
            self.swap_cost.len()
        }

        fn width(&self) -> usize {
            2
        }

        fn init_frontier(&self) -> Frontier {
            vec![Some(0), None]
        }

        fn forward_step(&self, layer: usize, f: &Frontier) -> (Frontier, BackLayer<bool>) {
            let mut next = vec![None; 2];
            let mut back = vec![None; 2];
            for (from, cost) in f.iter().enumerate() {
                let Some(cost) = *cost else { continue };
                for (to, swapped) in [(from, false), (1 - from, true)] {
                    let step = if swapped { self.swap_cost[layer] } else { 1 };
                    let cand = cost + step;
                    if next[to].map_or(true, |c| cand < c) {
                        next[to] = Some(cand);
                        back[to] = Some(BackPointer {
                            prev: from,
                            label: swapped,
                        });
                    }
                }
            }
            (next, back)
        }

        fn terminal_slot(&self, f: &Frontier) -> Option<usize> {
            (0..2)
                .filter(|&s| f[s].is_some())
                .min_by_key(|&s| f[s])
        }
    }

    #[test]
    fn zero_layers_yield_empty_path() {
        let path = DpEngine::new(Toggle { swap_cost: vec![] }).run().unwrap();
        assert_eq!(path.cost, 0);
        assert!(path.labels.is_empty());
    }

    #[test]
    fn picks_cheap_swaps() {
        let engine = DpEngine::new(Toggle {
            swap_cost: vec![5, 0, 5, 0],
        });
        let path = engine.run().unwrap();
        assert_eq!(path.cost, 2);
        assert_eq!(path.labels, vec![false, true, false, true]);
    }

    #[test]
    fn block_size_does_not_change_result() {
        let swap_cost = vec![3, 0, 2, 0, 1, 4, 0, 0, 2, 1, 0];
        let reference = DpEngine::with_block_size(
            Toggle {
                swap_cost: swap_cost.clone(),
            },
            swap_cost.len(),
        )
        .unwrap()
        .run();
        for b in 1..=swap_cost.len() + 2 {
            let got = DpEngine::with_block_size(
                Toggle {
                    swap_cost: swap_cost.clone(),
                },
                b,
            )
            .unwrap()
            .run();
            assert_eq!(got, reference, "block size {b}");
        }
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let err = DpEngine::with_block_size(Toggle { swap_cost: vec![1] }, 0).err();
        assert_eq!(err, Some(ConfigError::ZeroBlockSize));
    }
}
