//! Core trait for layered minimum-cost dynamic programs.
//!
//! To run a DP through [`DpEngine`](crate::engine::DpEngine), implement
//! [`LayeredProblem`] for a struct that captures the instance.
//!
//! The model:
//! - Layers `0..=T`, with transitions only between consecutive layers.
//! - Every layer has the same number of *slots* (`W = width()`); a frontier
//!   holds one optional cost per slot, `None` meaning unreachable.
//! - Each transition carries a *label* (for example the symbol written at
//!   that position). The optimal label sequence is the reconstructed answer.
//!
//! The engine only ever calls `forward_step` on frontiers it produced itself,
//! and may call it more than once for the same layer when it recomputes a
//! block during reconstruction. Implementations must therefore be pure.

/// One DP frontier: cost per slot, `None` for unreachable slots.
pub type Frontier = Vec<Option<usize>>;

/// How a slot on layer `i + 1` was reached from layer `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackPointer<L> {
    /// Slot on the previous layer.
    pub prev: usize,
    /// Label of the transition taken.
    pub label: L,
}

/// Back-pointers for every slot of one layer, `None` where unreachable.
pub type BackLayer<L> = Vec<Option<BackPointer<L>>>;

/// A layered minimum-cost DP instance.
pub trait LayeredProblem {
    /// Label attached to each transition.
    type Label: Copy;

    /// Number of transitions `T`.
    fn num_layers(&self) -> usize;

    /// Number of slots per layer.
    fn width(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Frontier;

    /// Compute layer `layer + 1` from layer `layer`.
    ///
    /// Returns the next frontier together with a back-pointer for every
    /// reachable slot. Ties must be broken deterministically, since the
    /// engine relies on recomputation producing the same pointers.
    fn forward_step(&self, layer: usize, frontier: &Frontier) -> (Frontier, BackLayer<Self::Label>);

    /// Pick the slot the optimal path ends in, or `None` if every slot of
    /// the final frontier is unreachable.
    fn terminal_slot(&self, frontier_t: &Frontier) -> Option<usize>;
}
