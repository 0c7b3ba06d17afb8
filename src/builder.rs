use crate::blocks::default_block_size;
use crate::engine::DpEngine;
use crate::error::ConfigError;
use crate::traits::LayeredProblem;

/// Configures a [`DpEngine`] before it runs.
///
/// Without an explicit block size the engine checkpoints every
/// `ceil(sqrt(T))` layers. Passing a block size of at least `T` keeps the
/// whole back-pointer table in memory at once.
pub struct DpEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Keep every layer's back-pointers; one block spans the whole DP.
    pub fn full_table(mut self) -> Self {
        self.block_size = Some(self.problem.num_layers().max(1));
        self
    }

    pub fn build(self) -> Result<DpEngine<P>, ConfigError> {
        let block_size = match self.block_size {
            Some(b) => b,
            None => default_block_size(self.problem.num_layers()),
        };
        DpEngine::with_block_size(self.problem, block_size)
    }
}
