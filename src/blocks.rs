//! Block layout for checkpointed reconstruction.
//!
//! The engine splits layers `[0, T)` into contiguous blocks and keeps the
//! frontier at the start of each one. A block's back-pointers are only
//! materialised while that block is being reconstructed.

use crate::traits::Frontier;

/// Heuristic block size for `T` layers: `ceil(sqrt(T))`, at least 1.
///
/// Balances the number of stored checkpoints against the size of the
/// back-pointer table for a single block.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// A contiguous run of layers `[start, end)` and the frontier at `start`.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub start: usize,
    pub end: usize,
    pub frontier: Frontier,
}

impl Checkpoint {
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `[0, num_layers)` into blocks of at most `block_size` layers.
pub fn block_bounds(num_layers: usize, block_size: usize) -> Vec<(usize, usize)> {
    debug_assert!(block_size > 0);
    (0..num_layers)
        .step_by(block_size.max(1))
        .map(|start| (start, (start + block_size).min(num_layers)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_one_for_tiny_inputs() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
    }

    #[test]
    fn default_size_rounds_sqrt_up() {
        assert_eq!(default_block_size(4), 2);
        assert_eq!(default_block_size(5), 3);
        assert_eq!(default_block_size(10_000), 100);
        assert_eq!(default_block_size(10_001), 101);
    }

    #[test]
    fn bounds_cover_all_layers_without_overlap() {
        let bounds = block_bounds(10, 3);
        assert_eq!(bounds, vec![(0, 3), (3, 6), (6, 9), (9, 10)]);
        assert!(block_bounds(0, 3).is_empty());
        assert_eq!(block_bounds(4, 10), vec![(0, 4)]);
    }

    #[test]
    fn checkpoint_len() {
        let c = Checkpoint {
            start: 2,
            end: 7,
            frontier: vec![None],
        };
        assert_eq!(c.len(), 5);
        assert!(!c.is_empty());
    }
}
